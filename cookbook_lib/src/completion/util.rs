use serde_json::{Number, Value};
use crate::error::Error;

/// Interpret value as str
#[macro_export(local_inner_macros)]
macro_rules! val_as_str {
    ($val:expr, $element:literal) => {
        $val
            .as_str()
            .ok_or(Error::ResponseError(std::concat!("can't extract ", $element, " from inference API response.")))?
    }
}

pub fn set_f64_param(payload: &mut Value, key: &str, val: f64) {
    if let Some(n) = Number::from_f64(val) {
        payload[key] = Value::Number(n);
    }
}

/// Error message embedded in an otherwise successful response.
///
/// `"error": null` is not an error.
pub fn check_for_error(response: &Value) -> Result<(), Error> {
    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        let errmes = match error {
            Value::String(s) => s.clone(),
            _ => val_as_str!(error["message"], "error message").to_owned(),
        };
        return Err(Error::ApiMessage(errmes));
    }
    Ok(())
}

/// Null and `{}` count as no response at all.
pub fn check_for_empty(response: &Value) -> Result<(), Error> {
    let empty = match response {
        Value::Null => true,
        Value::Object(obj) => obj.is_empty(),
        _ => false,
    };
    if empty {
        return Err(Error::EmptyBody);
    }
    Ok(())
}
