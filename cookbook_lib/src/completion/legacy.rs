use serde_json::{json, Value};
use crate::config::{Params, WireShape};
use crate::context::Context;
use crate::error::Error;
use crate::val_as_str;
use super::format::WireFormat;
use super::util;

pub struct LegacyFormat;

impl WireFormat for LegacyFormat {

    fn shape(&self) -> WireShape {
        WireShape::Legacy
    }

    fn path(&self) -> &'static str {
        "/external/api/inference"
    }

    fn payload(&self, context: &Context, params: &Params) -> Value {
        let mut payload = json!({
            "config": params.model,
            "context": context.to_wire(WireShape::Legacy),
        });

        util::set_f64_param(&mut payload, "temperature", params.temperature);
        util::set_f64_param(&mut payload, "top_p", params.top_p);
        payload["web_search"] = Value::Bool(params.web_search);

        payload
    }

    fn reply_text(&self, response: &Value) -> Result<String, Error> {
        Ok(val_as_str!(response["text"], "text").to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let context = Context::build("sys", "hello");
        let params = Params {
            model: "inflection_3_productivity".to_owned(),
            temperature: 0.5,
            top_p: 0.9,
            web_search: true,
        };

        assert_eq!(LegacyFormat.payload(&context, &params), json!({
            "config": "inflection_3_productivity",
            "context": [
                {"type": "Instruction", "text": "sys"},
                {"type": "Human", "text": "User's input: hello"},
            ],
            "temperature": 0.5,
            "top_p": 0.9,
            "web_search": true,
        }));
    }

    #[test]
    fn test_reply_text() {
        assert_eq!(LegacyFormat.reply_text(&json!({"text": "<a>1</a>"})).expect("text"), "<a>1</a>");
        assert!(matches!(LegacyFormat.reply_text(&json!({"created": 1})), Err(Error::ResponseError(_))));
        assert!(matches!(LegacyFormat.reply_text(&json!({"text": null})), Err(Error::ResponseError(_))));
    }
}
