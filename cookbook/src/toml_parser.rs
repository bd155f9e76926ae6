use toml::Table;
use toml::Value;
use crate::options::Options;
use crate::error::AppError;
use crate::util::parse_list;

fn get_str_val<'a>(val: &'a Value, err: &'static str) -> Result<&'a str, AppError> {
    if !val.is_str() {
        return Err(AppError::ConfigParseError(err));
    }
    val.as_str().ok_or(AppError::Unknown)
}

fn get_bool_val(val: &Value, err: &'static str) -> Result<bool, AppError> {
    val.as_bool().ok_or(AppError::ConfigParseError(err))
}

// Integers are accepted, `temperature = 0` is a common spelling.
fn get_float_val(val: &Value, err: &'static str) -> Result<f64, AppError> {
    match val {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(AppError::ConfigParseError(err)),
    }
}

fn get_list_val(val: &Value, err: &'static str) -> Result<Vec<String>, AppError> {
    match val {
        Value::String(s) => Ok(parse_list(s)),
        Value::Array(items) => items.iter()
            .map(|item| get_str_val(item, err).map(str::to_owned))
            .collect(),
        _ => Err(AppError::ConfigParseError(err)),
    }
}

// `[[input, output], ...]`
fn get_examples_val(val: &Value, err: &'static str) -> Result<Vec<(String, String)>, AppError> {
    let pairs = val.as_array().ok_or(AppError::ConfigParseError(err))?;

    pairs.iter()
        .map(|pair| match pair.as_array().map(Vec::as_slice) {
            Some([input, output]) => Ok((
                get_str_val(input, err)?.to_owned(),
                get_str_val(output, err)?.to_owned(),
            )),
            _ => Err(AppError::ConfigParseError(err)),
        })
        .collect()
}

pub fn parse_toml_config(content: &str, options: &mut Options) -> Result<(), AppError> {

    let toml_config: Table = toml::from_str(content)?;

    if let Some(default_context) = toml_config.get("default_context") {

        let context_name = get_str_val(default_context, "default_context must be a string value")?;

        let context_value = toml_config.get(context_name)
            .ok_or(AppError::ConfigParseError("configuration for the default context is not specified"))?;

        let ct = context_value.as_table()
            .ok_or(AppError::ConfigParseError("default context must be a table"))?;

        if let Some(val) = ct.get("base_url") {
            options.base_url.replace(get_str_val(val, "base_url must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("api_key") {
            options.api_key.replace(get_str_val(val, "api_key must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("model") {
            options.model.replace(get_str_val(val, "model must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("wire_shape") {
            options.wire_shape.replace(get_str_val(val, "wire_shape must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("mode") {
            options.mode.replace(get_str_val(val, "mode must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("system") {
            options.system.replace(get_str_val(val, "system must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("label") {
            options.user_label.replace(get_str_val(val, "label must be a string value")?.to_owned());
        }

        if let Some(val) = ct.get("fields") {
            options.fields = get_list_val(val, "fields must be a list of strings")?;
        }

        if let Some(val) = ct.get("list_fields") {
            options.list_fields = get_list_val(val, "list_fields must be a list of strings")?;
        }

        if let Some(val) = ct.get("examples") {
            options.examples = get_examples_val(val, "examples must be a list of [input, output] string pairs")?;
        }

        if let Some(val) = ct.get("temperature") {
            options.temperature.replace(get_float_val(val, "temperature must be a number")?);
        }

        if let Some(val) = ct.get("top_p") {
            options.top_p.replace(get_float_val(val, "top_p must be a number")?);
        }

        if let Some(val) = ct.get("web_search") {
            options.web_search.replace(get_bool_val(val, "web_search must be a boolean value")?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONTENT: &str = "
default_context = \"meetings\"

# Context contains a set of configuration parameters
[meetings]
base_url = \"https://inference.test\"   # Inference API base URL
api_key = \"<your-api-key>\"
model = \"inflection_3_productivity\"
wire_shape = \"chat\"                   # legacy or chat
mode = \"extract\"
system = \"Extract meeting details.\"
label = \"Email body\"
fields = [\"start_time\", \"end_time\"]
list_fields = \"participants\"
examples = [
    [\"2:00-4:00pm is good for me\", \"<start_time>14:00</start_time>\"],
    [\"Let's do 10:00am\", \"<start_time>10:00</start_time>\"],
]
temperature = 0
top_p = 0.9
web_search = true

# Second context
[weather]
base_url = \"https://other.test\"
";

    #[test]
    fn test_toml_parser() {
        let mut options = Options::new();
        parse_toml_config(SAMPLE_CONTENT, &mut options).expect("parsed");

        assert_eq!(options.base_url, Some("https://inference.test".into()));
        assert_eq!(options.api_key, Some("<your-api-key>".into()));
        assert_eq!(options.model, Some("inflection_3_productivity".into()));
        assert_eq!(options.wire_shape, Some("chat".into()));
        assert_eq!(options.mode, Some("extract".into()));
        assert_eq!(options.system, Some("Extract meeting details.".into()));
        assert_eq!(options.user_label, Some("Email body".into()));
        assert_eq!(options.fields, vec!["start_time".to_owned(), "end_time".to_owned()]);
        assert_eq!(options.list_fields, vec!["participants".to_owned()]);
        assert_eq!(options.examples, vec![
            ("2:00-4:00pm is good for me".to_owned(), "<start_time>14:00</start_time>".to_owned()),
            ("Let's do 10:00am".to_owned(), "<start_time>10:00</start_time>".to_owned()),
        ]);
        assert_eq!(options.temperature, Some(0.0));
        assert_eq!(options.top_p, Some(0.9));
        assert_eq!(options.web_search, Some(true));
        assert_eq!(options.message, None);
    }

    #[test]
    fn test_toml_parser_errors() {
        let mut options = Options::new();

        let missing = "default_context = \"nowhere\"\n[meetings]\nmodel = \"m\"\n";
        assert!(matches!(parse_toml_config(missing, &mut options), Err(AppError::ConfigParseError(_))));

        let bad_type = "default_context = \"c\"\n[c]\nweb_search = \"yes\"\n";
        assert!(matches!(parse_toml_config(bad_type, &mut options), Err(AppError::ConfigParseError(_))));

        let bad_examples = "default_context = \"c\"\n[c]\nexamples = [[\"only input\"]]\n";
        assert!(matches!(parse_toml_config(bad_examples, &mut options), Err(AppError::ConfigParseError(_))));

        let bad_examples = "default_context = \"c\"\n[c]\nexamples = \"in, out\"\n";
        assert!(matches!(parse_toml_config(bad_examples, &mut options), Err(AppError::ConfigParseError(_))));

        assert!(matches!(parse_toml_config("not = [toml", &mut options), Err(AppError::TomlError(_))));
    }
}
