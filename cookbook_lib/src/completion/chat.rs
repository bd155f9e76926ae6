use serde_json::{json, Value};
use crate::config::{Params, WireShape};
use crate::context::Context;
use crate::error::Error;
use crate::val_as_str;
use super::format::WireFormat;
use super::util;

pub struct ChatFormat;

impl WireFormat for ChatFormat {

    fn shape(&self) -> WireShape {
        WireShape::Chat
    }

    fn path(&self) -> &'static str {
        "/external/api/inference/openai/v1/chat/completions"
    }

    fn payload(&self, context: &Context, params: &Params) -> Value {
        let mut payload = json!({
            "model": params.model,
            "messages": context.to_wire(WireShape::Chat),
        });

        util::set_f64_param(&mut payload, "temperature", params.temperature);
        util::set_f64_param(&mut payload, "top_p", params.top_p);
        payload["web_search"] = Value::Bool(params.web_search);

        payload
    }

    fn reply_text(&self, response: &Value) -> Result<String, Error> {
        let choice = response["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or(Error::ResponseError("unexpected answer format, no choices in the response."))?;

        Ok(val_as_str!(choice["message"]["content"], "message content").to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let context = Context::build("sys", "hello");
        let params = Params::default();

        assert_eq!(ChatFormat.payload(&context, &params), json!({
            "model": "inflection_3_pi",
            "messages": [
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "User's input: hello"},
            ],
            "temperature": 0.0,
            "top_p": 1.0,
            "web_search": false,
        }));
    }

    #[test]
    fn test_reply_text() {
        let response = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"},
            ]
        });
        assert_eq!(ChatFormat.reply_text(&response).expect("content"), "first");

        assert!(matches!(ChatFormat.reply_text(&json!({"choices": []})), Err(Error::ResponseError(_))));
        assert!(matches!(ChatFormat.reply_text(&json!({"choices": [{"message": {}}]})), Err(Error::ResponseError(_))));
    }
}
