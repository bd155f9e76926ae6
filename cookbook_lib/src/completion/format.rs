use serde_json::Value;
use crate::config::{Params, WireShape};
use crate::context::Context;
use crate::error::Error;
use super::chat::ChatFormat;
use super::legacy::LegacyFormat;

/// Request serialization and reply extraction for one wire shape.
pub trait WireFormat: Send + Sync {

    /// Shape implemented.
    fn shape(&self) -> WireShape;

    /// Endpoint path appended to the base URL.
    fn path(&self) -> &'static str;

    /// Request body.
    fn payload(&self, context: &Context, params: &Params) -> Value;

    /// Reply text from a response body.
    fn reply_text(&self, response: &Value) -> Result<String, Error>;
}

/// Create the wire format for `shape`.
pub fn get_wire_format(shape: WireShape) -> Box<dyn WireFormat> {
    match shape {
        WireShape::Legacy => Box::new(LegacyFormat),
        WireShape::Chat => Box::new(ChatFormat),
    }
}
