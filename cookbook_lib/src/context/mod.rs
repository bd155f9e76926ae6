//! Conversation context sent to the model.
mod turn;

use serde_json::Value;
use crate::config::WireShape;

pub use turn::Role;
pub use turn::Turn;

/// Label prefixed to the user message when none is given.
pub const DEFAULT_USER_LABEL: &str = "User's input";

/// Ordered turns of one request.
///
/// A context does not know its wire shape: the same turns serialize to either
/// vocabulary with identical count, order and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    turns: Vec<Turn>,
}

impl Context {

    /// System instruction followed by `"User's input: {user_message}"`.
    pub fn build(system_prompt: &str, user_message: &str) -> Self {
        Self::build_labeled(system_prompt, user_message, DEFAULT_USER_LABEL)
    }

    /// System instruction followed by `"{user_label}: {user_message}"`.
    pub fn build_labeled(system_prompt: &str, user_message: &str, user_label: &str) -> Self {
        Self::build_chained(system_prompt, Vec::new(), user_message, user_label)
    }

    /// Like [`Context::build_labeled`], with `examples` placed between the
    /// system turn and the live query, in the order supplied.
    pub fn build_chained<I>(system_prompt: &str, examples: I, user_message: &str, user_label: &str) -> Self
        where I: IntoIterator<Item = Turn>
    {
        let mut turns = vec![Turn::system(system_prompt)];
        turns.extend(examples);
        turns.push(Turn::user(format!("{user_label}: {user_message}")));
        Context { turns }
    }

    /// Turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// No turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// JSON array of turns in the vocabulary of `shape`.
    pub fn to_wire(&self, shape: WireShape) -> Value {
        Value::Array(self.turns.iter().map(|t| t.to_wire(shape)).collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_two_turns() {
        let context = Context::build("classify this", "hello");

        assert_eq!(context.len(), 2);
        assert_eq!(context.turns()[0], Turn::system("classify this"));
        assert_eq!(context.turns()[1], Turn::user("User's input: hello"));
    }

    #[test]
    fn test_build_empty_strings() {
        let context = Context::build_labeled("", "", "");

        assert_eq!(context.len(), 2);
        assert_eq!(context.turns()[0].text(), "");
        assert_eq!(context.turns()[1].text(), ": ");
    }

    #[test]
    fn test_wire_shapes_parallel() {
        let context = Context::build_labeled("sys", "Write a function.", "User's instructions:");

        let legacy = context.to_wire(WireShape::Legacy);
        let chat = context.to_wire(WireShape::Chat);

        assert_eq!(legacy, json!([
            {"type": "Instruction", "text": "sys"},
            {"type": "Human", "text": "User's instructions:: Write a function."},
        ]));
        assert_eq!(chat, json!([
            {"role": "system", "content": "sys"},
            {"role": "user", "content": "User's instructions:: Write a function."},
        ]));

        let legacy = legacy.as_array().expect("legacy array");
        let chat = chat.as_array().expect("chat array");
        assert_eq!(legacy.len(), chat.len());
        for (l, c) in legacy.iter().zip(chat.iter()) {
            assert_eq!(l["text"], c["content"]);
        }
    }

    #[test]
    fn test_build_chained_keeps_example_order() {
        let examples = vec![
            Turn::user("2:00-4:00pm is good for me"),
            Turn::model("<start_time>14:00</start_time><end_time>16:00</end_time>"),
            Turn::user("Let's do 10:00am. Duration: 30 minutes"),
            Turn::model("<start_time>10:00</start_time><end_time>10:30</end_time>"),
        ];

        let context = Context::build_chained("extract times", examples.clone(), "Friday 3pm?", "Email body");

        assert_eq!(context.len(), 6);
        assert_eq!(context.turns()[0].role(), Role::System);
        assert_eq!(&context.turns()[1..5], examples.as_slice());
        assert_eq!(context.turns()[5], Turn::user("Email body: Friday 3pm?"));

        let legacy = context.to_wire(WireShape::Legacy);
        assert_eq!(legacy[2]["type"], "AI");
        let chat = context.to_wire(WireShape::Chat);
        assert_eq!(chat[2]["role"], "assistant");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Model.to_string(), "model");
        assert_eq!(Role::User.wire_name(WireShape::Legacy), "Human");
        assert_eq!(Role::System.wire_name(WireShape::Chat), "system");
    }
}
