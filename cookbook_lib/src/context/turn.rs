use std::fmt::Display;
use serde_json::{json, Value};
use crate::config::WireShape;


/// Logical roles (wire-independent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// System instruction.
    System = 0,
    /// Model reply.
    Model = 1,
    /// User message.
    User = 2,
}

impl Role {
    /// Role name in the vocabulary of `shape`.
    pub fn wire_name(self, shape: WireShape) -> &'static str {
        const ROLES_FOR_LEGACY: [&str; 3] = ["Instruction", "AI", "Human"];
        const ROLES_FOR_CHAT: [&str; 3] = ["system", "assistant", "user"];

        match shape {
            WireShape::Legacy => ROLES_FOR_LEGACY[self as usize],
            WireShape::Chat => ROLES_FOR_CHAT[self as usize],
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Role::System => "system",
            Role::Model => "model",
            Role::User => "user",
        };
        f.write_str(role)
    }
}

/// One role-tagged unit of a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    /// Create turn.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Turn { role, text: text.into() }
    }

    /// System instruction turn.
    pub fn system(text: impl Into<String>) -> Self {
        Turn::new(Role::System, text)
    }

    /// User turn.
    pub fn user(text: impl Into<String>) -> Self {
        Turn::new(Role::User, text)
    }

    /// Model turn, used for few-shot example answers.
    pub fn model(text: impl Into<String>) -> Self {
        Turn::new(Role::Model, text)
    }

    /// Role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Text payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the turn as a JSON object in the vocabulary of `shape`.
    pub fn to_wire(&self, shape: WireShape) -> Value {
        let role = self.role.wire_name(shape);
        match shape {
            WireShape::Legacy => json!({ "type": role, "text": self.text }),
            WireShape::Chat => json!({ "role": role, "content": self.text }),
        }
    }
}
