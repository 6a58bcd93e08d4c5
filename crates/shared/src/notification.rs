use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named message routed from a notifier to every observer of that name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    name: String,
    #[serde(default)]
    body: Option<Value>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl Notification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn from_parts(name: impl Into<String>, body: Option<Value>, kind: Option<&str>) -> Self {
        Self {
            name: name.into(),
            body,
            kind: kind.map(str::to_owned),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, body: Option<Value>) {
        self.body = body;
    }

    /// The optional type tag.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_type(&mut self, kind: Option<String>) {
        self.kind = kind;
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            None | Some(Value::Null) => write!(f, "\nBody:null")?,
            Some(Value::String(text)) => write!(f, "\nBody:{text}")?,
            Some(other) => write!(f, "\nBody:{other}")?,
        }
        write!(f, "\nType:{}", self.kind.as_deref().unwrap_or("null"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_sets_body_and_type() {
        let note = Notification::new("Login")
            .with_body(json!({"user": "alice"}))
            .with_type("request");
        assert_eq!(note.name(), "Login");
        assert_eq!(note.body(), Some(&json!({"user": "alice"})));
        assert_eq!(note.kind(), Some("request"));
    }

    #[test]
    fn display_renders_missing_parts_as_null() {
        let note = Notification::new("Startup");
        assert_eq!(
            note.to_string(),
            "Notification Name: Startup\nBody:null\nType:null"
        );
    }

    #[test]
    fn display_renders_string_body_unquoted() {
        let note = Notification::from_parts("Echo", Some(json!("hi")), Some("text"));
        assert_eq!(note.to_string(), "Notification Name: Echo\nBody:hi\nType:text");

        let note = Notification::new("Count").with_body(3);
        assert_eq!(note.to_string(), "Notification Name: Count\nBody:3\nType:null");
    }

    #[test]
    fn setters_replace_body_and_type() {
        let mut note = Notification::new("Edit").with_body(1);
        note.set_body(None);
        note.set_type(Some("draft".to_string()));
        assert_eq!(note.body(), None);
        assert_eq!(note.kind(), Some("draft"));
    }

    #[test]
    fn serializes_type_tag_under_type_key() {
        let note = Notification::new("Save").with_type("manual");
        let encoded = serde_json::to_value(&note).expect("encode");
        assert_eq!(encoded, json!({"name": "Save", "body": null, "type": "manual"}));

        let decoded: Notification =
            serde_json::from_value(json!({"name": "Save"})).expect("decode");
        assert_eq!(decoded, Notification::new("Save"));
    }
}
