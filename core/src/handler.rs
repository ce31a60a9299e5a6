//! Response handler dispatch: JSON vs. raw-text body interpretation.
//!
//! # Design
//! A handler never fails: a malformed JSON body becomes a `Handled` with
//! `success == false` and an error message, not an `Err`. Unrecognized tags
//! fall back to the JSON handler, matching the service's predominantly-JSON
//! responses.

use serde_json::Value;

use crate::http::HttpResponse;

/// Body-parsing strategy, selected by a declared content-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Json,
    Text,
}

impl HandlerKind {
    /// Select a handler for `tag` ("json" or "text"); anything else gets Json.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => HandlerKind::Text,
            _ => HandlerKind::Json,
        }
    }

    /// Interpret `response` according to this strategy.
    pub fn handle(self, response: &HttpResponse) -> Handled {
        match self {
            HandlerKind::Json => match serde_json::from_str::<Value>(&response.body) {
                Ok(value) => Handled {
                    success: true,
                    status: response.status,
                    body: Some(HandledBody::Json(value)),
                    error: None,
                },
                Err(_) => Handled {
                    success: false,
                    status: response.status,
                    body: None,
                    error: Some("Invalid JSON response".to_string()),
                },
            },
            HandlerKind::Text => Handled {
                success: true,
                status: response.status,
                body: Some(HandledBody::Text(response.body.clone())),
                error: None,
            },
        }
    }
}

/// Interpreted body produced by a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum HandledBody {
    Json(Value),
    Text(String),
}

/// Outcome of running a handler over a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Handled {
    pub success: bool,
    pub status: u16,
    pub body: Option<HandledBody>,
    pub error: Option<String>,
}

impl Handled {
    /// The parsed JSON value, if this outcome carries one.
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Some(HandledBody::Json(value)) => Some(value),
            _ => None,
        }
    }

    /// The raw text, if this outcome carries one.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Some(HandledBody::Text(text)) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn json_tag_selects_json_handler() {
        assert_eq!(HandlerKind::from_tag("json"), HandlerKind::Json);
    }

    #[test]
    fn text_tag_selects_text_handler() {
        assert_eq!(HandlerKind::from_tag("text"), HandlerKind::Text);
    }

    #[test]
    fn unrecognized_tag_defaults_to_json() {
        assert_eq!(HandlerKind::from_tag("xml"), HandlerKind::Json);
        assert_eq!(HandlerKind::from_tag(""), HandlerKind::Json);
    }

    #[test]
    fn json_handler_parses_valid_body() {
        let handled = HandlerKind::Json.handle(&response(200, r#"{"name":"Rex"}"#));
        assert!(handled.success);
        assert_eq!(handled.status, 200);
        assert_eq!(handled.json().unwrap()["name"], "Rex");
        assert!(handled.error.is_none());
    }

    #[test]
    fn json_handler_absorbs_malformed_body() {
        let handled = HandlerKind::Json.handle(&response(200, "not json"));
        assert!(!handled.success);
        assert_eq!(handled.status, 200);
        assert!(handled.body.is_none());
        assert_eq!(handled.error.as_deref(), Some("Invalid JSON response"));
    }

    #[test]
    fn text_handler_always_succeeds() {
        let handled = HandlerKind::Text.handle(&response(404, "hello"));
        assert!(handled.success);
        assert_eq!(handled.status, 404);
        assert_eq!(handled.text(), Some("hello"));
        assert!(handled.error.is_none());
    }
}
