use serde::{ Serialize, Deserialize };

/// Body of `POST /chat`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by the chat backend. Either field may be absent and
/// anything else in the object is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatReply {
    /// The `response` text, if present and non-empty.
    pub fn usable_response(&self) -> Option<&str> {
        self.response.as_deref().filter(|r| !r.is_empty())
    }

    /// The `error` text, if present and non-empty.
    pub fn server_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_message_object() {
        let body = serde_json::to_string(&ChatRequest { message: "hello".into() }).unwrap();
        assert_eq!(body, r#"{"message":"hello"}"#);
    }

    #[test]
    fn reply_ignores_unknown_fields() {
        let reply: ChatReply = serde_json
            ::from_str(r#"{"response":"hi","sources":[1,2]}"#)
            .unwrap();
        assert_eq!(reply.usable_response(), Some("hi"));
        assert_eq!(reply.server_error(), None);
    }

    #[test]
    fn empty_response_is_not_usable() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"","error":"bad"}"#).unwrap();
        assert_eq!(reply.usable_response(), None);
        assert_eq!(reply.server_error(), Some("bad"));
    }
}
