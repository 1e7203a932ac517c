use crate::error::ChatError;
use crate::models::chat::ConversationTurn;
use crate::models::wire::ChatReply;
use crate::transport::HttpReply;

pub const GENERIC_FAILURE: &str = "Error: Something went wrong";
pub const UNEXPECTED_RESPONSE: &str = "Error: Unexpected response";

/// What a single chat request resolved to, from the user's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// 2xx with a usable `response` field.
    Reply(String),
    /// The backend reported an `error`, whatever the status code.
    ServerError(String),
    /// 2xx JSON that carried neither field.
    Unexpected,
    /// Transport failure, non-2xx without an `error`, or a malformed body.
    Failed,
}

impl ChatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ChatOutcome::Reply(_))
    }

    pub fn into_turn(self) -> ConversationTurn {
        match self {
            ChatOutcome::Reply(text) => ConversationTurn::bot(text),
            ChatOutcome::ServerError(err) => ConversationTurn::bot(format!("Error: {}", err)),
            ChatOutcome::Unexpected => ConversationTurn::bot(UNEXPECTED_RESPONSE),
            ChatOutcome::Failed => ConversationTurn::bot(GENERIC_FAILURE),
        }
    }
}

/// Classifies a raw reply. An `error` field wins over the status code, so a
/// 500 carrying `{"error": "..."}` still shows the backend's message.
pub fn interpret(reply: HttpReply) -> Result<ChatOutcome, ChatError> {
    let ok = reply.status.is_success();
    let body: ChatReply = match serde_json::from_str(&reply.body) {
        Ok(body) => body,
        Err(_) if !ok => return Err(ChatError::Status(reply.status)),
        Err(e) => return Err(ChatError::Decode(e)),
    };

    if ok {
        if let Some(text) = body.usable_response() {
            return Ok(ChatOutcome::Reply(text.to_string()));
        }
    }
    if let Some(err) = body.server_error() {
        return Ok(ChatOutcome::ServerError(err.to_string()));
    }
    if !ok {
        return Err(ChatError::Status(reply.status));
    }
    Ok(ChatOutcome::Unexpected)
}
