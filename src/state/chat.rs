//! Chat panel state.

use crate::api::ApiError;

/// Greeting the bot shows before anything has been sent.
pub const GREETING: &str = "🤖 Hello! How can I assist you today?";

/// Fixed bot line shown when a send fails, whatever the cause.
pub const SEND_ERROR_TEXT: &str = "❌ Error getting response.";

/// Who authored a chat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class suffix for the message bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One line in the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// State behind the chat card.
///
/// `begin_send` and `finish_send` bracket one request to the backend. The
/// busy flag between them keeps the panel single-flight: while it is set
/// the input row is disabled and `begin_send` refuses to start another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPanel {
    /// Draft text bound to the input box.
    pub input: String,
    messages: Vec<ChatMessage>,
    sending: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
            sending: false,
        }
    }

    /// Every line in the log, oldest first. The log only ever grows.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a request is in flight.
    pub fn sending(&self) -> bool {
        self.sending
    }

    /// Takes the draft and appends it to the log as a user message,
    /// returning the text to send. `None` when the draft is blank or a
    /// request is already in flight; the panel is untouched in that case.
    pub fn begin_send(&mut self) -> Option<String> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.sending {
            return None;
        }
        self.sending = true;
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.clone(),
        });
        self.input.clear();
        Some(text)
    }

    /// Lands the outcome of the request started by `begin_send`: the bot's
    /// reply on success, the fixed error line otherwise.
    pub fn finish_send(&mut self, outcome: Result<String, ApiError>) {
        let text = match outcome {
            Ok(reply) => reply,
            Err(_) => SEND_ERROR_TEXT.to_string(),
        };
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text,
        });
        self.sending = false;
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}
