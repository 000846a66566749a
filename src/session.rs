//! Per-view chat state.
//!
//! A [`ChatSession`] owns the message list, the typing placeholder, the theme
//! and the send state. Sending is split around the one await point:
//! [`ChatSession::begin_send`] hands out a [`SendTicket`] only from `Idle`, and
//! [`ChatSession::finish`] consumes it, so there is never more than one
//! request in flight per session.

use dioxus::logger::tracing::{info, warn};

use crate::{
    message::Message,
    rag::{RagRequest, RagResponse},
    theme::Theme,
};

pub const NO_RESPONSE_TEXT: &str = "No response.";
pub const REQUEST_FAILED_TEXT: &str = "Request failed. Please try again.";

/// Choices offered by the top-K selector.
pub const TOP_K_CHOICES: [u32; 4] = [3, 5, 8, 10];
pub const DEFAULT_TOP_K: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// Proof that a send is in flight. Not `Clone`; only [`ChatSession::begin_send`]
/// makes one.
#[derive(Debug, PartialEq, Eq)]
pub struct SendTicket {
    request: RagRequest,
}

impl SendTicket {
    pub fn request(&self) -> &RagRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    state: SendState,
    typing: bool,
    theme: Theme,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SendState::Sending
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Shows or hides the typing placeholder. Hiding an absent placeholder is a no-op.
    pub fn show_typing(&mut self, show: bool) {
        self.typing = show;
    }

    fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    /// Starts a send if `input` has content and nothing is in flight.
    ///
    /// On success the user message is appended, the typing placeholder shown
    /// and the request to issue is carried by the returned ticket. Returns
    /// `None` without touching the session otherwise; the caller should then
    /// leave its input field alone.
    pub fn begin_send(&mut self, input: &str, top_k: u32) -> Option<SendTicket> {
        let text = input.trim();
        if text.is_empty() || self.is_sending() {
            return None;
        }
        self.state = SendState::Sending;
        self.push(Message::user(text));
        self.show_typing(true);
        Some(SendTicket {
            request: RagRequest {
                message: text.to_string(),
                context_k: top_k,
            },
        })
    }

    /// Completes the send started by `ticket`, whatever the outcome.
    pub fn finish(&mut self, ticket: SendTicket, outcome: anyhow::Result<RagResponse>) {
        self.show_typing(false);
        let reply = match outcome {
            Ok(res) => {
                info!(
                    "rag answer: conversation={:?} took={:?}ms k={}",
                    res.conversation_id, res.processing_time_ms, ticket.request.context_k
                );
                let text = res
                    .response
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string());
                Message::bot(text, res.context_used.unwrap_or_default())
            }
            Err(e) => {
                warn!("rag request failed: {e:?}");
                Message::bot(REQUEST_FAILED_TEXT, vec![])
            }
        };
        self.push(reply);
        self.state = SendState::Idle;
    }
}

/// Reads the selector value. Anything that is not a non-negative integer
/// falls back to `fallback`; in-range values are passed through unclamped.
pub fn parse_top_k(value: &str, fallback: u32) -> u32 {
    value.trim().parse::<u32>().unwrap_or(fallback)
}
