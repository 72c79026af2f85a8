//! Conversation data model — messages, studies, and the renderer snapshot.

use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// One entry in the append-only message log.
///
/// Entries are immutable once appended; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    /// A scripted bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    /// A user utterance.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }
}

/// A study eligibility record returned by the recommendation service.
///
/// Field names follow the service's JSON wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: String,
    pub inclusion_criteria: Vec<String>,
    pub exclusion_criteria: Vec<String>,
}

/// Read-only view of a conversation for a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSnapshot {
    pub stage: Stage,
    pub messages: Vec<Message>,
    pub studies: Vec<Study>,
}
