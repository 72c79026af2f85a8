//! Conversation core: stage machine, message log, and turn orchestration.

pub mod engine;
pub mod model;
pub mod script;
pub mod stage;

pub use engine::ConversationEngine;
pub use model::{ConversationSnapshot, Message, Sender, Study};
pub use script::{FollowUpIntent, KeywordIntent};
pub use stage::Stage;
