//! ConversationEngine — turn-level orchestration over the stage machine.
//!
//! Each call to [`ConversationEngine::submit`] is one turn: the user's
//! utterance is appended to the log, a pure planner decides what the turn
//! does, and the engine applies the plan. The only side effect is the
//! single recommendation call issued per data-collection turn.

use std::sync::Arc;

use crate::recommend::RecommendationClient;

use super::model::{ConversationSnapshot, Message, Study};
use super::script::{self, FollowUpIntent, KeywordIntent};
use super::stage::Stage;

/// What a turn should do, decided before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnPlan {
    /// Drop the input entirely: blank text, or a stage that takes none.
    Ignore,
    /// Append the user message and scripted replies, then move to `next`.
    Reply {
        replies: Vec<&'static str>,
        next: Stage,
    },
    /// Append the user message and the processing ack, store the narrative,
    /// and issue the recommendation call.
    Collect,
}

/// Pure turn decision: no log appends, no stage writes, no I/O.
fn plan_turn(stage: Stage, input: &str, intent: &dyn FollowUpIntent) -> TurnPlan {
    if input.trim().is_empty() {
        return TurnPlan::Ignore;
    }
    match stage {
        Stage::Greeting => TurnPlan::Reply {
            replies: vec![script::data_prompt()],
            next: Stage::DataCollection,
        },
        Stage::DataCollection => TurnPlan::Collect,
        Stage::FollowUp => {
            if intent.wants_more(input) {
                TurnPlan::Reply {
                    replies: vec![script::search_again_ack()],
                    next: Stage::DataCollection,
                }
            } else {
                TurnPlan::Reply {
                    replies: vec![script::closing()],
                    next: Stage::Ended,
                }
            }
        }
        // Processing and Results take no input; Ended is absorbing.
        Stage::Processing | Stage::Results | Stage::Ended => TurnPlan::Ignore,
    }
}

/// Drives one conversation: owns the stage, the message log, the last
/// patient narrative, and the currently displayed study set.
///
/// One engine instance per conversation; nothing is shared between
/// instances. `submit` takes `&mut self` and awaits the outbound call
/// inline, so turns are serialized and at most one call is in flight.
pub struct ConversationEngine {
    client: Arc<dyn RecommendationClient>,
    intent: Box<dyn FollowUpIntent>,
    stage: Stage,
    messages: Vec<Message>,
    narrative: Option<String>,
    studies: Vec<Study>,
}

impl ConversationEngine {
    /// Create an engine with the default keyword-based follow-up intent.
    pub fn new(client: Arc<dyn RecommendationClient>) -> Self {
        Self::with_intent(client, Box::new(KeywordIntent::default()))
    }

    /// Create an engine with a custom follow-up intent predicate.
    pub fn with_intent(
        client: Arc<dyn RecommendationClient>,
        intent: Box<dyn FollowUpIntent>,
    ) -> Self {
        Self {
            client,
            intent,
            stage: Stage::Greeting,
            // The conversation opens with the scripted greeting already
            // in the log.
            messages: vec![Message::bot(script::greeting())],
            narrative: None,
            studies: Vec::new(),
        }
    }

    /// Handle one user utterance.
    ///
    /// Empty or whitespace-only input changes nothing, in every stage. A
    /// submission arriving for a stage that takes no input (Processing,
    /// Results, Ended) is ignored: no log append, no second call.
    ///
    /// A failed recommendation call is recovered here, not surfaced: the
    /// engine appends the scripted apology and returns to Greeting,
    /// leaving the narrative and study set at their last-known values.
    pub async fn submit(&mut self, text: &str) {
        match plan_turn(self.stage, text, self.intent.as_ref()) {
            TurnPlan::Ignore => {
                if !text.trim().is_empty() {
                    tracing::debug!(stage = %self.stage, "dropping submission; stage takes no input");
                }
            }
            TurnPlan::Reply { replies, next } => {
                self.messages.push(Message::user(text));
                for reply in replies {
                    self.messages.push(Message::bot(reply));
                }
                self.advance(next);
            }
            TurnPlan::Collect => {
                self.messages.push(Message::user(text));
                self.narrative = Some(text.to_string());
                self.messages.push(Message::bot(script::processing_ack()));
                self.advance(Stage::Processing);

                match self.client.recommend(text).await {
                    Ok(studies) => {
                        // Displayed studies are replaced wholesale, never merged.
                        self.studies = studies;
                        self.advance(Stage::Results);
                        self.messages.push(Message::bot(script::results_ready()));
                        // The reference UI delays the follow-up prompt for
                        // effect; only the ordering matters, so it follows
                        // the results message immediately here.
                        self.messages.push(Message::bot(script::follow_up_prompt()));
                        self.advance(Stage::FollowUp);
                    }
                    Err(e) => {
                        tracing::warn!("Recommendation request failed: {e}");
                        self.messages.push(Message::bot(script::apology()));
                        self.advance(Stage::Greeting);
                    }
                }
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_transition_to(next),
            "invalid stage transition {} -> {next}",
            self.stage
        );
        self.stage = next;
    }

    /// Current conversation stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The append-only message log, in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent patient narrative, if one was submitted.
    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    /// The currently displayed study set.
    pub fn studies(&self) -> &[Study] {
        &self.studies
    }

    /// Read-only snapshot for a renderer.
    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            stage: self.stage,
            messages: self.messages.clone(),
            studies: self.studies.clone(),
        }
    }
}
