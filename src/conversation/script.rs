//! Scripted bot lines and the follow-up intent check.
//!
//! The bot never generates text; every reply is one of the fixed lines
//! below, selected by the engine's dispatch on the current stage.

/// Opening line, pre-seeded into the log when a conversation starts.
pub fn greeting() -> &'static str {
    "Hello! Welcome to our study recommendation service for cancer patients. \
     How can I help you today?"
}

/// Asks the user for their diagnosis, history, and treatments.
pub fn data_prompt() -> &'static str {
    "Please provide information about your diagnosis, medical history, and any \
     current treatments. This will help us find the most suitable studies for you."
}

/// Acknowledges a data-collection submission while the call is in flight.
pub fn processing_ack() -> &'static str {
    "Thank you for the information. I'm processing your data to find relevant \
     studies. Please wait a moment."
}

/// Announces that studies came back from the service.
pub fn results_ready() -> &'static str {
    "I found some studies that may be relevant for you. You can see the details \
     in the panel alongside."
}

/// Asks whether the user wants another search.
pub fn follow_up_prompt() -> &'static str {
    "Would you like to search for more studies, or do you have any other questions?"
}

/// Acknowledges an affirmative follow-up and re-prompts for details.
pub fn search_again_ack() -> &'static str {
    "Understood, you'd like to search for more studies. Please provide additional \
     or more specific details about the kind of study you're looking for."
}

/// Closing line before the conversation ends.
pub fn closing() -> &'static str {
    "Thank you for using our service. If you have more questions in the future, \
     don't hesitate to ask. I wish you all the best on your health journey!"
}

/// Apology emitted when the recommendation call fails.
pub fn apology() -> &'static str {
    "Sorry, something went wrong while searching for studies. Please try again later."
}

/// Decides whether a follow-up reply asks for another search.
///
/// Deliberately narrow: the default is a fixed keyword check, not language
/// understanding. A stronger classifier can be swapped in without touching
/// the stage machine.
pub trait FollowUpIntent: Send + Sync {
    fn wants_more(&self, text: &str) -> bool;
}

/// Case-insensitive substring match against a fixed keyword set.
#[derive(Debug, Clone)]
pub struct KeywordIntent {
    keywords: Vec<String>,
}

impl KeywordIntent {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
        }
    }
}

impl Default for KeywordIntent {
    fn default() -> Self {
        Self::new(["yes", "more studies"])
    }
}

impl FollowUpIntent for KeywordIntent {
    fn wants_more(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}
