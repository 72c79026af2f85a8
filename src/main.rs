use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use trial_scout::config::ClientConfig;
use trial_scout::conversation::{ConversationEngine, Sender, Study};
use trial_scout::recommend::{HttpRecommendationClient, RecommendationClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let base_url = std::env::var("TRIAL_SCOUT_SERVICE_URL")
        .unwrap_or_else(|_| ClientConfig::default().base_url);
    let config = ClientConfig {
        base_url,
        ..ClientConfig::default()
    };

    eprintln!("🔎 Trial Scout v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Service: {}", config.base_url);
    eprintln!("   Type a message and press Enter. Ctrl-D to exit.\n");

    let client: Arc<dyn RecommendationClient> = Arc::new(HttpRecommendationClient::new(config)?);
    let mut engine = ConversationEngine::new(client);

    // Print the seeded greeting before the first prompt.
    let mut printed = print_new_bot_messages(&engine, 0);
    let mut shown_studies: Vec<Study> = Vec::new();

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    eprint!("> ");

    while let Some(line) = lines.next_line().await? {
        engine.submit(&line).await;
        printed = print_new_bot_messages(&engine, printed);

        if engine.studies() != shown_studies.as_slice() {
            shown_studies = engine.studies().to_vec();
            print_studies(&shown_studies);
        }

        if engine.stage().is_terminal() {
            break;
        }
        eprint!("> ");
    }

    Ok(())
}

/// Print bot messages appended since the last turn. Returns the new
/// high-water mark into the log.
fn print_new_bot_messages(engine: &ConversationEngine, from: usize) -> usize {
    let messages = engine.messages();
    for message in &messages[from..] {
        if message.sender == Sender::Bot {
            println!("\n{}", message.text);
        }
    }
    println!();
    messages.len()
}

/// Plain-text rendering of the recommended-studies panel.
fn print_studies(studies: &[Study]) {
    println!("── Recommended studies ──");
    for study in studies {
        println!("{}", study.id);
        println!("  Inclusion criteria:");
        for criterion in &study.inclusion_criteria {
            println!("    - {criterion}");
        }
        println!("  Exclusion criteria:");
        for criterion in &study.exclusion_criteria {
            println!("    - {criterion}");
        }
    }
    println!();
}
