//! Questions feed.
//!
//! One-shot fetch of the question list from the configured HTTP endpoint.
//! The result comes back to the event loop as `QuestionsLoaded` or
//! `FetchFailed`; there is no retry, a failed fetch leaves the quiz on the
//! error screen until the application is relaunched.

use crate::app::event::AppEvent;
use crate::app::state::Question;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn fetch_questions(url: &str, timeout: Duration) -> Result<Vec<Question>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let questions: Vec<Question> = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(questions)
}

/// Spawn the one-shot fetch task. It reports back over `event_tx` and exits.
pub fn spawn_fetch(url: String, timeout: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        match fetch_questions(&url, timeout).await {
            Ok(questions) => {
                info!(count = questions.len(), %url, "question list loaded");
                let _ = event_tx.send(AppEvent::QuestionsLoaded(questions));
            }
            Err(e) => {
                warn!(%url, error = %e, "question fetch failed");
                let _ = event_tx.send(AppEvent::FetchFailed(e.to_string()));
            }
        }
    });
}
