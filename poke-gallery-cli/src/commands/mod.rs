//! CLI command implementations

pub mod browse;
pub mod config;
pub mod list;
pub mod search;

use anyhow::{bail, Result};
use poke_gallery_engine::{Outcome, Rejection, EMPTY_SEARCH_PROMPT};

/// What the user is told when the controller turns a request away
pub(crate) fn rejection_message(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::Busy => "Still loading, try again in a moment.",
        Rejection::SearchActive => "Paging is unavailable while a search result is shown.",
        Rejection::EmptyQuery => EMPTY_SEARCH_PROMPT,
    }
}

/// Turn a settled one-shot operation into a command result
pub(crate) fn settle(outcome: Outcome) -> Result<Outcome> {
    match outcome {
        Outcome::Failed { error, message } => {
            tracing::debug!(error = %error, "Command failed");
            bail!(message)
        }
        Outcome::Rejected(rejection) => bail!(rejection_message(rejection)),
        outcome => Ok(outcome),
    }
}
