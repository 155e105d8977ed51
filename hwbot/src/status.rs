//! Verdict table and notification text for a homework record.

use hwbot_core::{Homework, ResponseError, Result};
use tracing::error;

/// Verdict sentences keyed by homework status code. Process-wide constant;
/// a status outside this table is an error, never silently dropped.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    (
        "approved",
        "The review is done: the reviewer liked everything. Hooray!",
    ),
    ("reviewing", "The submission was taken up for review."),
    ("rejected", "The review is done: the reviewer has remarks."),
];

/// Looks up the verdict sentence for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Builds the notification text for one homework record.
pub fn parse_status(homework: &Homework) -> Result<String> {
    let name = homework.homework_name.as_deref().ok_or_else(|| {
        error!("Homework record is missing the `homework_name` key");
        ResponseError::MissingKey("homework_name".to_string())
    })?;
    let status = homework.status.as_deref().ok_or_else(|| {
        error!("Homework record is missing the `status` key");
        ResponseError::MissingKey("status".to_string())
    })?;
    let verdict = verdict_for(status).ok_or_else(|| {
        error!(status = %status, "Status is missing from the verdict table");
        ResponseError::UnknownStatus(status.to_string())
    })?;

    Ok(format!(
        "Status changed for submission \"{}\". {}",
        name, verdict
    ))
}
