//! Payload types for the homework status endpoint.

use serde::Deserialize;

/// One homework entry as the review API reports it. The API sends more fields
/// (reviewer comment, lesson name, dates); only the name and status drive
/// notifications. Both are kept optional so that a degraded record is caught
/// by the status parser rather than failing wholesale during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Validated status payload: homeworks ordered most-recent-first, plus the
/// server clock used to advance the poll window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub homeworks: Vec<Homework>,
    pub current_date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homework_tolerates_extra_and_missing_fields() {
        let hw: Homework = serde_json::from_str(
            r#"{"homework_name": "proj1", "reviewer_comment": "ok", "lesson_name": "x"}"#,
        )
        .unwrap();
        assert_eq!(hw.homework_name.as_deref(), Some("proj1"));
        assert!(hw.status.is_none());
    }
}
