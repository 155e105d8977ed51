//! Shape checks for the decoded status payload.

use hwbot_core::{ResponseError, Result, StatusResponse};
use serde_json::Value;
use tracing::error;

/// Checks the payload against the API contract and returns the typed
/// response. The endpoint must send an object with a `homeworks` list and an
/// integer `current_date`; anything else is rejected here so the parser only
/// ever sees well-formed records. An absent `current_date` fails the type
/// check like a mistyped one.
pub fn check_response(payload: &Value) -> Result<StatusResponse> {
    let object = payload.as_object().ok_or_else(|| {
        error!("Response payload is not an object");
        ResponseError::Shape("payload is not an object".to_string())
    })?;

    let homeworks = object.get("homeworks").ok_or_else(|| {
        error!("Response is missing the `homeworks` field");
        ResponseError::MissingField("homeworks".to_string())
    })?;

    if !homeworks.is_array() {
        error!("Response field `homeworks` is not a list");
        return Err(ResponseError::Shape("`homeworks` is not a list".to_string()).into());
    }

    if !object.get("current_date").map(Value::is_i64).unwrap_or(false) {
        error!("Response field `current_date` is not an integer");
        return Err(ResponseError::Shape("`current_date` is not an integer".to_string()).into());
    }

    serde_json::from_value(payload.clone()).map_err(|e| {
        error!(error = %e, "Response payload did not match the expected shape");
        ResponseError::Shape(e.to_string()).into()
    })
}
