use thiserror::Error;

#[derive(Error, Debug)]
pub enum HwbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    #[error("Notify error: {0}")]
    Notify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the homework status endpoint request itself.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Endpoint unreachable: {0}")]
    EndpointUnreachable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),
}

/// Failures of the decoded payload: wrong shape, missing keys, unknown status.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Response shape mismatch: {0}")]
    Shape(String),

    #[error("Response is missing the `{0}` field")]
    MissingField(String),

    #[error("Homework record is missing the `{0}` key")]
    MissingKey(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Homework list is empty")]
    EmptyHomeworks,
}

pub type Result<T> = std::result::Result<T, HwbotError>;
