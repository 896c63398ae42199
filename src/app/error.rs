use thiserror::Error;

/// Errors raised at the string boundary where action kinds and key specs
/// arrive from the config file.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("unknown action kind `{0}`")]
    UnknownAction(String),

    #[error("action `{0}` is dispatched by the application and cannot be bound to a key")]
    SystemAction(String),

    #[error("invalid key spec `{0}` (expected a single character)")]
    InvalidKey(String),
}
