use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    /// Message to show the user, preferring whatever the server said.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_server_message() {
        let err = AppError::ApiError {
            status: 400,
            message: "Expecting html field in post data.".to_string(),
        };
        assert_eq!(err.user_message(), "Expecting html field in post data.");
        assert_eq!(
            err.to_string(),
            "API error (400): Expecting html field in post data."
        );
    }

    #[test]
    fn other_errors_use_display() {
        let err = AppError::InvalidInput("empty name".to_string());
        assert_eq!(err.user_message(), "Invalid input: empty name");
    }
}
