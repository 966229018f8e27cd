use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Failed to fetch {resource}: {}", status_text(.status))]
    Fetch {
        resource: &'static str,
        status: StatusCode,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response parsing error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Widget not ready: {0}")]
    NotReady(&'static str),
}

impl WidgetError {
    /// Message shown inside the widget when initialization fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            WidgetError::Fetch { .. } | WidgetError::Http(_) => {
                "Reviews are unavailable right now. Please try again later."
            }
            WidgetError::Parse(_) => "Reviews could not be loaded.",
            _ => "Something went wrong while loading reviews.",
        }
    }
}

fn status_text(status: &StatusCode) -> &str {
    status.canonical_reason().unwrap_or(status.as_str())
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_uses_status_text() {
        let err = WidgetError::Fetch {
            resource: "reviews",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Failed to fetch reviews: Internal Server Error");
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = WidgetError::Parse("expected value at line 1".into());
        assert!(!err.user_message().contains("line 1"));
    }
}
