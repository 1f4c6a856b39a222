use std::path::PathBuf;

use crate::app::sdk_errors::{categorize_error_string, ApiFailureKind};

/// Errors that end a walk.
///
/// The tool favours no output over partial output, so every variant is
/// fatal and none of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("{service} {operation} failed ({category}): {message}")]
    ExternalApi {
        service: &'static str,
        operation: &'static str,
        category: ApiFailureKind,
        message: String,
    },

    #[error("Malformed log group ARN '{arn}': expected at least 7 ':'-separated segments with a log group name, found {segments}")]
    MalformedArn { arn: String, segments: usize },

    #[error("Failed to write graph artifact to {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// Build an external API error from a plain message, categorising it
    /// the same way SDK failures are.
    pub fn external(service: &'static str, operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        WalkError::ExternalApi {
            service,
            operation,
            category: categorize_error_string(&message),
            message,
        }
    }
}
