//! AWS SDK error categorisation for diagnostics.
//!
//! The walk never retries: the first failing API call ends the run. What the
//! user needs from that failure is a one-line answer to "was it me, AWS or the
//! network?", so SDK errors are folded into an [`ApiFailureKind`] before they
//! are wrapped in a [`WalkError::ExternalApi`].
//!
//! Categorisation prefers the modeled error code when the SDK exposes one and
//! falls back to matching known patterns in the rendered error message.

use std::fmt;

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

use crate::app::discovery::WalkError;

/// Broad failure class of an external API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailureKind {
    /// Request was throttled due to rate limiting
    Throttled,
    /// Request timed out
    Timeout,
    /// Network connectivity issues
    Network,
    /// AWS service temporarily unavailable
    ServiceUnavailable,
    /// Credentials missing, expired or lacking permission
    AccessDenied,
    /// The trail, log group or bucket does not exist
    NotFound,
    Other,
}

impl ApiFailureKind {
    /// Short label for compact display
    pub fn short_label(&self) -> &'static str {
        match self {
            ApiFailureKind::Throttled => "throttled",
            ApiFailureKind::Timeout => "timeout",
            ApiFailureKind::Network => "network",
            ApiFailureKind::ServiceUnavailable => "unavailable",
            ApiFailureKind::AccessDenied => "access denied",
            ApiFailureKind::NotFound => "not found",
            ApiFailureKind::Other => "error",
        }
    }
}

impl fmt::Display for ApiFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

const THROTTLING_MARKERS: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "LimitExceededException",
    "RateExceeded",
    "SlowDown",
];

const ACCESS_MARKERS: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnauthorizedOperation",
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredToken",
    "SignatureDoesNotMatch",
    "no credentials",
    "NoCredentials",
];

const NOT_FOUND_MARKERS: &[&str] = &[
    "ResourceNotFoundException",
    "TrailNotFoundException",
    "NoSuchBucket",
    "NotFound",
];

const UNAVAILABLE_MARKERS: &[&str] = &[
    "ServiceUnavailable",
    "ServiceUnavailableException",
    "InternalServerError",
    "InternalFailure",
    "InternalError",
];

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}

/// Categorise a failure from its modeled error code and rendered message
pub fn categorize(code: Option<&str>, message: &str) -> ApiFailureKind {
    if let Some(code) = code {
        if contains_any(code, THROTTLING_MARKERS) {
            return ApiFailureKind::Throttled;
        }
        if contains_any(code, ACCESS_MARKERS) {
            return ApiFailureKind::AccessDenied;
        }
        if contains_any(code, NOT_FOUND_MARKERS) {
            return ApiFailureKind::NotFound;
        }
        if contains_any(code, UNAVAILABLE_MARKERS) {
            return ApiFailureKind::ServiceUnavailable;
        }
    }
    categorize_error_string(message)
}

/// Categorise an error based on its string representation
///
/// This handles the common patterns seen in rendered SDK error chains, where
/// dispatch and timeout failures carry no error code.
pub fn categorize_error_string(error_str: &str) -> ApiFailureKind {
    if contains_any(error_str, THROTTLING_MARKERS) {
        return ApiFailureKind::Throttled;
    }

    if error_str.contains("TimeoutError")
        || error_str.contains("timeout")
        || error_str.contains("timed out")
    {
        return ApiFailureKind::Timeout;
    }

    if error_str.contains("DispatchFailure")
        || error_str.contains("dispatch failure")
        || error_str.contains("connection")
        || error_str.contains("Connection")
        || error_str.contains("dns error")
        || error_str.contains("DNS")
    {
        return ApiFailureKind::Network;
    }

    if contains_any(error_str, ACCESS_MARKERS) {
        return ApiFailureKind::AccessDenied;
    }

    if contains_any(error_str, NOT_FOUND_MARKERS) {
        return ApiFailureKind::NotFound;
    }

    if contains_any(error_str, UNAVAILABLE_MARKERS) || error_str.contains("Service Unavailable") {
        return ApiFailureKind::ServiceUnavailable;
    }

    ApiFailureKind::Other
}

/// Truncate a message to `max_chars`, adding an ellipsis if truncated
pub fn truncate_message(msg: &str, max_chars: usize) -> String {
    if msg.chars().count() <= max_chars {
        return msg.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let end = msg
        .char_indices()
        .nth(keep)
        .map(|(index, _)| index)
        .unwrap_or(msg.len());
    format!("{}...", &msg[..end])
}

/// Wrap a failed SDK call in a [`WalkError::ExternalApi`]
pub fn external_api_error<E, R>(
    service: &'static str,
    operation: &'static str,
    err: SdkError<E, R>,
) -> WalkError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{}: {}", code, message),
        _ => format!("{:?}", err),
    };
    let category = categorize(code.as_deref(), &message);
    trace_debug!(
        "{} {} failed with code {:?}, categorised as {}",
        service,
        operation,
        code,
        category
    );
    WalkError::ExternalApi {
        service,
        operation,
        category,
        message: truncate_message(&message, 300),
    }
}
