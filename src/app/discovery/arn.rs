//! ARN helpers

use super::WalkError;

/// Position of the log group name in
/// `arn:aws:logs:<region>:<account>:log-group:<name>[:*]`.
pub const LOG_GROUP_NAME_SEGMENT: usize = 6;

/// Extract the log group name from a CloudWatch Logs log group ARN.
///
/// CloudTrail reports the ARN with a trailing `:*` stream wildcard, which is
/// ignored. Log group names cannot contain `:`, so the name is always a
/// single segment.
pub fn log_group_name_from_arn(arn: &str) -> Result<&str, WalkError> {
    let segments: Vec<&str> = arn.split(':').collect();
    match segments.get(LOG_GROUP_NAME_SEGMENT) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(WalkError::MalformedArn {
            arn: arn.to_string(),
            segments: segments.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_trail_style_arn() {
        let arn = "arn:aws:logs:us-east-1:111122223333:log-group:myGroup:*";
        assert_eq!(log_group_name_from_arn(arn).unwrap(), "myGroup");
    }

    #[test]
    fn test_name_without_wildcard_suffix() {
        let arn = "arn:aws:logs:eu-west-1:111122223333:log-group:/aws/cloudtrail/org";
        assert_eq!(log_group_name_from_arn(arn).unwrap(), "/aws/cloudtrail/org");
    }

    #[test]
    fn test_short_arn_is_malformed() {
        let err = log_group_name_from_arn("arn:aws:logs:us-east-1:111122223333:log-group").unwrap_err();
        assert!(matches!(err, WalkError::MalformedArn { segments: 6, .. }));

        let err = log_group_name_from_arn("myGroup").unwrap_err();
        assert!(matches!(err, WalkError::MalformedArn { segments: 1, .. }));
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let err = log_group_name_from_arn("arn:aws:logs:us-east-1:111122223333:log-group:").unwrap_err();
        assert!(matches!(err, WalkError::MalformedArn { segments: 7, .. }));
    }
}
