//! Hand-curated risk tables, one per service family.
//!
//! Each entry pairs an AWS CLI command pattern with what an actor holding
//! that permission could do to the trail data flowing through the service.

use crate::app::discovery::ServiceFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTable {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub static CLOUDWATCH_LOGS: RiskTable = RiskTable {
    title: "CloudWatch Log Group",
    entries: &[
        ("delete-*", "Delete the log group, its logs or its configurations."),
        ("put-*", "Change configurations or add new logs."),
        ("create-export-task", "Create an export task so that you can efficiently export data from a log group to an Amazon S3 bucket."),
        ("associate-kms-key", "Associate the specified KMS key with the specified log group."),
        ("disassociate-kms-key", "Disassociate the associated KMS key from the specified log group."),
    ],
};

pub static S3: RiskTable = RiskTable {
    title: "S3",
    entries: &[
        ("delete-*", "Delete the bucket, its configuration or the files."),
        ("put-*", "Change configurations or add new objects."),
        ("copy-object", "Create a copy of an object that is already stored in Amazon S3."),
        ("create-multipart-upload", "Initiate a multipart upload."),
    ],
};

pub static LAMBDA: RiskTable = RiskTable {
    title: "Lambda",
    entries: &[
        ("delete-*", "Delete the Lambda function or important parts of it."),
        ("remove-*", "Revoke function-use permission or remove a statement from the permissions policy for a version of a Lambda layer."),
        ("update-*", "Change the current code or configurations."),
        ("put-*", "Add extra configurations such as concurrency."),
    ],
};

pub static SNS: RiskTable = RiskTable {
    title: "SNS",
    entries: &[
        ("delete-*", "Delete the SNS topic or important parts of it."),
        ("remove-permission", "Remove a statement from a topic's access control policy."),
        ("publish-*", "Send a message or messages to an Amazon SNS topic."),
        ("put-data-protection-policy", "Add or update an inline policy document that is stored in the specified Amazon SNS topic."),
        ("unsubscribe", "Delete a subscription."),
        ("subscribe", "Subscribe an endpoint to an Amazon SNS topic."),
        ("set-*", "Configuration changes that might affect the SNS topic."),
    ],
};

pub static SQS: RiskTable = RiskTable {
    title: "SQS",
    entries: &[
        ("add-permission", "Add a permission to a queue for a specific principal."),
        ("change-*", "Change the visibility timeout of one or more messages in a queue to a new value."),
        ("delete-*", "Delete messages from the queue or the queue itself."),
        ("purge-queue", "Delete messages from the queue."),
        ("receive-message", "Retrieve one or more messages."),
        ("remove-permission", "Revoke any permissions in the queue policy that match the specified Label parameter."),
        ("send-message", "Deliver a message to the specified queue."),
        ("set-queue-attributes", "Set the value of one or more queue attributes."),
    ],
};

pub static KINESIS: RiskTable = RiskTable {
    title: "Kinesis",
    entries: &[
        ("decrease-stream-retention-period", "Decrease the Kinesis data stream's retention period, which is the length of time data records are accessible after they are added to the stream."),
        ("delete-stream", "Delete a Kinesis data stream and all its shards and data."),
        ("deregister-stream-consumer", "Deregister a consumer."),
        ("put-*", "Put one or more data records into an Amazon Kinesis data stream."),
        ("register-stream-consumer", "Register a consumer with a Kinesis data stream."),
        ("start-stream-encryption", "Enable or update server-side encryption using an AWS KMS key for a specified stream."),
        ("stop-stream-encryption", "Disable server-side encryption for a specified stream."),
        ("update-*", "Update the stream configuration."),
    ],
};

pub static FIREHOSE: RiskTable = RiskTable {
    title: "Kinesis Firehose",
    entries: &[
        ("delete-delivery-stream", "Delete a delivery stream and its data."),
        ("put-*", "Write data into an Amazon Kinesis Data Firehose delivery stream."),
        ("start-delivery-stream-encryption", "Enable server-side encryption (SSE) for the delivery stream."),
        ("stop-delivery-stream-encryption", "Disable server-side encryption (SSE) for the delivery stream."),
        ("update-destination", "Update the specified destination of the specified delivery stream."),
    ],
};

pub static OPENSEARCH: RiskTable = RiskTable {
    title: "OpenSearch",
    entries: &[
        ("accept-inbound-connection", "Allow the destination Amazon OpenSearch Service domain owner to accept an inbound cross-cluster search connection request."),
        ("*-package", "Associate or dissociate a package from the Amazon OpenSearch Service domain."),
        ("delete-*", "Delete the domain or important configurations."),
        ("reject-inbound-connection", "Reject an inbound cross-cluster connection request."),
        ("revoke-vpc-endpoint-access", "Revoke access to an Amazon OpenSearch Service domain that was provided through an interface VPC endpoint."),
        ("update-*", "Update the OpenSearch configuration."),
    ],
};

/// Risk table for a service family
pub fn risk_table(family: ServiceFamily) -> &'static RiskTable {
    match family {
        ServiceFamily::CloudWatchLogsLogGroup => &CLOUDWATCH_LOGS,
        ServiceFamily::S3 => &S3,
        ServiceFamily::Lambda => &LAMBDA,
        ServiceFamily::Sqs => &SQS,
        ServiceFamily::Sns => &SNS,
        ServiceFamily::Kinesis => &KINESIS,
        ServiceFamily::Firehose => &FIREHOSE,
        ServiceFamily::OpenSearch => &OPENSEARCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_a_distinct_non_empty_table() {
        let mut titles: Vec<_> = ServiceFamily::REPORT_ORDER
            .iter()
            .map(|family| risk_table(*family))
            .inspect(|table| assert!(!table.entries.is_empty(), "{} is empty", table.title))
            .map(|table| table.title)
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 8);
    }

    #[test]
    fn test_s3_family_maps_to_s3_table() {
        assert_eq!(risk_table(ServiceFamily::S3).title, "S3");
        assert!(risk_table(ServiceFamily::S3)
            .entries
            .iter()
            .any(|(command, _)| *command == "create-multipart-upload"));
    }
}
