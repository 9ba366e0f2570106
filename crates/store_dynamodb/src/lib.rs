use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use model::Record;
use std::collections::HashMap;
use store::StoreErrorReason::{BadRecord, MissingTable, Rejected, Throttled, Unavailable};
use store::StoreOperation::Scan;
use store::{ScanPage, StoreError, StoreErrorReason, TableStore};

// Error codes DynamoDB uses for throttling which aren't modelled on `ScanError`
const THROTTLING_CODES: &[&str] = &["ThrottlingException", "TooManyRequestsException"];
const UNHANDLED_ERROR: &str = "UnhandledError";

/// Reads tables using the DynamoDB `Scan` operation.
/// Only the first page is read, a truncated result is reported on the returned `ScanPage`.
#[derive(Clone)]
pub struct DynamoDbTableStore {
    dynamodb_client: aws_sdk_dynamodb::Client,
    consistent_read: bool,
}

impl DynamoDbTableStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        DynamoDbTableStore {
            dynamodb_client,
            consistent_read: false,
        }
    }

    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = consistent_read;
        self
    }
}

#[async_trait]
impl TableStore for DynamoDbTableStore {
    async fn scan(&self, table_name: &str) -> Result<ScanPage, StoreError> {
        let output: ScanOutput = self
            .dynamodb_client
            .scan()
            .table_name(table_name)
            .consistent_read(self.consistent_read)
            .send()
            .await
            .map_err(|err| {
                StoreError::new(table_name.to_string(), Scan, classify_sdk_error(&err))
                    .with_source(err)
            })?;

        let truncated: bool = output.last_evaluated_key.is_some();
        let items: Vec<HashMap<String, AttributeValue>> = output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(encode_binary_attributes)
            .collect();

        let items: Vec<Record> = serde_dynamo::from_items(items).map_err(|err| {
            StoreError::new(table_name.to_string(), Scan, BadRecord(err.to_string()))
                .with_source(err)
        })?;

        Ok(ScanPage { items, truncated })
    }
}

// Only short codes are kept on the reason, the full error stays on the source
fn classify_sdk_error(err: &SdkError<ScanError, HttpResponse>) -> StoreErrorReason {
    match err {
        SdkError::ServiceError(context) => classify_scan_error(context.err()),
        SdkError::TimeoutError(_) => Unavailable("TimeoutError".to_string()),
        SdkError::DispatchFailure(_) => Unavailable("DispatchFailure".to_string()),
        SdkError::ResponseError(_) => Unavailable("ResponseError".to_string()),
        SdkError::ConstructionFailure(_) => Rejected("ConstructionFailure".to_string()),
        _ => Rejected(UNHANDLED_ERROR.to_string()),
    }
}

fn classify_scan_error(err: &ScanError) -> StoreErrorReason {
    match err {
        ScanError::ProvisionedThroughputExceededException(_) => {
            Throttled(code_or(err, "ProvisionedThroughputExceededException"))
        }
        ScanError::RequestLimitExceeded(_) => Throttled(code_or(err, "RequestLimitExceeded")),
        ScanError::InternalServerError(_) => Unavailable(code_or(err, "InternalServerError")),
        ScanError::ResourceNotFoundException(_) => {
            MissingTable(code_or(err, "ResourceNotFoundException"))
        }
        _ => match err.code() {
            Some(code) if THROTTLING_CODES.contains(&code) => Throttled(code.to_string()),
            Some(code) => Rejected(code.to_string()),
            None => Rejected(UNHANDLED_ERROR.to_string()),
        },
    }
}

// Errors built without metadata (such as in tests) have no code
fn code_or(err: &ScanError, fallback: &str) -> String {
    err.code().unwrap_or(fallback).to_string()
}

/// Replace binary values, which have no JSON form, with the
/// `{"type": "Buffer", "data": [..]}` shape used by the JavaScript document client.
fn encode_binary_attributes(
    item: HashMap<String, AttributeValue>,
) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, encode_binary(value)))
        .collect()
}

fn encode_binary(value: AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::B(blob) => buffer(blob.into_inner()),
        AttributeValue::Bs(blobs) => AttributeValue::L(
            blobs
                .into_iter()
                .map(|blob| buffer(blob.into_inner()))
                .collect(),
        ),
        AttributeValue::L(values) => {
            AttributeValue::L(values.into_iter().map(encode_binary).collect())
        }
        AttributeValue::M(values) => AttributeValue::M(encode_binary_attributes(values)),
        other => other,
    }
}

fn buffer(bytes: Vec<u8>) -> AttributeValue {
    let data: Vec<AttributeValue> = bytes
        .into_iter()
        .map(|byte| AttributeValue::N(byte.to_string()))
        .collect();

    AttributeValue::M(HashMap::from([
        ("type".to_string(), AttributeValue::S("Buffer".to_string())),
        ("data".to_string(), AttributeValue::L(data)),
    ]))
}
