use aws_sdk_dynamodb::config::retry::RetryConfig;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_smithy_mocks::{Rule, RuleMode, mock_client};
use model::Record;
use serde_json::{Value, json};
use std::collections::HashMap;

/// A mock DynamoDB client answering with the given rules in order.
/// SDK retries are disabled so every rule response is observed exactly once.
pub fn create_mock_dynamodb_client(rules: &[&Rule]) -> aws_sdk_dynamodb::Client {
    mock_client!(
        aws_sdk_dynamodb,
        RuleMode::Sequential,
        rules,
        |builder: aws_sdk_dynamodb::config::Builder| builder
            .retry_config(RetryConfig::disabled())
    )
}

/// Build a DynamoDB item from attribute pairs
pub fn attribute_item(attributes: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
    attributes
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A complete, single page scan response
pub fn scan_output_with_items(items: Vec<HashMap<String, AttributeValue>>) -> ScanOutput {
    let count: i32 = items.len() as i32;

    ScanOutput::builder()
        .set_items(Some(items))
        .count(count)
        .scanned_count(count)
        .build()
}

/// DynamoDB item for a student with string attributes
pub fn student_item(id: &str, name: &str) -> HashMap<String, AttributeValue> {
    attribute_item(&[
        ("id", AttributeValue::S(id.to_string())),
        ("name", AttributeValue::S(name.to_string())),
    ])
}

/// The record a `student_item` converts to
pub fn student_record(id: &str, name: &str) -> Record {
    match json!({ "id": id, "name": name }) {
        Value::Object(record) => record,
        _ => unreachable!("json object literal"),
    }
}

/// Test table values
pub const TEST_TABLE: &str = "Student";
