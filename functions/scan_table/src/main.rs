use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::config::retry::RetryConfig;
use lambda_runtime::{LambdaEvent, service_fn, tracing};
use model::Error;
use model::env::DEFAULT_REGION;
use scan::config::ScanConfig;
use scan::reader::TableReader;
use scan::scan_handler;
use serde_json::Value;
use std::sync::Arc;
use store_dynamodb::DynamoDbTableStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config: ScanConfig = ScanConfig::from_env()?;

    let region: RegionProviderChain =
        RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    // Retries are made by the reader, within its timeout
    let dynamodb_config: aws_sdk_dynamodb::Config =
        aws_sdk_dynamodb::config::Builder::from(&aws_config)
            .retry_config(RetryConfig::disabled())
            .build();

    // Shared by every invocation handled by this instance
    let store: DynamoDbTableStore =
        DynamoDbTableStore::new(aws_sdk_dynamodb::Client::from_conf(dynamodb_config))
            .with_consistent_read(config.consistent_read);
    let reader: TableReader =
        TableReader::new(Arc::new(store), config.retry_policy, config.timeout);

    tracing::info!(
        table_name = config.request.table_name(),
        "Starting scan function"
    );

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        scan_handler(&reader, &config.request, event)
    }))
    .await
}
