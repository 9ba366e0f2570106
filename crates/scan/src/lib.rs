use crate::reader::TableReader;
use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{LambdaEvent, tracing};
use model::Error;
use model::envelope::ResponseEnvelope;
use model::request::ScanRequest;
use model::result::ScanResult;
use serde_json::Value;

pub mod config;
pub mod reader;
pub mod response;
pub mod retry;

/// Handle a single invocation by scanning the configured table.
///
/// The event payload isn't read. Store failures are reported in the returned
/// envelope, so this only returns `Ok`.
///
/// ```ignore
/// let reader: TableReader = TableReader::new(store, config.retry_policy, config.timeout);
///
/// lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
///     scan_handler(&reader, &config.request, event)
/// }))
/// .await
/// ```
pub async fn scan_handler(
    reader: &TableReader,
    request: &ScanRequest,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let request_id: &str = event.context.request_id.as_str();
    let table_name: &str = request.table_name();

    let scan_span: Span = tracing::span!(tracing::Level::INFO, "Scan", table_name, request_id);

    let envelope: ResponseEnvelope = async {
        let result: ScanResult = reader.scan(request.clone()).await;

        response::wrap(result)
    }
    .instrument(scan_span)
    .await;

    tracing::info!(
        status_code = envelope.status_code(),
        "Completed scan of {table_name}"
    );

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::RetryPolicy;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use store::StoreErrorReason::Throttled;
    use store_in_memory::InMemoryTableStore;
    use test_utils::{TEST_TABLE, student_record};

    fn event() -> LambdaEvent<Value> {
        LambdaEvent::new(json!({ "ignored": true }), Context::default())
    }

    #[tokio::test]
    async fn handler_returns_table_contents() {
        let store: InMemoryTableStore = InMemoryTableStore::default();
        store.put_table(TEST_TABLE, vec![student_record("1", "Ada")]);

        let reader: TableReader =
            TableReader::new(Arc::new(store), RetryPolicy::none(), Duration::from_secs(5));
        let request: ScanRequest = ScanRequest::new(TEST_TABLE).expect("Name should be valid");

        let envelope: ResponseEnvelope = scan_handler(&reader, &request, event())
            .await
            .expect("Handler should always return an envelope");

        assert_eq!(
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"message\":[{\"id\":\"1\",\"name\":\"Ada\"}]}"
            }),
            serde_json::to_value(&envelope).expect("Envelope should serialize")
        );
    }

    #[tokio::test]
    async fn handler_returns_error_envelope_on_store_failure() {
        let store: InMemoryTableStore = InMemoryTableStore::default();
        store.put_table(TEST_TABLE, vec![]);
        store.fail_next(Throttled("ProvisionedThroughputExceededException".to_string()));

        let reader: TableReader =
            TableReader::new(Arc::new(store), RetryPolicy::none(), Duration::from_secs(5));
        let request: ScanRequest = ScanRequest::new(TEST_TABLE).expect("Name should be valid");

        let envelope: ResponseEnvelope = scan_handler(&reader, &request, event())
            .await
            .expect("Failures are reported in the envelope");

        assert_eq!(500, envelope.status_code());
        assert_eq!(
            r#"{"message":"ProvisionedThroughputExceededException"}"#,
            envelope.body()
        );
    }
}
