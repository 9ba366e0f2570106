use lambda_runtime::tracing;
use model::envelope::ResponseEnvelope;
use model::result::ScanResult;
use serde_json::{Value, json};

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Build the response for a scan.
///
/// Items are returned under `message` with a 200, failures return their message
/// under the same key with a 500 so the caller always receives a JSON body.
pub fn wrap(result: ScanResult) -> ResponseEnvelope {
    match result {
        ScanResult::Success(items) => {
            let items: Vec<Value> = items.into_iter().map(Value::Object).collect();

            ResponseEnvelope::json(STATUS_OK, message_body(Value::Array(items)))
        }
        ScanResult::Failure(error) => {
            tracing::error!(cause = %error.cause, "Scan failed: {}", error.message);

            ResponseEnvelope::json(
                STATUS_INTERNAL_SERVER_ERROR,
                message_body(Value::String(error.message)),
            )
        }
    }
}

fn message_body(message: Value) -> String {
    json!({ "message": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::result::ErrorInfo;
    use test_utils::student_record;

    fn body_json(envelope: &ResponseEnvelope) -> Value {
        serde_json::from_str(envelope.body()).expect("Body should always be valid JSON")
    }

    #[test]
    fn empty_success_has_empty_message() {
        let envelope: ResponseEnvelope = wrap(ScanResult::Success(vec![]));

        assert_eq!(200, envelope.status_code());
        assert_eq!(r#"{"message":[]}"#, envelope.body());
        assert_eq!(
            Some(&"application/json".to_string()),
            envelope.headers().get("Content-Type")
        );
    }

    #[test]
    fn success_returns_records_under_message() {
        let envelope: ResponseEnvelope = wrap(ScanResult::Success(vec![student_record("1", "Ada")]));

        assert_eq!(200, envelope.status_code());
        assert_eq!(r#"{"message":[{"id":"1","name":"Ada"}]}"#, envelope.body());
    }

    #[test]
    fn failure_returns_error_message_with_500() {
        let envelope: ResponseEnvelope = wrap(ScanResult::Failure(ErrorInfo::new(
            "ProvisionedThroughputExceededException",
            "throughput exceeded",
        )));

        assert_eq!(500, envelope.status_code());
        assert_eq!(
            r#"{"message":"ProvisionedThroughputExceededException"}"#,
            envelope.body()
        );
        assert_eq!(
            Some(&"application/json".to_string()),
            envelope.headers().get("Content-Type")
        );
    }

    #[test]
    fn body_parses_back_with_message_key() {
        let envelopes: Vec<ResponseEnvelope> = vec![
            wrap(ScanResult::Success(vec![])),
            wrap(ScanResult::Success(vec![
                student_record("1", "Ada"),
                student_record("2", "Grace"),
            ])),
            wrap(ScanResult::Failure(ErrorInfo::new("quote \" and \\ slash", "cause"))),
        ];

        for envelope in envelopes {
            let body: Value = body_json(&envelope);

            assert!(body.get("message").is_some(), "missing message in {body}");
        }
    }
}
