use serde::Serialize;
use std::collections::BTreeMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP shaped response returned to the invocation trigger.
///
/// Serializes as `{"statusCode": .., "headers": {..}, "body": ".."}`, which is
/// the proxy integration format expected by API Gateway and function URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl ResponseEnvelope {
    /// Create an envelope carrying a JSON body.
    pub fn json(status_code: u16, body: String) -> Self {
        let headers: BTreeMap<String, String> =
            BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]);

        ResponseEnvelope {
            status_code,
            headers,
            body,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn envelope_serializes_with_camel_case_keys() {
        let envelope: ResponseEnvelope =
            ResponseEnvelope::json(200, r#"{"message":[]}"#.to_string());

        let value: Value = serde_json::to_value(&envelope).expect("Envelope should serialize");

        assert_eq!(
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"message\":[]}"
            }),
            value
        );
    }
}
