use serde_json::{Map, Value};

pub mod env;
pub mod envelope;
pub mod request;
pub mod result;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A single item read from a table.
/// Items are schemaless so every attribute is kept as a dynamic JSON value.
pub type Record = Map<String, Value>;
