use std::fmt::{Display, Formatter};

/// Intent to read every item of a single table.
///
/// The table name is checked once on construction, so holding a `ScanRequest`
/// means no store call can be made with an empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    table_name: String,
}

impl ScanRequest {
    pub fn new(table_name: impl Into<String>) -> Result<Self, InvalidTableName> {
        let table_name: String = table_name.into();

        if table_name.trim().is_empty() {
            return Err(InvalidTableName(table_name));
        }

        Ok(ScanRequest { table_name })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// A table name which can never be scanned.
/// This is a configuration mistake rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTableName(pub String);

impl Display for InvalidTableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid table name {:?}, must not be empty", self.0)
    }
}

impl std::error::Error for InvalidTableName {}
