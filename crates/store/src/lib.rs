use ::model::{Error, Record};
use async_trait::async_trait;
use std::fmt::{Debug, Display, Formatter};

/// Read access to the tables of a key-value store.
///
/// Implementations hold no per-request state so a single instance can be
/// shared between every invocation handled by the process.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Read every item the store returns for a single scan of `table_name`.
    async fn scan(&self, table_name: &str) -> Result<ScanPage, StoreError>;
}

/// Items returned by a single scan call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Record>,
    // The store reported more items behind a continuation cursor
    pub truncated: bool,
}

impl ScanPage {
    pub fn complete(items: Vec<Record>) -> Self {
        ScanPage {
            items,
            truncated: false,
        }
    }
}

/// Errors arising from reading a table.
#[derive(Debug)]
pub struct StoreError {
    pub table_name: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
    pub source: Option<Error>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreErrorReason {
    // The store rejected the request for lack of capacity
    Throttled(String),
    // No usable response came back from the store
    Unavailable(String),
    // The table doesn't exist
    MissingTable(String),
    // Any other refusal, such as access denied or validation
    Rejected(String),
    // An item couldn't be converted into a record
    BadRecord(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Scan,
}

impl StoreError {
    pub fn new(table_name: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            table_name,
            operation,
            reason,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<Error>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl StoreErrorReason {
    /// Whether repeating the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreErrorReason::Throttled(_) | StoreErrorReason::Unavailable(_)
        )
    }

    /// Short description of the failure, such as the store's error code.
    pub fn message(&self) -> &str {
        match self {
            StoreErrorReason::Throttled(message)
            | StoreErrorReason::Unavailable(message)
            | StoreErrorReason::MissingTable(message)
            | StoreErrorReason::Rejected(message)
            | StoreErrorReason::BadRecord(message) => message,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} on table {} failed: {:?}",
            self.operation, self.table_name, self.reason
        )?;

        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn std::error::Error + 'static))
    }
}
