use async_trait::async_trait;
use model::Record;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use store::StoreErrorReason::MissingTable;
use store::StoreOperation::Scan;
use store::{ScanPage, StoreError, StoreErrorReason, TableStore};

/// A `TableStore` holding tables in memory.
///
/// Failures can be queued with `fail_next` to exercise error handling, each
/// queued failure is returned by one scan call before the table is read.
#[derive(Clone, Default)]
pub struct InMemoryTableStore {
    tables: Arc<Mutex<HashMap<String, Vec<Record>>>>,
    failures: Arc<Mutex<VecDeque<StoreErrorReason>>>,
    latency: Duration,
    scans: Arc<AtomicUsize>,
}

impl InMemoryTableStore {
    /// Delay every scan by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Create or replace a table.
    pub fn put_table(&self, table_name: &str, items: Vec<Record>) {
        lock(&self.tables).insert(table_name.to_string(), items);
    }

    /// Make the next scan fail with `reason`.
    pub fn fail_next(&self, reason: StoreErrorReason) {
        lock(&self.failures).push_back(reason);
    }

    /// Number of scans received, including failed ones.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn scan(&self, table_name: &str) -> Result<ScanPage, StoreError> {
        self.scans.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(reason) = lock(&self.failures).pop_front() {
            return Err(StoreError::new(table_name.to_string(), Scan, reason));
        }

        let items: Vec<Record> = lock(&self.tables)
            .get(table_name)
            .cloned()
            .ok_or_else(|| {
                StoreError::new(
                    table_name.to_string(),
                    Scan,
                    MissingTable("ResourceNotFoundException".to_string()),
                )
            })?;

        Ok(ScanPage::complete(items))
    }
}

// Tables are only ever replaced whole, so a poisoned lock still holds consistent data
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
