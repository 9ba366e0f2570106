use crate::retry::RetryPolicy;
use lambda_runtime::tracing;
use model::request::ScanRequest;
use model::result::{ErrorInfo, ScanResult};
use std::sync::Arc;
use std::time::Duration;
use store::{ScanPage, StoreError, TableStore};
use tokio::time::error::Elapsed;

/// Reads every item of a table, turning any store failure into a `ScanResult::Failure`.
pub struct TableReader {
    store: Arc<dyn TableStore>,
    retry_policy: RetryPolicy,
    // Bounds all attempts together, including backoff
    timeout: Duration,
}

impl TableReader {
    pub fn new(store: Arc<dyn TableStore>, retry_policy: RetryPolicy, timeout: Duration) -> Self {
        TableReader {
            store,
            retry_policy,
            timeout,
        }
    }

    pub async fn scan(&self, request: ScanRequest) -> ScanResult {
        let table_name: &str = request.table_name();

        let outcome: Result<Result<ScanPage, StoreError>, Elapsed> =
            tokio::time::timeout(self.timeout, self.scan_with_retry(table_name)).await;

        match outcome {
            Ok(Ok(page)) => {
                if page.truncated {
                    // Only the first page is read, the rest of the table is missing
                    tracing::warn!(
                        table_name,
                        items = page.items.len(),
                        "Scan result truncated by the store, returning first page only"
                    );
                }

                tracing::info!(table_name, items = page.items.len(), "Scanned table");

                ScanResult::Success(page.items)
            }
            Ok(Err(err)) => {
                let message: String = err.reason.message().to_string();

                ScanResult::Failure(ErrorInfo::new(message, err))
            }
            Err(elapsed) => {
                let message: String =
                    format!("scan timed out after {}ms", self.timeout.as_millis());

                ScanResult::Failure(ErrorInfo::new(message, elapsed))
            }
        }
    }

    async fn scan_with_retry(&self, table_name: &str) -> Result<ScanPage, StoreError> {
        let mut attempt: u32 = 1;

        loop {
            match self.store.scan(table_name).await {
                Err(err)
                    if err.reason.is_transient() && self.retry_policy.allows_another(attempt) =>
                {
                    let delay: Duration = self.retry_policy.delay_after(attempt);

                    tracing::warn!(
                        table_name,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Transient failure scanning table: {}",
                        err.reason.message()
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
