/// Environment variable containing the name of the table to scan
pub const SCAN_TABLE_NAME: &str = "SCAN_TABLE_NAME";
/// Environment variable toggling strongly consistent scans
pub const SCAN_CONSISTENT_READ: &str = "SCAN_CONSISTENT_READ";
/// Environment variable bounding the whole scan, in milliseconds
pub const SCAN_TIMEOUT_MS: &str = "SCAN_TIMEOUT_MS";
/// Environment variable with the number of attempts made for transient failures
pub const SCAN_MAX_ATTEMPTS: &str = "SCAN_MAX_ATTEMPTS";
/// Environment variable with the first backoff delay, in milliseconds
pub const SCAN_BASE_DELAY_MS: &str = "SCAN_BASE_DELAY_MS";

/// Table scanned when none is configured
pub const DEFAULT_TABLE_NAME: &str = "Student";
/// Region used when the provider chain doesn't resolve one
pub const DEFAULT_REGION: &str = "us-east-1";
