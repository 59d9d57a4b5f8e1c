//! Stable error codes for reporting at process boundaries.

/// Every error enum implements this to expose a machine-readable code.
pub trait CuratorErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const NAMING_ERROR: &str = "NAMING_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
