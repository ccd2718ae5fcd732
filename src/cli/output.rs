//! CLI output: error mapping and exit codes.

use crate::error::CheckError;

/// Every path matched, or mismatches were not asked to fail the run
pub const EXIT_OK: i32 = 0;
/// At least one path did not match and `fail_on_mismatch` is set
pub const EXIT_MISMATCH: i32 = 1;
/// The run aborted
pub const EXIT_ERROR: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CheckError) -> String {
    format!("treecheck: {}", e)
}
