//! Live heap accounting.
//!
//! The binary runs on jemalloc (`#[global_allocator]` in `main.rs`, and a
//! test-only copy in `lib.rs`), so the allocator's own `stats.allocated`
//! counter covers every allocation the service makes, retained buffers
//! included. Embedders that link the library with a different allocator get
//! a figure that only reflects jemalloc's share, which is usually zero.

use tikv_jemalloc_ctl::{epoch, stats};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Bytes currently allocated by the application, as of a fresh stats epoch.
pub fn allocated_bytes() -> Result<usize, tikv_jemalloc_ctl::Error> {
    // jemalloc caches its statistics; advancing the epoch refreshes them.
    epoch::advance()?;
    stats::allocated::read()
}

/// [`allocated_bytes`] in megabytes (MiB), as reported by the workload
/// endpoint. Best effort: a stats read failure is logged and reported as 0.
pub fn allocated_megabytes() -> f64 {
    match allocated_bytes() {
        Ok(bytes) => bytes as f64 / BYTES_PER_MB,
        Err(e) => {
            tracing::warn!(error = %e, "jemalloc stats unavailable");
            0.0
        }
    }
}
