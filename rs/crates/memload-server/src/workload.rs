//! One unit of memory pressure: generate, hash, measure, retain.

use std::fmt;

use crate::buffer::{Buffer, EntropySource};
use crate::error::AppError;
use crate::memory;
use crate::store::BufferStore;

/// Reported by the workload endpoint on every response.
pub const VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub version: &'static str,
    pub memory_mb: f64,
    pub digest: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Application version: {}", self.version)?;
        writeln!(f, "Memory used by the process heap: {:.2} MB", self.memory_mb)?;
        writeln!(f, "SHA1 result of the buffer: {}", self.digest)
    }
}

/// Generate a fresh buffer, hash it, snapshot heap usage, then hand the
/// buffer to `store`. A fill failure returns before the store is touched.
pub fn run(store: &BufferStore, source: &dyn EntropySource) -> Result<Report, AppError> {
    let buffer = Buffer::random(source)?;
    let digest = buffer.digest();
    let memory_mb = memory::allocated_megabytes();

    store.append(buffer);

    Ok(Report {
        version: VERSION,
        memory_mb,
        digest,
    })
}
