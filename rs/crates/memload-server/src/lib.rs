//! memload-server: an HTTP service that generates memory pressure on demand.
//!
//! Every request to `/` allocates a random 1 MiB buffer, reports its SHA-1
//! and the current heap usage, then retains the buffer in a shared queue
//! until `/clear` is called. `/health/live` and `/health/ready` are fixed
//! probes for orchestrators.

pub mod buffer;
pub mod config;
pub mod error;
pub mod memory;
pub mod server;
pub mod store;
pub mod workload;

pub use buffer::{Buffer, EntropySource, ThreadRngSource, BUFFER_SIZE};
pub use config::Config;
pub use error::{AppError, ConfigError};
pub use server::{router, AppState};
pub use store::BufferStore;
pub use workload::{Report, VERSION};

#[cfg(test)]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;
