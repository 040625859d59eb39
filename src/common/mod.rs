use std::sync::LazyLock;
use std::time::Instant;

use tokio::runtime::{Builder, Runtime};

/// Largest window a single listing request may return.
pub const MAX_LIST_BATCH: usize = 500;

/// Admin token lifetime in seconds.
pub const ADMIN_TOKEN_TTL_SECS: u64 = 60 * 60 * 24 * 7;

/// Process start, the base for the uptime reported by the status route.
pub static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

// Rocket-specific Tokio runtime, named so request threads are easy to
// spot in thread dumps.
pub static ROCKET_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .thread_name("rocket-io-worker")
        .enable_all()
        .build()
        .expect("Failed to build Rocket Tokio runtime")
});
