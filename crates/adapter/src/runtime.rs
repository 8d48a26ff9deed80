//! Adapter runtime integration.
//!
//! Runs the async server to completion from synchronous code.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::sync::Mutex;

use crate::core::Session;
use crate::server::{run_server, ServerConfig};

/// Serve a fresh session created from `seed` until the listener fails.
pub fn serve_blocking(config: ServerConfig, seed: u32) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let session = Arc::new(Mutex::new(Session::new(seed)));
    rt.block_on(run_server(config, session, None))
}
