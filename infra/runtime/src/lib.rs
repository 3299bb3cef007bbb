//! # Runtime
//!
//! Builds [Tokio](https://tokio.rs) runtimes from a small set of named profiles so every
//! binary in the workspace boots the same way.
//!
//! ## Profiles
//! * **Current thread**: no worker pool, everything runs on the calling thread. The shell
//!   uses this: its work is synchronous lookups plus an awaitable billing hook.
//! * **Multi thread**: work-stealing pool sized from `SITELY_WORKER_THREADS` or the
//!   available parallelism.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[sitely_runtime::main(current_thread)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use sitely_derive::main;

use anyhow::Context;
use std::{num::NonZero, thread::available_parallelism};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_THREAD_NAME: &str = "sitely-worker";
const WORKER_THREADS_ENV: &str = "SITELY_WORKER_THREADS";

/// Scheduler flavour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    CurrentThread,
    #[default]
    MultiThread,
}

/// Full runtime configuration. Prefer [`RuntimeConfig::from`] a profile and the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub profile: RuntimeProfile,
    pub worker_threads: usize,
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from(RuntimeProfile::default())
    }
}

impl From<RuntimeProfile> for RuntimeConfig {
    fn from(profile: RuntimeProfile) -> Self {
        let worker_threads = match profile {
            RuntimeProfile::CurrentThread => 1,
            RuntimeProfile::MultiThread => detect_worker_threads(),
        };
        Self { profile, worker_threads, thread_name: DEFAULT_THREAD_NAME.to_owned() }
    }
}

impl RuntimeConfig {
    /// Worker count, clamped to `1..=1024`. Ignored by the current-thread profile.
    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    /// Blank names fall back to the default thread name.
    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

fn detect_worker_threads() -> usize {
    std::env::var(WORKER_THREADS_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0 && n <= MAX_WORKER_THREADS)
        .unwrap_or_else(|| {
            available_parallelism().map(NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
        })
}

/// Builds a runtime for the given profile with default settings.
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime's threads or I/O driver.
pub fn build_runtime(profile: RuntimeProfile) -> Result<Runtime> {
    build_runtime_with_config(&RuntimeConfig::from(profile))
}

/// Builds a runtime from a full [`RuntimeConfig`].
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime's threads or I/O driver.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.profile {
        RuntimeProfile::CurrentThread => Builder::new_current_thread(),
        RuntimeProfile::MultiThread => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(config.worker_threads.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder.thread_name(&config.thread_name).enable_all();
    builder.build().context("Failed to initialize runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        let config = RuntimeConfig::default().with_worker_threads(0);
        assert_eq!(config.worker_threads, 1);

        let config = RuntimeConfig::default().with_worker_threads(2000);
        assert_eq!(config.worker_threads, MAX_WORKER_THREADS);
    }

    #[test]
    fn blank_thread_name_falls_back() {
        let config = RuntimeConfig::default().with_thread_name("  ");
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn current_thread_profile_uses_one_worker() {
        let config = RuntimeConfig::from(RuntimeProfile::CurrentThread);
        assert_eq!(config.worker_threads, 1);
    }

    #[test]
    fn current_thread_runtime_runs_futures() {
        let runtime = build_runtime(RuntimeProfile::CurrentThread).unwrap();
        assert_eq!(runtime.block_on(async { 40 + 2 }), 42);
    }

    #[test]
    fn multi_thread_runtime_runs_futures() {
        let config = RuntimeConfig::from(RuntimeProfile::MultiThread).with_worker_threads(2);
        let runtime = build_runtime_with_config(&config).unwrap();
        assert_eq!(runtime.block_on(async { "ok" }), "ok");
    }
}
