//! Explicit backend session state.

use serde::{Deserialize, Serialize};

use super::TensorBackend;
use super::status::{CallSite, check};
use crate::error::EinsumResult;

/// Number of plan-cache lines attached when the cache is enabled.
pub const PLAN_CACHE_LINES: usize = 512;

/// Options applied when a [`Context`] is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Attach a plan cache to the backend handle.
    pub enable_plan_cache: bool,
    /// Number of cache lines for the plan cache.
    pub plan_cache_lines: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            enable_plan_cache: false,
            plan_cache_lines: PLAN_CACHE_LINES,
        }
    }
}

impl ContextConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the plan cache.
    pub fn with_plan_cache(mut self, enabled: bool) -> Self {
        self.enable_plan_cache = enabled;
        self
    }

    /// Sets the plan cache size.
    pub fn with_plan_cache_lines(mut self, lines: usize) -> Self {
        self.plan_cache_lines = lines;
        self
    }
}

/// Owns the backend handle for the lifetime of the program.
///
/// Construct one `Context` at startup and pass it by reference into every
/// dispatch call. Configuration is applied here, so there is no hidden
/// first-use initialization to race on; sharing a `Context` across threads
/// is governed solely by whether `B` is `Sync`.
#[derive(Debug)]
pub struct Context<B: TensorBackend> {
    backend: B,
}

impl<B: TensorBackend> Context<B> {
    /// Wraps a backend handle with the default configuration.
    pub fn new(backend: B) -> EinsumResult<Self> {
        Self::with_config(backend, ContextConfig::default())
    }

    /// Wraps a backend handle, applying `config`.
    pub fn with_config(mut backend: B, config: ContextConfig) -> EinsumResult<Self> {
        if config.enable_plan_cache {
            check(
                CallSite::AttachPlanCache,
                backend.attach_plan_cache(config.plan_cache_lines),
            )?;
        }
        Ok(Self { backend })
    }

    /// The wrapped backend handle.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
