//! Backend status translation.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, EinsumError, EinsumResult};

/// Non-success status reported by a tensor-algebra backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendStatus {
    /// The backend library has not been initialized.
    NotInitialized,
    /// Internal memory allocation failed.
    AllocFailed,
    /// An argument was rejected.
    InvalidValue,
    /// The device architecture is not supported.
    ArchMismatch,
    /// The requested operation is not supported.
    NotSupported,
    /// The backend hit an internal error.
    InternalError,
    /// Any other library-specific status code.
    Code(i32),
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendStatus::NotInitialized => write!(f, "backend not initialized"),
            BackendStatus::AllocFailed => write!(f, "allocation failed"),
            BackendStatus::InvalidValue => write!(f, "invalid value"),
            BackendStatus::ArchMismatch => write!(f, "architecture mismatch"),
            BackendStatus::NotSupported => write!(f, "operation not supported"),
            BackendStatus::InternalError => write!(f, "internal error"),
            BackendStatus::Code(code) => write!(f, "status code {}", code),
        }
    }
}

/// Identifies the backend call a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallSite {
    DescriptorA,
    DescriptorB,
    DescriptorC,
    AlignmentA,
    AlignmentB,
    AlignmentC,
    PlanContraction,
    ExecuteContraction,
    ExecuteReduction,
    AttachPlanCache,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallSite::DescriptorA => "descriptor init (A)",
            CallSite::DescriptorB => "descriptor init (B)",
            CallSite::DescriptorC => "descriptor init (C)",
            CallSite::AlignmentA => "alignment query (A)",
            CallSite::AlignmentB => "alignment query (B)",
            CallSite::AlignmentC => "alignment query (C)",
            CallSite::PlanContraction => "contraction planning",
            CallSite::ExecuteContraction => "contraction execution",
            CallSite::ExecuteReduction => "reduction execution",
            CallSite::AttachPlanCache => "plan cache attach",
        };
        write!(f, "{}", name)
    }
}

/// Translates a backend status into an [`EinsumError`], tagging the call
/// site. Every backend invocation in the crate goes through this one
/// adapter.
pub(crate) fn check<T>(site: CallSite, result: Result<T, BackendStatus>) -> EinsumResult<T> {
    result.map_err(|status| EinsumError::Backend(BackendError { site, status }))
}
