//! The tensor-algebra backend seam.
//!
//! The numeric engine that performs contractions and reductions is an
//! external collaborator living behind [`TensorBackend`]. This module defines
//! that trait, the argument and status vocabulary shared across the boundary,
//! and the [`Context`] session object that owns the backend handle.

mod context;
mod status;
mod types;

pub use context::{Context, ContextConfig, PLAN_CACHE_LINES};
pub use status::{BackendStatus, CallSite};
pub(crate) use status::check;
pub use types::{Algorithm, AutotunePolicy, ComputeKind, DataType, ReduceOp, ScalarType};

use core::ffi::c_void;

use crate::descriptor::TensorDescriptor;

/// Interface to an accelerator-resident tensor-algebra library.
///
/// Descriptor and plan values are whatever the library hands back; the crate
/// only threads them between calls. Methods report failure as a bare
/// [`BackendStatus`] — translation into [`crate::error::EinsumError`] happens
/// at the call site, which also records which call failed.
pub trait TensorBackend {
    /// Backend-native tensor descriptor.
    type TensorDesc;
    /// Backend-native contraction plan.
    type ContractionPlan;
    /// Execution stream dispatches are enqueued on.
    type Stream: Copy;

    /// Initializes a backend descriptor for one tensor.
    fn init_tensor_descriptor(
        &self,
        desc: &TensorDescriptor,
        dtype: DataType,
    ) -> Result<Self::TensorDesc, BackendStatus>;

    /// Queries the alignment requirement for a tensor's device pointer.
    fn alignment_requirement(
        &self,
        data: *const c_void,
        desc: &Self::TensorDesc,
    ) -> Result<u32, BackendStatus>;

    /// Builds an execution plan for a pairwise contraction.
    fn plan_contraction(
        &self,
        args: ContractionPlanArgs<'_, Self>,
    ) -> Result<Self::ContractionPlan, BackendStatus>;

    /// Runs a planned contraction.
    fn execute_contraction(
        &self,
        plan: &Self::ContractionPlan,
        args: ContractionArgs,
        stream: Self::Stream,
    ) -> Result<(), BackendStatus>;

    /// Runs a single-operand reduction.
    fn execute_reduction(
        &self,
        args: ReductionArgs<'_, Self>,
        stream: Self::Stream,
    ) -> Result<(), BackendStatus>;

    /// Attaches a fixed-size plan cache to the backend handle.
    fn attach_plan_cache(&mut self, cachelines: usize) -> Result<(), BackendStatus>;
}

/// Descriptor-level inputs for contraction planning.
///
/// The output descriptor serves as both the accumulation input and the
/// result, matching the α·A·B + β·C formulation with the crate's fixed
/// β = 0 overwrite policy.
pub struct ContractionPlanArgs<'a, B: TensorBackend + ?Sized> {
    pub desc_a: &'a B::TensorDesc,
    pub modes_a: &'a [i32],
    pub alignment_a: u32,
    pub desc_b: &'a B::TensorDesc,
    pub modes_b: &'a [i32],
    pub alignment_b: u32,
    pub desc_c: &'a B::TensorDesc,
    pub modes_c: &'a [i32],
    pub alignment_c: u32,
    pub compute: ComputeKind,
    pub algorithm: Algorithm,
    pub autotune: AutotunePolicy,
    /// Workspace ceiling the plan must fit in, in bytes.
    pub workspace_limit: u64,
}

/// Pointer-level inputs for a planned contraction.
///
/// `c` is the accumulation input and `d` the result buffer; with `beta == 0`
/// the contraction fully overwrites `d` and never reads `c`.
#[derive(Debug, Clone, Copy)]
pub struct ContractionArgs {
    pub alpha: f64,
    pub beta: f64,
    pub a: *const c_void,
    pub b: *const c_void,
    pub c: *const c_void,
    pub d: *mut c_void,
    pub workspace: *mut c_void,
    pub workspace_size: u64,
}

/// Inputs for a single-operand reduction over the modes absent from the
/// output.
pub struct ReductionArgs<'a, B: TensorBackend + ?Sized> {
    pub alpha: f64,
    pub beta: f64,
    pub a: *const c_void,
    pub desc_a: &'a B::TensorDesc,
    pub modes_a: &'a [i32],
    pub c: *mut c_void,
    pub desc_c: &'a B::TensorDesc,
    pub modes_c: &'a [i32],
    pub op: ReduceOp,
    pub compute: ComputeKind,
    pub workspace: *mut c_void,
    pub workspace_size: u64,
}
