//! # einsum-dispatch
//!
//! Einsum equation compiler and dispatch layer for accelerator-resident
//! tensor-algebra backends.
//!
//! An equation string like `"ij,jk->ik"` plus operand shapes is compiled into
//! complete operand/output descriptors — mode lists, extents, strides — and
//! dispatched as a pairwise contraction (two operands) or a sum-reduction
//! (one operand). The numeric kernels, plan search, and memory management
//! belong to the backend, reached through the [`TensorBackend`] trait.
//!
//! ## Features
//!
//! - Equation parsing: explicit and implicit outputs, whitespace tolerance,
//!   broadcast (`...`) rejection, mode/shape validation
//! - Implicit-output resolution with canonical lexical ordering
//! - Output shape available before execution via [`Einsum::output_shape`]
//! - Fixed α = 1, β = 0 overwrite semantics and a fixed workspace ceiling
//!
//! ## Example
//!
//! ```ignore
//! use einsum_dispatch::{Context, ContextConfig, Einsum};
//!
//! let ctx = Context::with_config(backend, ContextConfig::new().with_plan_cache(true))?;
//! let op = Einsum::<f32>::new("ij,jk->ik", &[2, 3], None, Some(&[3, 4]), None)?;
//! assert_eq!(op.output_shape(), vec![2, 4]);
//! op.execute(&ctx, a_ptr, Some(b_ptr), c_ptr, None, workspace_ptr, stream)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod backend;
pub mod descriptor;
pub mod equation;
pub mod error;
pub mod launch;

pub use half::f16;

pub use backend::{
    Algorithm, AutotunePolicy, BackendStatus, CallSite, ComputeKind, Context, ContextConfig,
    ContractionArgs, ContractionPlanArgs, DataType, PLAN_CACHE_LINES, ReduceOp, ReductionArgs,
    ScalarType, TensorBackend,
};
pub use descriptor::TensorDescriptor;
pub use equation::{MAX_MODES, ModeList};
pub use error::{BackendError, EinsumError, EinsumResult, Operand, ParseError, ValidationError};
pub use launch::{AUTOTUNE_MEASUREMENTS, Einsum, WORKSPACE_SIZE};
