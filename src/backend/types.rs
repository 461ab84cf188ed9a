//! Wire-level types shared with tensor-algebra backends.

use half::f16;
use serde::{Deserialize, Serialize};

/// Element data types understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    R16F,
    R32F,
    R64F,
}

/// Accumulation precision for a contraction or reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputeKind {
    F32,
    Tf32,
    F64,
}

/// Plan algorithm selection.
///
/// [`Algorithm::Default`] lets the backend pick; the named variants pin a
/// specific contraction strategy for backends that expose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Default,
    Gett,
    Tgett,
    Ttgt,
}

/// Autotuning policy for plan construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutotunePolicy {
    /// No autotuning; take the first viable kernel.
    None,
    /// Measure up to `measurements` candidate kernels across repeated calls.
    Incremental { measurements: u32 },
}

/// Reduction operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReduceOp {
    Add,
    Mul,
    Min,
    Max,
}

/// Maps a Rust element type to its backend data and compute types.
pub trait ScalarType: Copy + 'static {
    /// Wire data type of the elements.
    const DATA: DataType;
    /// Accumulation precision used for this element type.
    const COMPUTE: ComputeKind;
}

impl ScalarType for f32 {
    const DATA: DataType = DataType::R32F;
    #[cfg(not(feature = "tf32"))]
    const COMPUTE: ComputeKind = ComputeKind::F32;
    #[cfg(feature = "tf32")]
    const COMPUTE: ComputeKind = ComputeKind::Tf32;
}

impl ScalarType for f64 {
    const DATA: DataType = DataType::R64F;
    const COMPUTE: ComputeKind = ComputeKind::F64;
}

// Half-precision elements accumulate in f32.
impl ScalarType for f16 {
    const DATA: DataType = DataType::R16F;
    const COMPUTE: ComputeKind = ComputeKind::F32;
}
