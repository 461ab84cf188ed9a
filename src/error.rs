//! Error types for einsum compilation and dispatch.

use core::fmt;

use crate::backend::{BackendStatus, CallSite};

/// Identifies which operand an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => write!(f, "first operand"),
            Operand::B => write!(f, "second operand"),
        }
    }
}

/// Errors raised while parsing an equation against the operand shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ParseError {
    /// The equation contains the broadcast marker.
    #[cfg_attr(feature = "std", error("broadcast einsum with '...' is not supported"))]
    BroadcastNotSupported,

    /// An operand's mode substring disagrees with its shape length.
    #[cfg_attr(
        feature = "std",
        error("modes substring for {operand} and shape don't match: {modes} modes vs {dims} dimensions")
    )]
    ModeShapeMismatch {
        operand: Operand,
        modes: usize,
        dims: usize,
    },

    /// An operand exceeds the mode-count ceiling.
    #[cfg_attr(
        feature = "std",
        error("too many modes in {operand}: {count} exceeds the maximum of {max}")
    )]
    TooManyModes {
        operand: Operand,
        count: usize,
        max: usize,
    },

    /// The output exceeds the mode-count ceiling.
    #[cfg_attr(feature = "std", error("too many modes in output tensor: limit is {max}"))]
    TooManyOutputModes { max: usize },
}

/// Errors raised while binding resolved modes to extents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ValidationError {
    /// An explicit output mode is absent from both operands.
    #[cfg_attr(
        feature = "std",
        error("output mode '{mode}' not found in either operand")
    )]
    UnresolvableOutputMode { mode: char },

    /// A mode is bound to two different extents across the operands.
    #[cfg_attr(
        feature = "std",
        error("extent mismatch for mode '{mode}': {expected} vs {got}")
    )]
    ExtentMismatch { mode: char, expected: i64, got: i64 },

    /// A contraction was dispatched without a device pointer for operand B.
    #[cfg_attr(
        feature = "std",
        error("contraction requires a device pointer for the second operand")
    )]
    MissingOperand,
}

/// A non-success status returned by the backend, tagged with the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "std", error("backend error at {site}: {status}"))]
pub struct BackendError {
    /// The backend call the status came from.
    pub site: CallSite,
    /// The status the backend reported.
    pub status: BackendStatus,
}

/// Any failure an einsum operation can surface.
///
/// All variants are terminal for the operation instance: the crate performs
/// no retries and no partial-failure recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum EinsumError {
    #[cfg_attr(feature = "std", error(transparent))]
    Parse(ParseError),

    #[cfg_attr(feature = "std", error(transparent))]
    Validation(ValidationError),

    #[cfg_attr(feature = "std", error(transparent))]
    Backend(BackendError),
}

impl From<ParseError> for EinsumError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ValidationError> for EinsumError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<BackendError> for EinsumError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

/// Result type for einsum operations.
pub type EinsumResult<T> = core::result::Result<T, EinsumError>;
