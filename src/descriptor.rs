//! Tensor descriptors and output extent resolution.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::equation::ModeList;
use crate::error::ValidationError;

pub(crate) type ExtentVec = SmallVec<[i64; 8]>;

/// Mode, extent, and stride metadata for one tensor.
///
/// Extents and strides are `i64` element counts, one per mode. Operand
/// descriptors are an identity passthrough of what the caller supplied;
/// nothing is reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorDescriptor {
    modes: ModeList,
    extents: ExtentVec,
    strides: ExtentVec,
}

impl TensorDescriptor {
    /// Builds an operand descriptor from a caller shape and optional strides.
    ///
    /// Omitted strides default to contiguous row-major.
    pub(crate) fn from_operand(
        modes: ModeList,
        shape: &[usize],
        strides: Option<&[usize]>,
    ) -> Self {
        debug_assert_eq!(modes.len(), shape.len());
        let extents: ExtentVec = shape.iter().map(|&e| e as i64).collect();
        let strides = match strides {
            Some(strides) => strides.iter().map(|&s| s as i64).collect(),
            None => contiguous_strides(&extents),
        };
        Self {
            modes,
            extents,
            strides,
        }
    }

    /// Builds the output descriptor from resolved modes and extents.
    pub(crate) fn from_output(
        modes: ModeList,
        extents: ExtentVec,
        strides: Option<&[usize]>,
    ) -> Self {
        let strides = match strides {
            Some(strides) => strides.iter().map(|&s| s as i64).collect(),
            None => contiguous_strides(&extents),
        };
        Self {
            modes,
            extents,
            strides,
        }
    }

    /// The mode symbols, in operand order.
    #[inline]
    pub fn modes(&self) -> &ModeList {
        &self.modes
    }

    /// Number of modes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.modes.len()
    }

    /// Extent per mode.
    #[inline]
    pub fn extents(&self) -> &[i64] {
        &self.extents
    }

    /// Element stride per mode.
    #[inline]
    pub fn strides(&self) -> &[i64] {
        &self.strides
    }

    /// Extent of the first occurrence of `mode`, if present.
    pub(crate) fn extent_of(&self, mode: char) -> Option<i64> {
        self.modes.position(mode).map(|i| self.extents[i])
    }
}

/// Contiguous row-major element strides for the given extents.
pub(crate) fn contiguous_strides(extents: &[i64]) -> ExtentVec {
    let mut strides: ExtentVec = smallvec::smallvec![1; extents.len()];
    for i in (0..extents.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * extents[i + 1];
    }
    strides
}

/// Verifies that each mode is bound to a single extent across both operands.
pub(crate) fn check_extent_consistency(
    a: &TensorDescriptor,
    b: Option<&TensorDescriptor>,
) -> Result<(), ValidationError> {
    let mut bound: HashMap<char, i64> = HashMap::new();
    for desc in core::iter::once(a).chain(b) {
        for (mode, &extent) in desc.modes().iter().zip(desc.extents().iter()) {
            if let Some(previous) = bound.insert(mode, extent) {
                if previous != extent {
                    return Err(ValidationError::ExtentMismatch {
                        mode,
                        expected: previous,
                        got: extent,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Resolves each output mode to its extent, searching operand A first.
///
/// A miss in both operands is only reachable with an explicit output naming a
/// mode absent from the inputs.
pub(crate) fn resolve_output_extents(
    modes_c: &ModeList,
    a: &TensorDescriptor,
    b: Option<&TensorDescriptor>,
) -> Result<ExtentVec, ValidationError> {
    let mut extents = ExtentVec::with_capacity(modes_c.len());
    for mode in modes_c.iter() {
        let extent = a
            .extent_of(mode)
            .or_else(|| b.and_then(|b| b.extent_of(mode)));
        match extent {
            Some(extent) => extents.push(extent),
            None => return Err(ValidationError::UnresolvableOutputMode { mode }),
        }
    }
    Ok(extents)
}
