//! Bounded mode sequences.

use core::fmt;

use smallvec::SmallVec;

/// Maximum number of modes for any operand or output tensor.
///
/// This is the rank ceiling of the dispatch layer, not of the backend; raise
/// it here if a backend ever supports more.
pub const MAX_MODES: usize = 40;

/// An ordered sequence of single-character mode symbols.
///
/// For example, in `ij,jk->ik` the mode sequences are `ij`, `jk`, and `ik`.
/// Duplicate symbols within one sequence are allowed (`ii` names the
/// diagonal) and pass through unmodified. Length is validated against
/// [`MAX_MODES`] at the parsing and resolution stages rather than on every
/// push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeList {
    modes: SmallVec<[char; 8]>,
}

impl ModeList {
    /// Creates an empty mode list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mode list from a sequence of symbols.
    pub fn from_modes(modes: impl IntoIterator<Item = char>) -> Self {
        Self {
            modes: modes.into_iter().collect(),
        }
    }

    /// Number of modes.
    #[inline]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Returns true if there are no modes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Checks whether `mode` appears anywhere in the sequence.
    #[inline]
    pub fn contains(&self, mode: char) -> bool {
        self.modes.contains(&mode)
    }

    /// Position of the first occurrence of `mode`.
    #[inline]
    pub fn position(&self, mode: char) -> Option<usize> {
        self.modes.iter().position(|&m| m == mode)
    }

    /// Iterates over the mode symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.modes.iter().copied()
    }

    /// The modes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.modes
    }

    pub(crate) fn push(&mut self, mode: char) {
        self.modes.push(mode);
    }

    pub(crate) fn sort(&mut self) {
        self.modes.sort_unstable();
    }

    /// Integer mode labels for the backend wire (the symbol's code point).
    pub(crate) fn mode_ids(&self) -> SmallVec<[i32; 8]> {
        self.modes.iter().map(|&m| m as i32).collect()
    }
}

impl fmt::Display for ModeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mode in &self.modes {
            write!(f, "{}", mode)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ModeList {
    type Item = &'a char;
    type IntoIter = core::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}
