//! Operation dispatch.
//!
//! [`Einsum`] is the compiled form of an equation: descriptors assembled,
//! contraction-vs-reduction decided, ready to hand to a backend.

mod executor;
mod workspace;

pub use executor::Einsum;
pub use workspace::{AUTOTUNE_MEASUREMENTS, WORKSPACE_SIZE};
