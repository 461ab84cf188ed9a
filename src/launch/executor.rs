//! Einsum operation construction and dispatch.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ffi::c_void;
use core::marker::PhantomData;

use super::workspace::{AUTOTUNE_MEASUREMENTS, WORKSPACE_SIZE};
use crate::backend::{
    Algorithm, AutotunePolicy, CallSite, Context, ContractionArgs, ContractionPlanArgs, ReduceOp,
    ReductionArgs, ScalarType, TensorBackend, check,
};
use crate::descriptor::{
    ExtentVec, TensorDescriptor, check_extent_consistency, resolve_output_extents,
};
use crate::equation::{ModeList, ParsedEquation, parse_equation, resolve_output_modes};
use crate::error::{EinsumResult, ValidationError};

/// A compiled einsum operation.
///
/// Construction turns an equation string and operand shapes into complete
/// operand/output descriptors; [`execute`](Einsum::execute) dispatches them
/// to a backend as either a pairwise contraction (the equation named two
/// operands) or a single-operand sum-reduction. Construction is pure — an
/// `Einsum` can be built and queried without any backend in sight.
///
/// # Example
///
/// ```
/// use einsum_dispatch::Einsum;
///
/// let op = Einsum::<f32>::new("ij,jk->ik", &[2, 3], None, Some(&[3, 4]), None).unwrap();
/// assert_eq!(op.output_shape(), vec![2, 4]);
/// assert_eq!(op.modes_c(), "ik");
/// ```
#[derive(Debug)]
pub struct Einsum<E: ScalarType> {
    desc_a: TensorDescriptor,
    desc_b: Option<TensorDescriptor>,
    modes_c: ModeList,
    extents_c: ExtentVec,
    _elem: PhantomData<E>,
}

impl<E: ScalarType> Einsum<E> {
    /// Compiles `equation` against the operand shapes.
    ///
    /// Omitted strides default to contiguous row-major. Operand B is in play
    /// exactly when the equation contains a `,`; a `b_shape` passed without
    /// one is ignored.
    pub fn new(
        equation: &str,
        a_shape: &[usize],
        a_strides: Option<&[usize]>,
        b_shape: Option<&[usize]>,
        b_strides: Option<&[usize]>,
    ) -> EinsumResult<Self> {
        let b_rank = b_shape.map_or(0, <[usize]>::len);
        let parsed = parse_equation(equation, a_shape.len(), b_rank)?;
        let modes_c = resolve_output_modes(&parsed)?;
        let ParsedEquation {
            modes_a,
            modes_b,
            uses_b,
            ..
        } = parsed;

        let desc_a = TensorDescriptor::from_operand(modes_a, a_shape, a_strides);
        let desc_b = if uses_b {
            let shape = b_shape.unwrap_or(&[]);
            Some(TensorDescriptor::from_operand(modes_b, shape, b_strides))
        } else {
            None
        };

        check_extent_consistency(&desc_a, desc_b.as_ref())?;
        let extents_c = resolve_output_extents(&modes_c, &desc_a, desc_b.as_ref())?;

        Ok(Self {
            desc_a,
            desc_b,
            modes_c,
            extents_c,
            _elem: PhantomData,
        })
    }

    /// Extents of the output tensor, in output-mode order.
    ///
    /// Available before execution, e.g. to allocate the destination buffer;
    /// repeated calls return the same value.
    pub fn output_shape(&self) -> Vec<usize> {
        self.extents_c.iter().map(|&e| e as usize).collect()
    }

    /// Rank of the output tensor.
    #[inline]
    pub fn output_rank(&self) -> usize {
        self.modes_c.len()
    }

    /// Mode symbols of operand A, in operand order.
    pub fn modes_a(&self) -> String {
        self.desc_a.modes().to_string()
    }

    /// Mode symbols of operand B; empty for a reduction.
    pub fn modes_b(&self) -> String {
        self.desc_b
            .as_ref()
            .map(|desc| desc.modes().to_string())
            .unwrap_or_default()
    }

    /// Mode symbols of the output, in resolved order.
    pub fn modes_c(&self) -> String {
        self.modes_c.to_string()
    }

    /// True when the equation named a second operand.
    #[inline]
    pub fn is_contraction(&self) -> bool {
        self.desc_b.is_some()
    }

    /// True when the operation reduces a single operand.
    #[inline]
    pub fn is_reduction(&self) -> bool {
        self.desc_b.is_none()
    }

    /// Workspace size `execute` hands to the backend, in bytes.
    #[inline]
    pub fn worksize(&self) -> u64 {
        WORKSPACE_SIZE
    }

    /// Dispatches the operation to the backend.
    ///
    /// The result fully overwrites `c` (α = 1, β = 0); no other state is
    /// mutated. The call is enqueued on `stream` and the caller owns
    /// synchronization before reading `c`. `workspace` must point to at
    /// least [`WORKSPACE_SIZE`] bytes. Omitted `c_strides` default to
    /// contiguous row-major over the output shape. On the reduction path a
    /// stray `b` pointer is ignored; a contraction without one fails
    /// validation.
    #[allow(clippy::too_many_arguments)]
    pub fn execute<B: TensorBackend>(
        &self,
        ctx: &Context<B>,
        a: *const c_void,
        b: Option<*const c_void>,
        c: *mut c_void,
        c_strides: Option<&[usize]>,
        workspace: *mut c_void,
        stream: B::Stream,
    ) -> EinsumResult<()> {
        let backend = ctx.backend();
        let desc_c =
            TensorDescriptor::from_output(self.modes_c.clone(), self.extents_c.clone(), c_strides);

        let raw_a = check(
            CallSite::DescriptorA,
            backend.init_tensor_descriptor(&self.desc_a, E::DATA),
        )?;
        let raw_c = check(
            CallSite::DescriptorC,
            backend.init_tensor_descriptor(&desc_c, E::DATA),
        )?;
        let alignment_a = check(
            CallSite::AlignmentA,
            backend.alignment_requirement(a, &raw_a),
        )?;
        let alignment_c = check(
            CallSite::AlignmentC,
            backend.alignment_requirement(c as *const c_void, &raw_c),
        )?;

        let modes_a = self.desc_a.modes().mode_ids();
        let modes_c = self.modes_c.mode_ids();

        match &self.desc_b {
            Some(desc_b) => {
                let b = b.ok_or(ValidationError::MissingOperand)?;
                let raw_b = check(
                    CallSite::DescriptorB,
                    backend.init_tensor_descriptor(desc_b, E::DATA),
                )?;
                let alignment_b = check(
                    CallSite::AlignmentB,
                    backend.alignment_requirement(b, &raw_b),
                )?;
                let modes_b = desc_b.modes().mode_ids();

                let plan = check(
                    CallSite::PlanContraction,
                    backend.plan_contraction(ContractionPlanArgs {
                        desc_a: &raw_a,
                        modes_a: &modes_a,
                        alignment_a,
                        desc_b: &raw_b,
                        modes_b: &modes_b,
                        alignment_b,
                        desc_c: &raw_c,
                        modes_c: &modes_c,
                        alignment_c,
                        compute: E::COMPUTE,
                        algorithm: Algorithm::Default,
                        autotune: AutotunePolicy::Incremental {
                            measurements: AUTOTUNE_MEASUREMENTS,
                        },
                        workspace_limit: WORKSPACE_SIZE,
                    }),
                )?;

                check(
                    CallSite::ExecuteContraction,
                    backend.execute_contraction(
                        &plan,
                        ContractionArgs {
                            alpha: 1.0,
                            beta: 0.0,
                            a,
                            b,
                            c: c as *const c_void,
                            d: c,
                            workspace,
                            workspace_size: WORKSPACE_SIZE,
                        },
                        stream,
                    ),
                )
            }
            None => check(
                CallSite::ExecuteReduction,
                backend.execute_reduction(
                    ReductionArgs {
                        alpha: 1.0,
                        beta: 0.0,
                        a,
                        desc_a: &raw_a,
                        modes_a: &modes_a,
                        c,
                        desc_c: &raw_c,
                        modes_c: &modes_c,
                        op: ReduceOp::Add,
                        compute: E::COMPUTE,
                        workspace,
                        workspace_size: WORKSPACE_SIZE,
                    },
                    stream,
                ),
            ),
        }
    }
}
