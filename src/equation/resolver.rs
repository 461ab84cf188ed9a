//! Output-mode resolution.

use super::modes::{MAX_MODES, ModeList};
use super::parser::ParsedEquation;
use crate::error::ParseError;

/// Produces the final output mode sequence for a parsed equation.
///
/// Explicit outputs are taken verbatim, never reordered. Implicit outputs
/// collect every non-contracted mode — first operand A's modes that appear
/// nowhere in B, then B's that appear nowhere in A, each in operand order —
/// and sort the combined list ascending by symbol. The sort canonicalizes the
/// output layout independently of how the equation happened to be written,
/// the conventional implicit-einsum ordering.
pub(crate) fn resolve_output_modes(parsed: &ParsedEquation) -> Result<ModeList, ParseError> {
    if !parsed.implicit_output {
        if parsed.modes_c.len() > MAX_MODES {
            return Err(ParseError::TooManyOutputModes { max: MAX_MODES });
        }
        return Ok(parsed.modes_c.clone());
    }

    let mut output = ModeList::new();
    append_non_contracted(&parsed.modes_a, &parsed.modes_b, &mut output)?;
    append_non_contracted(&parsed.modes_b, &parsed.modes_a, &mut output)?;
    output.sort();
    Ok(output)
}

/// Appends every mode of `from` that appears nowhere in `other`.
///
/// Repeated occurrences are appended once each; a mode shared with `other`
/// is contracted away no matter how often it repeats.
fn append_non_contracted(
    from: &ModeList,
    other: &ModeList,
    output: &mut ModeList,
) -> Result<(), ParseError> {
    for mode in from.iter() {
        if !other.contains(mode) {
            if output.len() == MAX_MODES {
                return Err(ParseError::TooManyOutputModes { max: MAX_MODES });
            }
            output.push(mode);
        }
    }
    Ok(())
}
