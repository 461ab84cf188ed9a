//! Einsum equation parser.
//!
//! Splits strings like `"ij,jk->ik"` into raw per-operand mode sequences and
//! validates them against the operand shapes.

use super::modes::{MAX_MODES, ModeList};
use crate::error::{Operand, ParseError};

/// Raw parse of an einsum equation.
///
/// `modes_c` holds the output substring verbatim and is empty when the output
/// is implicit; resolution happens in [`super::resolver`].
#[derive(Debug, Clone)]
pub(crate) struct ParsedEquation {
    pub modes_a: ModeList,
    pub modes_b: ModeList,
    pub modes_c: ModeList,
    pub implicit_output: bool,
    pub uses_b: bool,
}

/// Parses an einsum equation against the operand ranks.
///
/// # Grammar
///
/// ```text
/// equation ::= operandA [',' operandB] ['->' output]
/// operand  ::= mode*
/// output   ::= mode*
/// mode     ::= any printable character except ',', whitespace ignored
/// ```
///
/// Operand B participates exactly when a `,` is present; the output is
/// implicit exactly when `->` is absent. The broadcast marker `...` is
/// rejected outright. Each operand's mode count must equal its shape length
/// (`b_rank` is ignored when there is no `,`) and stay within [`MAX_MODES`].
pub(crate) fn parse_equation(
    equation: &str,
    a_rank: usize,
    b_rank: usize,
) -> Result<ParsedEquation, ParseError> {
    if equation.contains("...") {
        return Err(ParseError::BroadcastNotSupported);
    }

    let arrow = equation.find("->");
    let comma = equation.find(',');
    let implicit_output = arrow.is_none();
    let uses_b = comma.is_some();
    let b_rank = if uses_b { b_rank } else { 0 };

    let len = equation.len();
    let a_end = match (comma, arrow) {
        (Some(pos), _) => pos,
        (None, Some(pos)) => pos,
        (None, None) => len,
    };
    let (b_start, b_end) = match comma {
        Some(pos) => (pos + 1, if implicit_output { len } else { arrow.unwrap_or(len) }),
        None => (0, 0),
    };
    let (c_start, c_end) = match arrow {
        Some(pos) => (pos + 2, len),
        None => (len, len),
    };

    let modes_a = collect_modes(equation.get(..a_end).unwrap_or(""));
    let modes_b = collect_modes(equation.get(b_start..b_end).unwrap_or(""));
    let modes_c = collect_modes(equation.get(c_start..c_end).unwrap_or(""));

    if modes_a.len() != a_rank {
        return Err(ParseError::ModeShapeMismatch {
            operand: Operand::A,
            modes: modes_a.len(),
            dims: a_rank,
        });
    }
    if modes_b.len() != b_rank {
        return Err(ParseError::ModeShapeMismatch {
            operand: Operand::B,
            modes: modes_b.len(),
            dims: b_rank,
        });
    }
    if a_rank > MAX_MODES {
        return Err(ParseError::TooManyModes {
            operand: Operand::A,
            count: a_rank,
            max: MAX_MODES,
        });
    }
    if b_rank > MAX_MODES {
        return Err(ParseError::TooManyModes {
            operand: Operand::B,
            count: b_rank,
            max: MAX_MODES,
        });
    }

    Ok(ParsedEquation {
        modes_a,
        modes_b,
        modes_c,
        implicit_output,
        uses_b,
    })
}

fn collect_modes(raw: &str) -> ModeList {
    let mut modes = ModeList::new();
    for symbol in raw.chars() {
        if !symbol.is_whitespace() {
            modes.push(symbol);
        }
    }
    modes
}
