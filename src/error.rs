use alloc::string::String;
use core::fmt;
use thiserror::Error;

use crate::node::token::Operator;

/// Raised by [normalize](crate::equation::normalize) when the raw equation can't be cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEquationError {
    #[error("an equation is required")]
    EmptyInput,
    #[error("unpaired open parenthesis")]
    UnpairedOpenParen,
    #[error("unpaired close parenthesis")]
    UnpairedCloseParen,
    #[error("parenthesis count mismatch: {open} open, {close} closed")]
    ParenCountMismatch { open: usize, close: usize },
    #[error("equation is {length} characters long, the maximum is {max}")]
    TooLong { length: usize, max: usize },
}

/// Which side of an operator an operand was expected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Raised by the tree builder when a normalized equation still can't be split into operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("operator `{operator}` is missing its {side} operand")]
    MissingOperand { operator: Operator, side: Side },
    #[error("`{operand}` is not a valid operand")]
    InvalidOperand { operand: String },
    #[error("equation is nested too deeply to analyze (limit {max})")]
    TooDeep { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Malformed(#[from] MalformedEquationError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
