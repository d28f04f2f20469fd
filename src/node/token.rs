//! Character classification shared by the tree builder and the postfix converter.
//!
//! Equations are never tokenised up front. Each character is classified on demand as an operand
//! fragment, an [Operator], or a parenthesis.

use core::fmt;

#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Returns the operator represented by `c`, or `None` if `c` isn't one of `+ - * / ^`.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// The base precedence of this operator: 1 for `+ -`, 2 for `* /` and 3 for `^`. Higher
    /// binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns true if `c` can be part of an operand: an ASCII letter, digit, or decimal point.
pub fn is_operand_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}
