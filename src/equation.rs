//! Cleaning raw user input into a normalized equation, and the [Equation] type which carries a
//! normalized equation through to the tree builder and postfix converter.

use alloc::{string::String, vec::Vec};
use core::fmt;
use log::debug;

use crate::error::{Error, MalformedEquationError};
use crate::node::{analyzer, postfix, token::is_operand_char, ExpressionNode};
use crate::settings::{AnalysisSettings, GroupAdjacency};

/// Normalizes `raw` using the default [AnalysisSettings].
pub fn normalize(raw: &str) -> Result<String, MalformedEquationError> {
    normalize_with(raw, &AnalysisSettings::default())
}

/// Validates parenthesis counts, strips whitespace and makes implicit multiplication explicit:
///
/// - `8(2+1)` becomes `8*(2+1)`
/// - `(2+1)8` becomes `(2+1)*8`
/// - `(1)(2)` becomes `(1)*(2)`; see [GroupAdjacency] for repeated groups
pub fn normalize_with(raw: &str, settings: &AnalysisSettings) -> Result<String, MalformedEquationError> {
    let stripped = raw.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
    if stripped.is_empty() {
        return Err(MalformedEquationError::EmptyInput);
    }
    if stripped.len() > settings.max_length {
        return Err(MalformedEquationError::TooLong { length: stripped.len(), max: settings.max_length });
    }

    check_parentheses(&stripped)?;

    let mut result = String::with_capacity(stripped.len() * 2);
    let mut grouped_once = false;
    for (i, &c) in stripped.iter().enumerate() {
        result.push(c);

        let next = match stripped.get(i + 1) {
            Some(&next) => next,
            None => break,
        };

        let implicit_multiply = if is_operand_char(c) {
            next == '('
        } else if c == ')' && is_operand_char(next) {
            true
        } else if c == ')' && next == '(' {
            let insert = !grouped_once || settings.group_adjacency == GroupAdjacency::All;
            grouped_once = true;
            insert
        } else {
            false
        };

        if implicit_multiply {
            result.push('*');
        }
    }

    debug!("normalized {:?} to {:?}", raw, result);
    Ok(result)
}

fn check_parentheses(chars: &[char]) -> Result<(), MalformedEquationError> {
    let open = chars.iter().filter(|c| **c == '(').count();
    let close = chars.iter().filter(|c| **c == ')').count();

    match (open, close) {
        (o, c) if o == c => Ok(()),
        (_, 0) => Err(MalformedEquationError::UnpairedOpenParen),
        (0, _) => Err(MalformedEquationError::UnpairedCloseParen),
        (open, close) => Err(MalformedEquationError::ParenCountMismatch { open, close }),
    }
}

/// A normalized equation. Constructing one is the only way to normalize and analyze in one go,
/// and the text never changes afterwards.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Equation {
    text: String,
    settings: AnalysisSettings,
}

impl Equation {
    pub fn parse(raw: &str) -> Result<Equation, MalformedEquationError> {
        Equation::parse_with(raw, &AnalysisSettings::default())
    }

    pub fn parse_with(raw: &str, settings: &AnalysisSettings) -> Result<Equation, MalformedEquationError> {
        Ok(Equation {
            text: normalize_with(raw, settings)?,
            settings: *settings,
        })
    }

    /// The normalized text, which is also the label drawn above a tree diagram.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Builds the expression tree for this equation.
    pub fn tree(&self) -> Result<ExpressionNode, Error> {
        Ok(analyzer::build_with(&self.text, &self.settings)?)
    }

    /// Converts this equation to postfix notation, with tokens separated by two spaces.
    pub fn postfix(&self) -> String {
        postfix::to_postfix(&self.text)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
