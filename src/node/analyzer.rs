//! Builds an [ExpressionNode] tree from a normalized equation.
//!
//! There's no grammar here. Every operator in a (sub)equation is given a score from its
//! precedence, how deeply it sits in parentheses, and its position:
//!
//! ```text
//! [+, -] = 1
//! [*, /] = 2
//! [^]    = 3
//! each enclosing pair of parentheses adds PAREN_SCORE
//! each character of position subtracts 0.01
//!
//! 4 +[0.99] ( 5 ^[6.96] 6 *[5.94] ( 4 +[8.91] 3 ) )
//! ```
//!
//! The lowest scoring operator is evaluated last, so it becomes the root. The text either side of
//! it is then analyzed in the same way to build the root's operands. Since later operators score
//! lower, the rightmost of several equal operators is the root, which makes `4*5/8` group as
//! `(4*5)/8`.

use alloc::{string::String, vec::Vec};
use log::{debug, trace};
use rust_decimal::Decimal;

use crate::error::{AnalysisError, Side};
use crate::settings::AnalysisSettings;
use super::expression::ExpressionNode;
use super::token::{is_operand_char, Operator};

/// The score added to an operator for each pair of parentheses it is nested inside. This is larger
/// than the gap between any two precedences, so a nested operator never outranks one outside.
pub const PAREN_SCORE: u32 = 4;

/// Builds a tree from a normalized equation using the default [AnalysisSettings].
pub fn build(equation: &str) -> Result<ExpressionNode, AnalysisError> {
    build_with(equation, &AnalysisSettings::default())
}

/// Builds a tree from a normalized equation.
///
/// The equation must already have been through [normalize](crate::equation::normalize); anything
/// else may be rejected with an [AnalysisError] even if it looks reasonable.
pub fn build_with(equation: &str, settings: &AnalysisSettings) -> Result<ExpressionNode, AnalysisError> {
    let chars = equation.chars().collect::<Vec<_>>();
    let tree = analyze(&chars, 0, settings)?;
    debug!("built tree {} from {:?}", tree, equation);
    Ok(tree)
}

/// Computes the precedence score of `operator` at `index` in a (sub)equation, nested inside
/// `paren_depth` pairs of parentheses.
pub fn score(operator: Operator, paren_depth: i64, index: usize) -> Decimal {
    Decimal::from(operator.precedence())
        + Decimal::from(paren_depth * PAREN_SCORE as i64)
        - Decimal::new(index as i64, 2)
}

fn analyze(part: &[char], depth: usize, settings: &AnalysisSettings) -> Result<ExpressionNode, AnalysisError> {
    if depth > settings.max_depth {
        return Err(AnalysisError::TooDeep { max: settings.max_depth });
    }

    let inner = unwrap_parentheses(part);
    let (root, operator) = match find_root(inner) {
        Some(found) => found,
        None => return leaf(inner, part),
    };
    trace!("root of {:?} is `{}` at {}", inner.iter().collect::<String>(), operator, root);

    let left = operand(&inner[..root], operator, Side::Left, depth, settings)?;
    let right = operand(&inner[root + 1..], operator, Side::Right, depth, settings)?;

    Ok(ExpressionNode::operator(operator, left, right))
}

/// Returns the position and operator with the lowest score in `part`. Ties keep the earliest,
/// although the position term means exact ties can't happen at the same depth and precedence.
fn find_root(part: &[char]) -> Option<(usize, Operator)> {
    let mut paren_depth: i64 = 0;
    let mut root: Option<(usize, Operator, Decimal)> = None;

    for (i, &c) in part.iter().enumerate() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            _ => if let Some(operator) = Operator::from_char(c) {
                let node_score = score(operator, paren_depth, i);
                let is_lower = match &root {
                    Some((_, _, root_score)) => node_score < *root_score,
                    None => true,
                };
                if is_lower {
                    root = Some((i, operator, node_score));
                }
            }
        }
    }

    root.map(|(i, operator, _)| (i, operator))
}

/// Builds one operand of a root operator from all of the text on that side of it.
///
/// Scanning away from the root, the operand is either a run of operand characters, a run which
/// stops at another operator (`5` in `2*5+8`, where the operand is really `2*5`), or a
/// parenthesised group. The root has the lowest score in its part, so in the last two cases the
/// operand always extends to the end of the side: `2*(3+4)` is the left operand in `2*(3+4)+5`,
/// not just `(3+4)`. So a side is either one leaf, or is analyzed as a whole.
fn operand(side: &[char], operator: Operator, position: Side, depth: usize, settings: &AnalysisSettings) -> Result<ExpressionNode, AnalysisError> {
    if side.is_empty() {
        return Err(AnalysisError::MissingOperand { operator, side: position });
    }

    if side.iter().all(|c| is_operand_char(*c)) {
        Ok(ExpressionNode::Leaf(side.iter().collect()))
    } else {
        analyze(side, depth + 1, settings)
    }
}

/// Builds a leaf from `inner`, a part with no operators. `part` is the same text before any
/// wrapping parentheses were removed, used for error reporting.
fn leaf(inner: &[char], part: &[char]) -> Result<ExpressionNode, AnalysisError> {
    if !inner.is_empty() && inner.iter().all(|c| is_operand_char(*c)) {
        Ok(ExpressionNode::Leaf(inner.iter().collect()))
    } else {
        Err(AnalysisError::InvalidOperand { operand: part.iter().collect() })
    }
}

/// Strips any number of parenthesis pairs which wrap the whole of `part`, so `((1+2))` becomes
/// `1+2` but `(1)+(2)` is left alone.
fn unwrap_parentheses(mut part: &[char]) -> &[char] {
    while part.len() >= 2
        && part[0] == '('
        && matching_close(part, 0) == Some(part.len() - 1)
    {
        part = &part[1..part.len() - 1];
    }
    part
}

/// Given the index of a `(`, returns the index of the `)` which closes it.
fn matching_close(part: &[char], open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, &c) in part.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => (),
        }
    }
    None
}
