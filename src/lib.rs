//! Tools for showing how an infix equation is structured: as an expression tree, drawn as a
//! diagram, or as postfix notation.
//!
//! ```
//! let equation = eqreps::Equation::parse("4 + 5(6)").unwrap();
//! assert_eq!(equation.as_str(), "4+5*(6)");
//! assert_eq!(equation.postfix(), "4  5  6  *  +");
//! assert_eq!(equation.tree().unwrap().to_string(), "(4+(5*6))");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod settings;
pub mod equation;
pub mod node;
pub mod render;
pub mod renderers;

#[cfg(test)]
mod tests;

use alloc::string::String;

pub use crate::{
    equation::{Equation, normalize},
    error::{AnalysisError, Error, MalformedEquationError},
    node::{ExpressionNode, token::Operator, postfix::to_postfix},
    settings::{AnalysisSettings, GroupAdjacency},
};

/// Builds an expression tree from a normalized equation. See [node::analyzer].
pub fn build_tree(normalized: &str) -> Result<ExpressionNode, AnalysisError> {
    node::analyzer::build(normalized)
}

/// Normalizes `raw` and converts it to postfix in one step.
pub fn postfix(raw: &str) -> Result<String, MalformedEquationError> {
    Ok(Equation::parse(raw)?.postfix())
}

/// Normalizes `raw` and builds its expression tree in one step.
pub fn tree(raw: &str) -> Result<ExpressionNode, Error> {
    Equation::parse(raw)?.tree()
}
