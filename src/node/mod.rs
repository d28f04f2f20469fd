//! Representations of a normalized equation.
//!
//! An equation can be [analyzed](analyzer) into an [ExpressionNode] tree, which supports
//! [rendering](crate::render) as a diagram, or [converted](postfix) straight to postfix notation.
//! Both work character by character, using the classification in [token].

pub mod token;
pub mod expression;
pub mod analyzer;
pub mod postfix;

pub use expression::ExpressionNode;
