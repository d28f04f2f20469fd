use alloc::{boxed::Box, string::{String, ToString}, vec::Vec};
use core::cmp::max;
use core::fmt;

use super::token::Operator;

/// A binary expression tree built from a normalized equation by the
/// [analyzer](crate::node::analyzer).
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ExpressionNode {
    /// A number literal or identifier, made only of `[A-Za-z0-9.]`.
    Leaf(String),
    Operator {
        operator: Operator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn leaf(text: impl Into<String>) -> ExpressionNode {
        ExpressionNode::Leaf(text.into())
    }

    pub fn operator(operator: Operator, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
        ExpressionNode::Operator { operator, left: Box::new(left), right: Box::new(right) }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExpressionNode::Leaf(_))
    }

    /// The text drawn inside this node's circle in a diagram.
    pub fn label(&self) -> String {
        match self {
            ExpressionNode::Leaf(text) => text.clone(),
            ExpressionNode::Operator { operator, .. } => operator.symbol().to_string(),
        }
    }

    /// The number of levels in this tree. A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Leaf(_) => 1,
            ExpressionNode::Operator { left, right, .. } => 1 + max(left.depth(), right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            ExpressionNode::Leaf(_) => 1,
            ExpressionNode::Operator { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Returns the labels of this tree in-order (left, operator, right). For a tree built from an
    /// equation, this is the equation's tokens with the parentheses removed.
    pub fn in_order(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.visit_in_order(&mut tokens);
        tokens
    }

    fn visit_in_order(&self, tokens: &mut Vec<String>) {
        match self {
            ExpressionNode::Leaf(text) => tokens.push(text.clone()),
            ExpressionNode::Operator { operator, left, right } => {
                left.visit_in_order(tokens);
                tokens.push(operator.symbol().to_string());
                right.visit_in_order(tokens);
            }
        }
    }

    /// Returns the labels of this tree in post-order (left, right, operator), which is the tree
    /// read as postfix notation.
    pub fn post_order(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.visit_post_order(&mut tokens);
        tokens
    }

    fn visit_post_order(&self, tokens: &mut Vec<String>) {
        match self {
            ExpressionNode::Leaf(text) => tokens.push(text.clone()),
            ExpressionNode::Operator { operator, left, right } => {
                left.visit_post_order(tokens);
                right.visit_post_order(tokens);
                tokens.push(operator.symbol().to_string());
            }
        }
    }
}

/// Formats the tree as infix with every operator node in parentheses, e.g. `((2*5)+8)`.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionNode::Leaf(text) => write!(f, "{}", text),
            ExpressionNode::Operator { operator, left, right } =>
                write!(f, "({}{}{})", left, operator, right),
        }
    }
}
