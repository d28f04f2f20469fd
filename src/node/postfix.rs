//! Converts a normalized equation to postfix (Reverse Polish) notation with a single
//! left-to-right scan and an operator stack.

use alloc::{string::{String, ToString}, vec::Vec};
use core::fmt;

use super::token::{is_operand_char, Operator};

/// Placed between every token of [to_postfix]'s output.
pub const DELIMITER: &str = "  ";

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum PostfixToken {
    Operand(String),
    Operator(Operator),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PostfixToken::Operand(text) => write!(f, "{}", text),
            PostfixToken::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StackItem {
    OpenParen,
    Operator(Operator),
}

/// Converts a normalized equation to postfix, e.g. `4+5*6` becomes `4  5  6  *  +`.
pub fn to_postfix(equation: &str) -> String {
    to_postfix_tokens(equation)
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Converts a normalized equation to a sequence of postfix tokens.
///
/// Before an operator is pushed, every stacked operator of equal or higher precedence is emitted.
/// This includes `^`, so `2^3^4` is treated as `(2^3)^4`.
///
/// Characters which aren't operands, operators or parentheses are skipped.
pub fn to_postfix_tokens(equation: &str) -> Vec<PostfixToken> {
    let chars = equation.chars().collect::<Vec<_>>();
    let mut stack: Vec<StackItem> = Vec::new();
    let mut output = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c == ')' {
            while let Some(StackItem::Operator(op)) = stack.last().copied() {
                output.push(PostfixToken::Operator(op));
                stack.pop();
            }
            // Discard the `(`, if we found one
            stack.pop();
        } else if c == '(' {
            stack.push(StackItem::OpenParen);
        } else if let Some(op) = Operator::from_char(c) {
            while let Some(StackItem::Operator(top)) = stack.last().copied() {
                if top.precedence() < op.precedence() {
                    break;
                }
                output.push(PostfixToken::Operator(top));
                stack.pop();
            }
            stack.push(StackItem::Operator(op));
        } else if is_operand_char(c) {
            let start = i;
            while i + 1 < chars.len() && is_operand_char(chars[i + 1]) {
                i += 1;
            }
            output.push(PostfixToken::Operand(chars[start..=i].iter().collect()));
        }

        i += 1;
    }

    // Anything left over is emitted last-in first-out
    while let Some(item) = stack.pop() {
        if let StackItem::Operator(op) = item {
            output.push(PostfixToken::Operator(op));
        }
    }

    output
}
