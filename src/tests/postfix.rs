use alloc::vec;
use pretty_assertions::assert_eq;

use crate::node::postfix::{to_postfix, to_postfix_tokens, PostfixToken};
use crate::node::token::Operator;

#[test]
fn test_postfix() {
    assert_eq!(to_postfix("4+5*6"), "4  5  6  *  +");
    assert_eq!(to_postfix("(4+5)*6"), "4  5  +  6  *");
    assert_eq!(to_postfix("2*3+4"), "2  3  *  4  +");
    assert_eq!(to_postfix("12.5*x1-3"), "12.5  x1  *  3  -");
    assert_eq!(to_postfix("4*(2+3)^2"), "4  2  3  +  2  ^  *");
    assert_eq!(to_postfix("((1+2))"), "1  2  +");
}

#[test]
fn test_left_associative() {
    assert_eq!(to_postfix("1-2+3"), "1  2  -  3  +");
    assert_eq!(to_postfix("8/4/2"), "8  4  /  2  /");
    assert_eq!(to_postfix("2^3^4"), "2  3  ^  4  ^");
}

#[test]
fn test_edge_cases() {
    assert_eq!(to_postfix("42"), "42");
    assert_eq!(to_postfix(""), "");
    assert_eq!(to_postfix("1%2"), "1  2");
}

#[test]
fn test_tokens() {
    assert_eq!(
        to_postfix_tokens("a+b2"),
        vec![
            PostfixToken::Operand("a".into()),
            PostfixToken::Operand("b2".into()),
            PostfixToken::Operator(Operator::Add),
        ],
    );
}
