use proptest::prelude::*;

use eqreps::node::{analyzer, postfix};
use eqreps::{normalize, AnalysisSettings, Equation, GroupAdjacency, MalformedEquationError};

fn operand() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "[a-zA-Z]", "[0-9]\\.[0-9]{1,2}"]
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/', '^'])
}

fn equation() -> impl Strategy<Value = String> {
    equation_of_depth(3)
}

/// Equations with explicit operators everywhere, nested up to `depth` levels.
fn equation_of_depth(depth: u32) -> impl Strategy<Value = String> {
    operand().prop_recursive(depth, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, op, r)| format!("{}{}{}", l, op, r)),
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

/// Equations which lean on implicit multiplication around parentheses.
fn implicit_equation() -> impl Strategy<Value = String> {
    equation_of_depth(2).prop_recursive(2, 4, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({})({})", l, r)),
            (operand(), inner.clone()).prop_map(|(l, r)| format!("{}({})", l, r)),
            (inner, operand()).prop_map(|(l, r)| format!("({}){}", l, r)),
        ]
    })
}

fn all_groups() -> AnalysisSettings {
    AnalysisSettings::default().with_group_adjacency(GroupAdjacency::All)
}

/// Past this length the position term of the precedence score can outweigh precedence and
/// parenthesis depth, so trees are no longer built by the usual rules.
const MAX_CONVENTIONAL_LENGTH: usize = 100;

/// Splits a normalized equation into operands and operators, dropping parentheses.
fn tokens(equation: &str) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];
    let mut in_operand = false;
    for c in equation.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            if in_operand {
                tokens.last_mut().unwrap().push(c);
            } else {
                tokens.push(c.to_string());
            }
            in_operand = true;
        } else {
            if c != '(' && c != ')' {
                tokens.push(c.to_string());
            }
            in_operand = false;
        }
    }
    tokens
}

proptest! {
    #[test]
    fn normalize_accepts_balanced(eq in implicit_equation()) {
        prop_assert!(normalize(&eq).is_ok());
    }

    #[test]
    fn normalize_is_idempotent(eq in implicit_equation()) {
        let once = Equation::parse_with(&eq, &all_groups()).unwrap();
        let twice = Equation::parse_with(once.as_str(), &all_groups()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_rejects_unbalanced(eq in equation(), extra in prop::sample::select(vec!["(", ")", "((", "))"])) {
        let result = normalize(&format!("{}{}", eq, extra));
        prop_assert!(matches!(
            result,
            Err(MalformedEquationError::UnpairedOpenParen)
            | Err(MalformedEquationError::UnpairedCloseParen)
            | Err(MalformedEquationError::ParenCountMismatch { .. })
        ), "{:?} was accepted as {:?}", eq, result);
    }

    #[test]
    fn tree_keeps_every_token(eq in implicit_equation()) {
        let equation = Equation::parse_with(&eq, &all_groups()).unwrap();
        prop_assume!(equation.as_str().len() <= MAX_CONVENTIONAL_LENGTH);

        let tree = equation.tree().unwrap();
        prop_assert_eq!(tree.in_order(), tokens(equation.as_str()));
    }

    #[test]
    fn tree_agrees_with_postfix(eq in implicit_equation()) {
        let equation = Equation::parse_with(&eq, &all_groups()).unwrap();
        prop_assume!(equation.as_str().len() <= MAX_CONVENTIONAL_LENGTH);

        let from_tree = equation.tree().unwrap().post_order().join(postfix::DELIMITER);
        prop_assert_eq!(from_tree, equation.postfix());
    }

    #[test]
    fn nothing_panics(s in "[0-9a-z.+*/^() -]{0,40}") {
        let _ = analyzer::build(&s);
        let _ = postfix::to_postfix(&s);
        if let Ok(normalized) = normalize(&s) {
            let _ = analyzer::build(&normalized);
        }
    }
}
