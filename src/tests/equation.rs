use alloc::string::ToString;
use pretty_assertions::assert_eq;

use crate::{Equation, Error, AnalysisError, MalformedEquationError, Operator};
use crate::error::Side;
use crate::settings::{AnalysisSettings, GroupAdjacency};

#[test]
fn test_equation() {
    let equation = Equation::parse("8 (2 + 1)").unwrap();

    assert_eq!(equation.as_str(), "8*(2+1)");
    assert_eq!(equation.to_string(), "8*(2+1)");
    assert_eq!(equation.postfix(), "8  2  1  +  *");
    assert_eq!(equation.tree().unwrap(), op!(*, leaf!(8), op!(+, leaf!(2), leaf!(1))));
}

#[test]
fn test_equation_settings() {
    assert!(matches!(
        Equation::parse("(1+1)(2+2)(3+3)").unwrap().tree(),
        Err(Error::Analysis(AnalysisError::InvalidOperand { .. })),
    ));

    let all = AnalysisSettings::default().with_group_adjacency(GroupAdjacency::All);
    assert_eq!(
        Equation::parse_with("(1+1)(2+2)(3+3)", &all).unwrap().tree().unwrap(),
        op!(*,
            op!(*, op!(+, leaf!(1), leaf!(1)), op!(+, leaf!(2), leaf!(2))),
            op!(+, leaf!(3), leaf!(3)),
        ),
    );
}

#[test]
fn test_shortcuts() {
    assert_eq!(crate::postfix("(4 + 5) 6").unwrap(), "4  5  +  6  *");
    assert_eq!(crate::tree("2 * 5 + 8").unwrap(), op!(+, op!(*, leaf!(2), leaf!(5)), leaf!(8)));
    assert_eq!(crate::build_tree("1+2").unwrap(), op!(+, leaf!(1), leaf!(2)));

    assert_eq!(crate::postfix(""), Err(MalformedEquationError::EmptyInput));
    assert_eq!(crate::tree("(1"), Err(Error::Malformed(MalformedEquationError::UnpairedOpenParen)));
    assert_eq!(
        crate::tree("-1"),
        Err(Error::Analysis(AnalysisError::MissingOperand { operator: Operator::Subtract, side: Side::Left })),
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        crate::tree("-1").unwrap_err().to_string(),
        "operator `-` is missing its left operand",
    );
    assert_eq!(
        crate::tree("1)+(2").unwrap_err().to_string(),
        "`1)` is not a valid operand",
    );
    assert_eq!(
        Error::from(MalformedEquationError::TooLong { length: 10, max: 8 }).to_string(),
        "equation is 10 characters long, the maximum is 8",
    );
}
