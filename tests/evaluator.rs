use reckon::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse},
};

fn eval_source(source: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"));
    let tree = parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
                             .unwrap_or_else(|| panic!("Nothing parsed from {source:?}"));
    evaluate(&tree)
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(evaluate(&Expr::number(42.5, 0)), Ok(42.5));
}

#[test]
fn arithmetic_operators() {
    assert_eq!(eval_source("7+3"), Ok(10.0));
    assert_eq!(eval_source("7-3"), Ok(4.0));
    assert_eq!(eval_source("7*3"), Ok(21.0));
    assert_eq!(eval_source("7/2"), Ok(3.5));
}

#[test]
fn unary_operators() {
    assert_eq!(eval_source("+4"), Ok(4.0));
    assert_eq!(eval_source("-4"), Ok(-4.0));
    assert_eq!(eval_source("---4"), Ok(-4.0));
    assert_eq!(eval_source("-(2-5)"), Ok(3.0));
}

#[test]
fn division_by_zero_reports_operator_position() {
    assert_eq!(eval_source("1/0"), Err(EvalError::DivisionByZero { position: 1 }));
    assert_eq!(eval_source("1 / (2 - 2)"), Err(EvalError::DivisionByZero { position: 2 }));
    assert_eq!(eval_source("1/-0"), Err(EvalError::DivisionByZero { position: 1 }));
    assert_eq!(eval_source("0/0"), Err(EvalError::DivisionByZero { position: 1 }));
}

#[test]
fn leftmost_failing_division_is_reported() {
    assert_eq!(eval_source("(1/0)+(2/0)"), Err(EvalError::DivisionByZero { position: 2 }));
}

#[test]
fn zero_dividend_is_fine() {
    assert_eq!(eval_source("0/5"), Ok(0.0));
}

#[test]
fn overflow_is_not_an_error() {
    let expr = Expr::binary(Expr::number(f64::MAX, 0),
                            BinaryOperator::Mul,
                            Expr::number(2.0, 2),
                            1);
    assert_eq!(evaluate(&expr), Ok(f64::INFINITY));

    let negated = Expr::unary(UnaryOperator::Negate, expr, 0);
    assert_eq!(evaluate(&negated), Ok(f64::NEG_INFINITY));
}

#[test]
fn deep_nesting_evaluates() {
    let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(eval_source(&source), Ok(1.0));

    let negations = format!("{}7", "-".repeat(255));
    assert_eq!(eval_source(&negations), Ok(-7.0));
}
