use charcomb::arith::{EvalError, evaluate};
use pretty_assertions::assert_eq;

#[test]
fn evaluates_expressions() {
    let cases = [
        ("0+1+2+3", 6.0),
        ("3-2-1-0", 0.0),
        ("1+3-5", -1.0),
        ("1-3-0", -2.0),
        ("2*4*8", 64.0),
        ("1+2*3", 7.0),
        ("2*4/8", 1.0),
        ("2-4/8", 1.5),
        ("2*(4/(6-8))", -4.0),
        ("(2 + 3) * (4 - 1)", 15.0),
        // the divisor takes in the multiplications after it
        ("8/2*2", 2.0),
        ("6/3*2+1", 2.0),
        ("8/4/2", 1.0),
    ];

    for (expression, expected) in cases {
        assert_eq!(evaluate(expression).unwrap(), expected, "{}", expression);
    }
}

#[test]
fn division_by_zero_is_reported() {
    for expression in ["1/0", "2/3*(4-4)", "7/(1-1)", "1/0*5"] {
        assert!(
            matches!(evaluate(expression), Err(EvalError::DivisionByZero { .. })),
            "{}",
            expression
        );
    }
}

#[test]
fn syntax_errors_are_located() {
    assert_eq!(
        evaluate("2*(3+").unwrap_err().to_string(),
        "[line 1, position 6] Unexpected end of input"
    );
    assert_eq!(
        evaluate("2 $ 3").unwrap_err().to_string(),
        "[line 1, position 3] Unexpected trailing input: '$'"
    );
}

#[test]
fn deeply_nested_input_is_an_error() {
    let expression = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(
        evaluate(&expression),
        Err(EvalError::NestingTooDeep { .. })
    ));
}
