use numeval::{
    AngleUnit, calculate, calculate_tree,
    ast::{Expr, UnaryOperator},
    error::{CalcError, EvalError, ParseError},
    parse,
};

fn calc(src: &str) -> Result<f64, CalcError> {
    calculate(src, AngleUnit::Radian)
}

fn calc_deg(src: &str) -> Result<f64, CalcError> {
    calculate(src, AngleUnit::Degree)
}

fn assert_value(src: &str, expected: f64) {
    let v = calc(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
    assert!((v - expected).abs() < 1e-9,
            "'{src}': expected {expected}, got {v}");
}

fn assert_value_deg(src: &str, expected: f64) {
    let v = calc_deg(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
    assert!((v - expected).abs() < 1e-9,
            "'{src}': expected {expected}, got {v}");
}

fn assert_parse_error(src: &str) {
    assert!(matches!(calc(src), Err(CalcError::Parse(_))),
            "'{src}' should be rejected as a syntax error");
}

fn assert_canonical(src: &str, expected: &str) {
    let tree = parse(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
    assert_eq!(tree.to_string(), expected, "canonical form of '{src}'");
}

#[test]
fn basic_arithmetic() {
    assert_value("4 + 5", 9.0);
    assert_value("6 * 7", 42.0);
    assert_value("10 - 200", -190.0);
    assert_value("8 - 7", 1.0);
    assert_value("6 / 3", 2.0);
    assert_value("7 / 2", 3.5);
    assert_value("-34.5 / 6.78 + 901.2 * 0.345",
                 -34.5 / 6.78 + 901.2 * 0.345);
}

#[test]
fn canonical_tree_forms() {
    assert_canonical("1", "1");
    assert_canonical("2.3", "2.3");
    assert_canonical("4 + 5", "Add(4, 5)");
    assert_canonical("6 * 7", "Mul(6, 7)");
    assert_canonical("8 / 9", "Div(8, 9)");
    assert_canonical("10 - 200", "Sub(10, 200)");
    assert_canonical("-34.5 / 6.78 + 901.2 * 0.345",
                     "Add(Div(Neg(34.5), 6.78), Mul(901.2, 0.345))");
    assert_canonical("2^3^2", "Pow(2, Pow(3, 2))");
    assert_canonical("sin(pi / 2)", "sin(Div(pi, 2))");
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("3 ^ 4", 81.0);
    assert_value("2^-2", 0.25);
}

#[test]
fn unary_minus() {
    assert_value("-5", -5.0);
    assert_value("--5", 5.0);
    assert_value("-(2 + 3)", -5.0);
    // The grammar binds prefix minus tighter than the power operator.
    assert_value("-2^2", 4.0);
}

#[test]
fn numeric_literal_notation() {
    assert_value("1.25e+03", 1250.0);
    assert_value("1E10", 1e10);
    assert_value(".5", 0.5);
    assert_value("2e-1", 0.2);
}

#[test]
fn constants() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("2 * pi", std::f64::consts::TAU);
}

#[test]
fn angle_units() {
    assert_value_deg("sin(90)", 1.0);
    assert_value("sin(pi / 2)", 1.0);
    assert_value_deg("cos(180)", -1.0);
    assert_value_deg("tan(45)", 1.0);
    assert_value_deg("cot(45)", 1.0);

    // Only the trigonometric subset converts; the rest never does.
    assert_value_deg("sqrt(4)", 2.0);
    assert_value_deg("ln(e)", 1.0);
    assert_value_deg("exp(0)", 1.0);
}

#[test]
fn exp_and_ln_are_inverse() {
    assert_value("exp(ln(2))", 2.0);
    assert_value("ln(exp(2))", 2.0);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(calc("1 / 0"),
                     Err(CalcError::Eval(EvalError::DivisionByZero))));
    assert!(matches!(calc("3 / (4 - 4)"),
                     Err(CalcError::Eval(EvalError::DivisionByZero))));
    assert!(matches!(calc("0 / 0"),
                     Err(CalcError::Eval(EvalError::DivisionByZero))));
}

#[test]
fn non_finite_result_is_overflow() {
    assert!(matches!(calc("1e300 / 1e-300"),
                     Err(CalcError::Eval(EvalError::Overflow))));
    assert!(matches!(calc("exp(1000)"),
                     Err(CalcError::Eval(EvalError::Overflow))));
    assert!(matches!(calc("2 ^ 10000"),
                     Err(CalcError::Eval(EvalError::Overflow))));
    // Negative base with fractional exponent is NaN under real powf.
    assert!(matches!(calc("(-8) ^ 0.5"),
                     Err(CalcError::Eval(EvalError::Overflow))));
}

#[test]
fn cot_singularity_is_overflow_not_division_by_zero() {
    // cot is 1/tan, but tan never traps: a zero tangent yields infinity,
    // which the final classification reports as overflow.
    assert!(matches!(calc("cot(0)"),
                     Err(CalcError::Eval(EvalError::Overflow))));
    assert_value("cot(pi / 4)", 1.0);
}

#[test]
fn spaced_digits_are_rejected() {
    for src in ["1 0", "1e 10", "1 e10", "2 exp(1)", "1\t0"] {
        assert!(matches!(parse(src), Err(ParseError::SpacedDigits { .. })),
                "'{src}' should be rejected as a split literal");
    }
}

#[test]
fn disallowed_words_are_rejected() {
    assert!(matches!(parse("5+6j"), Err(ParseError::DisallowedWord { .. })));
    assert!(matches!(parse("a"), Err(ParseError::DisallowedWord { .. })));
    assert!(matches!(parse("sinh(1)"), Err(ParseError::DisallowedWord { .. })));
    // 'E' is only the exponent marker, never a standalone constant.
    assert!(matches!(parse("E + 2"), Err(ParseError::DisallowedWord { .. })));
}

#[test]
fn malformed_grammar_is_rejected() {
    assert!(matches!(parse(""), Err(ParseError::EmptyExpression)));
    assert!(matches!(parse("   "), Err(ParseError::EmptyExpression)));
    assert!(matches!(parse("6 /"), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("(9 + 10"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("7**8"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("1 pi"), Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("(1)(2)"),
                     Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("1 % 2"), Err(ParseError::UnknownToken { .. })));
    assert_parse_error("sin()");
}

#[test]
fn registry_validation_happens_at_parse_time() {
    // A function name used as a value is not a constant.
    assert!(matches!(parse("2 + sin"),
                     Err(ParseError::UnknownIdentifier { .. })));
    // A constant name used as a call is not a function.
    assert!(matches!(parse("pi(2)"),
                     Err(ParseError::UnknownFunction { .. })));
}

#[test]
fn wrong_function_arity_is_error() {
    assert!(matches!(parse("sin(1, 2)"),
                     Err(ParseError::FunctionArity { .. })));
}

#[test]
fn nesting_depth_is_bounded() {
    let deep_parens = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(parse(&deep_parens),
                     Err(ParseError::ExpressionTooDeep { .. })));

    let deep_negation = format!("{}1", "-".repeat(300));
    assert!(matches!(parse(&deep_negation),
                     Err(ParseError::ExpressionTooDeep { .. })));

    // A hand-built tree bypasses the parser and hits the evaluator's own
    // guard instead of overflowing the stack.
    let tree = (0..300).fold(Expr::Number(1.0), |expr, _| {
                           Expr::UnaryOp { op:   UnaryOperator::Negate,
                                           expr: Box::new(expr), }
                       });
    assert!(matches!(calculate_tree(&tree, AngleUnit::Radian),
                     Err(EvalError::RecursionLimitExceeded { .. })));
}

#[test]
fn evaluation_is_deterministic_and_pure() {
    let first = calc("sin(1) + cos(2) ^ 3").unwrap();
    let second = calc("sin(1) + cos(2) ^ 3").unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    // Re-evaluating the same tree is idempotent.
    let tree = parse("2 + 2").unwrap();
    let a = calculate_tree(&tree, AngleUnit::Radian).unwrap();
    let b = calculate_tree(&tree, AngleUnit::Radian).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert!((a - 4.0).abs() < f64::EPSILON);
}

#[test]
fn whitespace_is_normalized() {
    assert_value("  2 +   3 ", 5.0);
    assert_value("cos( 0 )", 1.0);
    assert_value("( 1 + 2 ) * 3", 9.0);
}
