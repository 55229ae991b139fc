use termcalc::{evaluate, term::Term};

/// Expressions with known results, verified against standard
/// operator-precedence arithmetic.
const CASES: &[(&str, f64)] = &[("2(3)", 6.0),
                                ("1-(12*3-(11+5))/8", -1.5),
                                ("-3*-5", 15.0),
                                ("2*(3+1)/(6-2)-1", 1.0),
                                ("2+3*4-5/1+6", 15.0),
                                ("1*3+2/1+7-6", 6.0),
                                ("3/2*5-4+1*2", 5.5),
                                ("6-2+1/3*9-1", 6.0),
                                ("5/2-1+3*2+7", 14.5),
                                ("1-3/2+4*6/3", 7.5),
                                ("2*3+1/2-5+7/2", 5.0),
                                ("7-4*2/4+3*6", 23.0),
                                ("1+5/2-4*1+8/4", 1.5),
                                ("4/2*6-7+1*3", 8.0),
                                ("6+4*1/2-8+5/2", 2.5),
                                ("2*4-5/5+1*8", 15.0),
                                ("3/1-2*3+4+2/2", 2.0),
                                ("5-3/2*4+1/2*6", 2.0),
                                ("1/2*6+3-1/2+7*1/2", 9.0),
                                ("3/2+2*3-1/2+5/2", 9.5),
                                ("1+2*3-4/2+6/3", 7.0),
                                ("5/2-1+4/2*3+7", 14.5),
                                ("4-2/2+6*2/4+7", 13.0),
                                ("8/2*3+1-5/5*2", 11.0),
                                ("(3-1)*4/2-1+7/2", 6.5),
                                ("2*3/(1-2)+6*2", 6.0),
                                ("2+4*3/2-(1+1)*4", 0.0),
                                ("5+4*2+(2+1)*2-4", 15.0),
                                ("4/2+3*2+(7-3)/2", 10.0),
                                ("(8-4)/2+3*2+1/2", 8.5),
                                ("1+5/2+(4-1)*2+7/2", 13.0),
                                ("2+4*2/4-(1+1)*4", -4.0),
                                ("3*2/(1+2)+6*2", 14.0),
                                ("(1+2)*(3-1)/2+7/2", 6.5),
                                ("2*3/(1-2)+7*2", 8.0),
                                ("3+2/2*(2+3)+1/2", 8.5),
                                ("(2+1)*4/2+1+7/2", 10.5),
                                ("2+4/2+(4-1)*2+7/2", 13.5),
                                ("1+2/2*(3+1)-4+6/3", 3.0),
                                ("(5+3)*(2-1)/2-1/2", 3.5),
                                ("3+2*3/2+(2-1)*4+7/2", 13.5)];

fn assert_evaluates(expression: &str, want: f64) {
    match evaluate(expression) {
        Ok(got) => {
            assert_eq!(got, want, "evaluate({expression}) got = {got}, want {want}");
        },
        Err(e) => panic!("evaluate({expression}) failed: {e}"),
    }
}

fn assert_fails(expression: &str) {
    if let Ok(got) = evaluate(expression) {
        panic!("evaluate({expression}) succeeded with {got} but was expected to fail");
    }
}

#[test]
fn known_expressions() {
    for (expression, want) in CASES {
        assert_evaluates(expression, *want);
    }
}

#[test]
fn concatenated_expressions_still_evaluate() {
    // Joining well-formed expressions with binary operators must yield a
    // well-formed expression; the joined value itself is unspecified.
    let operators = ['+', '-', '*', '/'];
    let mut joined = String::new();

    for (i, (expression, _)) in CASES.iter().enumerate() {
        if i > 0 {
            joined.push(operators[i % operators.len()]);
        }
        joined.push_str(expression);
    }

    assert!(evaluate(&joined).is_ok(), "joined expression failed: {joined}");
}

#[test]
fn bare_and_parenthesized_literals() {
    assert_evaluates("42", 42.0);
    assert_evaluates("(42)", 42.0);
    assert_evaluates("+3.5", 3.5);
    assert_evaluates("-2", -2.0);
}

#[test]
fn whitespace_is_stripped() {
    assert_evaluates("2 * (3 + 1) / (6 - 2) - 1", 1.0);
    assert_evaluates(" 42 ", 42.0);
}

#[test]
fn exponentiation_chains_left_to_right() {
    assert_evaluates("2^3", 8.0);
    assert_evaluates("2^3^2", 64.0);
    assert_evaluates("2^3*2", 16.0);
    assert_evaluates("2+3^2", 11.0);
}

#[test]
fn modulo_truncates_operands() {
    assert_evaluates("7%3", 1.0);
    assert_evaluates("7.9%3.2", 1.0);
    assert_evaluates("-7%3", -1.0);
    assert_evaluates("9%2+1", 2.0);
}

#[test]
fn modulo_by_zero_is_error() {
    assert_fails("7%0");
    assert_fails("7%0.5");
}

#[test]
fn division_by_zero_is_infinite_not_error() {
    assert_evaluates("1/0", f64::INFINITY);
    assert_evaluates("-1/0", f64::NEG_INFINITY);
}

#[test]
fn sign_runs_collapse_once_per_rule() {
    assert_evaluates("--5", 5.0);
    // `-+` rewrites to `+`, so the run evaluates positive.
    assert_evaluates("-+5", 5.0);
    assert_evaluates("2--3", 5.0);
    assert_evaluates("2+-3", -1.0);
    // "---5" reaches "-5" because two rewrite rules fire in sequence;
    // "----5" only reaches "--5" and fails to parse.
    assert_evaluates("---5", -5.0);
    assert_fails("----5");
}

#[test]
fn negated_groups() {
    assert_evaluates("-(2+3)", -5.0);
    assert_evaluates("1-(2+3)", -4.0);
    assert_evaluates("-(2+3)*4", -20.0);
}

#[test]
fn implicit_multiplication() {
    assert_evaluates("2(3)", 6.0);
    assert_evaluates("2(3+1)", 8.0);
    assert_evaluates("1+2(3)", 7.0);
}

#[test]
fn mismatched_parentheses_are_errors() {
    assert_fails("(1+2");
    assert_fails("1+(2*(3+4)");
    assert_fails("1+2)");
    assert_fails(")1+2");
}

#[test]
fn malformed_literals_are_errors() {
    assert_fails("");
    assert_fails("()");
    assert_fails("1..2+3");
    assert_fails("1+abc");
}

#[test]
fn calculate_is_idempotent() {
    let mut term = Term::new("1-(12*3-(11+5))/8").unwrap();

    assert_eq!(term.calculate().unwrap(), -1.5);
    assert_eq!(term.calculate().unwrap(), -1.5);

    let mut negated = Term::new("-(2+3)").unwrap();

    assert_eq!(negated.calculate().unwrap(), -5.0);
    assert_eq!(negated.calculate().unwrap(), -5.0);
}

#[test]
fn terms_render_back_to_text() {
    let term = Term::new("1-(2+3)").unwrap();

    assert_eq!(term.to_string(), "(1-(2+3))");
}
