use ariadne::Source;
use dice_compute::numerical::eval_infix;
use dice_error::Error;

/// Renders the report of the given error to a plain string.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn factorial_out_of_range() {
    let input = "5+10!";
    let report = render(&eval_infix(input).unwrap_err(), input);

    assert!(report.contains("cannot take the factorial of 10"));
    assert!(report.contains("this factorial"));
    assert!(report.contains("whole numbers from 0 to 9"));
}

#[test]
fn fractional_result() {
    let input = "7/2";
    let report = render(&eval_infix(input).unwrap_err(), input);

    assert!(report.contains("expected a whole number"));
    assert!(report.contains("7/2 is not a whole number"));
}

#[test]
fn unclosed_parenthesis() {
    let input = "(1+3";
    let report = render(&eval_infix(input).unwrap_err(), input);

    assert!(report.contains("mismatched parentheses"));
    assert!(report.contains("add a closing parenthesis"));
}

#[test]
fn missing_operand() {
    let input = "1+";
    let report = render(&eval_infix(input).unwrap_err(), input);

    assert!(report.contains("not enough operands for the `+` operator"));
}

#[test]
fn power_without_exact_root() {
    let input = "2^(1/2)";
    let report = render(&eval_infix(input).unwrap_err(), input);

    assert!(report.contains("expected a whole number"));
    assert!(report.contains("1/2 is not a whole number"));
    assert!(report.contains("must have an exact root"));
}
