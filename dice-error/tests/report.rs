use ariadne::Source;
use dice_attrs::ErrorKind;
use dice_error::{Error, ErrorKind};

/// A numeral was too large to fit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("numeral `{}` is too large", lexeme),
    labels = ["this numeral"],
    help = "the dice only show the numbers 1 through 6",
)]
pub struct TooLarge {
    pub lexeme: String,
}

/// Marker kind without any fields.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something odd happened", labels = ["here", "and here"])]
pub struct Odd;

/// Renders the report of the given error to a plain string.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let err = Error::new(vec![2..9], TooLarge { lexeme: "1234567".to_string() });
    let report = render(&err, "1+1234567");

    assert!(report.contains("numeral `1234567` is too large"));
    assert!(report.contains("this numeral"));
    assert!(report.contains("the dice only show the numbers 1 through 6"));
}

#[test]
fn report_with_multiple_spans() {
    let err = Error::new(vec![0..1, 2..3], Odd);
    let report = render(&err, "1 2");

    assert!(report.contains("something odd happened"));
    assert!(report.contains("and here"));
}

#[test]
fn downcast_to_concrete_kind() {
    let err = Error::new(vec![0..1], Odd);

    assert!(err.is::<Odd>());
    assert!(!err.is::<TooLarge>());
    assert_eq!(err.downcast_ref::<Odd>(), Some(&Odd));
}
