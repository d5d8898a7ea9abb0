use super::*;

#[test]
fn plain_integers_are_numbers() {
    assert!(is_number("0"));
    assert!(is_number("10"));
    assert!(is_number("-3"));
    assert!(is_number("+7"));
    assert!(is_number("007"));
}

#[test]
fn identifiers_are_not_numbers() {
    assert!(!is_number("x"));
    assert!(!is_number("x1"));
    assert!(!is_number("1x"));
    assert!(!is_number(""));
    assert!(!is_number("-"));
}

#[test]
fn whitespace_and_decimals_are_not_numbers() {
    assert!(!is_number(" 1"));
    assert!(!is_number("1 "));
    assert!(!is_number("1.5"));
    assert!(!is_number("1e3"));
}

#[test]
fn i64_bounds() {
    assert!(is_number("9223372036854775807"));
    assert!(is_number("-9223372036854775808"));
    assert!(!is_number("9223372036854775808"));
}

#[test]
fn parse_classifies_once() {
    assert_eq!(Operand::parse("42"), Operand::Literal(42));
    assert_eq!(Operand::parse("y"), Operand::Reference(Name::new("y")));
    assert_eq!(
        Operand::parse("99999999999999999999"),
        Operand::Reference(Name::new("99999999999999999999"))
    );
}

#[test]
fn reference_accessor() {
    assert_eq!(Operand::parse("a").reference(), Some(&Name::new("a")));
    assert_eq!(Operand::parse("1").reference(), None);
    assert!(Operand::from(5).is_literal());
}

#[test]
fn display_round_trips_text() {
    assert_eq!(Operand::parse("-12").to_string(), "-12");
    assert_eq!(Operand::parse("abc").to_string(), "abc");
}
