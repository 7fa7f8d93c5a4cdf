use super::*;

#[test]
fn formats_small_amounts() {
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(9.5), "$9.50");
}

#[test]
fn rounds_to_cents() {
    assert_eq!(format_price(19.999), "$20.00");
    assert_eq!(format_price(0.125 + 0.001), "$0.13");
}

#[test]
fn groups_thousands() {
    assert_eq!(format_price(1234.5), "$1,234.50");
    assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
}

#[test]
fn keeps_sign() {
    assert_eq!(format_price(-42.1), "-$42.10");
}
