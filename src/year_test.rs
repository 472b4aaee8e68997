use super::*;

#[test]
fn year_text_is_plain_digits() {
    assert_eq!(year_text(2026), "2026");
}

#[test]
fn year_text_has_no_grouping() {
    assert_eq!(year_text(10_000), "10000");
}
