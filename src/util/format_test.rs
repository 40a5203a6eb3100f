use super::*;

#[test]
fn fractional_probability_keeps_its_digits() {
    assert_eq!(format_probability(97.5), "97.5%");
}

#[test]
fn whole_probability_drops_the_point() {
    assert_eq!(format_probability(82.0), "82%");
}

#[test]
fn zero_probability() {
    assert_eq!(format_probability(0.0), "0%");
}
