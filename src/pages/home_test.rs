use super::*;

#[test]
fn parse_category_choice_maps_all_to_none() {
    assert_eq!(parse_category_choice("all"), None);
}

#[test]
fn parse_category_choice_parses_ids() {
    assert_eq!(parse_category_choice("7"), Some(7));
}

#[test]
fn parse_category_choice_ignores_garbage() {
    assert_eq!(parse_category_choice("seven"), None);
    assert_eq!(parse_category_choice(""), None);
}
