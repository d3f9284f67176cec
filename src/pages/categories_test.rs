use super::*;

#[test]
fn validate_category_input_derives_slug() {
    let payload = validate_category_input(" Health & Wellness ", " tips ").unwrap();
    assert_eq!(payload.name, "Health & Wellness");
    assert_eq!(payload.slug, "health-wellness");
    assert_eq!(payload.description, "tips");
}

#[test]
fn validate_category_input_requires_name() {
    assert_eq!(validate_category_input("", "x"), Err("Category name is required."));
    assert_eq!(validate_category_input("   ", ""), Err("Category name is required."));
}

#[test]
fn default_categories_all_produce_slugs() {
    for (name, description) in DEFAULT_CATEGORIES {
        let payload = validate_category_input(name, description).unwrap();
        assert!(!payload.slug.is_empty(), "no slug for {name}");
    }
}
