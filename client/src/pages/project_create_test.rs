use super::*;

#[test]
fn validate_generation_trims_inputs() {
    let request = validate_generation("  Checkout  ", "  A faster checkout for returning buyers.  ").unwrap();
    assert_eq!(request.name, "Checkout");
    assert_eq!(request.description, "A faster checkout for returning buyers.");
}

#[test]
fn validate_generation_requires_name() {
    assert_eq!(
        validate_generation("   ", "A faster checkout for returning buyers."),
        Err("Give the project a name.")
    );
}

#[test]
fn validate_generation_requires_meaningful_description() {
    assert_eq!(
        validate_generation("Checkout", "  too short  "),
        Err("Describe the project in at least 20 characters.")
    );
    assert!(validate_generation("Checkout", "x".repeat(MIN_DESCRIPTION_LEN).as_str()).is_ok());
}
