/*!
 * Tests for the section validators driven through a real page
 */

use famform::fields::{FieldRef, HeadField, MemberField};
use famform::validation::{FormValidator, ValidationConfig};
use famform::{FormPage, MemorySink};

use crate::common;

#[test]
fn test_validatePageAt_withFilledPage_shouldPassWithoutAnnotations() {
    common::init_test_logging();
    let mut page = common::filled_household_page();
    let validator = FormValidator::new();

    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(report.valid);
    assert_eq!(report.annotations().count(), 0);
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::Name)), Some(""));
}

#[test]
fn test_validatePageAt_withEmptyPage_shouldAnnotateEverySection() {
    common::init_test_logging();
    let mut page = FormPage::household(1, 1);
    let validator = FormValidator::new();

    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(!report.valid);
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::Name)), Some("Name is Required"));
    assert_eq!(
        page.error_text_for(&FieldRef::Hobby { row: 0 }),
        Some("At least one hobby is required.")
    );
    assert_eq!(
        page.error_text_for(&FieldRef::Member { row: 0, field: MemberField::Name }),
        Some("Name is required.")
    );
}

#[test]
fn test_validatePageAt_shouldAnchorMaritalMessageOnGroupWrapper() {
    let mut page = FormPage::household(1, 0);
    page.set_value(&FieldRef::Hobby { row: 0 }, "Reading");
    let validator = FormValidator::new();

    validator.validate_page_at(&mut page, common::fixed_today());

    assert_eq!(page.slot_text("marital_status_group"), Some("Please select Marital Status"));
}

#[test]
fn test_validatePageAt_shouldClearStaleHobbyAnnotationFirst() {
    let mut page = common::filled_household_page();
    page.report(&FieldRef::Hobby { row: 0 }, "At least one hobby is required.");

    let validator = FormValidator::new();
    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(report.valid);
    assert_eq!(page.error_text_for(&FieldRef::Hobby { row: 0 }), Some(""));
}

#[test]
fn test_validatePageAt_withEmptyRegionDropdowns_shouldAnnotateButPass() {
    let mut page = common::filled_household_page();
    page.set_value(&FieldRef::Head(HeadField::State), "");
    page.set_value(&FieldRef::Head(HeadField::City), "");
    page.set_value(&FieldRef::Head(HeadField::Pincode), "");
    let validator = FormValidator::new();

    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(report.valid);
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::State)), Some("State is Required"));
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::City)), Some("City is Required"));
    assert_eq!(
        page.error_text_for(&FieldRef::Head(HeadField::Pincode)),
        Some("Pincode is Required")
    );
}

#[test]
fn test_validatePageAt_whenMarriedOnPage_shouldRequireWeddingDate() {
    let mut page = common::filled_household_page();
    page.set_checked(&FieldRef::Head(HeadField::MaritalStatus), "Married");
    let validator = FormValidator::new();

    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(!report.valid);
    assert_eq!(
        page.error_text_for(&FieldRef::Head(HeadField::WeddingDate)),
        Some("Wedding Date is required if Married")
    );
}

#[test]
fn test_validate_withSink_shouldNotNeedAPage() {
    let page = common::filled_household_page();
    let context = page.context_at(common::fixed_today());
    let validator = FormValidator::new();
    let mut sink = MemorySink::new();

    let report = validator.validate(&context, &mut sink);

    assert!(report.valid);
    assert!(sink.is_empty());
    // The hobby pre-clear still goes through the sink.
    assert_eq!(sink.cleared(), &[FieldRef::Hobby { row: 0 }]);
}

#[test]
fn test_withConfig_shouldApplyCustomThresholdsEndToEnd() {
    let config = ValidationConfig { mobile_digits: 8, ..Default::default() };
    let validator = FormValidator::with_config(config);
    let mut page = common::filled_household_page();
    page.set_value(&FieldRef::Head(HeadField::MobileNo), "12345678");

    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(report.valid);

    page.set_value(&FieldRef::Head(HeadField::MobileNo), "9876543210");
    let report = validator.validate_page_at(&mut page, common::fixed_today());

    assert!(!report.valid);
    assert_eq!(
        page.error_text_for(&FieldRef::Head(HeadField::MobileNo)),
        Some("Mobile No. should have 8 Digits.")
    );
}

#[test]
fn test_validationConfig_roundTrip_shouldSerializeAllFields() {
    let config = ValidationConfig::default();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: ValidationConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.min_name_chars, config.min_name_chars);
    assert_eq!(parsed.min_age_years, config.min_age_years);
    assert_eq!(parsed.mobile_digits, config.mobile_digits);
    assert_eq!(parsed.photo_max_bytes, config.photo_max_bytes);
}
