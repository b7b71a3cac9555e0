/*!
 * End-to-end workflows: validate, fix through events, revalidate, and
 * apply submission responses back onto the page
 */

use famform::events::FormEvent;
use famform::fields::{FieldRef, HeadField, MemberField};
use famform::submission::{SubmissionResponse, SubmitFollowUp};
use famform::validation::FormValidator;
use famform::FormPage;

use crate::common;

fn edit(page: &mut FormPage, field: FieldRef, value: &str) {
    page.handle(&FormEvent::Edited { field, value: value.to_string() });
}

#[test]
fn test_workflow_fixingEveryFieldAfterAFailedPass_shouldEndValid() {
    common::init_test_logging();
    let mut page = FormPage::household(1, 1);
    let validator = FormValidator::new();

    let first_pass = validator.validate_page_at(&mut page, common::fixed_today());
    assert!(!first_pass.valid);
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::Name)), Some("Name is Required"));

    edit(&mut page, FieldRef::Head(HeadField::Name), "John");
    // Each interaction wipes its own annotation as it happens.
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::Name)), Some(""));

    edit(&mut page, FieldRef::Head(HeadField::Surname), "Carter");
    edit(&mut page, FieldRef::Head(HeadField::Dob), "1990-01-20");
    edit(&mut page, FieldRef::Head(HeadField::MobileNo), "9876543210");
    edit(&mut page, FieldRef::Head(HeadField::Address), "12 Lake Road");
    edit(&mut page, FieldRef::Head(HeadField::State), "Maharashtra");
    edit(&mut page, FieldRef::Head(HeadField::City), "Pune");
    edit(&mut page, FieldRef::Head(HeadField::Pincode), "411001");
    page.handle(&FormEvent::RadioChanged {
        group: FieldRef::Head(HeadField::MaritalStatus),
        value: "Unmarried".to_string(),
    });
    page.handle(&FormEvent::FileChosen {
        field: FieldRef::Head(HeadField::Photo),
        path: "family.png".to_string(),
        size_bytes: 800_000,
    });
    edit(&mut page, FieldRef::Hobby { row: 0 }, "Reading");
    edit(&mut page, FieldRef::Member { row: 0, field: MemberField::Name }, "Maya");
    edit(&mut page, FieldRef::Member { row: 0, field: MemberField::Dob }, "2012-03-09");
    page.handle(&FormEvent::RadioChanged {
        group: FieldRef::Member { row: 0, field: MemberField::MaritalStatus },
        value: "Unmarried".to_string(),
    });

    let second_pass = validator.validate_page_at(&mut page, common::fixed_today());
    assert!(second_pass.valid);
    assert_eq!(second_pass.annotations().count(), 0);
}

#[test]
fn test_workflow_serverRejection_shouldReplaceLocalAnnotations() {
    let mut page = common::filled_household_page();
    let validator = FormValidator::new();
    assert!(validator.validate_page_at(&mut page, common::fixed_today()).valid);

    let body = r#"{
        "success": false,
        "head_errors": {"mobno": ["A family with this Mobile No. already exists."]},
        "member_errors": [{"member_name": ["Name is required."]}]
    }"#;
    let response = SubmissionResponse::from_json(body).unwrap();
    let follow_up = response.apply_to(&mut page);

    assert_eq!(follow_up, SubmitFollowUp::StayOnForm);
    assert_eq!(
        page.error_text_for(&FieldRef::Head(HeadField::MobileNo)),
        Some("A family with this Mobile No. already exists.")
    );
    assert_eq!(
        page.error_text_for(&FieldRef::Member { row: 0, field: MemberField::Name }),
        Some("Name is required.")
    );

    // Editing the rejected field clears the server message like any other.
    edit(&mut page, FieldRef::Head(HeadField::MobileNo), "9876500000");
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::MobileNo)), Some(""));
}

#[test]
fn test_workflow_successResponse_shouldNavigateHome() {
    let mut page = common::filled_household_page();
    let body = r#"{"success": true, "message": "Family Created Successfully."}"#;
    let response = SubmissionResponse::from_json(body).unwrap();

    let follow_up = response.apply_to(&mut page);

    assert_eq!(follow_up, SubmitFollowUp::NavigateHome);
    assert_eq!(response.alert_text(), Some("Family Created Successfully."));
}

#[test]
fn test_workflow_serverFailure_shouldSurfaceAlertAndStay() {
    common::init_test_logging();
    let mut page = common::filled_household_page();
    page.report(&FieldRef::Head(HeadField::Name), "stale message");
    let body = r#"{"success": false, "errorMessage": "Something went wrong: connection reset"}"#;
    let response = SubmissionResponse::from_json(body).unwrap();

    let follow_up = response.apply_to(&mut page);

    assert_eq!(follow_up, SubmitFollowUp::StayOnForm);
    assert_eq!(response.alert_text(), Some("Something went wrong: connection reset"));
    // The wipe still ran even though no field errors came back.
    assert_eq!(page.error_text_for(&FieldRef::Head(HeadField::Name)), Some(""));
}

#[test]
fn test_workflow_addedMemberRow_shouldJoinValidation() {
    let mut page = common::filled_household_page();
    let validator = FormValidator::new();
    let row = page.add_member_row().unwrap();
    assert_eq!(row, 1);

    let report = validator.validate_page_at(&mut page, common::fixed_today());
    assert!(!report.valid);
    assert_eq!(report.members.annotations.len(), 3);
    assert_eq!(
        page.error_text_for(&FieldRef::Member { row: 1, field: MemberField::Dob }),
        Some("Birth Date is required.")
    );

    edit(&mut page, FieldRef::Member { row: 1, field: MemberField::Name }, "Ira");
    edit(&mut page, FieldRef::Member { row: 1, field: MemberField::Dob }, "2015-08-02");
    page.handle(&FormEvent::RadioChanged {
        group: FieldRef::Member { row: 1, field: MemberField::MaritalStatus },
        value: "Unmarried".to_string(),
    });

    let report = validator.validate_page_at(&mut page, common::fixed_today());
    assert!(report.valid);
}

#[test]
fn test_validatePage_withCurrentDate_shouldAcceptAdultHead() {
    let mut page = common::filled_household_page();
    let validator = FormValidator::new();

    let report = validator.validate_page(&mut page);

    assert!(report.valid);
}
