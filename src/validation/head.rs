/*!
 * Head-of-family section rules.
 *
 * One instance each of: name, surname, date of birth, mobile number,
 * address, state, city, pincode, marital status radio group, conditional
 * wedding date and photo upload. Every rule is checked independently and
 * every violation is reported; state, city and pincode annotate without
 * failing the section.
 */

use chrono::{Datelike, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::ErrorSink;
use crate::fields::{FieldRef, HeadField};

use super::context::HeadValues;
use super::service::{SectionReport, SectionRun};

/// Default minimum characters for name and surname
const DEFAULT_MIN_NAME_CHARS: usize = 3;

/// Default minimum age of the family head in years
const DEFAULT_MIN_AGE_YEARS: i32 = 21;

/// Default digit count of a mobile number
const DEFAULT_MOBILE_DIGITS: usize = 10;

/// Default photo size cap in bytes
const DEFAULT_PHOTO_MAX_BYTES: u64 = 2_000_000;

/// Regex for rejecting digits in person names
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]").expect("Invalid digit regex")
});

/// Regex for accepted photo extensions
static PHOTO_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\.jpg|\.png)$").expect("Invalid photo extension regex")
});

/// Configuration for head section validation
#[derive(Debug, Clone)]
pub struct HeadValidatorConfig {
    /// Minimum characters for name and surname
    pub min_name_chars: usize,
    /// Minimum age of the family head in years
    pub min_age_years: i32,
    /// Exact digit count of a mobile number
    pub mobile_digits: usize,
    /// Photo size cap in bytes
    pub photo_max_bytes: u64,
}

impl Default for HeadValidatorConfig {
    fn default() -> Self {
        Self {
            min_name_chars: DEFAULT_MIN_NAME_CHARS,
            min_age_years: DEFAULT_MIN_AGE_YEARS,
            mobile_digits: DEFAULT_MOBILE_DIGITS,
            photo_max_bytes: DEFAULT_PHOTO_MAX_BYTES,
        }
    }
}

/// Validator for the head-of-family section
pub struct HeadValidator {
    config: HeadValidatorConfig,
    mobile_regex: Regex,
}

impl HeadValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::with_config(HeadValidatorConfig::default())
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: HeadValidatorConfig) -> Self {
        let mobile_regex = Regex::new(&format!("^[0-9]{{{}}}$", config.mobile_digits))
            .expect("Invalid mobile number regex");
        Self { config, mobile_regex }
    }

    /// Validate the head section dated `today`, reporting every violation
    /// through the sink
    pub fn validate(
        &self,
        head: &HeadValues,
        today: NaiveDate,
        sink: &mut dyn ErrorSink,
    ) -> SectionReport {
        let mut run = SectionRun::new(sink);

        self.check_person_name(HeadField::Name, &head.name, &mut run);
        self.check_person_name(HeadField::Surname, &head.surname, &mut run);
        self.check_birth_date(&head.dob, today, &mut run);
        self.check_mobile(&head.mobile, &mut run);

        if head.address.trim().is_empty() {
            run.fail(FieldRef::Head(HeadField::Address), required_message(HeadField::Address));
        }

        // State, city and pincode annotate without failing the section.
        for (field, value) in [
            (HeadField::State, &head.state),
            (HeadField::City, &head.city),
            (HeadField::Pincode, &head.pincode),
        ] {
            if value.trim().is_empty() {
                run.note(FieldRef::Head(field), required_message(field));
            }
        }

        self.check_marital(head, &mut run);
        self.check_photo(head, &mut run);

        let report = run.finish();
        debug!(
            "Head validation {}: {} annotations",
            if report.valid { "passed" } else { "failed" },
            report.annotations.len()
        );
        report
    }

    fn check_person_name(&self, field: HeadField, raw: &str, run: &mut SectionRun<'_>) {
        let label = field.label();
        let value = raw.trim();
        if value.is_empty() {
            run.fail(FieldRef::Head(field), required_message(field));
        } else if value.chars().count() < self.config.min_name_chars {
            run.fail(
                FieldRef::Head(field),
                format!("{} should have minimum {} characters", label, self.config.min_name_chars),
            );
        } else if DIGIT_REGEX.is_match(value) {
            run.fail(FieldRef::Head(field), format!("{} should not contain digits", label));
        }
    }

    fn check_birth_date(&self, raw: &str, today: NaiveDate, run: &mut SectionRun<'_>) {
        let value = raw.trim();
        if value.is_empty() {
            run.fail(FieldRef::Head(HeadField::Dob), required_message(HeadField::Dob));
            return;
        }

        // Date inputs submit ISO dates or an empty string; anything else
        // skips the age rule.
        let Ok(birth) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
            return;
        };

        let age = today.year() - birth.year();
        let month = today.month() as i32 - birth.month() as i32;
        // Age ten with a negative month offset is rejected as well; the
        // day of month never participates.
        if age < self.config.min_age_years || (age == 10 && month < 0) {
            run.fail(
                FieldRef::Head(HeadField::Dob),
                format!("Age must be at least {} years old.", self.config.min_age_years),
            );
        }
    }

    fn check_mobile(&self, raw: &str, run: &mut SectionRun<'_>) {
        let value = raw.trim();
        if value.is_empty() {
            run.fail(FieldRef::Head(HeadField::MobileNo), required_message(HeadField::MobileNo));
        } else if !self.mobile_regex.is_match(value) {
            run.fail(
                FieldRef::Head(HeadField::MobileNo),
                format!("Mobile No. should have {} Digits.", self.config.mobile_digits),
            );
        }
    }

    fn check_marital(&self, head: &HeadValues, run: &mut SectionRun<'_>) {
        let Some(choice) = &head.marital else {
            // The message anchors to the group's first radio; the section
            // fails even when no radio exists to carry it.
            run.fail(
                FieldRef::Head(HeadField::MaritalStatus),
                "Please select Marital Status".to_string(),
            );
            return;
        };

        if !choice.eq_ignore_ascii_case("married") {
            return;
        }

        // A page without a wedding input skips the rule entirely.
        if let Some(wedding) = &head.wedding_date {
            if wedding.trim().is_empty() {
                run.fail(
                    FieldRef::Head(HeadField::WeddingDate),
                    "Wedding Date is required if Married".to_string(),
                );
            }
        }
    }

    fn check_photo(&self, head: &HeadValues, run: &mut SectionRun<'_>) {
        let photo = FieldRef::Head(HeadField::Photo);
        match &head.photo {
            None => run.fail(photo, required_message(HeadField::Photo)),
            Some(file) if file.path.is_empty() => {
                run.fail(photo, required_message(HeadField::Photo));
            }
            Some(file) => {
                if !PHOTO_EXTENSION_REGEX.is_match(&file.path) {
                    run.fail(photo, "Invalid file type. Only PNG, JPG are allowed".to_string());
                } else if file.size_bytes > self.config.photo_max_bytes {
                    run.fail(
                        photo,
                        format!(
                            "Photo Size should be less than {}MB",
                            self.config.photo_max_bytes / 1_000_000
                        ),
                    );
                }
            }
        }
    }
}

impl Default for HeadValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn required_message(field: HeadField) -> String {
    format!("{} is Required", field.label())
}
