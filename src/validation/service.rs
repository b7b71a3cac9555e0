/*!
 * Validation service for the household registration form.
 *
 * Combines the head, hobby and member section validators into a single
 * pass over a form snapshot. Every section always runs; a failing
 * section never short-circuits the ones after it, so one pass reports
 * every violation on the page at once.
 */

use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::annotation::ErrorSink;
use crate::fields::FieldRef;
use crate::form_page::FormPage;

use super::context::FormContext;
use super::head::{HeadValidator, HeadValidatorConfig};
use super::hobbies::HobbyValidator;
use super::members::MemberValidator;

/// Configuration for form validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum characters for name and surname
    #[serde(default = "default_min_name_chars")]
    pub min_name_chars: usize,

    /// Minimum age of the family head in years
    #[serde(default = "default_min_age_years")]
    pub min_age_years: i32,

    /// Exact digit count of a mobile number
    #[serde(default = "default_mobile_digits")]
    pub mobile_digits: usize,

    /// Photo size cap in bytes
    #[serde(default = "default_photo_max_bytes")]
    pub photo_max_bytes: u64,
}

fn default_min_name_chars() -> usize {
    3
}

fn default_min_age_years() -> i32 {
    21
}

fn default_mobile_digits() -> usize {
    10
}

fn default_photo_max_bytes() -> u64 {
    2_000_000
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_name_chars: default_min_name_chars(),
            min_age_years: default_min_age_years(),
            mobile_digits: default_mobile_digits(),
            photo_max_bytes: default_photo_max_bytes(),
        }
    }
}

/// One reported field annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The annotated field
    pub field: FieldRef,
    /// The message sent to the sink
    pub message: String,
}

/// Result of one section pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    /// Whether the section allows submission. Some rules annotate
    /// without flipping this flag.
    pub valid: bool,
    /// Annotations in the order they were sent to the sink
    pub annotations: Vec<Annotation>,
}

impl SectionReport {
    /// Messages recorded for one field, in report order
    pub fn messages_for(&self, field: &FieldRef) -> Vec<&str> {
        self.annotations
            .iter()
            .filter(|annotation| &annotation.field == field)
            .map(|annotation| annotation.message.as_str())
            .collect()
    }
}

/// Accumulates one section's pass. Every annotation goes both to the
/// sink and into the report; validity is tracked separately so
/// annotate-only rules stay expressible.
pub(crate) struct SectionRun<'a> {
    sink: &'a mut dyn ErrorSink,
    annotations: Vec<Annotation>,
    valid: bool,
}

impl<'a> SectionRun<'a> {
    pub(crate) fn new(sink: &'a mut dyn ErrorSink) -> Self {
        Self { sink, annotations: Vec::new(), valid: true }
    }

    /// Annotate the field and fail the section
    pub(crate) fn fail(&mut self, field: FieldRef, message: String) {
        self.valid = false;
        self.note(field, message);
    }

    /// Annotate the field without failing the section
    pub(crate) fn note(&mut self, field: FieldRef, message: String) {
        self.sink.report(&field, &message);
        self.annotations.push(Annotation { field, message });
    }

    pub(crate) fn finish(self) -> SectionReport {
        SectionReport { valid: self.valid, annotations: self.annotations }
    }
}

/// Result of validating a whole form snapshot
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether the form may submit
    pub valid: bool,
    /// Head-of-family section outcome
    pub head: SectionReport,
    /// Hobby list outcome
    pub hobbies: SectionReport,
    /// Member row outcome
    pub members: SectionReport,
}

impl ValidationReport {
    /// All annotations of the pass, head section first, in report order
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.head
            .annotations
            .iter()
            .chain(&self.hobbies.annotations)
            .chain(&self.members.annotations)
    }

    /// One-line summary of the pass
    pub fn summary(&self) -> String {
        format!(
            "Validation {}: {} head, {} hobby, {} member annotations",
            if self.valid { "passed" } else { "failed" },
            self.head.annotations.len(),
            self.hobbies.annotations.len(),
            self.members.annotations.len()
        )
    }
}

/// Validation service for household registration forms
pub struct FormValidator {
    head_validator: HeadValidator,
}

impl FormValidator {
    /// Create a new validation service with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validation service with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        let head_config = HeadValidatorConfig {
            min_name_chars: config.min_name_chars,
            min_age_years: config.min_age_years,
            mobile_digits: config.mobile_digits,
            photo_max_bytes: config.photo_max_bytes,
        };

        Self { head_validator: HeadValidator::with_config(head_config) }
    }

    /// Run all three section passes against a form snapshot, writing
    /// annotations through the sink
    pub fn validate(&self, context: &FormContext, sink: &mut dyn ErrorSink) -> ValidationReport {
        let head = self.head_validator.validate(&context.head, context.today, sink);
        let hobbies = HobbyValidator::validate(&context.hobbies, sink);
        let members = MemberValidator::validate(&context.members, sink);

        let valid = head.valid && hobbies.valid && members.valid;
        let report = ValidationReport { valid, head, hobbies, members };
        debug!("{}", report.summary());
        report
    }

    /// Snapshot a page as of `today` and validate it, with the page
    /// itself receiving the annotations
    pub fn validate_page_at(&self, page: &mut FormPage, today: NaiveDate) -> ValidationReport {
        let context = page.context_at(today);
        self.validate(&context, page)
    }

    /// Snapshot a page as of the local calendar date and validate it
    pub fn validate_page(&self, page: &mut FormPage) -> ValidationReport {
        self.validate_page_at(page, Local::now().date_naive())
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
