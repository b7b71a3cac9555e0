/*!
 * Hobby list rule.
 *
 * Only the first row is checked: its text must be non-empty after
 * trimming. The row's annotation is cleared before the check runs, and
 * rows past the first are never touched.
 */

use log::debug;

use crate::annotation::ErrorSink;
use crate::fields::FieldRef;

use super::context::HobbyRow;
use super::service::{SectionReport, SectionRun};

/// Validator for the hobby list
pub struct HobbyValidator;

impl HobbyValidator {
    /// Validate the hobby rows. An empty list fails with the error aimed
    /// at the missing first row, which a page sink drops as a no-op.
    pub fn validate(hobbies: &[HobbyRow], sink: &mut dyn ErrorSink) -> SectionReport {
        let first_row = FieldRef::Hobby { row: 0 };
        sink.clear(&first_row);

        let mut run = SectionRun::new(sink);
        let filled = hobbies.first().is_some_and(|row| !row.value.trim().is_empty());
        if !filled {
            run.fail(first_row, "At least one hobby is required.".to_string());
        }

        let report = run.finish();
        debug!("Hobby validation {}", if report.valid { "passed" } else { "failed" });
        report
    }
}
