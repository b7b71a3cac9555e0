/*!
 * Member row rules.
 *
 * Unlike the hobby list, every member row is validated: name and birth
 * date must be non-blank, a marital choice must be made, and a married
 * member needs a wedding date. An empty member list passes.
 */

use log::debug;

use crate::annotation::ErrorSink;
use crate::fields::{FieldRef, MemberField};

use super::context::MemberRow;
use super::service::{SectionReport, SectionRun};

/// Validator for the additional-member rows
pub struct MemberValidator;

impl MemberValidator {
    /// Validate every member row, reporting each violation through the sink
    pub fn validate(members: &[MemberRow], sink: &mut dyn ErrorSink) -> SectionReport {
        let mut run = SectionRun::new(sink);

        for (row, member) in members.iter().enumerate() {
            if member.name.trim().is_empty() {
                run.fail(
                    FieldRef::Member { row, field: MemberField::Name },
                    "Name is required.".to_string(),
                );
            }
            if member.dob.trim().is_empty() {
                run.fail(
                    FieldRef::Member { row, field: MemberField::Dob },
                    "Birth Date is required.".to_string(),
                );
            }
            match &member.marital {
                None => run.fail(
                    FieldRef::Member { row, field: MemberField::MaritalStatus },
                    "Please select marital status.".to_string(),
                ),
                Some(choice) if choice.eq_ignore_ascii_case("married") => {
                    if member.wedding_date.trim().is_empty() {
                        run.fail(
                            FieldRef::Member { row, field: MemberField::WeddingDate },
                            "Wedding date is required if married.".to_string(),
                        );
                    }
                }
                Some(_) => {}
            }
        }

        let report = run.finish();
        debug!(
            "Member validation {}: {} rows, {} annotations",
            if report.valid { "passed" } else { "failed" },
            members.len(),
            report.annotations.len()
        );
        report
    }
}
