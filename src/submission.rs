/*!
 * Server response handling for form submission.
 *
 * The registration endpoint answers with JSON: on success a message and
 * a redirect home, on rejection per-field error lists keyed by wire
 * name, and on server failure a bare `errorMessage`. Applying a
 * rejection to a page wipes every annotation first, then writes the
 * first server message of each recognised field; unknown names are
 * dropped.
 */

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::errors::SubmissionError;
use crate::fields::{FieldRef, HeadField, MemberField, HOBBY_FIELD_NAME};
use crate::form_page::FormPage;

/// Server-side messages for one section row, keyed by wire name
pub type FieldErrors = HashMap<String, Vec<String>>;

/// What the page should do after a submission response was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFollowUp {
    /// Registration was accepted, leave for the home page
    NavigateHome,
    /// Registration was rejected, keep the form visible
    StayOnForm,
}

/// Parsed submission response body
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResponse {
    /// Whether the registration was accepted
    pub success: bool,

    /// Confirmation line shown on success
    #[serde(default)]
    pub message: Option<String>,

    /// Failure line shown when the server itself errored
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,

    /// Head section errors keyed by wire name
    #[serde(default)]
    pub head_errors: FieldErrors,

    /// Hobby row errors, one map per row in row order
    #[serde(default)]
    pub hobby_errors: Vec<FieldErrors>,

    /// Member row errors, one map per row in row order
    #[serde(default)]
    pub member_errors: Vec<FieldErrors>,
}

impl SubmissionResponse {
    /// Parse a response body
    pub fn from_json(body: &str) -> Result<Self, SubmissionError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The line to surface to the user, if the response carries one
    pub fn alert_text(&self) -> Option<&str> {
        if self.success {
            self.message.as_deref()
        } else {
            self.error_message.as_deref()
        }
    }

    /// Apply the response to a page. A success leaves the page untouched
    /// since navigation discards it; a rejection clears every annotation
    /// and writes the server's messages in its place.
    pub fn apply_to(&self, page: &mut FormPage) -> SubmitFollowUp {
        if self.success {
            return SubmitFollowUp::NavigateHome;
        }

        page.clear_all_annotations();

        for (name, messages) in &self.head_errors {
            match HeadField::from_wire(name) {
                Some(field) => annotate_first(page, FieldRef::Head(field), messages),
                None => debug!("Dropping server error for unknown head field: {}", name),
            }
        }

        for (row, errors) in self.hobby_errors.iter().enumerate() {
            for (name, messages) in errors {
                if name == HOBBY_FIELD_NAME {
                    annotate_first(page, FieldRef::Hobby { row }, messages);
                } else {
                    debug!("Dropping server error for unknown hobby field: {}", name);
                }
            }
        }

        for (row, errors) in self.member_errors.iter().enumerate() {
            for (name, messages) in errors {
                match MemberField::from_wire(name) {
                    Some(field) => {
                        annotate_first(page, FieldRef::Member { row, field }, messages);
                    }
                    None => debug!("Dropping server error for unknown member field: {}", name),
                }
            }
        }

        SubmitFollowUp::StayOnForm
    }
}

/// Only the first server message of a field is shown.
fn annotate_first(page: &mut FormPage, field: FieldRef, messages: &[String]) {
    if let Some(message) = messages.first() {
        page.report(&field, message);
    }
}
