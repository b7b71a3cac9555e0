/*!
 * Error annotation port.
 *
 * Validators never touch page structure directly. They write through an
 * `ErrorSink`, so the same rule code drives a real page or an in-memory
 * recorder under test.
 */

use crate::fields::FieldRef;

/// Destination for per-field error annotations.
///
/// Implemented by:
/// - `FormPage` with the container/slot display protocol (production)
/// - `MemorySink` recording calls in memory (testing)
pub trait ErrorSink {
    /// Attach an error message to a field. Unknown fields are dropped
    /// silently, one bad lookup must not block the rest of a pass.
    fn report(&mut self, field: &FieldRef, message: &str);

    /// Remove any visible annotation from a field. For radio groups this
    /// covers every radio sharing the group name.
    fn clear(&mut self, field: &FieldRef);
}

/// Recording sink that keeps every call instead of displaying anything
#[derive(Debug, Default)]
pub struct MemorySink {
    reported: Vec<(FieldRef, String)>,
    cleared: Vec<FieldRef>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All reported annotations in call order
    pub fn reported(&self) -> &[(FieldRef, String)] {
        &self.reported
    }

    /// All cleared fields in call order
    pub fn cleared(&self) -> &[FieldRef] {
        &self.cleared
    }

    /// Latest message reported for a field, if any
    pub fn message_for(&self, field: &FieldRef) -> Option<&str> {
        self.reported
            .iter()
            .rev()
            .find(|(reported_field, _)| reported_field == field)
            .map(|(_, message)| message.as_str())
    }

    /// Number of reported annotations
    pub fn report_count(&self) -> usize {
        self.reported.len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

impl ErrorSink for MemorySink {
    fn report(&mut self, field: &FieldRef, message: &str) {
        self.reported.push((*field, message.to_string()));
    }

    fn clear(&mut self, field: &FieldRef) {
        self.cleared.push(*field);
    }
}
