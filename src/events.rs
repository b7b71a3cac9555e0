/*!
 * Interaction events dispatched against a form page.
 *
 * Each input registers a clearing rule when the page is assembled; an event
 * updates the raw value of its field and then fires that rule. The new value
 * is never validated here, clearing on interaction is unconditional.
 */

use crate::fields::FieldRef;

/// A user interaction with one field of the page
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Text-like input changed (text, date, phone, pincode, select, textarea)
    Edited {
        /// Field the user typed into
        field: FieldRef,
        /// New raw value
        value: String,
    },
    /// A file was picked in a file input
    FileChosen {
        /// File field that changed
        field: FieldRef,
        /// Path of the chosen file as the control reports it
        path: String,
        /// Size of the chosen file in bytes
        size_bytes: u64,
    },
    /// A radio group switched to a new choice
    RadioChanged {
        /// Radio group that changed
        group: FieldRef,
        /// Choice value that was selected
        value: String,
    },
}

impl FormEvent {
    /// Field targeted by the event
    pub fn field(&self) -> &FieldRef {
        match self {
            FormEvent::Edited { field, .. } => field,
            FormEvent::FileChosen { field, .. } => field,
            FormEvent::RadioChanged { group, .. } => group,
        }
    }
}

/// Clearing rule registered for an input at page assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRule {
    /// Clear every slot under the input's own container and unmark the input
    FieldSlot,
    /// Clear the group wrapper's slots and unmark every radio in the group
    RadioGroup,
}
