/*!
 * Value snapshot taken from a form page for one validation pass.
 *
 * A `FormContext` is built per call, either from a `FormPage` or directly
 * in tests. It carries raw strings exactly as the inputs hold them; rules
 * decide about trimming and parsing. The pass date is part of the snapshot
 * so age checks stay deterministic.
 */

use chrono::NaiveDate;

/// A file chosen in a file input, size reported by the control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileValue {
    /// Path string as the control reports it
    pub path: String,
    /// File size in bytes
    pub size_bytes: u64,
}

/// Raw values of the head-of-family section
#[derive(Debug, Clone, Default)]
pub struct HeadValues {
    pub name: String,
    pub surname: String,
    /// Date of birth, ISO `YYYY-MM-DD` or empty
    pub dob: String,
    pub mobile: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
    /// Choice value of the checked marital radio, `None` when unchecked
    pub marital: Option<String>,
    /// Wedding date value; `None` when the input is absent from the page,
    /// which skips the married/wedding rule entirely
    pub wedding_date: Option<String>,
    /// Chosen photo, `None` when nothing was picked
    pub photo: Option<FileValue>,
}

/// Raw values of one hobby row
#[derive(Debug, Clone, Default)]
pub struct HobbyRow {
    pub value: String,
}

/// Raw values of one member row
#[derive(Debug, Clone, Default)]
pub struct MemberRow {
    pub name: String,
    pub dob: String,
    /// Choice value of the checked marital radio, `None` when unchecked
    pub marital: Option<String>,
    pub wedding_date: String,
}

/// Everything one validation pass reads
#[derive(Debug, Clone)]
pub struct FormContext {
    /// Calendar date the pass runs against
    pub today: NaiveDate,
    pub head: HeadValues,
    pub hobbies: Vec<HobbyRow>,
    pub members: Vec<MemberRow>,
}

impl FormContext {
    /// Create an empty context dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            head: HeadValues::default(),
            hobbies: Vec::new(),
            members: Vec::new(),
        }
    }
}
