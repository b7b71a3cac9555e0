/*!
 * Field identity for the household registration form.
 *
 * Every input the form knows is addressed by a `FieldRef`: a head-section
 * field, a hobby row, or a member-row field. Refs round-trip with the wire
 * names the page and the server share (`name`, `hobbies-0-hobby`,
 * `members-2-member_dob`, ...).
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for matching row-scoped wire names
static ROW_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hobbies|members)-(\d+)-([A-Za-z_]+)$").expect("Invalid row name regex")
});

/// Wire name of the text field inside a hobby row
pub const HOBBY_FIELD_NAME: &str = "hobby";

/// Semantic kind of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Date input (ISO `YYYY-MM-DD` value or empty)
    Date,
    /// Phone number input
    Phone,
    /// Postal pincode input
    Pincode,
    /// File upload input
    File,
    /// One choice of a radio group
    Radio,
    /// Dropdown selection
    Select,
    /// Multi-line text input
    TextArea,
}

/// Fields of the head-of-family section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadField {
    Name,
    Surname,
    Dob,
    MobileNo,
    Address,
    State,
    City,
    Pincode,
    MaritalStatus,
    WeddingDate,
    Photo,
}

impl HeadField {
    /// All head fields in document order
    pub const ALL: [HeadField; 11] = [
        HeadField::Name,
        HeadField::Surname,
        HeadField::Dob,
        HeadField::MobileNo,
        HeadField::Address,
        HeadField::State,
        HeadField::City,
        HeadField::Pincode,
        HeadField::MaritalStatus,
        HeadField::WeddingDate,
        HeadField::Photo,
    ];

    /// Wire name of the field
    pub fn wire_name(&self) -> &'static str {
        match self {
            HeadField::Name => "name",
            HeadField::Surname => "surname",
            HeadField::Dob => "dob",
            HeadField::MobileNo => "mobno",
            HeadField::Address => "address",
            HeadField::State => "state",
            HeadField::City => "city",
            HeadField::Pincode => "pincode",
            HeadField::MaritalStatus => "marital_status",
            HeadField::WeddingDate => "wedding_date",
            HeadField::Photo => "photo",
        }
    }

    /// Resolve a wire name to a head field
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|f| f.wire_name() == name).copied()
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            HeadField::Name => "Name",
            HeadField::Surname => "Surname",
            HeadField::Dob => "Date of Birth",
            HeadField::MobileNo => "Mobile No.",
            HeadField::Address => "Address",
            HeadField::State => "State",
            HeadField::City => "City",
            HeadField::Pincode => "Pincode",
            HeadField::MaritalStatus => "Marital Status",
            HeadField::WeddingDate => "Wedding Date",
            HeadField::Photo => "Photo",
        }
    }

    /// Semantic kind of the field
    pub fn kind(&self) -> FieldKind {
        match self {
            HeadField::Name | HeadField::Surname => FieldKind::Text,
            HeadField::Dob | HeadField::WeddingDate => FieldKind::Date,
            HeadField::MobileNo => FieldKind::Phone,
            HeadField::Address => FieldKind::TextArea,
            HeadField::State | HeadField::City => FieldKind::Select,
            HeadField::Pincode => FieldKind::Pincode,
            HeadField::MaritalStatus => FieldKind::Radio,
            HeadField::Photo => FieldKind::File,
        }
    }
}

impl fmt::Display for HeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Fields of one member row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Dob,
    MaritalStatus,
    WeddingDate,
}

impl MemberField {
    /// All member fields in document order
    pub const ALL: [MemberField; 4] = [
        MemberField::Name,
        MemberField::Dob,
        MemberField::MaritalStatus,
        MemberField::WeddingDate,
    ];

    /// Wire name of the field, without the row prefix
    pub fn wire_name(&self) -> &'static str {
        match self {
            MemberField::Name => "member_name",
            MemberField::Dob => "member_dob",
            MemberField::MaritalStatus => "member_marital",
            MemberField::WeddingDate => "member_wedDate",
        }
    }

    /// Resolve a bare wire name to a member field
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|f| f.wire_name() == name).copied()
    }

    /// Semantic kind of the field
    pub fn kind(&self) -> FieldKind {
        match self {
            MemberField::Name => FieldKind::Text,
            MemberField::Dob | MemberField::WeddingDate => FieldKind::Date,
            MemberField::MaritalStatus => FieldKind::Radio,
        }
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Reference to a single form field, radio groups counting as one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRef {
    /// A head-section field
    Head(HeadField),
    /// The text field of a hobby row
    Hobby {
        /// Zero-based row position
        row: usize,
    },
    /// A field of a member row
    Member {
        /// Zero-based row position
        row: usize,
        /// Field within the row
        field: MemberField,
    },
}

impl FieldRef {
    /// Full wire name, row prefix included
    pub fn wire_name(&self) -> String {
        match self {
            FieldRef::Head(field) => field.wire_name().to_string(),
            FieldRef::Hobby { row } => format!("hobbies-{}-{}", row, HOBBY_FIELD_NAME),
            FieldRef::Member { row, field } => format!("members-{}-{}", row, field.wire_name()),
        }
    }

    /// Resolve a full wire name to a field reference
    pub fn from_wire(name: &str) -> Option<Self> {
        if let Some(head) = HeadField::from_wire(name) {
            return Some(FieldRef::Head(head));
        }

        let captures = ROW_NAME_REGEX.captures(name)?;
        let prefix = captures.get(1)?.as_str();
        let row: usize = captures.get(2)?.as_str().parse().ok()?;
        let field = captures.get(3)?.as_str();

        match prefix {
            "hobbies" if field == HOBBY_FIELD_NAME => Some(FieldRef::Hobby { row }),
            "members" => MemberField::from_wire(field).map(|field| FieldRef::Member { row, field }),
            _ => None,
        }
    }

    /// Semantic kind of the referenced field
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRef::Head(field) => field.kind(),
            FieldRef::Hobby { .. } => FieldKind::Text,
            FieldRef::Member { field, .. } => field.kind(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
