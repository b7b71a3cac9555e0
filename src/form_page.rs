/*!
 * In-memory model of the registration form page.
 *
 * A `FormPage` stands in for the rendered document: a tree of containers,
 * some of which carry an error slot, plus the inputs living inside them.
 * It implements the error display protocol that validators write through:
 *
 * - reporting walks to the nearest error slot (for radios, up through
 *   ancestor containers until one subtree holds a slot), sets its text and
 *   marks the input invalid; a missing field or slot is a silent no-op
 * - clearing wipes every slot under the field's own container and unmarks
 *   it; for radio groups the wrapper's slots are wiped and every radio
 *   sharing the group name is unmarked
 *
 * Each input registers its clearing rule when it is added, and interaction
 * events dispatch through that registry.
 */

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use log::debug;

use crate::annotation::ErrorSink;
use crate::errors::PageError;
use crate::events::{ClearRule, FormEvent};
use crate::fields::{FieldKind, FieldRef, HeadField, MemberField};
use crate::validation::context::{FileValue, FormContext, HeadValues, HobbyRow, MemberRow};

/// Container id of the page root
pub const ROOT_ID: &str = "familyForm";

/// Container id of the hobby row list
pub const HOBBY_LIST_ID: &str = "hobby_list";

/// Container id of the member row list
pub const MEMBER_LIST_ID: &str = "member_list";

/// Choice values carried by the marital status radios
const MARITAL_CHOICES: [&str; 2] = ["Married", "Unmarried"];

/// One container of the page tree
#[derive(Debug)]
struct Container {
    parent: Option<usize>,
    /// Error slot text. `None` means the container has no slot at all,
    /// `Some("")` an empty one.
    slot: Option<String>,
    /// Marks the shared wrapper a radio group clears against
    group_wrapper: bool,
}

/// One input element of the page
#[derive(Debug)]
struct Input {
    name: String,
    kind: FieldKind,
    /// Raw value; for radios the fixed choice value, for files the path
    value: String,
    /// Size reported with a chosen file
    size_bytes: Option<u64>,
    container: usize,
    invalid: bool,
    checked: bool,
}

/// In-memory form page with containers, error slots and inputs
#[derive(Debug)]
pub struct FormPage {
    containers: Vec<Container>,
    inputs: Vec<Input>,
    inputs_by_name: HashMap<String, Vec<usize>>,
    containers_by_id: HashMap<String, usize>,
    clear_rules: HashMap<String, ClearRule>,
    hobby_rows: usize,
    member_rows: usize,
}

impl FormPage {
    /// Create an empty page holding only the root container
    pub fn new(root_id: &str) -> Self {
        let mut page = Self {
            containers: Vec::new(),
            inputs: Vec::new(),
            inputs_by_name: HashMap::new(),
            containers_by_id: HashMap::new(),
            clear_rules: HashMap::new(),
            hobby_rows: 0,
            member_rows: 0,
        };
        page.push_container(root_id, None, false, false);
        page
    }

    /// Build the canonical household registration page: the full head
    /// section, `hobby_rows` hobby rows and `member_rows` member rows.
    ///
    /// Every field group container is named `{wire_name}_group`; rows are
    /// `hobby_row_{i}` and `member_row_{i}`.
    pub fn household(hobby_rows: usize, member_rows: usize) -> Self {
        let mut page = Self::new(ROOT_ID);
        let root = 0;

        for field in HeadField::ALL {
            let group_id = format!("{}_group", field.wire_name());
            if field.kind() == FieldKind::Radio {
                // Head radios sit one level below the wrapper holding the slot.
                let wrapper = page.push_container(&group_id, Some(root), true, true);
                for choice in MARITAL_CHOICES {
                    let option_id =
                        format!("{}_option_{}", field.wire_name(), choice.to_ascii_lowercase());
                    let option = page.push_container(&option_id, Some(wrapper), false, false);
                    page.push_input(field.wire_name(), FieldKind::Radio, choice, option);
                }
            } else {
                let group = page.push_container(&group_id, Some(root), true, false);
                page.push_input(field.wire_name(), field.kind(), "", group);
            }
        }

        let hobby_list = page.push_container(HOBBY_LIST_ID, Some(root), false, false);
        for _ in 0..hobby_rows {
            page.append_hobby_row(hobby_list);
        }

        let member_list = page.push_container(MEMBER_LIST_ID, Some(root), false, false);
        for _ in 0..member_rows {
            page.append_member_row(member_list);
        }

        page
    }

    /// Add a container under an existing parent
    pub fn add_container(
        &mut self,
        id: &str,
        parent_id: &str,
        has_slot: bool,
        group_wrapper: bool,
    ) -> Result<(), PageError> {
        if self.containers_by_id.contains_key(id) {
            return Err(PageError::DuplicateContainer(id.to_string()));
        }
        let parent = self.container_index(parent_id)?;
        self.push_container(id, Some(parent), has_slot, group_wrapper);
        Ok(())
    }

    /// Add a non-radio input to a container
    pub fn add_input(
        &mut self,
        name: &str,
        kind: FieldKind,
        container_id: &str,
    ) -> Result<(), PageError> {
        if kind == FieldKind::Radio {
            return Err(PageError::RadioWithoutValue(name.to_string()));
        }
        if self.inputs_by_name.contains_key(name) {
            return Err(PageError::DuplicateInput(name.to_string()));
        }
        let container = self.container_index(container_id)?;
        self.push_input(name, kind, "", container);
        Ok(())
    }

    /// Add one radio of a group to a container. Radios may share their
    /// group name, any other collision is rejected.
    pub fn add_radio(
        &mut self,
        group: &str,
        value: &str,
        container_id: &str,
    ) -> Result<(), PageError> {
        if let Some(indices) = self.inputs_by_name.get(group) {
            if indices.iter().any(|&idx| self.inputs[idx].kind != FieldKind::Radio) {
                return Err(PageError::DuplicateInput(group.to_string()));
            }
        }
        let container = self.container_index(container_id)?;
        self.push_input(group, FieldKind::Radio, value, container);
        Ok(())
    }

    /// Append a hobby row to the hobby list, returning its row index
    pub fn add_hobby_row(&mut self) -> Result<usize, PageError> {
        let list = self.container_index(HOBBY_LIST_ID)?;
        Ok(self.append_hobby_row(list))
    }

    /// Append a member row to the member list, returning its row index
    pub fn add_member_row(&mut self) -> Result<usize, PageError> {
        let list = self.container_index(MEMBER_LIST_ID)?;
        Ok(self.append_member_row(list))
    }

    /// Number of hobby rows on the page
    pub fn hobby_row_count(&self) -> usize {
        self.hobby_rows
    }

    /// Number of member rows on the page
    pub fn member_row_count(&self) -> usize {
        self.member_rows
    }

    /// Attach an error message to the field's nearest slot and mark it
    /// invalid. Unknown fields and unreachable slots drop the message.
    pub fn report(&mut self, field: &FieldRef, message: &str) {
        let name = field.wire_name();
        let Some(first) = self.first_input(&name) else {
            debug!("No input named {}, dropping error: {}", name, message);
            return;
        };
        let Some(slot) = self.slot_for(first) else {
            debug!("No slot reachable from {}, dropping error: {}", name, message);
            return;
        };
        self.containers[slot].slot = Some(message.to_string());
        self.inputs[first].invalid = true;
    }

    /// Remove the field's visible annotation according to its kind
    pub fn clear(&mut self, field: &FieldRef) {
        let name = field.wire_name();
        match self.first_input(&name) {
            Some(first) if self.inputs[first].kind == FieldKind::Radio => {
                self.clear_radio_group(&name);
            }
            Some(_) => self.clear_field_slot(&name),
            None => debug!("No input named {}, nothing to clear", name),
        }
    }

    /// Wipe every slot text and unmark every input on the page
    pub fn clear_all_annotations(&mut self) {
        for container in &mut self.containers {
            if container.slot.is_some() {
                container.slot = Some(String::new());
            }
        }
        for input in &mut self.inputs {
            input.invalid = false;
        }
    }

    /// Apply a user interaction: update the raw value, then fire the
    /// clearing rule the field registered at assembly. Events naming
    /// unknown fields or the wrong kind are dropped.
    pub fn handle(&mut self, event: &FormEvent) {
        let name = event.field().wire_name();
        let Some(first) = self.first_input(&name) else {
            debug!("Dropping event for unknown field {}", name);
            return;
        };

        match event {
            FormEvent::Edited { value, .. } => {
                let kind = self.inputs[first].kind;
                if kind == FieldKind::Radio || kind == FieldKind::File {
                    debug!("Dropping edit event for {} field {}", kind_name(kind), name);
                    return;
                }
                self.inputs[first].value = value.clone();
            }
            FormEvent::FileChosen { path, size_bytes, .. } => {
                if self.inputs[first].kind != FieldKind::File {
                    debug!("Dropping file event for non-file field {}", name);
                    return;
                }
                self.inputs[first].value = path.clone();
                self.inputs[first].size_bytes = Some(*size_bytes);
            }
            FormEvent::RadioChanged { value, .. } => {
                if self.inputs[first].kind != FieldKind::Radio {
                    debug!("Dropping radio event for non-radio field {}", name);
                    return;
                }
                let indices = self.inputs_by_name.get(&name).cloned().unwrap_or_default();
                let Some(&target) =
                    indices.iter().find(|&&idx| self.inputs[idx].value == *value)
                else {
                    debug!("No {} radio carries value {}, dropping event", name, value);
                    return;
                };
                for &idx in &indices {
                    self.inputs[idx].checked = idx == target;
                }
            }
        }

        match self.clear_rules.get(&name).copied() {
            Some(ClearRule::FieldSlot) => self.clear_field_slot(&name),
            Some(ClearRule::RadioGroup) => self.clear_radio_group(&name),
            None => {}
        }
    }

    /// Set a text-like value without firing any clearing rule, the way a
    /// script assigns values outside of user interaction
    pub fn set_value(&mut self, field: &FieldRef, value: &str) {
        let name = field.wire_name();
        let Some(first) = self.first_input(&name) else {
            debug!("No input named {}, value not set", name);
            return;
        };
        let kind = self.inputs[first].kind;
        if kind == FieldKind::Radio || kind == FieldKind::File {
            debug!("{} field {} does not take set_value", kind_name(kind), name);
            return;
        }
        self.inputs[first].value = value.to_string();
    }

    /// Check the radio of `group` carrying `value`, without clearing
    pub fn set_checked(&mut self, group: &FieldRef, value: &str) {
        let name = group.wire_name();
        let indices = self.inputs_by_name.get(&name).cloned().unwrap_or_default();
        let Some(&target) = indices
            .iter()
            .find(|&&idx| self.inputs[idx].kind == FieldKind::Radio && self.inputs[idx].value == value)
        else {
            debug!("No {} radio carries value {}, nothing checked", name, value);
            return;
        };
        for &idx in &indices {
            self.inputs[idx].checked = idx == target;
        }
    }

    /// Assign a chosen file to a file input, without clearing
    pub fn set_file(&mut self, field: &FieldRef, path: &str, size_bytes: u64) {
        let name = field.wire_name();
        let Some(first) = self.first_input(&name) else {
            debug!("No input named {}, file not set", name);
            return;
        };
        if self.inputs[first].kind != FieldKind::File {
            debug!("Field {} is not a file input, file not set", name);
            return;
        }
        self.inputs[first].value = path.to_string();
        self.inputs[first].size_bytes = Some(size_bytes);
    }

    /// Raw value of the field's first input, if the field exists
    pub fn value_of(&self, field: &FieldRef) -> Option<&str> {
        let name = field.wire_name();
        self.first_input(&name).map(|idx| self.inputs[idx].value.as_str())
    }

    /// Choice value of the checked radio in a group, if any is checked
    pub fn checked_value(&self, group: &FieldRef) -> Option<&str> {
        let name = group.wire_name();
        self.inputs
            .iter()
            .find(|input| input.name == name && input.checked)
            .map(|input| input.value.as_str())
    }

    /// Whether any input of the field is currently marked invalid
    pub fn is_marked_invalid(&self, field: &FieldRef) -> bool {
        let name = field.wire_name();
        self.inputs.iter().any(|input| input.name == name && input.invalid)
    }

    /// Text of the slot a report for this field would target. `Some("")`
    /// is an empty slot, `None` means no slot is reachable.
    pub fn error_text_for(&self, field: &FieldRef) -> Option<&str> {
        let name = field.wire_name();
        let first = self.first_input(&name)?;
        let slot = self.slot_for(first)?;
        self.containers[slot].slot.as_deref()
    }

    /// Direct slot text of a container, if it carries a slot
    pub fn slot_text(&self, container_id: &str) -> Option<&str> {
        let idx = *self.containers_by_id.get(container_id)?;
        self.containers[idx].slot.as_deref()
    }

    /// Snapshot the page values for one validation pass dated `today`
    pub fn context_at(&self, today: NaiveDate) -> FormContext {
        let head = HeadValues {
            name: self.text_value(&FieldRef::Head(HeadField::Name)),
            surname: self.text_value(&FieldRef::Head(HeadField::Surname)),
            dob: self.text_value(&FieldRef::Head(HeadField::Dob)),
            mobile: self.text_value(&FieldRef::Head(HeadField::MobileNo)),
            address: self.text_value(&FieldRef::Head(HeadField::Address)),
            state: self.text_value(&FieldRef::Head(HeadField::State)),
            city: self.text_value(&FieldRef::Head(HeadField::City)),
            pincode: self.text_value(&FieldRef::Head(HeadField::Pincode)),
            marital: self
                .checked_value(&FieldRef::Head(HeadField::MaritalStatus))
                .map(|value| value.to_string()),
            wedding_date: self
                .value_of(&FieldRef::Head(HeadField::WeddingDate))
                .map(|value| value.to_string()),
            photo: self.file_value(&FieldRef::Head(HeadField::Photo)),
        };

        let hobbies = (0..self.hobby_rows)
            .map(|row| HobbyRow { value: self.text_value(&FieldRef::Hobby { row }) })
            .collect();

        let members = (0..self.member_rows)
            .map(|row| MemberRow {
                name: self.text_value(&FieldRef::Member { row, field: MemberField::Name }),
                dob: self.text_value(&FieldRef::Member { row, field: MemberField::Dob }),
                marital: self
                    .checked_value(&FieldRef::Member { row, field: MemberField::MaritalStatus })
                    .map(|value| value.to_string()),
                wedding_date: self
                    .text_value(&FieldRef::Member { row, field: MemberField::WeddingDate }),
            })
            .collect();

        FormContext { today, head, hobbies, members }
    }

    /// Snapshot the page values dated with the local calendar date
    pub fn context(&self) -> FormContext {
        self.context_at(Local::now().date_naive())
    }

    fn append_hobby_row(&mut self, list: usize) -> usize {
        let row = self.hobby_rows;
        let container = self.push_container(&format!("hobby_row_{}", row), Some(list), true, false);
        self.push_input(&FieldRef::Hobby { row }.wire_name(), FieldKind::Text, "", container);
        self.hobby_rows += 1;
        row
    }

    fn append_member_row(&mut self, list: usize) -> usize {
        let row = self.member_rows;
        let row_container =
            self.push_container(&format!("member_row_{}", row), Some(list), false, false);

        for field in MemberField::ALL {
            let name = FieldRef::Member { row, field }.wire_name();
            let group_id = format!("{}_group", name);
            if field.kind() == FieldKind::Radio {
                // Member radios share the slot-holding wrapper directly.
                let wrapper = self.push_container(&group_id, Some(row_container), true, true);
                for choice in MARITAL_CHOICES {
                    self.push_input(&name, FieldKind::Radio, choice, wrapper);
                }
            } else {
                let group = self.push_container(&group_id, Some(row_container), true, false);
                self.push_input(&name, field.kind(), "", group);
            }
        }

        self.member_rows += 1;
        row
    }

    fn push_container(
        &mut self,
        id: &str,
        parent: Option<usize>,
        has_slot: bool,
        group_wrapper: bool,
    ) -> usize {
        let idx = self.containers.len();
        self.containers.push(Container {
            parent,
            slot: has_slot.then(String::new),
            group_wrapper,
        });
        self.containers_by_id.insert(id.to_string(), idx);
        idx
    }

    fn push_input(&mut self, name: &str, kind: FieldKind, value: &str, container: usize) {
        let idx = self.inputs.len();
        self.inputs.push(Input {
            name: name.to_string(),
            kind,
            value: value.to_string(),
            size_bytes: None,
            container,
            invalid: false,
            checked: false,
        });
        self.inputs_by_name.entry(name.to_string()).or_default().push(idx);
        let rule = match kind {
            FieldKind::Radio => ClearRule::RadioGroup,
            _ => ClearRule::FieldSlot,
        };
        self.clear_rules.insert(name.to_string(), rule);
    }

    fn container_index(&self, id: &str) -> Result<usize, PageError> {
        self.containers_by_id
            .get(id)
            .copied()
            .ok_or_else(|| PageError::UnknownContainer(id.to_string()))
    }

    fn first_input(&self, name: &str) -> Option<usize> {
        self.inputs_by_name.get(name).and_then(|indices| indices.first().copied())
    }

    /// Slot container a report for this input targets: the first slot in the
    /// input's own container subtree, walking up ancestors for radios
    fn slot_for(&self, input: usize) -> Option<usize> {
        let start = self.inputs[input].container;
        if self.inputs[input].kind == FieldKind::Radio {
            let mut current = Some(start);
            while let Some(idx) = current {
                if let Some(slot) = self.first_slot_in(idx) {
                    return Some(slot);
                }
                current = self.containers[idx].parent;
            }
            None
        } else {
            self.first_slot_in(start)
        }
    }

    /// First slot-bearing container within a subtree, in document order
    fn first_slot_in(&self, root: usize) -> Option<usize> {
        (0..self.containers.len())
            .find(|&idx| self.containers[idx].slot.is_some() && self.is_within(idx, root))
    }

    fn is_within(&self, container: usize, root: usize) -> bool {
        let mut current = Some(container);
        while let Some(idx) = current {
            if idx == root {
                return true;
            }
            current = self.containers[idx].parent;
        }
        false
    }

    fn clear_field_slot(&mut self, name: &str) {
        let Some(first) = self.first_input(name) else {
            return;
        };
        let container = self.inputs[first].container;
        self.clear_slots_in(container);
        self.inputs[first].invalid = false;
    }

    fn clear_radio_group(&mut self, name: &str) {
        if let Some(first) = self.first_input(name) {
            if let Some(wrapper) = self.group_wrapper_for(self.inputs[first].container) {
                self.clear_slots_in(wrapper);
            }
        }
        // The radios are unmarked whether or not a wrapper was found.
        let indices = self.inputs_by_name.get(name).cloned().unwrap_or_default();
        for idx in indices {
            self.inputs[idx].invalid = false;
        }
    }

    fn clear_slots_in(&mut self, root: usize) {
        for idx in 0..self.containers.len() {
            if self.containers[idx].slot.is_some() && self.is_within(idx, root) {
                self.containers[idx].slot = Some(String::new());
            }
        }
    }

    fn group_wrapper_for(&self, container: usize) -> Option<usize> {
        let mut current = Some(container);
        while let Some(idx) = current {
            if self.containers[idx].group_wrapper {
                return Some(idx);
            }
            current = self.containers[idx].parent;
        }
        None
    }

    fn text_value(&self, field: &FieldRef) -> String {
        self.value_of(field).unwrap_or_default().to_string()
    }

    fn file_value(&self, field: &FieldRef) -> Option<FileValue> {
        let name = field.wire_name();
        let first = self.first_input(&name)?;
        let input = &self.inputs[first];
        if input.value.is_empty() {
            return None;
        }
        Some(FileValue {
            path: input.value.clone(),
            size_bytes: input.size_bytes.unwrap_or(0),
        })
    }
}

impl ErrorSink for FormPage {
    fn report(&mut self, field: &FieldRef, message: &str) {
        FormPage::report(self, field, message);
    }

    fn clear(&mut self, field: &FieldRef) {
        FormPage::clear(self, field);
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Radio => "radio",
        FieldKind::File => "file",
        _ => "text",
    }
}
