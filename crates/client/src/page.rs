//! Page state.
//!
//! Everything the directory page shows lives in a [`Page`] value owned by
//! [`crate::DirectoryApp`]. The element names mirror the markup the page is
//! served with.

use people_directory_core::{NewPerson, PersonId};

/// `id` of the rendered list container.
pub const USER_LIST_ID: &str = "user-list";
/// Label of every delete control.
pub const DELETE_LABEL: &str = "Delete";

/// The whole directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub form: PersonForm,
    pub privacy_policy: Checkbox,
    pub submit_button: SubmitButton,
    pub user_list: UserList,
}

/// Current values of the create form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub select_role: String,
}

impl PersonForm {
    /// Read the fields into a create payload.
    #[must_use]
    pub fn to_new_person(&self) -> NewPerson {
        NewPerson::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.select_role.clone(),
        )
    }
}

/// A checkbox input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
}

/// The submit control.
///
/// Starts disabled, matching the unchecked privacy policy box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    /// Whether the `active` class is present.
    pub active: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: true,
            active: false,
        }
    }
}

/// The `user-list` container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    items: Vec<ListItem>,
}

impl UserList {
    /// Rendered entries, in collection order.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of rendered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rendered display lines, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    /// Delete control of the entry at `position`, if one is rendered there.
    #[must_use]
    pub fn delete_button(&self, position: usize) -> Option<&DeleteButton> {
        self.items.get(position).map(|item| &item.delete_button)
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

/// One rendered entry of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// `"{first_name} {last_name} ({role})"`
    pub text: String,
    pub delete_button: DeleteButton,
}

/// Delete control attached to a rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteButton {
    pub label: &'static str,
    /// Record removed when the control is clicked.
    pub target: PersonId,
}

/// A click delivered to a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    /// Create a fresh click.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the browser's default action (form navigation).
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
