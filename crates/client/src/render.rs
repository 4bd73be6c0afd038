//! List renderer.
//!
//! Rebuilds the `user-list` container from a fetched collection. The previous
//! contents are always discarded, so the rendered list is a pure function of
//! the last collection passed in.

use askama::Template;
use people_directory_core::Person;

use crate::page::{DELETE_LABEL, DeleteButton, ListItem, USER_LIST_ID, UserList};

/// Display line for one record.
#[must_use]
pub fn entry_text(person: &Person) -> String {
    format!(
        "{} {} ({})",
        person.first_name, person.last_name, person.role
    )
}

/// Replace the rendered list with `people`, one entry per record in order.
pub fn display_items(list: &mut UserList, people: &[Person]) {
    list.clear();

    for person in people {
        list.push(ListItem {
            text: entry_text(person),
            delete_button: DeleteButton {
                label: DELETE_LABEL,
                target: person.id.clone(),
            },
        });
    }

    tracing::debug!(count = list.len(), "Rendered user list");
}

/// `user-list` markup.
#[derive(Template)]
#[template(path = "user_list.html")]
struct UserListTemplate<'a> {
    list_id: &'a str,
    items: &'a [ListItem],
}

impl UserList {
    /// Render the container as an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(&self) -> Result<String, askama::Error> {
        UserListTemplate {
            list_id: USER_LIST_ID,
            items: self.items(),
        }
        .render()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use people_directory_core::PersonId;

    use super::*;

    fn person(id: &str, first: &str, last: &str, role: &str) -> Person {
        Person {
            id: PersonId::parse(id).unwrap(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_entry_text_format() {
        let ada = person("p-1", "Ada", "Lovelace", "admin");
        assert_eq!(entry_text(&ada), "Ada Lovelace (admin)");
    }

    #[test]
    fn test_display_items_preserves_order_and_ids() {
        let mut list = UserList::default();
        let people = vec![
            person("p-1", "Ada", "Lovelace", "admin"),
            person("p-2", "Alan", "Turing", "student"),
        ];

        display_items(&mut list, &people);

        assert_eq!(list.texts(), vec!["Ada Lovelace (admin)", "Alan Turing (student)"]);
        assert_eq!(list.delete_button(0).unwrap().target.as_str(), "p-1");
        assert_eq!(list.delete_button(1).unwrap().target.as_str(), "p-2");
        assert_eq!(list.delete_button(1).unwrap().label, "Delete");
        assert!(list.delete_button(2).is_none());
    }

    #[test]
    fn test_display_items_replaces_previous_contents() {
        let mut list = UserList::default();
        display_items(&mut list, &[person("p-1", "Ada", "Lovelace", "admin")]);
        display_items(&mut list, &[person("p-9", "Grace", "Hopper", "lecturer")]);

        assert_eq!(list.texts(), vec!["Grace Hopper (lecturer)"]);

        display_items(&mut list, &[]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_items_is_idempotent() {
        let people = vec![
            person("p-1", "Ada", "Lovelace", "admin"),
            person("p-2", "Alan", "Turing", "student"),
        ];

        let mut once = UserList::default();
        display_items(&mut once, &people);

        let mut twice = UserList::default();
        display_items(&mut twice, &people);
        display_items(&mut twice, &people);

        assert_eq!(once, twice);
        assert_eq!(once.render_html().unwrap(), twice.render_html().unwrap());
    }

    #[test]
    fn test_render_html_fragment() {
        let mut list = UserList::default();
        display_items(&mut list, &[person("p-1", "Ada", "Lovelace", "admin")]);

        let html = list.render_html().unwrap();
        assert!(html.starts_with("<ul id=\"user-list\">"));
        assert!(html.contains("<li>Ada Lovelace (admin)<button"));
        assert!(html.contains("data-person-id=\"p-1\""));
        assert!(html.contains(">Delete</button></li>"));
        assert!(html.trim_end().ends_with("</ul>"));
    }

    #[test]
    fn test_render_html_escapes_text() {
        let mut list = UserList::default();
        display_items(&mut list, &[person("p-1", "<b>Ada</b>", "Lovelace", "admin")]);

        let html = list.render_html().unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&#60;b&#62;Ada") || html.contains("&lt;b&gt;Ada"));
    }

    #[test]
    fn test_render_html_empty_list() {
        let html = UserList::default().render_html().unwrap();
        assert!(!html.contains("<li>"));
        assert!(html.contains("id=\"user-list\""));
    }
}
