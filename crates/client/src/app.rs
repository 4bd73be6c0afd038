//! Directory page controller.
//!
//! [`DirectoryApp`] owns the [`Page`] and a [`Directory`] backend. UI events
//! enter through the `on_*` handlers (or [`DirectoryApp::dispatch`]); every
//! successful mutation is followed by a full re-fetch so the rendered list
//! always mirrors the backend. Within one action the mutation is awaited
//! before the refresh is issued.
//!
//! Backend failures are logged at ERROR level and swallowed. The returned
//! [`Outcome`] is informational only.

use people_directory_core::{NewPerson, PersonId};
use tracing::{debug, error};

use crate::consent::check_privacy_policy;
use crate::directory::Directory;
use crate::page::{ClickEvent, Page, PersonForm};
use crate::render::display_items;

/// Result of handling one user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran and the page reflects the latest backend state.
    Applied,
    /// Nothing happened (disabled control, no such entry).
    Ignored,
    /// A backend call failed; the error was logged and the list left as it was.
    Failed,
}

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The privacy policy checkbox changed.
    PrivacyPolicyChanged { checked: bool },
    /// The submit control was clicked.
    SubmitClicked,
    /// The delete control of the rendered entry at `position` was clicked.
    DeleteClicked { position: usize },
}

/// Directory page with its event handlers.
#[derive(Debug)]
pub struct DirectoryApp<D> {
    directory: D,
    page: Page,
}

impl<D: Directory> DirectoryApp<D> {
    /// Create an app with a fresh page. Call [`Self::init`] to render the list.
    ///
    /// The consent gate is applied here, so the submit control is disabled
    /// until the privacy policy is checked.
    pub fn new(directory: D) -> Self {
        let mut app = Self {
            directory,
            page: Page::default(),
        };
        app.apply_consent_gate();
        app
    }

    /// Establish the initial submit state and render the current collection.
    pub async fn init(&mut self) -> Outcome {
        self.apply_consent_gate();
        self.fetch_items().await
    }

    /// Current page state.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Backend handle.
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// Form fields, for typing into.
    pub const fn form_mut(&mut self) -> &mut PersonForm {
        &mut self.page.form
    }

    /// Change event of the privacy policy checkbox.
    pub const fn set_privacy_policy(&mut self, checked: bool) {
        self.page.privacy_policy.checked = checked;
        self.apply_consent_gate();
    }

    /// Click on the submit control.
    ///
    /// Prevents the default form navigation, reads the fields as they are now
    /// and creates the record. A click on a disabled control does nothing.
    pub async fn on_submit_click(&mut self, event: &mut ClickEvent) -> Outcome {
        if self.page.submit_button.disabled {
            debug!("Submit ignored, control is disabled");
            return Outcome::Ignored;
        }

        event.prevent_default();

        let person = self.page.form.to_new_person();
        self.create(person).await
    }

    /// Click on the delete control of the entry rendered at `position`.
    ///
    /// Deletes by the record's server-assigned ID.
    pub async fn on_delete_click(&mut self, position: usize) -> Outcome {
        let Some(button) = self.page.user_list.delete_button(position) else {
            debug!(position, "Delete ignored, no entry at position");
            return Outcome::Ignored;
        };

        let id = button.target.clone();
        debug!(id = %id, "Delete clicked");
        self.delete(&id).await
    }

    /// Route a UI event to its handler.
    pub async fn dispatch(&mut self, event: UiEvent) -> Outcome {
        match event {
            UiEvent::PrivacyPolicyChanged { checked } => {
                self.set_privacy_policy(checked);
                Outcome::Applied
            }
            UiEvent::SubmitClicked => self.on_submit_click(&mut ClickEvent::new()).await,
            UiEvent::DeleteClicked { position } => self.on_delete_click(position).await,
        }
    }

    /// Create a record, then re-fetch the collection.
    pub async fn create(&mut self, person: NewPerson) -> Outcome {
        if let Err(err) = self.directory.create(&person).await {
            error!(error = %err, "Failed to create person");
            return Outcome::Failed;
        }
        self.fetch_items().await
    }

    /// Fetch the collection and re-render the list.
    ///
    /// On failure the rendered list is kept as it was.
    pub async fn fetch_items(&mut self) -> Outcome {
        match self.directory.list().await {
            Ok(people) => {
                display_items(&mut self.page.user_list, &people);
                Outcome::Applied
            }
            Err(err) => {
                error!(error = %err, "Failed to fetch people");
                Outcome::Failed
            }
        }
    }

    /// Delete a record, then re-fetch the collection.
    pub async fn delete(&mut self, id: &PersonId) -> Outcome {
        if let Err(err) = self.directory.delete(id).await {
            error!(error = %err, id = %id, "Failed to delete person");
            return Outcome::Failed;
        }
        self.fetch_items().await
    }

    const fn apply_consent_gate(&mut self) {
        check_privacy_policy(self.page.privacy_policy, &mut self.page.submit_button);
    }
}
