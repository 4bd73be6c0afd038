//! Directory page commands.
//!
//! Each command builds a [`DirectoryApp`] against the configured backend,
//! performs the same interactions a user would on the page, and prints the
//! resulting `user-list`.
//!
//! # Environment Variables
//!
//! - `DIRECTORY_API_URL` - Backend URL, unless `--api-url` is given

use people_directory_client::{
    ClickEvent, ClientConfig, ConfigError, DirectoryApp, HttpDirectory, Outcome, UserList,
};
use people_directory_core::{PersonId, PersonIdError};
use thiserror::Error;

/// Errors that can occur while running a page command.
#[derive(Debug, Error)]
pub enum PeopleError {
    /// Backend URL is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record ID argument is invalid.
    #[error("Invalid person id: {0}")]
    InvalidId(#[from] PersonIdError),

    /// Submit was clicked while the control was disabled.
    #[error("Submit button is disabled; pass --accept-privacy-policy")]
    ConsentRequired,

    /// A backend call failed. Details were logged when it happened.
    #[error("Directory request failed")]
    RequestFailed,

    /// The list could not be rendered.
    #[error("Failed to render list: {0}")]
    Render(String),
}

/// A page interaction to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleCommand {
    List,
    Add {
        first_name: String,
        last_name: String,
        role: String,
        accept_privacy_policy: bool,
    },
    Delete {
        id: String,
    },
}

/// How to print the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Html,
}

/// Run a command and print the list it leaves behind.
///
/// # Errors
///
/// Returns `PeopleError` if configuration is invalid, the submit control is
/// disabled, or any backend call failed.
pub async fn run(
    api_url: Option<&str>,
    command: PeopleCommand,
    output: Output,
) -> Result<(), PeopleError> {
    let config = match api_url {
        Some(url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(base_url = %config.base_url, "Using directory backend");

    let mut app = DirectoryApp::new(HttpDirectory::new(&config));
    check(app.init().await)?;

    match command {
        PeopleCommand::List => {}
        PeopleCommand::Add {
            first_name,
            last_name,
            role,
            accept_privacy_policy,
        } => {
            let form = app.form_mut();
            form.first_name = first_name;
            form.last_name = last_name;
            form.select_role = role;
            app.set_privacy_policy(accept_privacy_policy);

            let mut click = ClickEvent::new();
            match app.on_submit_click(&mut click).await {
                Outcome::Ignored => return Err(PeopleError::ConsentRequired),
                outcome => check(outcome)?,
            }
        }
        PeopleCommand::Delete { id } => {
            let id = PersonId::parse(&id)?;
            check(app.delete(&id).await)?;
        }
    }

    print_list(&app.page().user_list, output)
}

const fn check(outcome: Outcome) -> Result<(), PeopleError> {
    match outcome {
        Outcome::Failed => Err(PeopleError::RequestFailed),
        Outcome::Applied | Outcome::Ignored => Ok(()),
    }
}

#[allow(clippy::print_stdout)]
fn print_list(list: &UserList, output: Output) -> Result<(), PeopleError> {
    match output {
        Output::Html => {
            let html = list
                .render_html()
                .map_err(|e| PeopleError::Render(e.to_string()))?;
            println!("{html}");
        }
        Output::Text if list.is_empty() => println!("(no people)"),
        Output::Text => {
            for item in list.items() {
                println!("{}  [{}]", item.text, item.delete_button.target);
            }
        }
    }
    Ok(())
}
