//! Privacy policy consent gate.

use crate::page::{Checkbox, SubmitButton};

/// Sync the submit control with the privacy policy checkbox.
///
/// Checked enables the control and adds the `active` class; unchecked
/// disables it and removes the class. The result depends only on the
/// checkbox, never on the previous button state.
pub const fn check_privacy_policy(checkbox: Checkbox, submit_button: &mut SubmitButton) {
    submit_button.disabled = !checkbox.checked;
    submit_button.active = checkbox.checked;
}
