//! Contact form validation and the submission flow.
//!
//! Validation is synchronous and side-effect free: a pass over the raw
//! input values yields per-field messages, and the state machine turns
//! them into view effects. The success confirmation auto-dismisses after
//! [`CONFIRMATION_TIMEOUT`]; the pending dismiss is tracked by token so a
//! resubmission cancels it instead of stacking a second timer.

pub mod rules;

use std::time::Duration;

use tracing::debug;

use crate::form::rules::{validate_age, validate_email, validate_phone};

/// How long the success confirmation stays up before auto-dismissing.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(3);

/// The five contact-form fields, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    Consent,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Consent,
    ];
}

/// Raw values as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub consent: bool,
}

/// Identifies one scheduled auto-dismiss of the confirmation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

/// View effects from form transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Mark the field invalid (error class, message slot, aria-invalid).
    ShowError {
        field: Field,
        message: &'static str,
    },
    /// Restore the field to its neutral presentation.
    ClearError(Field),
    /// Move focus to the field.
    FocusField(Field),
    SetConfirmationVisible(bool),
    SetScrollLock(bool),
    /// Reset every input to its initial value.
    ResetFields,
    /// Ask the shell to fire [`ContactForm::dismiss_elapsed`] later.
    ScheduleDismiss {
        token: DismissToken,
        after: Duration,
    },
    /// A previously scheduled dismiss is obsolete; drop it.
    CancelDismiss(DismissToken),
}

/// Outcome of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<(Field, &'static str)>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[(Field, &'static str)] {
        &self.errors
    }

    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    /// First violated field in page order, the focus target on a failed
    /// submit.
    pub fn first_invalid(&self) -> Option<Field> {
        self.errors.first().map(|(field, _)| *field)
    }
}

/// Validate every field independently.
pub fn validate(input: &FormInput) -> Validation {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| field_error(input, field).map(|message| (field, message)))
        .collect();
    Validation { errors }
}

fn field_error(input: &FormInput, field: Field) -> Option<&'static str> {
    match field {
        Field::Name => {
            if input.name.trim().is_empty() {
                Some("Name is required")
            } else {
                None
            }
        }
        Field::Email => {
            let email = input.email.trim();
            if email.is_empty() {
                Some("Email is required")
            } else if !validate_email(email) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Phone => {
            let phone = input.phone.trim();
            if phone.is_empty() {
                Some("Phone number is required")
            } else if !validate_phone(phone) {
                Some("Please enter a valid phone number")
            } else {
                None
            }
        }
        Field::Age => {
            let age = input.age.trim();
            if age.is_empty() {
                Some("Age is required")
            } else if !validate_age(age) {
                Some("Age must be between 10 and 15")
            } else {
                None
            }
        }
        Field::Consent => {
            if !input.consent {
                Some("You must agree to the terms")
            } else {
                None
            }
        }
    }
}

/// Contact-form state: only the pending auto-dismiss survives between
/// events; field values live in the inputs and error flags in the view.
#[derive(Debug, Default)]
pub struct ContactForm {
    pending_dismiss: Option<DismissToken>,
    next_token: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form was submitted.
    ///
    /// Invalid input surfaces every violated field at once and focuses the
    /// first; valid input shows the confirmation and schedules its dismiss,
    /// cancelling any dismiss still pending from an earlier submission.
    pub fn submit(&mut self, input: &FormInput) -> Vec<FormEffect> {
        let validation = validate(input);
        debug!(valid = validation.is_valid(), "contact form submitted");

        // Clear all errors first; failed fields are re-marked below.
        let mut effects: Vec<FormEffect> =
            Field::ALL.iter().map(|&f| FormEffect::ClearError(f)).collect();

        if validation.is_valid() {
            if let Some(stale) = self.pending_dismiss.take() {
                effects.push(FormEffect::CancelDismiss(stale));
            }
            let token = self.allocate_token();
            self.pending_dismiss = Some(token);

            effects.push(FormEffect::SetConfirmationVisible(true));
            effects.push(FormEffect::SetScrollLock(true));
            effects.push(FormEffect::ScheduleDismiss {
                token,
                after: CONFIRMATION_TIMEOUT,
            });
        } else {
            for &(field, message) in validation.errors() {
                effects.push(FormEffect::ShowError { field, message });
            }
            if let Some(first) = validation.first_invalid() {
                effects.push(FormEffect::FocusField(first));
            }
        }

        effects
    }

    /// The scheduled dismiss fired. Tokens from superseded submissions are
    /// ignored.
    pub fn dismiss_elapsed(&mut self, token: DismissToken) -> Vec<FormEffect> {
        if self.pending_dismiss != Some(token) {
            return vec![];
        }
        self.pending_dismiss = None;
        vec![
            FormEffect::SetConfirmationVisible(false),
            FormEffect::SetScrollLock(false),
            FormEffect::ResetFields,
        ]
    }

    /// A click on the confirmation panel's background dismisses it
    /// immediately, dropping the scheduled dismiss.
    pub fn confirmation_background_clicked(&mut self) -> Vec<FormEffect> {
        match self.pending_dismiss.take() {
            Some(token) => vec![
                FormEffect::CancelDismiss(token),
                FormEffect::SetConfirmationVisible(false),
                FormEffect::SetScrollLock(false),
            ],
            None => vec![],
        }
    }

    /// Focus left a text field, or the consent checkbox changed: clear the
    /// field's error the moment its current value is valid. Invalid values
    /// leave existing error state untouched.
    pub fn field_revalidated(&self, input: &FormInput, field: Field) -> Vec<FormEffect> {
        if field_error(input, field).is_none() {
            vec![FormEffect::ClearError(field)]
        } else {
            vec![]
        }
    }

    fn allocate_token(&mut self) -> DismissToken {
        self.next_token += 1;
        DismissToken(self.next_token)
    }
}
