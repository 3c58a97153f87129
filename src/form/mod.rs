//! Headless add-employee form.
//!
//! Holds the text of each input, per-field validation messages and the
//! submitting flag. `submit` validates, sends the employee through
//! [`EmployeeApi::add_employee`] and reports the outcome to a [`Notifier`].
//!
//! ```text
//! idle -> validating -> blocked
//!                    -> submitting -> success | error -> idle
//! ```

pub mod validation;

pub use validation::{FieldErrors, FormField, ValidationError, validate};

use tracing::{debug, error, info};

use crate::api::EmployeeApi;
use crate::error::ApiResult;
use crate::model::{Employee, NewEmployee};
use crate::utils::notify::Notifier;

pub const ADDED_MESSAGE: &str = "Employee added successfully";
pub const ADD_FAILED_FALLBACK: &str = "Failed to add employee. Check your API connection.";

/// Raw text of every input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::EmployeeId => &self.employee_id,
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::EmployeeId => &mut self.employee_id,
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Department => &mut self.department,
        };
        *slot = value;
    }

    /// Wire payload: the `employee_id` input becomes `employee_code` and no
    /// `employee_id` key is sent.
    // NOTE: the key rename looks like a naming slip in the backend contract;
    // kept as-is because the backend expects `employee_code`.
    pub fn to_payload(&self) -> NewEmployee {
        NewEmployee {
            employee_code: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked,
    /// A submission is already in flight; nothing was sent.
    Busy,
    /// The backend accepted the employee; the created row when it sent one.
    Added(Option<Employee>),
    /// The add call failed; the message is what the user was shown.
    Failed(String),
}

pub struct EmployeeForm<N> {
    values: FormValues,
    errors: FieldErrors,
    submitting: bool,
    notifier: N,
    on_added: Box<dyn FnMut()>,
}

impl<N: Notifier> EmployeeForm<N> {
    /// `on_added` runs once after every successful add.
    pub fn new(notifier: N, on_added: impl FnMut() + 'static) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            submitting: false,
            notifier,
            on_added: Box::new(on_added),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The submit control stays disabled for the whole in-flight period.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Adding…"
        } else {
            "Add Employee"
        }
    }

    /// Sets a field's text. A pending error on that field is dropped; it is
    /// only recomputed on the next submit.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value.into());
        if self.errors.get(field).is_some() {
            self.errors.clear(field);
        }
    }

    /// Replaces the error mapping with a fresh validation of all fields.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.values);
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear_all();
    }

    /// First half of a submit: validates and marks the form as submitting.
    /// Returns the payload to send, or `None` when nothing should be sent
    /// (already submitting, or validation failed).
    pub fn begin_submit(&mut self) -> Option<NewEmployee> {
        if self.submitting {
            return None;
        }
        if !self.validate() {
            debug!(failing = self.errors.len(), "Add employee blocked by validation");
            return None;
        }
        self.submitting = true;
        Some(self.values.to_payload())
    }

    /// Second half of a submit: applies the result of the add call.
    /// Always clears the submitting flag.
    pub fn finish_submit(&mut self, result: ApiResult<Option<Employee>>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(employee) => {
                info!(email = %self.values.email, "Employee added from form");
                self.notifier.success(ADDED_MESSAGE);
                self.reset();
                (self.on_added)();
                SubmitOutcome::Added(employee)
            }
            Err(e) => {
                error!(error = %e, "Add employee error");
                let message = e.to_string();
                let message = if message.trim().is_empty() {
                    ADD_FAILED_FALLBACK.to_string()
                } else {
                    message
                };
                self.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validates, sends and reports. The form is borrowed for the whole
    /// round trip, so a second submit cannot start until this one ends.
    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: EmployeeApi + ?Sized,
    {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        let Some(payload) = self.begin_submit() else {
            return SubmitOutcome::Blocked;
        };

        let form = InFlight(self);
        let result = api.add_employee(&payload).await;
        form.0.finish_submit(result)
    }
}

/// Clears the submitting flag if a submit future is dropped mid-flight.
struct InFlight<'a, N>(&'a mut EmployeeForm<N>);

impl<N> Drop for InFlight<'_, N> {
    fn drop(&mut self) {
        self.0.submitting = false;
    }
}
