use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumCount as EnumCountMacro, EnumIter};

use super::FormValues;

/// local@domain.tld, no whitespace, exactly one `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// The closed set of inputs on the add-employee form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro, AsRefStr, StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    /// Shown as "Employee Code"; sent to the backend as `employee_code`.
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::EmployeeId => "Employee Code",
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::Department => "Department",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::EmployeeId => "EMP-001",
            FormField::FullName => "Jane Doe",
            FormField::Email => "jane@company.com",
            FormField::Department => "Engineering",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Required")]
    Required,
    #[display(fmt = "Invalid email")]
    InvalidEmail,
}

/// Per-field validation messages, one optional slot per [`FormField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors([Option<ValidationError>; FormField::COUNT]);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: FormField, error: ValidationError) {
        self.0[field.index()] = Some(error);
    }

    pub fn clear(&mut self, field: FormField) {
        self.0[field.index()] = None;
    }

    pub fn clear_all(&mut self) {
        self.0 = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|e| e.is_some()).count()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        FormField::iter().filter_map(|field| self.get(field).map(|e| (field, e)))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field and reports all failures at once.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if values.full_name.trim().is_empty() {
        errors.set(FormField::FullName, ValidationError::Required);
    }

    // Emptiness is judged on the trimmed text, the pattern on the raw text.
    if values.email.trim().is_empty() {
        errors.set(FormField::Email, ValidationError::Required);
    } else if !is_valid_email(&values.email) {
        errors.set(FormField::Email, ValidationError::InvalidEmail);
    }

    if values.department.trim().is_empty() {
        errors.set(FormField::Department, ValidationError::Required);
    }

    errors
}
