use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Backend-assigned employee identity. Opaque text (UUIDs in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, AsRef)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Employee as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,

    pub full_name: String,

    pub email: String,

    pub department: String,
}

/// Wire payload for `POST /api/employees`.
///
/// Carries no `employee_id`; the backend assigns identity and the form's
/// "Employee Code" input travels as `employee_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    #[serde(default)]
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Response body of `DELETE /api/employees/{employee_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub deleted: bool,
}

/// Response body of `POST /api/employees/clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClearConfirmation {
    #[serde(default)]
    pub cleared: bool,
}
