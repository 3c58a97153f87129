use crate::model::EmployeeId;

// Backend endpoints, relative to the configured base URL.
//
// /api
//  ├─ /employees              GET list, POST create
//  │   ├─ /clear              POST wipe employees + attendance
//  │   └─ /{employee_id}      DELETE
//  ├─ /attendance             POST mark
//  │   └─ /{employee_id}      GET history
//  └─ /_health                GET

pub const API_PREFIX: &str = "/api";

pub fn employees() -> String {
    format!("{API_PREFIX}/employees")
}

pub fn employee(id: &EmployeeId) -> String {
    format!("{API_PREFIX}/employees/{id}")
}

pub fn clear_employees() -> String {
    format!("{API_PREFIX}/employees/clear")
}

pub fn attendance() -> String {
    format!("{API_PREFIX}/attendance")
}

pub fn employee_attendance(id: &EmployeeId) -> String {
    format!("{API_PREFIX}/attendance/{id}")
}

pub fn health() -> String {
    format!("{API_PREFIX}/_health")
}
