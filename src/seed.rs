//! Bulk-load employees and attendance from a JSON file.
//!
//! ```json
//! {
//!   "employees": [
//!     {"full_name": "Alice Johnson", "email": "alice@example.com", "department": "Engineering"}
//!   ],
//!   "attendance": [
//!     {"employee_email": "alice@example.com", "date": "2026-02-11", "status": "Present"}
//!   ]
//! }
//! ```
//!
//! Every entry is attempted; failures are logged and counted.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::{AttendanceApi, EmployeeApi};
use crate::model::{AttendanceRecord, AttendanceStatus, NewEmployee};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedPlan {
    #[serde(default)]
    pub employees: Vec<NewEmployee>,
    #[serde(default)]
    pub attendance: Vec<SeedAttendance>,
}

/// Attendance keyed by email, resolved to an employee id at seed time.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAttendance {
    pub employee_email: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub employees_created: usize,
    pub attendance_marked: usize,
    pub failures: usize,
}

impl SeedPlan {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }
}

pub async fn run<A>(api: &A, plan: &SeedPlan) -> SeedReport
where
    A: EmployeeApi + AttendanceApi + ?Sized,
{
    let mut report = SeedReport::default();

    info!(employees = plan.employees.len(), "Seeding employees");
    for employee in &plan.employees {
        match api.add_employee(employee).await {
            Ok(created) => {
                let employee_id = created.and_then(|row| row.employee_id);
                info!(?employee_id, email = %employee.email, "Seeded employee");
                report.employees_created += 1;
            }
            Err(e) => {
                warn!(error = %e, email = %employee.email, "Create employee failed");
                report.failures += 1;
            }
        }
    }

    info!(records = plan.attendance.len(), "Seeding attendance");
    for entry in &plan.attendance {
        let employee_id = match api.find_employee_by_email(&entry.employee_email).await {
            Ok(Some(employee)) => employee.employee_id,
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, email = %entry.employee_email, "Employee lookup failed");
                report.failures += 1;
                continue;
            }
        };

        let Some(employee_id) = employee_id else {
            warn!(email = %entry.employee_email, "Employee not found for attendance");
            report.failures += 1;
            continue;
        };

        let record = AttendanceRecord {
            employee_id,
            date: entry.date,
            status: entry.status,
        };
        match api.mark_attendance(&record).await {
            Ok(_) => report.attendance_marked += 1,
            Err(e) => {
                warn!(error = %e, email = %entry.employee_email, "Mark attendance failed");
                report.failures += 1;
            }
        }
    }

    info!(
        created = report.employees_created,
        marked = report.attendance_marked,
        failures = report.failures,
        "Seeding done"
    );
    report
}
