pub mod attendance;
pub mod employee;
pub mod health;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{ClearConfirmation, DeleteConfirmation, Employee, EmployeeId, NewEmployee};
pub use health::HealthStatus;
