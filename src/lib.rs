//! Client for the HRM employee and attendance backend.
//!
//! - [`api`]: one async operation per REST endpoint
//! - [`form`]: the validated add-employee form
//! - [`seed`]: bulk loading from a JSON file

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod routes;
pub mod seed;
pub mod utils;

pub use api::{ApiClient, AttendanceApi, EmployeeApi};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use form::{EmployeeForm, FormField, SubmitOutcome};
