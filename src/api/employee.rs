use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::ApiClient;
use crate::error::ApiResult;
use crate::model::{ClearConfirmation, DeleteConfirmation, Employee, EmployeeId, NewEmployee};
use crate::routes;

/// Employee operations of the backend.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /api/employees`
    async fn get_employees(&self) -> ApiResult<Vec<Employee>>;

    /// `POST /api/employees`. Any 2xx JSON body means the employee was
    /// created; the created row is returned only when the body is one.
    async fn add_employee(&self, employee: &NewEmployee) -> ApiResult<Option<Employee>>;

    /// `DELETE /api/employees/{employee_id}`
    async fn delete_employee(&self, employee_id: &EmployeeId) -> ApiResult<DeleteConfirmation>;

    /// `POST /api/employees/clear`, removing every employee and attendance row.
    async fn clear_employees(&self) -> ApiResult<ClearConfirmation>;

    /// First listed employee whose email matches exactly.
    async fn find_employee_by_email(&self, email: &str) -> ApiResult<Option<Employee>> {
        let employees = self.get_employees().await?;
        Ok(employees.into_iter().find(|e| e.email == email))
    }
}

#[async_trait]
impl EmployeeApi for ApiClient {
    async fn get_employees(&self) -> ApiResult<Vec<Employee>> {
        let employees: Vec<Employee> = self.get(&routes::employees()).await?;
        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    async fn add_employee(&self, employee: &NewEmployee) -> ApiResult<Option<Employee>> {
        let body: Value = self.post(&routes::employees(), employee).await?;
        let created = created_employee(body);
        match &created {
            Some(row) => info!(employee_id = ?row.employee_id, email = %row.email, "Employee created"),
            None => info!(email = %employee.email, "Employee created, backend returned no row"),
        }
        Ok(created)
    }

    async fn delete_employee(&self, employee_id: &EmployeeId) -> ApiResult<DeleteConfirmation> {
        let confirmation: DeleteConfirmation = self.delete(&routes::employee(employee_id)).await?;
        info!(%employee_id, deleted = confirmation.deleted, "Employee deleted");
        Ok(confirmation)
    }

    async fn clear_employees(&self) -> ApiResult<ClearConfirmation> {
        let confirmation: ClearConfirmation = self.post_empty(&routes::clear_employees()).await?;
        info!(cleared = confirmation.cleared, "Employees cleared");
        Ok(confirmation)
    }
}

/// The backend answers a create with the inserted row, a one-element list of
/// it, or an empty list when the store returned nothing.
fn created_employee(body: Value) -> Option<Employee> {
    let row = match body {
        Value::Array(rows) => rows.into_iter().next()?,
        other => other,
    };
    match serde_json::from_value(row) {
        Ok(employee) => Some(employee),
        Err(e) => {
            debug!(error = %e, "Create response is not an employee row");
            None
        }
    }
}
