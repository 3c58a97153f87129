use async_trait::async_trait;
use tracing::{debug, info};

use super::ApiClient;
use crate::error::ApiResult;
use crate::model::{AttendanceRecord, EmployeeId};
use crate::routes;

/// Attendance operations of the backend. Records are append-only from the
/// client's point of view.
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    /// `POST /api/attendance`
    async fn mark_attendance(&self, record: &AttendanceRecord) -> ApiResult<AttendanceRecord>;

    /// `GET /api/attendance/{employee_id}`, newest first as ordered by the backend.
    async fn get_attendance(&self, employee_id: &EmployeeId) -> ApiResult<Vec<AttendanceRecord>>;
}

#[async_trait]
impl AttendanceApi for ApiClient {
    async fn mark_attendance(&self, record: &AttendanceRecord) -> ApiResult<AttendanceRecord> {
        let created: AttendanceRecord = self.post(&routes::attendance(), record).await?;
        info!(
            employee_id = %created.employee_id,
            date = %created.date,
            status = %created.status,
            "Attendance marked"
        );
        Ok(created)
    }

    async fn get_attendance(&self, employee_id: &EmployeeId) -> ApiResult<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> =
            self.get(&routes::employee_attendance(employee_id)).await?;
        debug!(%employee_id, count = records.len(), "Fetched attendance");
        Ok(records)
    }
}
