use serde_json::Value;

use crate::models::{Procedure, ProcedureCreate, ProcedureNote, ProcedureUpdate};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;

/// Maintenance steps of an order
impl<T: Transport> ApiClient<T> {
    pub async fn get_procedures(&self, order_id: &str) -> Result<Vec<Procedure>, ApiError> {
        self.execute(ApiRequest::get("/procedures/").query("order_id", order_id))
            .await
    }

    pub async fn create_procedures(&self, procedures: &[ProcedureCreate]) -> Result<Vec<Procedure>, ApiError> {
        self.execute(ApiRequest::post("/procedures/").json(procedures)?).await
    }

    pub async fn update_procedure_statuses(
        &self,
        updates: &[ProcedureUpdate],
    ) -> Result<Vec<Procedure>, ApiError> {
        self.execute(ApiRequest::patch("/procedures/").json(updates)?).await
    }

    pub async fn record_procedure_note(
        &self,
        order_id: &str,
        procedure_id: i64,
        note: &str,
    ) -> Result<Value, ApiError> {
        let body = ProcedureNote {
            order_id: order_id.to_string(),
            procedure_id,
            note: note.to_string(),
        };
        self.execute(ApiRequest::post("/procedures/record").json(&body)?).await
    }
}
