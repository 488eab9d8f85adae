use crate::models::{LogCreate, MaintenanceLog, Pagination};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;

impl<T: Transport> ApiClient<T> {
    pub async fn create_maintenance_log(&self, log: &LogCreate) -> Result<MaintenanceLog, ApiError> {
        log::info!("🧾 [LOGS] {}h logged on order {}", log.duration, log.order_id);
        self.execute(ApiRequest::post("/logs/").json(log)?).await
    }

    /// Logs of the calling worker
    pub async fn get_worker_logs(&self, pagination: Pagination) -> Result<Vec<MaintenanceLog>, ApiError> {
        self.execute(ApiRequest::get("/logs/").paginate(pagination)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::Method;
    use crate::services::testing::client_with_token;
    use serde_json::json;

    #[tokio::test]
    async fn create_and_list_logs() {
        let client = client_with_token(Some("tok"));
        let row = json!({
            "order_id": "o-1",
            "worker_id": "w-1",
            "consumption": "2L oil",
            "cost": "35.00",
            "duration": "1.5",
            "log_time": "2024-06-01T10:00:00"
        });
        client.transport().respond(201, row.clone());
        client.transport().respond(200, json!([row]));

        let created = client
            .create_maintenance_log(&LogCreate {
                order_id: "o-1".into(),
                consumption: "2L oil".into(),
                cost: 35.0,
                duration: 1.5,
            })
            .await
            .unwrap();
        assert_eq!(created.duration, 1.5);

        let logs = client.get_worker_logs(Pagination::default()).await.unwrap();
        assert_eq!(logs.len(), 1);

        let calls = client.transport().calls();
        assert_eq!(calls[0].request.method, Method::Post);
        assert_eq!(
            calls[0].request.body,
            Some(json!({"order_id": "o-1", "consumption": "2L oil", "cost": 35.0, "duration": 1.5}))
        );
        assert_eq!(calls[1].url, "http://test/api/v1/logs/?page=1&page_size=20");
    }
}
