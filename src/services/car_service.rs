use serde_json::Value;

use crate::models::{Car, CarCreate, CarUpdate, NewCarType, Pagination};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;

/// Cars, car types and maintenance history
impl<T: Transport> ApiClient<T> {
    /// Car types are free-form rows; the admin screens only display them
    pub async fn get_car_types(&self) -> Result<Vec<Value>, ApiError> {
        self.execute(ApiRequest::get("/cars/types")).await
    }

    pub async fn create_car_type(&self, car_type: &str) -> Result<Value, ApiError> {
        let body = NewCarType { car_type: car_type.to_string() };
        self.execute(ApiRequest::post("/cars/types").json(&body)?).await
    }

    pub async fn create_car(&self, car: &CarCreate) -> Result<Car, ApiError> {
        log::info!("🚗 [CARS] Registering car {}", car.car_id);
        self.execute(ApiRequest::post("/cars/").json(car)?).await
    }

    pub async fn get_cars(&self, pagination: Pagination) -> Result<Vec<Car>, ApiError> {
        self.execute(ApiRequest::get("/cars/").paginate(pagination)).await
    }

    pub async fn get_car(&self, car_id: &str) -> Result<Car, ApiError> {
        self.execute(ApiRequest::get(format!("/cars/{}", car_id))).await
    }

    pub async fn update_car(&self, car_id: &str, update: &CarUpdate) -> Result<Car, ApiError> {
        self.execute(ApiRequest::put(format!("/cars/{}", car_id)).json(update)?)
            .await
    }

    pub async fn delete_car(&self, car_id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ [CARS] Deleting car {}", car_id);
        self.execute_discarding(ApiRequest::delete(format!("/cars/{}", car_id)))
            .await
    }

    pub async fn get_maintenance_history(
        &self,
        car_id: &str,
        pagination: Pagination,
    ) -> Result<Vec<Value>, ApiError> {
        let request = ApiRequest::get(format!("/cars/{}/maintenance-history", car_id))
            .paginate(pagination);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::Method;
    use crate::services::testing::client_with_token;
    use serde_json::json;

    fn car_json() -> Value {
        json!({"car_id": "ABC123", "car_type": 2, "customer_id": "c-1"})
    }

    #[tokio::test]
    async fn car_crud_paths() {
        let client = client_with_token(Some("tok"));
        client.transport().respond(200, car_json());
        client.transport().respond(200, json!([car_json()]));
        client.transport().respond(200, car_json());
        client.transport().respond(200, car_json());

        client
            .create_car(&CarCreate { car_id: "ABC123".into(), car_type: 2 })
            .await
            .unwrap();
        let cars = client.get_cars(Pagination::default()).await.unwrap();
        assert_eq!(cars[0].customer_id.as_deref(), Some("c-1"));
        client.get_car("ABC123").await.unwrap();
        client.update_car("ABC123", &CarUpdate { car_type: 3 }).await.unwrap();
        client.delete_car("ABC123").await.unwrap();

        let calls = client.transport().calls();
        let summary: Vec<_> = calls
            .iter()
            .map(|c| (c.request.method, c.url.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Method::Post, "http://test/api/v1/cars/"),
                (Method::Get, "http://test/api/v1/cars/?page=1&page_size=20"),
                (Method::Get, "http://test/api/v1/cars/ABC123"),
                (Method::Put, "http://test/api/v1/cars/ABC123"),
                (Method::Delete, "http://test/api/v1/cars/ABC123"),
            ]
        );
        assert_eq!(calls[0].request.body, Some(json!({"car_id": "ABC123", "car_type": 2})));
        assert_eq!(calls[3].request.body, Some(json!({"car_type": 3})));
    }

    #[tokio::test]
    async fn car_types_and_history() {
        let client = client_with_token(Some("tok"));
        client.transport().respond(200, json!([{"type_id": 1, "car_type": "SUV"}]));
        client.transport().respond(200, json!({"type_id": 2, "car_type": "Van"}));
        client.transport().respond(200, json!([]));

        let types = client.get_car_types().await.unwrap();
        assert_eq!(types.len(), 1);
        client.create_car_type("Van").await.unwrap();
        client
            .get_maintenance_history("ABC123", Pagination::new(2, 5))
            .await
            .unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].request.path, "/cars/types");
        assert_eq!(calls[1].request.method, Method::Post);
        assert_eq!(calls[1].request.body, Some(json!({"car_type": "Van"})));
        assert_eq!(
            calls[2].url,
            "http://test/api/v1/cars/ABC123/maintenance-history?page=2&page_size=5"
        );
    }
}
