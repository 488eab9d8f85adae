use crate::models::{Feedback, Order, OrderCreate, OrderQuery};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;

pub const FEEDBACK_FAILED: &str = "Could not submit feedback, please try again later";

/// Customer-side order endpoints
impl<T: Transport> ApiClient<T> {
    pub async fn create_order(&self, order: &OrderCreate) -> Result<Order, ApiError> {
        log::info!("🛠️ [ORDERS] New order for car {}", order.car_id);
        self.execute(ApiRequest::post("/orders/").json(order)?).await
    }

    pub async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Order>, ApiError> {
        let request = ApiRequest::get("/orders/")
            .paginate(query.pagination)
            .query_opt("status_filter", query.status);
        self.execute(request).await
    }

    pub async fn add_feedback(&self, feedback: &Feedback) -> Result<Order, ApiError> {
        self.execute(ApiRequest::post("/orders/feedback").json(feedback)?)
            .await
            .map_err(|e| {
                log::warn!("⚠️ [ORDERS] Feedback for {} rejected: {}", feedback.order_id, e);
                e
            })
    }

    pub async fn expedite_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.execute_discarding(ApiRequest::post(format!("/orders/{}/expedite", order_id)))
            .await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ [ORDERS] Cancelling {}", order_id);
        self.execute_discarding(ApiRequest::delete(format!("/orders/{}", order_id)))
            .await
    }
}

/// 422 responses show the concatenated field messages, anything else a generic text
pub fn feedback_error_message(error: &ApiError) -> String {
    error.validation_message_or(FEEDBACK_FAILED)
}
