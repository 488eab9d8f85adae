use serde_json::Value;

use crate::models::{CostAnalysisQuery, DateRange, OrderQuery, Pagination, TimeRange, User};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;
use crate::utils::DEFAULT_RATING_THRESHOLD;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Administrator statistics and user management.
/// Report payloads are shaped by the backend and rendered as-is.
impl<T: Transport> ApiClient<T> {
    pub async fn get_order_statistics(&self, query: OrderQuery) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/admin/orders")
            .paginate(query.pagination)
            .query_opt("status_filter", query.status);
        self.execute(request).await
    }

    pub async fn get_car_statistics(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::get("/admin/car-statistics")).await
    }

    pub async fn get_cost_analysis(&self, query: CostAnalysisQuery) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/admin/costs/analysis")
            .query("start_date", query.range.start_date.format(DATE_FORMAT))
            .query("end_date", query.range.end_date.format(DATE_FORMAT))
            .query("period_type", query.period_type.as_str());
        self.execute(request).await
    }

    /// Orders and workers rated at or below `rating_threshold` (default 3)
    pub async fn get_negative_feedback(&self, rating_threshold: Option<u8>) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/admin/feedback/negative")
            .query("rating_threshold", rating_threshold.unwrap_or(DEFAULT_RATING_THRESHOLD));
        self.execute(request).await
    }

    pub async fn get_worker_statistics(&self, window: TimeRange) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/admin/workers")
            .query("start_time", window.start_time.format(DATETIME_FORMAT))
            .query("end_time", window.end_time.format(DATETIME_FORMAT));
        self.execute(request).await
    }

    pub async fn get_worker_productivity(&self, range: DateRange) -> Result<Value, ApiError> {
        let request = ApiRequest::get("/admin/workers/productivity")
            .query("start_date", range.start_date.format(DATE_FORMAT))
            .query("end_date", range.end_date.format(DATE_FORMAT));
        self.execute(request).await
    }

    pub async fn get_incomplete_orders(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::get("/admin/incomplete-orders")).await
    }

    pub async fn get_all_users(&self, pagination: Pagination) -> Result<Vec<User>, ApiError> {
        self.execute(ApiRequest::get("/users/").paginate(pagination)).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        log::warn!("🗑️ [ADMIN] Deleting user {}", user_id);
        self.execute_discarding(ApiRequest::delete(format!("/users/{}", user_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, PeriodType};
    use crate::services::api_client::Method;
    use crate::services::testing::client_with_token;
    use chrono::NaiveDate;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn paginated_reads() {
        let client = client_with_token(Some("admin"));
        client.transport().respond(200, json!({"items": [], "total": 0}));
        client.transport().respond(200, json!([]));

        client
            .get_order_statistics(OrderQuery {
                pagination: Pagination::new(2, 50),
                status: Some(OrderStatus::Assigned),
            })
            .await
            .unwrap();
        client.get_all_users(Pagination::default()).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].url, "http://test/api/v1/admin/orders?page=2&page_size=50&status_filter=1");
        assert_eq!(calls[1].url, "http://test/api/v1/users/?page=1&page_size=20");
        assert!(calls.iter().all(|c| c.bearer.as_deref() == Some("admin")));
    }

    #[tokio::test]
    async fn unfiltered_order_statistics_omit_status() {
        let client = client_with_token(Some("admin"));
        client.get_order_statistics(OrderQuery::default()).await.unwrap();
        assert_eq!(client.transport().last_call().request.query_value("status_filter"), None);
    }

    #[tokio::test]
    async fn date_ranges_are_iso_formatted() {
        let client = client_with_token(Some("admin"));
        let range = DateRange { start_date: day(2024, 1, 1), end_date: day(2024, 3, 31) };

        client.get_cost_analysis(range.into()).await.unwrap();
        client
            .get_cost_analysis(CostAnalysisQuery { range, period_type: PeriodType::Quarter })
            .await
            .unwrap();
        client.get_worker_productivity(range).await.unwrap();
        client
            .get_worker_statistics(TimeRange {
                start_time: day(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
                end_time: day(2024, 1, 31).and_hms_opt(23, 59, 59).unwrap(),
            })
            .await
            .unwrap();

        let urls: Vec<_> = client.transport().calls().into_iter().map(|c| c.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://test/api/v1/admin/costs/analysis?start_date=2024-01-01&end_date=2024-03-31&period_type=month",
                "http://test/api/v1/admin/costs/analysis?start_date=2024-01-01&end_date=2024-03-31&period_type=quarter",
                "http://test/api/v1/admin/workers/productivity?start_date=2024-01-01&end_date=2024-03-31",
                "http://test/api/v1/admin/workers?start_time=2024-01-01T00%3A00%3A00&end_time=2024-01-31T23%3A59%3A59",
            ]
        );
    }

    #[tokio::test]
    async fn simple_reads_and_user_delete() {
        let client = client_with_token(Some("admin"));

        client.get_car_statistics().await.unwrap();
        client.get_incomplete_orders().await.unwrap();
        client.get_negative_feedback(None).await.unwrap();
        client.get_negative_feedback(Some(2)).await.unwrap();
        client.delete_user("u-9").await.unwrap();

        let calls = client.transport().calls();
        let summary: Vec<_> = calls.iter().map(|c| (c.request.method, c.url.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (Method::Get, "http://test/api/v1/admin/car-statistics"),
                (Method::Get, "http://test/api/v1/admin/incomplete-orders"),
                (Method::Get, "http://test/api/v1/admin/feedback/negative?rating_threshold=3"),
                (Method::Get, "http://test/api/v1/admin/feedback/negative?rating_threshold=2"),
                (Method::Delete, "http://test/api/v1/users/u-9"),
            ]
        );
    }
}
