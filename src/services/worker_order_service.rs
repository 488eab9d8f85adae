use serde::Deserialize;

use crate::models::{OpenOrder, Order, OrderQuery, Pagination, WorkerMonthlyEarnings, YearMonth};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;
use crate::utils::DEFAULT_MONTHS_BACK;

/// What a worker can do with an order offered or assigned to them
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderAction {
    Accept,
    Reject,
    Complete,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Accept => "accept",
            OrderAction::Reject => "reject",
            OrderAction::Complete => "complete",
        }
    }
}

/// `GET /workers/orders/{scope}`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkerOrderScope {
    Assigned,
    All,
}

impl WorkerOrderScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerOrderScope::Assigned => "assigned",
            WorkerOrderScope::All => "all",
        }
    }
}

/// The backend returns either a JSON object or a bare message for order actions
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(untagged)]
pub enum ActionResponse {
    Order(Box<Order>),
    Other(serde_json::Value),
}

/// Worker endpoints: order queue, order actions, own earnings
impl<T: Transport> ApiClient<T> {
    pub async fn get_assigned_orders(&self, query: OrderQuery) -> Result<Vec<Order>, ApiError> {
        let request = ApiRequest::get(format!("/workers/orders/{}", WorkerOrderScope::Assigned.as_str()))
            .paginate(query.pagination)
            .query_opt("status_filter", query.status);
        self.execute(request).await
    }

    /// Open pool, lighter rows than the assigned queue
    pub async fn get_all_orders(&self, pagination: Pagination) -> Result<Vec<OpenOrder>, ApiError> {
        let request = ApiRequest::get(format!("/workers/orders/{}", WorkerOrderScope::All.as_str()))
            .paginate(pagination);
        self.execute(request).await
    }

    pub async fn order_action(&self, order_id: &str, action: OrderAction) -> Result<ActionResponse, ApiError> {
        log::info!("👷 [WORKER] {} order {}", action.as_str(), order_id);
        self.execute(ApiRequest::post(format!("/workers/orders/{}/{}", order_id, action.as_str())))
            .await
    }

    pub async fn accept_order(&self, order_id: &str) -> Result<ActionResponse, ApiError> {
        self.order_action(order_id, OrderAction::Accept).await
    }

    pub async fn reject_order(&self, order_id: &str) -> Result<ActionResponse, ApiError> {
        self.order_action(order_id, OrderAction::Reject).await
    }

    pub async fn complete_order(&self, order_id: &str) -> Result<ActionResponse, ApiError> {
        self.order_action(order_id, OrderAction::Complete).await
    }

    /// `period` defaults to the current month
    pub async fn get_monthly_earnings(
        &self,
        period: Option<YearMonth>,
    ) -> Result<WorkerMonthlyEarnings, ApiError> {
        let request = ApiRequest::get("/workers/my-earnings/monthly").for_month(period);
        self.execute(request).await
    }

    /// `months_back` defaults to 12
    pub async fn get_earnings_history(
        &self,
        months_back: Option<u32>,
    ) -> Result<Vec<WorkerMonthlyEarnings>, ApiError> {
        let request = ApiRequest::get("/workers/my-earnings/history")
            .query("months_back", months_back.unwrap_or(DEFAULT_MONTHS_BACK));
        self.execute(request).await
    }
}
