use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Pagination;

/// Lifecycle of a repair order. Transitions happen on the backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    PendingAssignment,
    Assigned,
    InProgress,
    Completed,
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderStatus::PendingAssignment),
            1 => Ok(OrderStatus::Assigned),
            2 => Ok(OrderStatus::InProgress),
            3 => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status {}", other)),
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::PendingAssignment => 0,
            OrderStatus::Assigned => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Completed => 3,
        }
    }
}

impl fmt::Display for OrderStatus {
    /// Query-string form (`status_filter=2`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub order_id: String,
    pub car_id: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub worker_id: Option<String>,
    #[serde(default, deserialize_with = "crate::models::decimal::deserialize_option")]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub expedite_flag: bool,
}

/// Row of the open-order pool a worker can pick from. Unassigned orders
/// may come without `status` or any owner fields.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OpenOrder {
    pub order_id: String,
    pub car_id: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub car_type: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub expedite_flag: bool,
}

/// Body of `POST /orders/`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderCreate {
    pub car_id: String,
    pub description: String,
    pub start_time: NaiveDateTime,
}

/// Filters for order listings (customer, worker and admin views)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct OrderQuery {
    pub pagination: Pagination,
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Body of `POST /orders/feedback`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Feedback {
    pub order_id: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
