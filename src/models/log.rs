use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Work log entry written by a worker against an order
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MaintenanceLog {
    pub order_id: String,
    pub worker_id: String,
    pub consumption: String,
    #[serde(deserialize_with = "crate::models::decimal::deserialize")]
    pub cost: f64,
    #[serde(deserialize_with = "crate::models::decimal::deserialize")]
    pub duration: f64,
    pub log_time: NaiveDateTime,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LogCreate {
    pub order_id: String,
    pub consumption: String,
    pub cost: f64,
    /// Hours
    pub duration: f64,
}
