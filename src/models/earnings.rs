use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Calendar month used by every earnings endpoint
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `None` unless `month` is 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Current month in UTC
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EarningsPeriod {
    pub year: i32,
    pub month: u32,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkSummary {
    pub total_hours: f64,
    pub total_orders: u32,
    pub hourly_rate: f64,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EarningsBreakdown {
    pub base_earnings: f64,
    pub performance_bonus: f64,
    pub total_earnings: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderDetail {
    pub order_id: String,
    #[serde(default)]
    pub completion_date: Option<String>,
    pub hours_worked: f64,
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkerMonthlyEarnings {
    pub worker_id: String,
    pub worker_type: String,
    pub period: EarningsPeriod,
    pub work_summary: WorkSummary,
    pub earnings: EarningsBreakdown,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FailedEarningsCalculation {
    pub worker_id: String,
    pub error: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One row of `GET /earnings/all`: computed earnings or the reason they failed
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum WorkerEarningsEntry {
    Computed(Box<WorkerMonthlyEarnings>),
    Failed(FailedEarningsCalculation),
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DistributionDetail {
    pub worker_id: String,
    pub amount: f64,
    pub hours_worked: f64,
    pub orders_completed: u32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DistributionError {
    pub worker_id: String,
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MonthlyDistributionResults {
    pub period: String,
    pub total_workers: u32,
    pub successful_distributions: u32,
    pub failed_distributions: u32,
    pub total_amount_distributed: f64,
    #[serde(default)]
    pub distribution_details: Vec<DistributionDetail>,
    #[serde(default)]
    pub errors: Vec<DistributionError>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EarningsSummary {
    pub total_hours_worked: f64,
    pub total_earnings: f64,
    pub total_orders_completed: u32,
    pub average_earnings_per_worker: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkerTypeSummary {
    pub count: u32,
    pub total_hours: f64,
    pub total_earnings: f64,
    pub total_orders: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EarningsReport {
    pub period: String,
    pub total_workers: u32,
    #[serde(default)]
    pub summary: Option<EarningsSummary>,
    #[serde(default)]
    pub worker_type_breakdown: Option<HashMap<String, WorkerTypeSummary>>,
}
