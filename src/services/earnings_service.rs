use serde_json::Value;

use crate::models::{EarningsReport, MonthlyDistributionResults, WorkerEarningsEntry, WorkerMonthlyEarnings, YearMonth};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;
use crate::utils::DEFAULT_MONTHS_BACK;

/// Wage management: per-worker earnings, monthly distribution, scheduler
impl<T: Transport> ApiClient<T> {
    pub async fn get_worker_monthly_earnings(
        &self,
        worker_id: &str,
        period: Option<YearMonth>,
    ) -> Result<WorkerMonthlyEarnings, ApiError> {
        let request = ApiRequest::get(format!("/earnings/individual/{}/monthly", worker_id))
            .for_month(period);
        self.execute(request).await
    }

    pub async fn get_worker_earnings_history(
        &self,
        worker_id: &str,
        months_back: Option<u32>,
    ) -> Result<Vec<WorkerMonthlyEarnings>, ApiError> {
        let request = ApiRequest::get(format!("/earnings/individual/{}/history", worker_id))
            .query("months_back", months_back.unwrap_or(DEFAULT_MONTHS_BACK));
        self.execute(request).await
    }

    pub async fn get_all_workers_monthly_earnings(
        &self,
        period: Option<YearMonth>,
    ) -> Result<Vec<WorkerEarningsEntry>, ApiError> {
        self.execute(ApiRequest::get("/earnings/all").for_month(period))
            .await
    }

    pub async fn get_earnings_summary_report(&self, period: Option<YearMonth>) -> Result<EarningsReport, ApiError> {
        self.execute(ApiRequest::get("/earnings/summary").for_month(period))
            .await
    }

    /// Pays out `period` now instead of waiting for the scheduler
    pub async fn run_monthly_distribution(
        &self,
        period: Option<YearMonth>,
    ) -> Result<MonthlyDistributionResults, ApiError> {
        let period = period.unwrap_or_else(YearMonth::current);
        log::info!(
            "💸 [EARNINGS] Distributing wages for {}-{:02}",
            period.year(),
            period.month()
        );
        let results: MonthlyDistributionResults = self
            .execute(ApiRequest::post("/earnings/distribute").for_month(Some(period)))
            .await?;
        if results.failed_distributions > 0 {
            log::warn!(
                "⚠️ [EARNINGS] {} of {} distributions failed",
                results.failed_distributions,
                results.total_workers
            );
        }
        Ok(results)
    }

    pub async fn get_scheduler_status(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::get("/earnings/scheduler/status")).await
    }

    pub async fn start_scheduler(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::post("/earnings/scheduler/start")).await
    }

    pub async fn stop_scheduler(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::post("/earnings/scheduler/stop")).await
    }
}
