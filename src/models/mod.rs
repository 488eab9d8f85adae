pub mod admin;
pub mod auth;
pub mod car;
pub mod decimal;
pub mod earnings;
pub mod log;
pub mod order;
pub mod procedure;

use crate::utils::DEFAULT_PAGE_SIZE;

pub use admin::{CostAnalysisQuery, DateRange, PeriodType, TimeRange};
pub use auth::{Credentials, LoginRequest, RegisterRequest, TokenResponse, User, UserType, UserUpdate, VerifyResponse};
pub use car::{Car, CarCreate, CarUpdate, NewCarType};
pub use earnings::{EarningsReport, MonthlyDistributionResults, WorkerEarningsEntry, WorkerMonthlyEarnings, YearMonth};
pub use self::log::{LogCreate, MaintenanceLog};
pub use order::{Feedback, OpenOrder, Order, OrderCreate, OrderQuery, OrderStatus};
pub use procedure::{Procedure, ProcedureCreate, ProcedureNote, ProcedureStatus, ProcedureUpdate};

/// `page` / `page_size` pair shared by every listing endpoint (1-based)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}
