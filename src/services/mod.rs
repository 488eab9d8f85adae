pub mod api_client;
pub mod error;
pub mod auth_service;
pub mod order_service;
pub mod worker_order_service;
pub mod car_service;
pub mod procedure_service;
pub mod log_service;
pub mod admin_service;
pub mod earnings_service;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::{ApiClient, ApiRequest, FetchTransport, Method, RawResponse, Transport};
pub use error::ApiError;
pub use auth_service::{registration_error_message, REGISTRATION_FAILED};
pub use order_service::{feedback_error_message, FEEDBACK_FAILED};
pub use worker_order_service::{ActionResponse, OrderAction, WorkerOrderScope};
