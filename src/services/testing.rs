//! Recording transport for service tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use crate::services::api_client::{ApiClient, ApiRequest, RawResponse, Transport};
use crate::services::error::ApiError;
use crate::utils::{KeyValueStore, MemoryStore, TOKEN_STORAGE_KEY};

pub const TEST_BASE_URL: &str = "http://test/api/v1";

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub url: String,
    pub request: ApiRequest,
    pub bearer: Option<String>,
}

/// Replays queued responses in order; answers `200 null` once the queue is empty
#[derive(Default)]
pub struct MockTransport {
    calls: RefCell<Vec<RecordedCall>>,
    responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        url: &str,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            request: request.clone(),
            bearer: bearer.map(str::to_string),
        });
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(RawResponse {
            status: 200,
            body: "null".to_string(),
        }))
    }
}

pub fn client_with_storage(storage: Rc<dyn KeyValueStore>) -> ApiClient<MockTransport> {
    ApiClient::with_transport(TEST_BASE_URL, MockTransport::new(), storage)
}

pub fn client_with_token(token: Option<&str>) -> ApiClient<MockTransport> {
    let storage = MemoryStore::new();
    if let Some(token) = token {
        storage.set(TOKEN_STORAGE_KEY, token).unwrap();
    }
    client_with_storage(Rc::new(storage))
}
