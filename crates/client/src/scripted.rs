//! A scripted transport that records every request.
//!
//! Each call to `execute` records the request and returns the next scripted
//! response in the queue. Panics if more calls are made than responses
//! provided. Tests use the recorded requests to assert on request shape
//! (paths, bearer headers, body fields present or omitted).

use async_trait::async_trait;
use docquery_core::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub fn respond(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    /// Queue a bodyless response with the given status.
    pub fn respond_status(&self, status: u16) {
        self.respond(status, Value::Null);
    }

    /// Queue a transport failure (connection refused, etc).
    pub fn respond_transport_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.into())));
    }

    /// Everything that has been sent through this transport, in order.
    pub fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => panic!(
                "ScriptedTransport: no scripted response left (request #{})",
                self.request_count()
            ),
        }
    }
}
