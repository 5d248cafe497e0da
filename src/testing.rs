//! Test doubles shared by the unit tests.

use crate::credentials::Credentials;
use crate::region::Region;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Credentials of an EU account with default contact `c1` and department `d1`.
pub fn get_credentials() -> Credentials {
    Credentials {
        client_id: String::from("1000.CLIENTID"),
        client_secret: String::from("secret"),
        refresh_token: String::from("1000.refresh"),
        org_id: String::from("org1"),
        contact_id: String::from("c1"),
        department_id: String::from("d1"),
        region: Region::Europe,
    }
}

/// Transport that records every request and replays queued responses in order.
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> RecordingTransport {
        RecordingTransport {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    pub fn respond(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn fail_with_timeout(&self) {
        self.responses.borrow_mut().push_back(Err(TransportError::Timeout));
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn request(&self, index: usize) -> HttpRequest {
        self.requests.borrow()[index].clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request(String::from("no response queued"))))
    }
}
