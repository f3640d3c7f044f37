use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// In-memory transport answering from a queue and recording what was sent.
#[derive(Clone, Default)]
pub(crate) struct StubTransport {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    replies: VecDeque<Result<HttpResponse, RequestError>>,
    requests: Vec<HttpRequest>,
}

impl StubTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.inner.borrow_mut().replies.push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.inner
            .borrow_mut()
            .replies
            .push_back(Err(RequestError::Transport(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request.clone());
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("no stubbed reply".to_string())))
    }
}
