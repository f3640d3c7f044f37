//! Request lifecycle helper: one HTTP call with loading and error state.
//!
//! # Design
//! `RequestHook` owns a transport and a `RequestState`. Every call walks the
//! same sequence: mark loading and clear the error, execute, check the
//! status, decode JSON, hand the data to the caller, record the error if any
//! step failed, clear loading. The optional observer sees the state after
//! the start and settle transitions, which is how a host UI re-renders.
//!
//! `send_request` takes `&mut self`, so a single hook can never have two
//! calls in flight. Components that need independent requests hold
//! independent hooks.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::descriptor::RequestDescriptor;
use crate::error::RequestError;
use crate::http::HttpResponse;
use crate::transport::Transport;

/// Loading flag and last error of a `RequestHook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub is_loading: bool,
    pub error: Option<String>,
}

type Observer = Box<dyn FnMut(&RequestState)>;

pub struct RequestHook<T> {
    transport: T,
    state: RequestState,
    observer: Option<Observer>,
}

impl<T: Transport> RequestHook<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RequestState::default(),
            observer: None,
        }
    }

    /// Register a callback run after every state transition.
    pub fn with_observer(mut self, observer: impl FnMut(&RequestState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Perform the call and return the parsed JSON body.
    pub fn send_request(&mut self, descriptor: RequestDescriptor) -> Result<Value, RequestError> {
        self.send_request_with(descriptor, Ok)
    }

    /// Perform the call and decode the body into `D`.
    pub fn send_request_as<D: DeserializeOwned>(
        &mut self,
        descriptor: RequestDescriptor,
    ) -> Result<D, RequestError> {
        self.send_request_with(descriptor, |value| {
            serde_json::from_value(value).map_err(|e| RequestError::Deserialization(e.to_string()))
        })
    }

    /// Perform the call and hand the parsed body to `on_data`.
    ///
    /// `on_data` runs at most once, and only for a 2xx response whose body is
    /// valid JSON. An error it returns is recorded like any other failure.
    pub fn send_request_with<R, F>(
        &mut self,
        descriptor: RequestDescriptor,
        on_data: F,
    ) -> Result<R, RequestError>
    where
        F: FnOnce(Value) -> Result<R, RequestError>,
    {
        self.update(RequestState {
            is_loading: true,
            error: None,
        });

        let result = self.perform(descriptor).and_then(on_data);

        let error = match &result {
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "request failed");
                Some(err.message())
            }
        };
        self.update(RequestState {
            is_loading: false,
            error,
        });
        result
    }

    fn perform(&self, descriptor: RequestDescriptor) -> Result<Value, RequestError> {
        let request = descriptor.into_request()?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.execute(&request)?;
        check_status(&response)?;
        debug!(status = response.status, url = %request.url, "request succeeded");

        serde_json::from_str(&response.body)
            .map_err(|e| RequestError::Deserialization(e.to_string()))
    }

    fn update(&mut self, state: RequestState) {
        self.state = state;
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }
}

fn check_status(response: &HttpResponse) -> Result<(), RequestError> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
