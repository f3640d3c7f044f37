//! Per-call request parameters.

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};

/// Everything needed to perform one HTTP call.
///
/// Built fresh by the caller for every call and consumed by
/// `RequestHook::send_request`. Omitted fields take the defaults of a plain
/// GET: no headers and no body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Option<HttpMethod>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Any value is sent, `Value::Null` and `false` included (as `null` and
    /// `false`); leave the body unset to send none.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach any serializable value as the JSON body.
    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, RequestError> {
        let value =
            serde_json::to_value(body).map_err(|e| RequestError::Serialization(e.to_string()))?;
        Ok(self.body(value))
    }

    /// Resolve defaults and serialize the body.
    pub fn into_request(self) -> Result<HttpRequest, RequestError> {
        let body = self
            .body
            .map(|value| serde_json::to_string(&value))
            .transpose()
            .map_err(|e| RequestError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: self.method.unwrap_or_default(),
            url: self.url,
            headers: self.headers,
            body,
        })
    }
}
