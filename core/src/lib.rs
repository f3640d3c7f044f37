//! Client core for a to-do list backed by a JSON document store.
//!
//! # Overview
//! `RequestHook` runs one HTTP call at a time and tracks its loading flag and
//! last error. `TaskClient` builds the store's requests and parses its
//! replies. `TaskBoard` ties both together into the state a list view and an
//! add-task form render from.
//!
//! # Design
//! - The core never opens sockets itself; it calls a `Transport`.
//!   `UreqTransport` is the blocking implementation shipped here.
//! - Failures are values: every call returns a `Result` and also leaves a
//!   display message in the hook's `RequestState`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod board;
pub mod client;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod hook;
pub mod http;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use board::TaskBoard;
pub use client::TaskClient;
pub use config::StoreConfig;
pub use descriptor::RequestDescriptor;
pub use error::{RequestError, FALLBACK_MESSAGE, REQUEST_FAILED};
pub use hook::{RequestHook, RequestState};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{PushResponse, TaskItem, TaskRecord};
