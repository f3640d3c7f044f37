//! State model behind the task list view and the add-task form.
//!
//! # Design
//! The list and the form each own a `RequestHook`, so a failed submit does
//! not wipe the list's error and vice versa. Both hooks share one transport
//! (cloned), which for `UreqTransport` means one connection pool.

use tracing::info;

use crate::client::TaskClient;
use crate::error::RequestError;
use crate::hook::{RequestHook, RequestState};
use crate::transport::Transport;
use crate::types::TaskItem;

pub struct TaskBoard<T> {
    client: TaskClient,
    fetch: RequestHook<T>,
    submit: RequestHook<T>,
    tasks: Vec<TaskItem>,
}

impl<T: Transport + Clone> TaskBoard<T> {
    pub fn new(client: TaskClient, transport: T) -> Self {
        Self {
            client,
            fetch: RequestHook::new(transport.clone()),
            submit: RequestHook::new(transport),
            tasks: Vec::new(),
        }
    }

    /// Observe the list hook, e.g. to show a spinner while the list loads.
    pub fn with_fetch_observer(mut self, observer: impl FnMut(&RequestState) + 'static) -> Self {
        self.fetch = self.fetch.with_observer(observer);
        self
    }

    /// Observe the form hook, e.g. to disable the submit button in flight.
    pub fn with_submit_observer(mut self, observer: impl FnMut(&RequestState) + 'static) -> Self {
        self.submit = self.submit.with_observer(observer);
        self
    }

    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    pub fn fetch_state(&self) -> &RequestState {
        self.fetch.state()
    }

    pub fn submit_state(&self) -> &RequestState {
        self.submit.state()
    }

    /// Reload the list from the store. Also serves as the retry action
    /// after a failed load; on failure the current list is kept.
    pub fn fetch_tasks(&mut self) -> Result<&[TaskItem], RequestError> {
        let client = &self.client;
        let tasks = self
            .fetch
            .send_request_with(client.build_fetch_tasks(), |document| {
                client.parse_fetch_tasks(document)
            })?;
        info!(count = tasks.len(), "tasks loaded");
        self.tasks = tasks;
        Ok(&self.tasks)
    }

    /// Submit a new task and append it to the list.
    ///
    /// Blank input is ignored without a request and yields `Ok(None)`.
    pub fn add_task(&mut self, text: &str) -> Result<Option<TaskItem>, RequestError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let client = &self.client;
        let descriptor = client.build_add_task(text)?;
        let task = self
            .submit
            .send_request_with(descriptor, |reply| client.parse_add_task(text, reply))?;
        info!(id = %task.id, "task added");
        self.tasks.push(task.clone());
        Ok(Some(task))
    }
}
