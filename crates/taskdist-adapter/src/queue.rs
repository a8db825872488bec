/*
[INPUT]:  Task payloads and fetch requests from the client core
[OUTPUT]: Async queue abstraction implemented by the HTTP client
[POS]:    Seam between client state logic and the transport
[UPDATE]: When the core needs a new queue operation
*/

use async_trait::async_trait;

use crate::http::{Result, TaskQueueClient};
use crate::types::{TaskAccepted, TaskPayload};

/// Remote task queue as seen by the client core
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Hand one task to the queue
    async fn submit_task(&self, payload: &TaskPayload) -> Result<TaskAccepted>;

    /// Fetch the batch of results not yet delivered
    async fn fetch_results(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl TaskQueue for TaskQueueClient {
    async fn submit_task(&self, payload: &TaskPayload) -> Result<TaskAccepted> {
        TaskQueueClient::submit_task(self, payload).await
    }

    async fn fetch_results(&self) -> Result<Vec<String>> {
        TaskQueueClient::fetch_results(self).await
    }
}
