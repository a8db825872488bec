/*
[INPUT]:  Settled submissions and fetches
[OUTPUT]: Current status line and accumulated result list
[POS]:    Client core - single-owner state cells
[UPDATE]: When status wording or merge semantics change
*/

pub const STATUS_SUBMITTING: &str = "Submitting...";
pub const STATUS_FETCHING: &str = "Fetching results...";
pub const STATUS_NO_NEW_RESULTS: &str = "No new results in queue";

/// Outcome of the most recent attempt; every write replaces the previous one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage(String);

impl StatusMessage {
    pub fn set(&mut self, message: impl Into<String>) {
        self.0 = message.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Results accumulated across fetches, newest batch first.
///
/// The only mutation is [`ResultList::prepend_batch`]; entries are never
/// dropped, deduplicated or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList(Vec<String>);

impl ResultList {
    /// Insert `batch` ahead of everything already held, keeping its order.
    /// Returns the number of entries added.
    pub fn prepend_batch(&mut self, batch: Vec<String>) -> usize {
        let added = batch.len();
        if added > 0 {
            let older = std::mem::replace(&mut self.0, batch);
            self.0.extend(older);
        }
        added
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

pub(crate) fn queued_status(payload_json: &str) -> String {
    format!("Queued: {payload_json}")
}

pub(crate) fn fetched_status(count: usize) -> String {
    format!("Fetched {count} result(s)")
}
