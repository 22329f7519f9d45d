//! The in-memory backend: a process-lifetime store of resource collections
//! plus per-operation handlers that emulate the wire behavior of the
//! service.
//!
//! Mock mode performs no signing, no canonicalization, and no network I/O.
//! Handlers read and write the store directly and return wire-shaped
//! [`ApiResponse`] values, so the same parser path runs for both backends
//! and calling code stays backend-agnostic.

use crate::{ApiResponse, OperationRequest};
use nimbus_core::time::{now, DateTime};
use nimbus_core::{Error, Result};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;

/// The resource categories every fresh store starts with.
pub const RESOURCE_CATEGORIES: &[&str] = &[
    "addresses",
    "instances",
    "key_pairs",
    "security_groups",
    "snapshots",
    "volumes",
];

/// One mock resource record: a free-form attribute map, the in-memory
/// equivalent of a parsed response element.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The mock backend's only persistent state.
///
/// A mapping of resource-category name to (resource-id → record), plus a
/// deletion-timestamp ledger keyed by resource-id. Exclusively owned by the
/// [`MockDispatcher`] that created it; never persisted across process
/// restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct MockState {
    collections: HashMap<String, HashMap<String, Record>>,
    deleted_at: HashMap<String, DateTime>,
}

impl MockState {
    /// A fresh store: one empty collection per resource category and an
    /// empty deletion ledger.
    pub fn new() -> Self {
        Self {
            collections: RESOURCE_CATEGORIES
                .iter()
                .map(|c| (c.to_string(), HashMap::new()))
                .collect(),
            deleted_at: HashMap::new(),
        }
    }

    /// Discard all data and return to the fresh-store state. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The records of one resource category.
    pub fn collection(&self, category: &str) -> Option<&HashMap<String, Record>> {
        self.collections.get(category)
    }

    /// Mutable access to one resource category.
    pub fn collection_mut(&mut self, category: &str) -> Option<&mut HashMap<String, Record>> {
        self.collections.get_mut(category)
    }

    /// Record the deletion time of a resource.
    pub fn mark_deleted(&mut self, resource_id: impl Into<String>) {
        self.deleted_at.insert(resource_id.into(), now());
    }

    /// When a resource was deleted, if it was.
    pub fn deleted_at(&self, resource_id: &str) -> Option<DateTime> {
        self.deleted_at.get(resource_id).copied()
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

/// A per-operation mock implementation.
///
/// Handlers run under the store lock, mutate the state, and return the
/// response the real service would have produced for a 200 (or fail the
/// way dispatch would).
pub type MockHandler =
    Box<dyn Fn(&mut MockState, &OperationRequest) -> Result<ApiResponse> + Send + Sync>;

/// The in-memory backend, exposing the same dispatch surface as the real
/// one.
///
/// The store is mutable shared state behind a `Mutex`; the design assumes
/// single-threaded or externally-serialized test usage.
pub struct MockDispatcher {
    state: Mutex<MockState>,
    handlers: HashMap<String, MockHandler>,
}

impl Debug for MockDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDispatcher")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDispatcher {
    /// Create a mock backend with a fresh store and no handlers.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::new()),
            handlers: HashMap::new(),
        }
    }

    /// Register the handler for one action.
    pub fn register(
        &mut self,
        action: impl Into<String>,
        handler: impl Fn(&mut MockState, &OperationRequest) -> Result<ApiResponse>
            + Send
            + Sync
            + 'static,
    ) {
        self.handlers.insert(action.into(), Box::new(handler));
    }

    /// Re-initialize the store to the empty state, discarding all prior
    /// mock data. Registered handlers are kept.
    pub fn reset(&self) {
        self.state.lock().expect("lock poisoned").reset();
    }

    /// Run a closure against the store, for seeding and inspection.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().expect("lock poisoned");
        f(&mut state)
    }

    /// Route one request to its registered handler.
    ///
    /// An action nobody registered fails with a not-implemented error,
    /// never a protocol error: there is no wire status to report.
    pub fn dispatch(&self, req: &OperationRequest) -> Result<ApiResponse> {
        let handler = self.handlers.get(&req.action).ok_or_else(|| {
            Error::not_implemented(format!("no mock handler registered for {}", req.action))
        })?;

        let mut state = self.state.lock().expect("lock poisoned");
        handler(&mut state, req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_fresh_store_has_empty_categories() {
        let state = MockState::new();
        for category in RESOURCE_CATEGORIES {
            assert!(state.collection(category).unwrap().is_empty());
        }
        assert!(state.collection("unknown").is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = MockState::new();
        let mut record = Record::new();
        record.insert("volumeId".to_string(), json!("vol-1"));
        state
            .collection_mut("volumes")
            .unwrap()
            .insert("vol-1".to_string(), record);
        state.mark_deleted("vol-0");

        state.reset();
        let once = state.clone();
        state.reset();

        assert_eq!(state, once);
        assert_eq!(state, MockState::new());
    }

    #[test]
    fn test_deletion_ledger() {
        let mut state = MockState::new();
        assert!(state.deleted_at("vol-1").is_none());
        state.mark_deleted("vol-1");
        assert!(state.deleted_at("vol-1").is_some());
    }

    #[test]
    fn test_unregistered_action_is_not_implemented() {
        let mock = MockDispatcher::new();
        let err = mock
            .dispatch(&OperationRequest::new("TerminateInstances"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
        assert!(err.to_string().contains("TerminateInstances"));
    }

    #[test]
    fn test_handlers_mutate_the_store() {
        let mut mock = MockDispatcher::new();
        mock.register("CreateKeyPair", |state, req| {
            let name = req
                .params
                .present()
                .into_iter()
                .find(|(k, _)| k == "KeyName")
                .map(|(_, v)| v)
                .unwrap_or_default();
            let mut record = Record::new();
            record.insert("keyName".to_string(), json!(name.clone()));
            state
                .collection_mut("key_pairs")
                .unwrap()
                .insert(name, record);
            Ok(ApiResponse::ok("<CreateKeyPairResponse/>"))
        });

        let req = OperationRequest::new("CreateKeyPair").with_param("KeyName", "deploy");
        let resp = mock.dispatch(&req).unwrap();
        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(
            mock.with_state(|s| s.collection("key_pairs").unwrap().len()),
            1
        );

        // Reset discards data but keeps the handler registered.
        mock.reset();
        assert_eq!(
            mock.with_state(|s| s.collection("key_pairs").unwrap().len()),
            0
        );
        assert!(mock.dispatch(&req).is_ok());
    }
}
