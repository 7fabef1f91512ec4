//! In-memory adapters for workflow ports, used by tests and demos.

use crate::inspection::domain::{CanonicalReport, InspectionId};
use crate::workflow::domain::{
    ActorId, AuditEntry, InspectionRecord, InspectionTask, InspectorIdentity, TaskId,
};
use crate::workflow::ports::{
    InspectionStore, InspectorDirectory, InspectorDirectoryResult, RenderResult, RenderedArtifact,
    ReportRenderer, StoreError, StoreResult, TaskStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

fn poisoned(err: impl std::fmt::Display) -> StoreError {
    StoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, InspectionTask>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory task store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: &InspectionTask) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.contains_key(&task.id()) {
            return Err(StoreError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &InspectionTask) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.contains_key(&task.id()) {
            return Err(StoreError::TaskNotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<InspectionTask>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::TaskNotFound(id))
    }
}

#[derive(Debug, Default)]
struct InspectionState {
    records: HashMap<InspectionId, InspectionRecord>,
    task_index: HashMap<TaskId, InspectionId>,
    // Append-only; entries are kept after their record is deleted.
    ledger: Vec<AuditEntry>,
}

/// Thread-safe in-memory inspection store with an append-only ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInspectionStore {
    state: Arc<RwLock<InspectionState>>,
}

impl InMemoryInspectionStore {
    /// Creates an empty in-memory inspection store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InspectionStore for InMemoryInspectionStore {
    async fn create(&self, record: &InspectionRecord) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.records.contains_key(record.id()) {
            return Err(StoreError::DuplicateInspection(record.id().clone()));
        }
        state.task_index.insert(record.task_id(), record.id().clone());
        state.records.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &InspectionRecord) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.records.contains_key(record.id()) {
            return Err(StoreError::InspectionNotFound(record.id().clone()));
        }
        state.records.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InspectionId) -> StoreResult<Option<InspectionRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.records.get(id).cloned())
    }

    async fn find_by_task(&self, task_id: TaskId) -> StoreResult<Option<InspectionRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        let record = state
            .task_index
            .get(&task_id)
            .and_then(|id| state.records.get(id))
            .cloned();
        Ok(record)
    }

    async fn delete(&self, id: &InspectionId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let record = state
            .records
            .remove(id)
            .ok_or_else(|| StoreError::InspectionNotFound(id.clone()))?;
        state.task_index.remove(&record.task_id());
        Ok(())
    }

    async fn append_audit_entry(&self, entry: &AuditEntry) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.ledger.push(entry.clone());
        Ok(())
    }

    async fn audit_entries(&self, id: &InspectionId) -> StoreResult<Vec<AuditEntry>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .ledger
            .iter()
            .filter(|entry| &entry.inspection_id == id)
            .cloned()
            .collect())
    }
}

/// In-memory inspector directory seeded through [`register`].
///
/// [`register`]: InMemoryInspectorDirectory::register
#[derive(Debug, Clone, Default)]
pub struct InMemoryInspectorDirectory {
    state: Arc<RwLock<HashMap<ActorId, InspectorIdentity>>>,
}

impl InMemoryInspectorDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an inspector identity, replacing any existing entry.
    pub fn register(&self, identity: InspectorIdentity) {
        if let Ok(mut state) = self.state.write() {
            state.insert(identity.id, identity);
        }
    }
}

#[async_trait]
impl InspectorDirectory for InMemoryInspectorDirectory {
    async fn find_inspector(
        &self,
        id: ActorId,
    ) -> InspectorDirectoryResult<Option<InspectorIdentity>> {
        let found = self
            .state
            .read()
            .ok()
            .and_then(|state| state.get(&id).cloned());
        Ok(found)
    }
}

/// Renderer that stores reports in memory and returns synthetic locators.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRenderer {
    rendered: Arc<RwLock<Vec<CanonicalReport>>>,
}

impl InMemoryReportRenderer {
    /// Creates an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every report rendered so far, in order.
    #[must_use]
    pub fn rendered(&self) -> Vec<CanonicalReport> {
        self.rendered
            .read()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReportRenderer for InMemoryReportRenderer {
    async fn render(&self, report: &CanonicalReport) -> RenderResult<RenderedArtifact> {
        let locator = format!("memory://reports/{}.pdf", report.report_id);
        if let Ok(mut reports) = self.rendered.write() {
            reports.push(report.clone());
        }
        Ok(RenderedArtifact { locator })
    }
}
