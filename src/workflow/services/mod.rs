//! Orchestration services for the workflow module.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, CreatedInspection, InspectionLifecycleService, LifecycleError,
    LifecycleResult,
};
