//! Behavioural integration tests for the inspection lifecycle.
//!
//! These tests drive the lifecycle service end to end through the public
//! crate API with in-memory adapters, covering the happy path from task
//! creation to report generation as well as the rejection and rework loop.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use snagcheck::catalog::{
    CatalogEntry, IssueCatalog, IssueSeverity, ItemStatus, ScoringRules,
};
use snagcheck::inspection::adapters::BuiltinReferenceData;
use snagcheck::inspection::domain::{DocumentStatus, InspectionDocument};
use snagcheck::workflow::adapters::{
    InMemoryInspectionStore, InMemoryInspectorDirectory, InMemoryReportRenderer, InMemoryTaskStore,
};
use snagcheck::workflow::domain::{Actor, ActorId, AuditAction, InspectorIdentity, Role};
use snagcheck::workflow::services::{
    CreateTaskRequest, InspectionLifecycleService, LifecycleError,
};
use tokio::runtime::Runtime;

type Service = InspectionLifecycleService<
    InMemoryTaskStore,
    InMemoryInspectionStore,
    InMemoryInspectorDirectory,
    BuiltinReferenceData,
    InMemoryReportRenderer,
    DefaultClock,
>;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

struct Deployment {
    service: Service,
    renderer: InMemoryReportRenderer,
    admin: Actor,
    inspector: Actor,
}

/// Builds a service over in-memory adapters with one registered inspector
/// and a small living-room issue catalog.
fn deploy() -> Deployment {
    let directory = InMemoryInspectorDirectory::new();
    let inspector_id = ActorId::new();
    directory.register(
        InspectorIdentity::new(inspector_id, "Priya Sharma").with_email("priya@example.com"),
    );

    let catalog = IssueCatalog::new([
        CatalogEntry::new("Living Room", "Flooring", "Hollow tiles", IssueSeverity::Major),
        CatalogEntry::new("Living Room", "Doors", "Misaligned door", IssueSeverity::Minor),
        CatalogEntry::new("Kitchen", "Plumbing", "Leaking trap", IssueSeverity::Critical),
    ]);

    let renderer = InMemoryReportRenderer::new();
    let service = InspectionLifecycleService::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(InMemoryInspectionStore::new()),
        Arc::new(directory),
        Arc::new(BuiltinReferenceData::new(
            catalog,
            ScoringRules::flat_default(),
        )),
        Arc::new(renderer.clone()),
        Arc::new(DefaultClock),
        "https://cdn.example.com",
    );

    Deployment {
        service,
        renderer,
        admin: Actor::new(ActorId::new(), Role::Admin),
        inspector: Actor::new(inspector_id, Role::Inspector),
    }
}

fn request(deployment: &Deployment) -> CreateTaskRequest {
    let overrides = snagcheck::inspection::domain::MetadataOverrides {
        client_email: Some("asha@example.com".to_owned()),
        ..Default::default()
    };
    CreateTaskRequest::new(
        "PROP-42",
        "Asha Verma",
        "12 Lake Road",
        deployment.inspector.id,
    )
    .with_overrides(overrides)
}

fn filled_body(document: &InspectionDocument, status: ItemStatus) -> serde_json::Value {
    let mut edited = document.clone();
    for room in &mut edited.rooms {
        for item in &mut room.items {
            item.status = Some(status);
        }
    }
    serde_json::to_value(&edited).expect("should serialise")
}

// ============================================================================
// Approval Path
// ============================================================================

/// A task is created, the inspector fills and submits the document, the
/// admin approves, and a report is generated from the frozen result.
#[test]
fn full_approval_path() -> Result<(), eyre::Report> {
    let rt = test_runtime();
    let deployment = deploy();

    let created = rt.block_on(
        deployment
            .service
            .create_task(deployment.admin, request(&deployment)),
    )?;
    assert_eq!(created.record.status(), DocumentStatus::Draft);

    // The catalog seeded two living-room items and one kitchen item.
    let document = created.record.document();
    let seeded: usize = document.rooms.iter().map(|room| room.items.len()).sum();
    assert_eq!(seeded, 3);

    let body = filled_body(document, ItemStatus::Pass);
    let record = rt.block_on(deployment.service.update_document(
        deployment.inspector,
        created.record.id(),
        &body,
    ))?;
    assert_eq!(record.status(), DocumentStatus::InProgress);

    let record = rt.block_on(
        deployment
            .service
            .submit(deployment.inspector, record.id(), None),
    )?;
    assert_eq!(record.status(), DocumentStatus::Submitted);
    assert_eq!(record.document().derived.overall_score, Some(100));

    let record = rt.block_on(deployment.service.approve(deployment.admin, record.id()))?;
    assert_eq!(record.status(), DocumentStatus::Completed);
    assert_eq!(record.approved_by(), Some(deployment.admin.id));

    let artifact = rt.block_on(
        deployment
            .service
            .generate_report(deployment.admin, record.id()),
    )?;
    assert!(artifact.locator.starts_with("memory://reports/"));

    let rendered = deployment.renderer.rendered();
    let report = rendered.first().expect("one rendered report");
    assert_eq!(report.client_name, "Asha Verma");
    assert_eq!(report.property_address, "12 Lake Road");
    assert_eq!(report.inspector_name, "Priya Sharma");
    // The approving admin resolves through the directory or falls back.
    assert_eq!(report.verifier_name, "Admin");
    assert!(report.findings.is_empty());

    let trail = rt.block_on(deployment.service.audit_trail(record.id()))?;
    let actions: Vec<AuditAction> = trail.iter().map(|entry| entry.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Created,
            AuditAction::Modified,
            AuditAction::Submitted,
            AuditAction::Approved,
            AuditAction::ReportGenerated,
        ]
    );
    Ok(())
}

// ============================================================================
// Rejection and Rework
// ============================================================================

/// A submitted document is rejected, reworked by its inspector, and
/// resubmitted with recomputed metrics.
#[test]
fn rejection_and_rework_loop() -> Result<(), eyre::Report> {
    let rt = test_runtime();
    let deployment = deploy();

    let created = rt.block_on(
        deployment
            .service
            .create_task(deployment.admin, request(&deployment)),
    )?;
    let body = filled_body(created.record.document(), ItemStatus::Pass);
    rt.block_on(deployment.service.update_document(
        deployment.inspector,
        created.record.id(),
        &body,
    ))?;
    rt.block_on(
        deployment
            .service
            .submit(deployment.inspector, created.record.id(), None),
    )?;

    let record = rt.block_on(deployment.service.reject(
        deployment.admin,
        created.record.id(),
        "Kitchen photos missing",
    ))?;
    assert_eq!(record.status(), DocumentStatus::Rejected);
    assert_eq!(record.rejection_reason(), Some("Kitchen photos missing"));

    // Rework: flag the kitchen item this time.
    let rework = filled_body(record.document(), ItemStatus::Major);
    let record = rt.block_on(deployment.service.update_document(
        deployment.inspector,
        record.id(),
        &rework,
    ))?;
    assert_eq!(record.status(), DocumentStatus::InProgress);
    assert_eq!(record.rejection_reason(), None);

    let record = rt.block_on(
        deployment
            .service
            .submit(deployment.inspector, record.id(), None),
    )?;
    assert_eq!(record.status(), DocumentStatus::Submitted);
    let derived = &record.document().derived;
    assert_eq!(derived.severity_counts.major, 3);
    assert_eq!(derived.total_issues, 3);
    Ok(())
}

// ============================================================================
// Gates
// ============================================================================

/// Role and ownership gates hold across the service surface.
#[test]
fn authorization_gates_hold() {
    let rt = test_runtime();
    let deployment = deploy();

    let created = rt
        .block_on(
            deployment
                .service
                .create_task(deployment.admin, request(&deployment)),
        )
        .expect("task creation should succeed");

    // An unrelated inspector can neither read nor edit.
    let stranger = Actor::new(ActorId::new(), Role::Inspector);
    let result = rt.block_on(deployment.service.inspection(stranger, created.record.id()));
    assert!(matches!(result, Err(LifecycleError::NotOwner(_))));

    let body = filled_body(created.record.document(), ItemStatus::Pass);
    let result = rt.block_on(deployment.service.update_document(
        stranger,
        created.record.id(),
        &body,
    ));
    assert!(matches!(result, Err(LifecycleError::NotOwner(_))));

    // Approval and deletion stay admin-only.
    let result = rt.block_on(
        deployment
            .service
            .approve(deployment.inspector, created.record.id()),
    );
    assert!(matches!(
        result,
        Err(LifecycleError::AuthorizationDenied { .. })
    ));
    let result = rt.block_on(
        deployment
            .service
            .delete(deployment.inspector, created.record.id()),
    );
    assert!(matches!(
        result,
        Err(LifecycleError::AuthorizationDenied { .. })
    ));
}

/// Submission rules stop an incomplete document at the gate and report
/// every violation at once.
#[test]
fn incomplete_submissions_are_reported_in_full() {
    let rt = test_runtime();
    let deployment = deploy();

    let created = rt
        .block_on(
            deployment
                .service
                .create_task(deployment.admin, request(&deployment)),
        )
        .expect("task creation should succeed");
    let untouched = serde_json::to_value(created.record.document()).expect("should serialise");
    rt.block_on(deployment.service.update_document(
        deployment.inspector,
        created.record.id(),
        &untouched,
    ))
    .expect("edit should succeed");

    let result = rt.block_on(
        deployment
            .service
            .submit(deployment.inspector, created.record.id(), None),
    );
    let Err(LifecycleError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    // One error per status-less seeded item.
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|error| error.contains("Living Room")));
    assert!(errors.iter().any(|error| error.contains("Kitchen")));
}
