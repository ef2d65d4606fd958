use std::sync::Arc;

use idbridge_core::AppError;
use idbridge_domain::PrincipalKind;

use crate::idp_ports::IdpError;
use crate::test_support::FakeIdentityProvider;

use super::{AssignmentOrchestrator, AssignmentOutcome};

fn orchestrator(fake: FakeIdentityProvider) -> (AssignmentOrchestrator, Arc<FakeIdentityProvider>) {
    let fake = Arc::new(fake);
    (AssignmentOrchestrator::new(fake.clone()), fake)
}

#[tokio::test]
async fn assigning_twice_reports_already_assigned() {
    let (orchestrator, _) = orchestrator(
        FakeIdentityProvider::default()
            .with_user("00u1", "ACTIVE")
            .with_role("cr0audit", "CUSTOM"),
    );

    let first = orchestrator
        .assign_role(PrincipalKind::User, "00u1", "cr0audit")
        .await;
    let second = orchestrator
        .assign_role(PrincipalKind::User, "00u1", "cr0audit")
        .await;

    assert!(matches!(first, Ok(AssignmentOutcome::Assigned)));
    assert!(matches!(second, Ok(AssignmentOutcome::AlreadyAssigned)));

    let roles = orchestrator
        .list_assigned_roles(PrincipalKind::User, "00u1")
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(roles.len(), 1);
}

#[tokio::test]
async fn unassigning_missing_pair_is_not_found() {
    let (orchestrator, _) = orchestrator(FakeIdentityProvider::default());

    let result = orchestrator
        .unassign_role(PrincipalKind::Group, "00g1", "cr0audit")
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == "role 'cr0audit' is not assigned to group '00g1'"
    ));
}

#[tokio::test]
async fn unassigning_from_unknown_principal_names_the_principal() {
    let (orchestrator, _) = orchestrator(
        FakeIdentityProvider::default().failing("unassign_role", IdpError::status(404, "gone")),
    );

    let result = orchestrator
        .unassign_role(PrincipalKind::User, "00ugone", "cr0audit")
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == "user '00ugone' not found"
    ));
}

#[tokio::test]
async fn blank_ids_fail_before_any_remote_call() {
    let (orchestrator, fake) = orchestrator(FakeIdentityProvider::default());

    let missing_principal = orchestrator
        .assign_role(PrincipalKind::User, " ", "cr0audit")
        .await;
    let missing_role = orchestrator
        .assign_role(PrincipalKind::Group, "00g1", "")
        .await;
    let missing_member = orchestrator.add_member("00g1", "").await;

    assert!(matches!(missing_principal, Err(AppError::Validation(_))));
    assert!(matches!(missing_role, Err(AppError::Validation(_))));
    assert!(matches!(missing_member, Err(AppError::Validation(_))));
    assert!(fake.calls().await.is_empty());
}

#[tokio::test]
async fn membership_is_idempotent_on_add_and_strict_on_remove() {
    let (orchestrator, _) = orchestrator(
        FakeIdentityProvider::default()
            .with_user("00u1", "ACTIVE")
            .with_group("00g1", "OKTA_GROUP")
            .with_member("00g1", "00u1"),
    );

    let added = orchestrator.add_member("00g1", "00u1").await;
    assert!(matches!(added, Ok(AssignmentOutcome::AlreadyAssigned)));

    let members = orchestrator
        .list_members("00g1")
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(members.len(), 1);

    assert!(orchestrator.remove_member("00g1", "00u1").await.is_ok());
    let removed_again = orchestrator.remove_member("00g1", "00u1").await;
    assert!(matches!(removed_again, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn provider_outage_is_remote_unavailable() {
    let (orchestrator, _) = orchestrator(
        FakeIdentityProvider::default()
            .failing("assign_role", IdpError::Transport("connection reset".to_owned())),
    );

    let result = orchestrator
        .assign_role(PrincipalKind::User, "00u1", "USER_ADMIN")
        .await;

    assert!(matches!(result, Err(AppError::RemoteUnavailable(_))));
}
