use idbridge_domain::PrincipalKind;

use crate::assignment_orchestrator::AssignmentOutcome;

use super::*;

impl IdentityDirectoryService {
    /// Assigns a role to a user or group.
    pub async fn assign_role(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
        role_id: &str,
    ) -> AppResult<AssignmentOutcome> {
        self.assignments
            .assign_role(kind, principal_id, role_id)
            .await
    }

    /// Removes a role from a user or group.
    pub async fn unassign_role(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
        role_id: &str,
    ) -> AppResult<()> {
        self.assignments
            .unassign_role(kind, principal_id, role_id)
            .await
    }

    /// Lists roles assigned to a user or group.
    pub async fn list_assigned_roles(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
    ) -> AppResult<Vec<Role>> {
        self.assignments.list_assigned_roles(kind, principal_id).await
    }
}
