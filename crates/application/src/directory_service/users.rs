use idbridge_domain::{UserLifecycleTransition, UserStatus};

use crate::directory_inputs::{CreateUserInput, UpdateUserInput};
use crate::idp_ports::IdpError;
use crate::partial_update::{UpdatePlan, plan_user_update};
use crate::representation_adapter::denormalize_user_create;

use super::*;

impl IdentityDirectoryService {
    /// Creates a user. The returned status is whatever the provider reports.
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        let payload = denormalize_user_create(&input);
        let external = self
            .identity_provider
            .create_user(payload, input.activate)
            .await
            .map_err(|error| {
                RemoteCall::new("create", format!("user '{}'", input.login)).failed(error)
            })?;
        normalize_user(external)
    }

    /// Returns one user.
    pub async fn get_user(&self, user_id: &str) -> AppResult<User> {
        let user_id = UserId::new(user_id)?;
        self.read_user(&user_id).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.identity_provider
            .list_users()
            .await
            .map_err(|error| RemoteCall::new("list", "users").failed(error))?
            .into_iter()
            .map(normalize_user)
            .collect()
    }

    /// Applies a partial update. An update without supplied fields is a read.
    pub async fn update_user(&self, user_id: &str, input: UpdateUserInput) -> AppResult<User> {
        let user_id = UserId::new(user_id)?;
        let payload = match plan_user_update(&input) {
            UpdatePlan::NoChanges => return self.read_user(&user_id).await,
            UpdatePlan::Apply(payload) => payload,
        };

        let external = self
            .identity_provider
            .update_user(&user_id, payload)
            .await
            .map_err(|error| RemoteCall::new("update", format!("user '{user_id}'")).failed(error))?;
        normalize_user(external)
    }

    /// Deactivates then deletes a user.
    ///
    /// A user that is already deprovisioned skips deactivation, so a delete
    /// left half done by an earlier partial failure can be retried. When
    /// deactivation succeeds but deletion fails the user stays deprovisioned
    /// and a partial failure is returned.
    pub async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        let user_id = UserId::new(user_id)?;

        let current = self.read_user(&user_id).await?;
        if current.status != Some(UserStatus::Deprovisioned) {
            self.request_transition(&user_id, UserLifecycleTransition::Deactivate)
                .await?;
        }

        self.identity_provider
            .delete_user(&user_id)
            .await
            .map_err(|_| AppError::PartialFailure {
                step: "delete".to_owned(),
                entity_state: UserStatus::Deprovisioned.to_string(),
            })
    }

    /// Activates a provisioned or recovering user.
    pub async fn activate_user(&self, user_id: &str) -> AppResult<()> {
        self.transition_user(user_id, UserLifecycleTransition::Activate)
            .await
    }

    /// Deactivates a user.
    pub async fn deactivate_user(&self, user_id: &str) -> AppResult<()> {
        self.transition_user(user_id, UserLifecycleTransition::Deactivate)
            .await
    }

    /// Suspends an active user.
    pub async fn suspend_user(&self, user_id: &str) -> AppResult<()> {
        self.transition_user(user_id, UserLifecycleTransition::Suspend)
            .await
    }

    /// Returns a suspended user to active.
    pub async fn unsuspend_user(&self, user_id: &str) -> AppResult<()> {
        self.transition_user(user_id, UserLifecycleTransition::Unsuspend)
            .await
    }

    /// Requests a lifecycle transition; the provider decides whether it applies.
    pub async fn transition_user(
        &self,
        user_id: &str,
        transition: UserLifecycleTransition,
    ) -> AppResult<()> {
        let user_id = UserId::new(user_id)?;
        self.request_transition(&user_id, transition).await
    }

    async fn request_transition(
        &self,
        user_id: &UserId,
        transition: UserLifecycleTransition,
    ) -> AppResult<()> {
        self.identity_provider
            .transition_user(user_id, transition)
            .await
            .map_err(|error| match error {
                IdpError::Status {
                    status: 400 | 403 | 409,
                    ..
                } => AppError::RemoteValidation(transition_rejected(user_id, transition)),
                other => RemoteCall::new(transition.as_str(), format!("user '{user_id}'"))
                    .failed(other),
            })
    }
}

fn transition_rejected(user_id: &UserId, transition: UserLifecycleTransition) -> String {
    let allowed = transition
        .allowed_from()
        .iter()
        .map(UserStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "cannot {} user '{user_id}' in its current status; allowed only from {allowed}",
        transition.as_str()
    )
}
