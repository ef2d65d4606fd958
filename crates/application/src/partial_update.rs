//! Builds minimal provider payloads from partial update requests.
//!
//! A field counts as supplied only when it is present and non-blank. Fields
//! that are not supplied are left out of the payload so the provider keeps
//! its current value.

use idbridge_domain::ProfileMap;

use crate::directory_inputs::{UpdateGroupInput, UpdateRoleInput, UpdateUserInput};
use crate::idp_ports::{
    ExternalGroupProfile, ExternalGroupWrite, ExternalRoleWrite, ExternalUserProfile,
    ExternalUserUpdate,
};
use crate::representation_adapter::without_keys;

/// Result of merging an update request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan<P> {
    /// Nothing was supplied; the caller reads instead of writing.
    NoChanges,
    /// Payload containing exactly the supplied fields.
    Apply(P),
}

impl<P> UpdatePlan<P> {
    /// Returns whether the plan performs a write.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        matches!(self, Self::Apply(_))
    }
}

/// Merges a user update request.
#[must_use]
pub fn plan_user_update(input: &UpdateUserInput) -> UpdatePlan<ExternalUserUpdate> {
    let profile = ExternalUserProfile {
        email: None,
        login: None,
        first_name: supplied_text(input.first_name.as_deref()),
        last_name: supplied_text(input.last_name.as_deref()),
        additional: supplied_profile(input.profile.as_ref(), &ExternalUserProfile::WELL_KNOWN_KEYS),
    };

    if profile.first_name.is_none() && profile.last_name.is_none() && profile.additional.is_empty()
    {
        return UpdatePlan::NoChanges;
    }

    UpdatePlan::Apply(ExternalUserUpdate { profile })
}

/// Merges a group update request.
#[must_use]
pub fn plan_group_update(input: &UpdateGroupInput) -> UpdatePlan<ExternalGroupWrite> {
    let profile = ExternalGroupProfile {
        name: supplied_text(input.name.as_deref()),
        description: supplied_text(input.description.as_deref()),
        additional: supplied_profile(input.profile.as_ref(), &ExternalGroupProfile::WELL_KNOWN_KEYS),
    };

    if profile.name.is_none() && profile.description.is_none() && profile.additional.is_empty() {
        return UpdatePlan::NoChanges;
    }

    UpdatePlan::Apply(ExternalGroupWrite { profile })
}

/// Merges a role update request.
#[must_use]
pub fn plan_role_update(input: &UpdateRoleInput) -> UpdatePlan<ExternalRoleWrite> {
    let payload = ExternalRoleWrite {
        label: supplied_text(input.name.as_deref()),
        description: supplied_text(input.description.as_deref()),
        permissions: input
            .permissions
            .as_ref()
            .filter(|permissions| !permissions.is_empty())
            .cloned(),
    };

    if payload == ExternalRoleWrite::default() {
        return UpdatePlan::NoChanges;
    }

    UpdatePlan::Apply(payload)
}

fn supplied_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
}

fn supplied_profile(value: Option<&ProfileMap>, reserved: &[&str]) -> ProfileMap {
    value
        .map(|profile| without_keys(profile, reserved))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
