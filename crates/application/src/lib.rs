//! Application services and ports.

#![forbid(unsafe_code)]

mod assignment_orchestrator;
mod directory_inputs;
mod directory_service;
mod idp_ports;
mod partial_update;
mod remote_errors;
mod representation_adapter;

#[cfg(test)]
mod test_support;

pub use assignment_orchestrator::{AssignmentOrchestrator, AssignmentOutcome};
pub use directory_inputs::{
    CreateGroupInput, CreateRoleInput, CreateUserInput, UpdateGroupInput, UpdateRoleInput,
    UpdateUserInput,
};
pub use directory_service::IdentityDirectoryService;
pub use idp_ports::{
    ExternalCredentials, ExternalGroup, ExternalGroupProfile, ExternalGroupWrite,
    ExternalPassword, ExternalPermission, ExternalRole, ExternalRoleWrite, ExternalUser,
    ExternalUserCreate, ExternalUserProfile, ExternalUserUpdate, IdentityProviderClient, IdpError,
    IdpResult,
};
pub use partial_update::{UpdatePlan, plan_group_update, plan_role_update, plan_user_update};
pub use representation_adapter::{
    denormalize_group_create, denormalize_role_create, denormalize_user_create, normalize_group,
    normalize_permission, normalize_role, normalize_user,
};
