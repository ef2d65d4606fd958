mod client;
mod errors;
mod groups;
mod roles;
mod users;

pub use client::IdentityProviderClient;
pub use errors::{IdpError, IdpResult};
pub use groups::{ExternalGroup, ExternalGroupProfile, ExternalGroupWrite};
pub use roles::{ExternalPermission, ExternalRole, ExternalRoleWrite};
pub use users::{
    ExternalCredentials, ExternalPassword, ExternalUser, ExternalUserCreate, ExternalUserProfile,
    ExternalUserUpdate,
};
