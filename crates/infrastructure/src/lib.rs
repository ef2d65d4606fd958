//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_identity_provider;
mod okta_identity_provider;

pub use in_memory_identity_provider::{EVERYONE_GROUP_ID, InMemoryIdentityProvider};
pub use okta_identity_provider::{OktaClientConfig, OktaIdentityProvider};
