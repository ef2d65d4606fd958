use idbridge_application::IdentityDirectoryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub directory_service: IdentityDirectoryService,
}
