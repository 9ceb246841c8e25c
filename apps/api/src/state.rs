use scaleflow_application::AuthorizationService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authorization_service: AuthorizationService,
    pub frontend_url: String,
}
