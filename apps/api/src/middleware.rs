use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use scaleflow_core::{AppError, CompanyId};
use scaleflow_domain::{ActorContext, Role, UserId};
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

/// Role of the verified session, set by the auth gateway.
pub const ROLE_HEADER: &str = "x-scaleflow-role";
/// User id of the verified session.
pub const USER_ID_HEADER: &str = "x-scaleflow-user-id";
/// Company id of the verified session.
pub const COMPANY_ID_HEADER: &str = "x-scaleflow-company-id";

/// Builds the caller's [`ActorContext`] from gateway headers.
///
/// Never rejects: missing or malformed values leave the matching field empty,
/// which every permission check treats as a denial.
pub async fn require_actor(mut request: Request, next: Next) -> Response {
    let actor = actor_from_headers(request.headers());
    request.extensions_mut().insert(actor);
    next.run(request).await
}

pub fn actor_from_headers(headers: &HeaderMap) -> ActorContext {
    let role = header_value(headers, ROLE_HEADER).and_then(|value| {
        let role = Role::from_transport_lenient(value);
        if role.is_none() {
            warn!(value, "ignoring unknown role header");
        }
        role
    });

    let user_id = header_value(headers, USER_ID_HEADER).and_then(|value| {
        UserId::parse(value)
            .inspect_err(|error| warn!(%error, "ignoring malformed user id header"))
            .ok()
    });

    let company_id = header_value(headers, COMPANY_ID_HEADER).and_then(|value| {
        value
            .parse::<CompanyId>()
            .inspect_err(|error| warn!(%error, "ignoring malformed company id header"))
            .ok()
    });

    ActorContext::new(role, user_id, company_id)
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if let Some(fetch_site) = headers.get("sec-fetch-site") {
            if fetch_site == HeaderValue::from_static("cross-site") {
                return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
            }
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let allowed_origin = state.frontend_url.as_str();
        let origin_is_allowed = origin == allowed_origin;
        let referer_is_allowed = referer.starts_with(allowed_origin);

        if !origin_is_allowed && !referer_is_allowed {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}
