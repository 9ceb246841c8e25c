use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use scaleflow_core::AppError;
use tower_http::cors::CorsLayer;

use crate::middleware::{COMPANY_ID_HEADER, ROLE_HEADER, USER_ID_HEADER};

pub(super) fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    Ok(CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(ROLE_HEADER),
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(COMPANY_ID_HEADER),
        ]))
}
