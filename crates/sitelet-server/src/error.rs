//! Request-level error responses.
//!
//! The two failure classes stay distinct end to end: an unresolved host is a
//! visitor-facing 404, a store fault or exhausted budget is a 500. Neither
//! leaks internal detail into the response body.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use sitelet_compose::ResolveError;

use crate::document;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No active site resolves for the requested host.
    #[error("no site resolves for host: {0}")]
    SiteNotFound(String),
    /// An upstream fetch failed. Deliberately not a 404.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),
    /// The per-request work budget ran out.
    #[error("request budget exhausted")]
    Timeout,
}

impl From<ResolveError> for ServerError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::SiteNotFound(host) => Self::SiteNotFound(host),
            ResolveError::Store(source) => Self::Upstream(source.to_string()),
        }
    }
}

impl ServerError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::SiteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render this error as a minimal HTML document.
    pub(crate) fn into_html_response(self) -> Response {
        let body = match &self {
            Self::SiteNotFound(host) => {
                tracing::debug!(host = %host, "No site for host");
                document::site_not_found_document()
            }
            Self::Upstream(detail) => {
                tracing::error!(detail = %detail, "Upstream fetch failed");
                document::failure_document()
            }
            Self::Timeout => {
                tracing::error!("Request budget exhausted");
                document::failure_document()
            }
        };

        (
            self.status(),
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl IntoResponse for ServerError {
    /// JSON shape for the API surface.
    fn into_response(self) -> Response {
        let message = match &self {
            Self::SiteNotFound(_) => "Site not found".to_owned(),
            Self::Upstream(detail) => {
                tracing::error!(detail = %detail, "Upstream fetch failed");
                "Upstream fetch failed".to_owned()
            }
            Self::Timeout => {
                tracing::error!("Request budget exhausted");
                "Request timed out".to_owned()
            }
        };

        (
            self.status(),
            axum::Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use sitelet_store::StoreError;

    use super::*;

    #[test]
    fn test_site_not_found_maps_to_404() {
        let err = ServerError::from(ResolveError::SiteNotFound("nope.example.com".to_owned()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500_not_404() {
        let err = ServerError::from(ResolveError::Store(StoreError::unavailable()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_maps_to_500() {
        assert_eq!(ServerError::Timeout.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
