use crate::AppState;
use crate::error::RecorderError;
use crate::forwarder::ViolationEvent;
use crate::report::CspViolation;
use axum::Router;
use axum::extract::{FromRequest, Request, State};
use axum::http::{StatusCode, header};
use axum::routing::{get, post};
use bytes::Bytes;
use tower_http::trace::TraceLayer;

pub const CSP_REPORT_CONTENT_TYPE: &str = "application/csp-report";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/violation", post(record_violation))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> &'static str {
    "csp-violation-recorder\n\nPOST /violation  (application/csp-report)\n"
}

async fn health() -> &'static str {
    "OK"
}

async fn record_violation(
    State(state): State<AppState>,
    ViolationBody(violation): ViolationBody,
) -> StatusCode {
    state.sink.record(ViolationEvent::new(violation.report));
    StatusCode::OK
}

pub struct ViolationBody(pub CspViolation);

// Reporting browsers send application/csp-report, which is plain JSON under a
// distinguished name; both spellings decode identically. Parameters such as
// `; charset=utf-8` are irrelevant to dispatch.
fn is_registered(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();

    essence.eq_ignore_ascii_case(CSP_REPORT_CONTENT_TYPE)
        || essence.eq_ignore_ascii_case("application/json")
}

impl<S> FromRequest<S> for ViolationBody
where
    S: Send + Sync,
{
    type Rejection = RecorderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if !is_registered(content_type) {
            return Err(RecorderError::UnsupportedMediaType(content_type.to_string()));
        }

        let body = Bytes::from_request(req, state).await?;
        let violation = serde_json::from_slice(&body)?;

        Ok(ViolationBody(violation))
    }
}

#[cfg(test)]
mod tests {
    use crate::ingest::is_registered;

    #[test]
    fn test_registered_content_types() {
        assert!(is_registered("application/csp-report"));
        assert!(is_registered("application/csp-report; charset=utf-8"));
        assert!(is_registered("Application/CSP-Report"));
        assert!(is_registered("application/json"));

        assert!(!is_registered("text/plain"));
        assert!(!is_registered("application/csp-reports"));
        assert!(!is_registered(""));
    }
}
