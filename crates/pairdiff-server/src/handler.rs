use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json, Response};

use pairdiff_protocol::{ApiDescription, Envelope, ErrorPayload, HealthResponse, RootResponse, User};
use pairdiff_sdk::Comparer;

use crate::auth::{AllowAllAuth, AuthProvider, Credentials};
use crate::error::{ServerError, ServerResult};

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    comparer: Comparer,
    api: ApiDescription,
    auth: Arc<dyn AuthProvider>,
    allow_anonymous: bool,
}

impl AppState {
    pub fn new(comparer: Comparer, api: ApiDescription) -> Self {
        Self {
            comparer,
            api,
            auth: Arc::new(AllowAllAuth),
            allow_anonymous: true,
        }
    }

    pub fn with_auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }

    pub fn allow_anonymous(mut self, allow: bool) -> Self {
        self.allow_anonymous = allow;
        self
    }

    async fn identify(&self, headers: &HeaderMap) -> ServerResult<User> {
        let credentials = Credentials::from_headers(headers);
        if credentials == Credentials::Anonymous && !self.allow_anonymous {
            return Err(ServerError::AuthFailed("credentials required".into()));
        }
        self.auth.authenticate(&credentials).await
    }

    /// `{ api, data: { success: false, error }, user }` with the error's status.
    fn error_envelope(&self, err: ServerError, user: User) -> Response {
        let body = Envelope::new(self.api.clone(), ErrorPayload::new(err.to_string()), user);
        (err.status(), Json(body)).into_response()
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Describes the service and how to form a comparison URL.
pub async fn root_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<RootResponse>> {
    let user = state.identify(&headers).await?;
    Ok(Json(RootResponse::new(state.api.clone(), user)))
}

/// Compares the two documents named by the request path.
pub async fn compare_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    let user = match state.identify(&headers).await {
        Ok(user) => user,
        Err(err) => return state.error_envelope(err, User::anonymous()),
    };

    match state.comparer.compare(&path).await {
        Ok(report) => {
            Json(Envelope::new(state.api.clone(), report.into_payload(), user)).into_response()
        }
        Err(err) => {
            let err = ServerError::from(err);
            tracing::warn!(%path, error = %err, "comparison failed");
            state.error_envelope(err, user)
        }
    }
}
