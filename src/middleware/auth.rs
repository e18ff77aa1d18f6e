//! Authentication middleware.
//!
//! Protected routes are wrapped in [`auth_middleware`], which verifies the
//! bearer token, confirms the user still exists, and attaches an
//! [`AuthenticatedUser`] to the request extensions. Handlers receive it
//! through the [`AuthUser`] extractor. The acting identity only ever comes
//! from the token, never from the request body.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// The identity acting on a request, as proven by its access token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
}

/// Verify the bearer token and attach the authenticated user.
///
/// Returns 401 when the header is missing or malformed, the token does
/// not verify, or the user no longer exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthenticated("missing authentication"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthenticated("missing authentication"))?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "rejected access token");
        ApiError::unauthenticated("invalid access token")
    })?;

    let user = state
        .users
        .get_user_by_id(&claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("invalid access token"))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user set by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthenticated("missing authentication"))?;

        Ok(AuthUser(user))
    }
}
