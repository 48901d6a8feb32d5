//! `AuthUser` / `AdminUser` extractors: read the login token cookie,
//! validate it, and inject the caller context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use toybox_core::error::AppError;
use toybox_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, required by mutating routes.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(state.cookie_name())
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::authentication("Not logged in"))?;

        let user = state
            .auth_service
            .validate_token(&token)
            .ok_or_else(|| AppError::authentication("Invalid or expired login token"))?;

        Ok(AuthUser(RequestContext::new(user)))
    }
}

/// Authenticated admin, required by destructive routes.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;
        if !ctx.is_admin() {
            tracing::warn!(
                user_id = %ctx.user_id(),
                path = %parts.uri.path(),
                "Admin route denied"
            );
            return Err(AppError::authorization("Admin privileges required").into());
        }
        Ok(AdminUser(ctx))
    }
}
