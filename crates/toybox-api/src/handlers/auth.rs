//! Auth handlers for account creation and the login cookie.
//!
//! Successful signup and login set the login token cookie; the body is
//! the caller's public identity.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use toybox_entity::user::{LoggedInUser, User};

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::state::AppState;

fn login_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((state.cookie_name().to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidJson(req): ValidJson<SignupRequest>,
) -> Result<(CookieJar, Json<LoggedInUser>), ApiError> {
    let (user, token) = state.auth_service.signup(req.into()).await?;
    let jar = jar.add(login_cookie(&state, token));
    Ok((jar, Json(LoggedInUser::from(&user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoggedInUser>), ApiError> {
    let user: User = state.auth_service.login(&req.username, &req.password).await?;
    let token = state.auth_service.login_token(&user)?;
    let jar = jar.add(login_cookie(&state, token));
    Ok((jar, Json(LoggedInUser::from(&user))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((state.cookie_name().to_string(), "")).path("/"));
    (jar, Json(MessageResponse::new("Logged out successfully")))
}
