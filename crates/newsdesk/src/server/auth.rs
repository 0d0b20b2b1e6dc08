use super::AppState;
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use newsdeskapp::api::Caller;
use std::convert::Infallible;

/// The caller identity derived from the `Authorization: Bearer` header.
///
/// Never rejects: a missing or wrong token yields [`Caller::Anonymous`], and
/// the API decides whether that is enough.
#[derive(Debug, Clone, Copy)]
pub struct Auth(pub Caller);

impl FromRequestParts<AppState> for Auth {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token);
        Ok(Auth(caller_for(state.admin_token(), presented)))
    }
}

pub(crate) fn caller_for(admin_token: Option<&str>, presented: Option<&str>) -> Caller {
    match (admin_token, presented) {
        (Some(expected), Some(given)) if tokens_match(expected, given) => Caller::Admin,
        _ => Caller::Anonymous,
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

// Compares every byte regardless of where the first mismatch is.
fn tokens_match(expected: &str, given: &str) -> bool {
    expected.len() == given.len()
        && expected
            .bytes()
            .zip(given.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
