use crate::api::ErrorResponse;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// User id resolved by the session middleware.
///
/// Use this in any handler mounted behind resolve_session:
/// ```ignore
/// async fn my_handler(SessionUser(user_id): SessionUser) -> impl IntoResponse {
///     // user_id belongs to the calling session
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionUser(pub Uuid);

pub enum SessionError {
    Unresolved,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SessionError::Unresolved => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .copied()
            .ok_or(SessionError::Unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_user_id_attached_by_middleware() {
        let user_id = Uuid::new_v4();
        let (mut parts, _) = Request::builder()
            .extension(SessionUser(user_id))
            .body(())
            .unwrap()
            .into_parts();

        let Ok(SessionUser(extracted)) = SessionUser::from_request_parts(&mut parts, &()).await
        else {
            panic!("session user should extract from request extensions");
        };
        assert_eq!(extracted, user_id);
    }

    #[tokio::test]
    async fn test_rejects_without_resolved_session() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert!(SessionUser::from_request_parts(&mut parts, &())
            .await
            .is_err());
    }
}
