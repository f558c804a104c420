//! Extractors that reject with the API error body instead of axum's plain
//! text.

use axum::{
    async_trait,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use super::response::{ApiError, ApiErrorResponse};
use crate::auth::{Identity, Role};
use crate::error::HrError;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the authenticated user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// A JSON body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message names the field
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Query-string parameters.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(|rejection: QueryRejection| {
                warn!(error = %rejection.body_text(), "Invalid query string");
                ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
            })
    }
}

/// A single UUID path segment.
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| IdPath(id))
            .map_err(|rejection: PathRejection| {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "VALIDATION_ERROR",
                    "Invalid identifier",
                    rejection.body_text(),
                ))
            })
    }
}

/// The caller, as asserted by the authentication gateway in front of the
/// service.
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_parts(parts).map_err(|err| {
            warn!(error = %err, "Request without a usable identity");
            ApiErrorResponse::from(err)
        })
    }
}

fn identity_from_parts(parts: &Parts) -> Result<Identity, HrError> {
    let user_id = header_value(parts, USER_ID_HEADER)?
        .parse::<Uuid>()
        .map_err(|_| HrError::Unauthorized {
            message: format!("{} is not a valid UUID", USER_ID_HEADER),
        })?;
    let role = header_value(parts, USER_ROLE_HEADER)?.parse::<Role>()?;
    Ok(Identity::new(user_id, role))
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, HrError> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HrError::Unauthorized {
            message: format!("missing {} header", name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = HttpRequest::builder().uri("/api/employees");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_identity_from_headers() {
        let user_id = Uuid::new_v4();
        let id = user_id.to_string();
        let identity = identity_from_parts(&parts(&[
            (USER_ID_HEADER, id.as_str()),
            (USER_ROLE_HEADER, "hr_manager"),
        ]))
        .unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role, Role::HrManager);
    }

    #[test]
    fn test_missing_headers_are_unauthorized() {
        let result = identity_from_parts(&parts(&[(USER_ROLE_HEADER, "admin")]));
        assert!(matches!(result, Err(HrError::Unauthorized { .. })));
    }

    #[test]
    fn test_malformed_user_id_is_unauthorized() {
        let result = identity_from_parts(&parts(&[
            (USER_ID_HEADER, "not-a-uuid"),
            (USER_ROLE_HEADER, "admin"),
        ]));
        assert!(matches!(result, Err(HrError::Unauthorized { .. })));
    }

    #[test]
    fn test_unknown_role_is_unauthorized() {
        let id = Uuid::new_v4().to_string();
        let result = identity_from_parts(&parts(&[
            (USER_ID_HEADER, id.as_str()),
            (USER_ROLE_HEADER, "superuser"),
        ]));
        assert!(matches!(result, Err(HrError::Unauthorized { .. })));
    }
}
