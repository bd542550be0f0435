//! Request extractors with application-specific rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError::MalformedBody`].
///
/// Unlike `axum::Json`, the `Content-Type` header is not inspected and only
/// the first JSON value in the body is decoded; anything after it is ignored.
/// Failures produce the service's `{"message": "Bad request"}` body.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        decode_first(&bytes).map(AppJson)
    }
}

/// Decode the first JSON value in `bytes`.
fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
        .ok_or_else(|| AppError::MalformedBody("empty body".to_string()))?
        .map_err(|e| AppError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::NewProduct;

    #[test]
    fn trailing_content_after_first_value_is_ignored() {
        let body = br#"{"name":"Test Product","description":"This is a test","price":100}, {"name":"Test Product1","price":100},"#;
        let fields: NewProduct = decode_first(body).unwrap();

        assert_eq!(fields.name, "Test Product");
        assert_eq!(fields.price, 100.0);
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let result = decode_first::<NewProduct>(br#"{"price":"100"}"#);
        assert!(matches!(result, Err(AppError::MalformedBody(_))));
    }

    #[test]
    fn empty_body_is_malformed() {
        assert!(matches!(
            decode_first::<NewProduct>(b"   "),
            Err(AppError::MalformedBody(_))
        ));
    }
}
