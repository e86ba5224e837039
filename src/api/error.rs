use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::CylonError;

/// Handler failure as seen on the wire: always a 500 with the error text.
///
/// Callers only get the status code to go on; the body is for humans.
#[derive(Debug)]
pub struct ApiError(pub CylonError);

impl From<CylonError> for ApiError {
    fn from(err: CylonError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_every_error_kind_is_a_plain_500() {
        for err in [
            CylonError::Protocol { status: 404 },
            CylonError::Internal("boom".to_string()),
            CylonError::Validation("bad".to_string()),
        ] {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                response.headers()[CONTENT_TYPE],
                "text/plain; charset=utf-8"
            );
        }
    }
}
