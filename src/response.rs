use lambda_http::{
    http::{header::CONTENT_TYPE, StatusCode},
    Body, Error, Response,
};

use crate::secret::SecretValue;

pub(crate) const BODY_PREFIX: &str = "my secret value is: ";

pub(crate) fn secret_body(secret: &SecretValue) -> String {
    format!("{BODY_PREFIX}{secret}")
}

/// Builds the 200 plain-text response carrying `secret`.
pub fn secret_response(secret: &SecretValue) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::Text(secret_body(secret)))?;

    Ok(response)
}
