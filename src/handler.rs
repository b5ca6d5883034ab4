use lambda_http::{Body, Error, Request, Response};

use crate::{response::secret_response, secret::SecretValue};

/// Answers every request with the current value of `EXAMPLE_SECRET`.
///
/// The request is not inspected. The variable is read on each call so a
/// changed environment shows up on the next invocation.
pub async fn function_handler(_event: Request) -> Result<Response<Body>, Error> {
    secret_response(&SecretValue::from_env())
}
