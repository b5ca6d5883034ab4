use std::env::set_var;

use get_secret::{
    function_handler,
    secret::{SecretValue, SECRET_VAR},
};
use lambda_http::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    tracing::info!(
        variable = SECRET_VAR,
        set = SecretValue::from_env().is_set(),
        "Starting get-secret function"
    );

    run(service_fn(function_handler)).await
}
