pub mod handler;
pub mod response;
pub mod secret;

pub use handler::function_handler;
