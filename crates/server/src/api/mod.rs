pub mod error;
pub mod handlers;
pub mod json;
pub mod middleware;
pub mod plates;
pub mod routes;

pub use routes::create_router;
