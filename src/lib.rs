//! Riskscore - insurance risk scoring over HTTP
//!
//! A stateless service that scores age, BMI, blood pressure and family
//! history into an insurance risk band. The scoring itself lives in
//! [`scoring`] and has no web dependencies; the remaining modules wrap it
//! in an axum server with static file serving and CORS.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod scoring;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
