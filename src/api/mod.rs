//! HTTP API module for the payroll derivation engine.
//!
//! A thin adapter over the engine: it converts JSON requests into domain
//! types, invokes one computation against the tables loaded at startup,
//! and serializes the result. No business logic lives here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
