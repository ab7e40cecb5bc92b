//! WordWisdom HTTP server: AI-server-compatible analysis endpoints plus the
//! insight and vocabulary API.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
