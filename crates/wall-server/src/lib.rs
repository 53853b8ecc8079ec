//! HTTP surface of ShortcutWall: landing listing, `.url` downloads and
//! language switching, served with axum.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ServerError;
pub use routes::router;
pub use server::{build_state, serve};
pub use state::AppState;
