// Composition root for the admin UI.
//
// Responsibilities
// - Read config from environment.
// - Pick the backend implementation (HTTP client or in-memory stand-in).
// - Wire ports into the page router.

pub mod config;
pub mod http;
pub mod state;
