// Composition root for the operations history service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Seed the history before the listener accepts connections.
// - Expose the HTTP router.

pub mod config;
pub mod health;
pub mod http;
pub mod state;
