// Composition root for the meeting invoice service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the calendar source and wire it into the use case handler.
// - Expose the HTTP and GraphQL routers over shared state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
