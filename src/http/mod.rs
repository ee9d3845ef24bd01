//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route table)
//!     → request.rs (request ID generation and propagation)
//!     → handler.rs (path → PageRequest → Renderer)
//!     → response.rs (PageResponse → status + HTML, error boundary)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::HandlerError;
pub use server::{build_router, AppState, HttpServer};
