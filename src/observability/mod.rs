//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (startup, shutdown, render failures)
//!     → request_log.rs (full dump of each page request, debug level)
//!     → tower_http TraceLayer spans per request
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, filtered)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through spans via the x-request-id header
//! - Request dumps are debug-level and switchable so they never shape responses

pub mod logging;
pub mod request_log;

pub use logging::{default_filter, init_logging};
pub use request_log::REQUEST_LOG_TARGET;
