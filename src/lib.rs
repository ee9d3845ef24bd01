//! Documentation site page router.
//!
//! Serves `GET /{lang}/{cat}/{doc}` by handing the three path segments to a
//! [`Renderer`] and returning its status and HTML unchanged.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod sandbox;

pub use config::SiteConfig;
pub use http::{build_router, HttpServer};
pub use lifecycle::Shutdown;
pub use render::{FileRenderer, PageRequest, PageResponse, RenderError, Renderer};
pub use sandbox::{Sandbox, SandboxError};
