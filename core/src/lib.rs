//! Synchronous API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and derives everything a
//! todo list frontend renders from the parsed results. The caller executes
//! the actual HTTP round-trip, making the core fully deterministic and
//! testable.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only a path prefix, and every
//!   built request uses an origin-relative path (default `/api/todos`).
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoViewModel` folds fetch outcomes and mutation responses into the
//!   loading/error/empty/populated states a UI renders.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoStats, UpdateTodo};
pub use view::{LoadState, TodoViewModel};
