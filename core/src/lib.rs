//! Synchronous client for the pet-store API with response bookkeeping.
//!
//! # Overview
//! Every operation is a single blocking HTTP call through an injected
//! [`HttpExecutor`], followed by bookkeeping: the response is recorded for
//! later assertion, created entities are tracked for bulk cleanup, and each
//! call logs a timing sample.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`);
//!   the executor owns the transport, keeping the bookkeeping layer testable
//!   without a network.
//! - Non-2xx statuses are data, not errors; only transport and payload
//!   serialization failures surface as [`ApiError`].
//! - JSON parse failures of response bodies are absorbed into flags by the
//!   recorder and handlers, never raised.
//! - The client is constructed explicitly with its executor — no globals.

pub mod client;
pub mod error;
pub mod executor;
pub mod handler;
pub mod http;
pub mod perf;
pub mod recorder;
pub mod tracker;
pub mod types;

pub use client::{CreatePayload, PetstoreClient};
pub use error::ApiError;
pub use executor::{HttpExecutor, UreqExecutor};
pub use handler::{Handled, HandledBody, HandlerKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use perf::{PerfLog, PerfSample, PerfStats};
pub use recorder::{LastResult, ResponseRecorder};
pub use tracker::{EntityId, EntityKind, EntityTracker, TrackedEntity};
pub use types::{Pet, PetStatus, User};
