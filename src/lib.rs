//! Merit-order economic dispatch.
//!
//! Given a load and a fleet of power plants, [`payload::validate`] checks the
//! request, [`optimizer::annotate()`] prices every plant and the solvers in
//! [`optimizer`] pick the cheapest combination whose outputs add up to the
//! load. [`api`] exposes the pipeline over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod optimizer;
pub mod payload;
pub mod telemetry;

pub use error::{DispatchError, Result};
pub use optimizer::dispatch;
pub use payload::validate;
