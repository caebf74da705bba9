//! Eclipse Contributor Agreement (ECA) validation service support.
//!
//! Two loosely-coupled pieces consumed by the validation service: a typed
//! client binding for the Eclipse Foundation account API, and the
//! configuration-source layer that supplies per-deployment secret values
//! (API credentials) to it.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
