//! Signup/login endpoint wrappers.
//!
//! The public surface lives on [`GsClient`](crate::GsClient)
//! (`signup`/`login`); this module holds the request and envelope handling.

pub(crate) mod api;
mod wire;
