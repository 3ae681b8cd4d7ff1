//! Authentication and role gates

mod errors;
pub(crate) mod middleware;
pub(crate) mod roles;

pub(crate) use errors::*;
