//! Storefront domain, persistence and identity modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod notifier;

#[cfg(test)]
mod test;

mod uuids;
