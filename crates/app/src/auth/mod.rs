//! Authentication and authorization

mod claims;
mod errors;
mod guard;
mod models;
mod service;
mod token;

pub use claims::*;
pub use errors::*;
pub use guard::*;
pub use models::*;
pub use service::*;
pub use token::*;
