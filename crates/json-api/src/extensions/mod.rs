//! Extension traits

mod depot;
mod fields;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use fields::{missing_fields, present};
pub(crate) use result::ResultExt as _;
