//! CLI command implementations

pub(crate) mod candidates;
pub(crate) mod common;
pub(crate) mod inspect;
pub(crate) mod ls;
pub(crate) mod replay;
pub(crate) mod resolve;
