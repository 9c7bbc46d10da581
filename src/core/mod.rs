//! Runtime plumbing shared by controllers and infrastructure

pub(crate) mod net;
pub(crate) mod sync;
