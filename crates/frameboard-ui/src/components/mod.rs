//! Shared page components.

pub(crate) mod channel;
pub(crate) mod device_info;
