//! Constants grouped by algorithm family

pub mod hash;
pub mod symmetric;
