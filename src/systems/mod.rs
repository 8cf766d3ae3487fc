//! Systems: moving bodies and the per-axis collision resolver.

pub mod body;
pub mod resolver;
