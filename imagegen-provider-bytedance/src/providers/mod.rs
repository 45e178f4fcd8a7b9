//! Provider implementations

pub mod bytedance;
