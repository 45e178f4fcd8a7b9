//! Shared execution primitives used by provider adapters.

pub mod http;
