//! Live adapters backed by the network and the thread-local RNG.

pub mod http;
pub mod random;
