//! This crate contains the client-side data types for the vector database
//! service, shared between the service and its clients. The types here are
//! plain immutable values; encoding them to the service's RPC representation
//! is the job of the client layer that consumes them.
#![deny(rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

pub mod partition;

pub use crate::partition::{Partition, PartitionBuilder};
