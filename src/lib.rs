//! This library provides data gatherers: components that take a
//! point-in-time snapshot of data from a single external source on demand.
//! Two gatherers are implemented:
//!
//! - eks: describes a managed cluster through the AWS EKS control plane.
//! - local: loads the raw bytes of a file on disk.
//!
//! Each gatherer is constructed from a validated configuration and then
//! exposes a single repeatable [`gatherer::Gatherer::fetch`] call. Selecting
//! between gatherers is left to the caller.

pub mod gatherer;
pub mod types;
