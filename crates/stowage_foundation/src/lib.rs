//! Typed record identifiers and error types for Stowage.
//!
//! This crate provides:
//! - [`SpaceId`], [`FurnitureId`], [`ContainerId`], [`ItemId`] - per-kind record identifiers
//! - [`Error`] - error types for store access and mutation
//! - [`Result`] - the crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorKind, Result};
pub use id::{ContainerId, FurnitureId, ItemId, SpaceId};
