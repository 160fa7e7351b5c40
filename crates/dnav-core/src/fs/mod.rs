//! Filesystem abstractions.
//!
//! [`entry::Entry`] is a single listing row, [`ops`] holds the raw
//! directory read and directory creation, and [`snapshot::DirectorySnapshot`]
//! turns one read into an ordered, never-failing listing.

pub mod entry;
pub mod ops;
pub mod snapshot;
