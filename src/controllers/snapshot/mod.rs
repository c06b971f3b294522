//! Headless single-frame rendering for the command line binary.

mod snapshot_controller;

pub use snapshot_controller::{SnapshotController, SnapshotError};
