//! Adapters that turn platform input into explorer session events.

pub mod gui;
