//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating application data on the host
//! filesystem and normalizing user-supplied paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
