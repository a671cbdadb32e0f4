//! This module contains all the sub-modules of the crate.

pub mod define; // Definition module: Contains constants used throughout the crate.
pub mod util; // Utility module: Configuration, paths, storage and initialization.
