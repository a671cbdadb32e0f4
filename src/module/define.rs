//! Module for Constants and Paths Definitions
//!
//! This module defines the constants and path names used throughout the crate.

/// System Constants
pub mod system {
    /// Name of the system
    pub const NAME: &str = "gabriel";
}

/// File Paths
pub mod path {

    // Persistent Data Directory
    pub const PERSISTENT_DIR: &str = "/data/";

    // Ephemeral Data Directory
    pub const EPHEMERAL_DIR: &str = "/run/user/1000/";

    // Environment variable overriding the storage root
    pub const ROOT_ENV: &str = "GABRIEL_ROOT";

    // Image Source Directory
    pub const IMG_DIR: &str = "images";

    // Experiment Directory
    pub const EXP_DIR: &str = "exp";

    // Log Directory
    pub const LOG_DIR: &str = "log";

    // Configuration File
    pub const CONF_FILE: &str = "conf.toml";

    // Latency File Name Prefix
    pub const LATENCY_FILE_PREFIX: &str = "latency-";

    // Latency File Name Extension
    pub const LATENCY_FILE_EXT: &str = ".txt";
}

/// Server Addresses
pub mod server {
    // hail.elijah.cs.cmu.edu
    pub const DEFAULT_ADDR: &str = "128.2.210.197";

    // Cloudlet
    pub const CLOUDLET_ADDR: &str = "128.2.213.102";

    // Amazon West
    pub const AMAZON_WEST_ADDR: &str = "54.202.14.124";
}

/// Capture and Transfer Tuning Defaults
pub mod tuning {
    // Upper bound on in-flight token size
    pub const MAX_TOKEN_SIZE: u32 = 10000;

    // Lower bound for the capture loop frame rate
    pub const MIN_FPS: u32 = 50;

    // Width of captured and transmitted images
    pub const IMAGE_WIDTH: u32 = 320;
}
