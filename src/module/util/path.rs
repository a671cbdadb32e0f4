//! Path Operations Module
//!
//! This module handles path operations for directories and files.

use std::path::PathBuf;

use crate::module::define;

/// Join Paths
///
/// This function takes a slice of strings as input and joins them into a single path string.
/// It uses the PathBuf type to handle platform-specific separators and conversions.
/// It returns the joined path as a String, or panics if the conversion fails.
pub fn join(paths: &[&str]) -> String {
    let mut path: PathBuf = PathBuf::new();
    for p in paths {
        path.push(p);
    }
    path.into_os_string().into_string().unwrap()
}

/// Latency File Name
///
/// Builds the name of the latency log file for a given server address and
/// token ceiling. The name embeds both values so each run's measurements land
/// in a file identifying the deployment they were taken against:
/// `latency-<address>-<maxTokenSize>.txt`.
pub fn latency_file_name(addr: &str, max_token_size: u32) -> String {
    format!(
        "{}{}-{}{}",
        define::path::LATENCY_FILE_PREFIX,
        addr,
        max_token_size,
        define::path::LATENCY_FILE_EXT
    )
}

pub mod dir {
    //! Directory Operations Submodule
    //!
    //! This submodule provides functions for directory operations.

    use std::fs;
    use std::path::Path;

    use super::GabrielDir;
    use crate::module::define;

    /// Create Directory from Path List
    ///
    /// This function takes a slice of strings as input and creates a directory with the joined path.
    /// It uses the `join` function from the parent module to create the path string.
    /// It returns `Some(path)` if the directory creation succeeds, or `None` if it fails.
    pub fn create_dir_from_path_list(paths: &[&str]) -> Option<String> {
        let path = super::join(paths);
        match fs::create_dir_all(Path::new(&path)) {
            Ok(_) => Some(path),
            Err(_) => None,
        }
    }

    /// Create Data Directory
    ///
    /// This function creates the application data directory under the given
    /// storage root, using `define::system::NAME` as the subdirectory name.
    /// It returns `Some(path)` if the creation succeeds, or `None` if it fails.
    pub fn create_data_dir(root: &str) -> Option<String> {
        create_dir_from_path_list(&[root, define::system::NAME])
    }

    /// Create Application Subdirectories
    ///
    /// This function materializes the full directory layout under the given
    /// storage root: the data directory plus its `images`, `exp` and `log`
    /// subdirectories. It returns a `GabrielDir` with every path computed from
    /// the same root, or `None` if any directory cannot be created.
    pub fn create_app_sub_dir(root: &str) -> Option<GabrielDir> {
        let data_dir = create_data_dir(root)?;
        let img_dir = create_dir_from_path_list(&[&data_dir, define::path::IMG_DIR])?;
        let exp_dir = create_dir_from_path_list(&[&data_dir, define::path::EXP_DIR])?;
        let log_dir = create_dir_from_path_list(&[&data_dir, define::path::LOG_DIR])?;
        Some(GabrielDir {
            data: data_dir,
            img: img_dir,
            exp: exp_dir,
            log: log_dir,
        })
    }
}

/// Paths of Resources
///
/// This struct represents the paths of the resources used by the application.
#[derive(Debug, Clone)]
pub struct GabrielPath {
    /// Directories Paths
    pub dir: GabrielDir,
    /// Latency Log File Path
    pub latency_file: String,
}

impl GabrielPath {
    /// Derive the full path set from the directory layout and the configured
    /// server address and token ceiling. The latency file lives in the `exp`
    /// directory and its name embeds both configuration values.
    pub fn new(dir: GabrielDir, addr: &str, max_token_size: u32) -> Self {
        let latency_file = join(&[&dir.exp, &latency_file_name(addr, max_token_size)]);
        GabrielPath { dir, latency_file }
    }
}

/// Paths of Directories
///
/// This struct represents the paths of the directories used by the application.
#[derive(Debug, Clone)]
pub struct GabrielDir {
    /// Data Directory Path
    pub data: String,
    /// Image Source Directory Path
    pub img: String,
    /// Experiment Directory Path
    pub exp: String,
    /// Log Directory Path
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_create_dir_from_path_list() {
        dir::create_dir_from_path_list(&["/tmp", "gabrieltest", "test_create_dir_from_path_list"]);

        // Assert that the directory was created
        assert!(Path::new("/tmp/gabrieltest/test_create_dir_from_path_list").is_dir());
    }

    #[test]
    fn test_create_app_sub_dir() {
        let res = dir::create_app_sub_dir("/tmp/gabrieltest/test_create_app_sub_dir").unwrap();

        // Assert that the whole layout was created under the same root
        assert!(Path::new("/tmp/gabrieltest/test_create_app_sub_dir/gabriel/images").is_dir());
        assert!(Path::new("/tmp/gabrieltest/test_create_app_sub_dir/gabriel/exp").is_dir());
        assert!(Path::new("/tmp/gabrieltest/test_create_app_sub_dir/gabriel/log").is_dir());

        assert_eq!(res.data, "/tmp/gabrieltest/test_create_app_sub_dir/gabriel");
        assert_eq!(
            res.img,
            "/tmp/gabrieltest/test_create_app_sub_dir/gabriel/images"
        );
    }

    #[test]
    fn test_latency_file_name() {
        assert_eq!(
            latency_file_name("128.2.210.197", 10000),
            "latency-128.2.210.197-10000.txt"
        );
    }

    #[test]
    fn test_latency_file_name_varies_only_in_expected_substring() {
        let base = latency_file_name("128.2.210.197", 10000);

        // Changing the address changes only the address substring.
        let other_addr = latency_file_name("128.2.213.102", 10000);
        assert_ne!(base, other_addr);
        assert!(other_addr.starts_with("latency-128.2.213.102-"));
        assert!(other_addr.ends_with("-10000.txt"));

        // Changing the ceiling changes only the ceiling substring.
        let other_token = latency_file_name("128.2.210.197", 2000);
        assert_ne!(base, other_token);
        assert!(other_token.starts_with("latency-128.2.210.197-"));
        assert!(other_token.ends_with("-2000.txt"));

        // Deterministic for identical inputs.
        assert_eq!(base, latency_file_name("128.2.210.197", 10000));
    }

    #[test]
    fn test_gabriel_path_new() {
        let dirs = dir::create_app_sub_dir("/tmp/gabrieltest/test_gabriel_path_new").unwrap();
        let paths = GabrielPath::new(dirs, "128.2.210.197", 10000);

        assert_eq!(
            paths.latency_file,
            "/tmp/gabrieltest/test_gabriel_path_new/gabriel/exp/latency-128.2.210.197-10000.txt"
        );
        // The latency file stays inside the exp directory derived from the same root.
        assert!(paths.latency_file.starts_with(&paths.dir.exp));
    }

    #[test]
    fn test_path_join() {
        // Assert that joining two paths works as expected
        assert_eq!(join(&["/test/", "test"]), "/test/test");

        // Assert that joining three paths works as expected
        assert_eq!(join(&["test", "test", "test"]), "test/test/test");

        // Assert that joining relative paths works as expected
        assert_eq!(
            join(&["./test/", "test/", "test.txt"]),
            "./test/test/test.txt"
        );
    }
}
