//! Config Handler.

use serde::{Deserialize, Serialize};

/// Provides TOML config file handling.
pub mod toml {

    use super::DEFAULT_CONFIG;
    use crate::module::define;
    use std::fs::File;
    use std::io::prelude::*;
    use std::path::Path;

    /// Loads a configuration file from the given directory.
    /// If not found, generates a default config file.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file is located or should be created.
    ///
    pub fn load(dir: &str) -> super::Config {
        // Check if the config file exists
        let path = Path::new(dir).join(define::path::CONF_FILE);
        let exist: bool = path.is_file();

        if !exist {
            // Create the default config if it doesn't exist
            let config: super::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
            let toml_str = toml::to_string(&config).unwrap();
            let mut file = File::create(&path).unwrap();
            file.write_all(toml_str.as_bytes()).unwrap();
        }

        // Load the config
        let conf_str: String = std::fs::read_to_string(&path).unwrap();
        let setting: Result<super::Config, toml::de::Error> = toml::from_str(&conf_str);

        match setting {
            Ok(conf) => conf,
            Err(e) => panic!("Failed to parse TOML: {}", e),
        }
    }

    /// Saves a configuration file to the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file should be saved.
    /// * `conf` - The configuration data to be saved.
    ///
    pub fn save(dir: &str, conf: super::Config) {
        let toml_str = toml::to_string(&conf).unwrap();
        let path = crate::module::util::path::join(&[dir, define::path::CONF_FILE]);
        let mut file = File::create(path).unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();
    }
}

/// Represents the configuration data structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: Server,
    pub token: Token,
    pub capture: Capture,
}

/// Represents server-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Server {
    pub addr: String,
}

/// Represents token flow-control configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Token {
    pub max_size: u32,
}

/// Represents capture-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Capture {
    pub min_fps: u32,
    pub image_width: u32,
}

// Default configuration data in TOML format
const DEFAULT_CONFIG: &str = r#"
[server]
  addr = '128.2.210.197' # hail.elijah.cs.cmu.edu
  # addr = '128.2.213.102' # Cloudlet
  # addr = '54.202.14.124' # Amazon West

[token]
  max_size = 10000 # Upper bound on in-flight token size

[capture]
  min_fps = 50 # Lower bound for the capture loop frame rate
  image_width = 320 # Width of captured and transmitted images
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::define;

    use std::fs;
    use std::path::Path;

    #[test]
    fn run_load() {
        fs::create_dir_all(Path::new("/tmp/gabrieltest/conf_load/")).unwrap();
        let res = toml::load("/tmp/gabrieltest/conf_load/");

        // Defaults match the built-in constants.
        assert_eq!(res.server.addr, define::server::DEFAULT_ADDR);
        assert_eq!(res.token.max_size, define::tuning::MAX_TOKEN_SIZE);
        assert_eq!(res.capture.min_fps, define::tuning::MIN_FPS);
        assert_eq!(res.capture.image_width, define::tuning::IMAGE_WIDTH);
    }

    #[test]
    fn run_save_and_reload() {
        fs::create_dir_all(Path::new("/tmp/gabrieltest/conf_save/")).unwrap();
        let mut conf = toml::load("/tmp/gabrieltest/conf_save/");

        conf.server.addr = define::server::CLOUDLET_ADDR.to_string();
        conf.token.max_size = 2000;
        toml::save("/tmp/gabrieltest/conf_save/", conf);

        let reloaded = toml::load("/tmp/gabrieltest/conf_save/");
        assert_eq!(reloaded.server.addr, "128.2.213.102");
        assert_eq!(reloaded.token.max_size, 2000);
    }

    #[test]
    fn scalar_defaults_are_positive() {
        assert!(define::tuning::MAX_TOKEN_SIZE > 0);
        assert!(define::tuning::MIN_FPS > 0);
        assert!(define::tuning::IMAGE_WIDTH > 0);
    }
}
