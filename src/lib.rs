//! This crate provides the configuration surface of a Gabriel cognitive-assistance client.
//!
//! All values are resolved once at startup into an immutable [`GabrielProperty`]
//! that the rest of the application receives by explicit injection.

pub mod module; // Import the module submodule that contains other modules

pub use crate::module::util::init::resource::init;
pub use crate::module::util::init::GabrielProperty;

use crate::module::define; // Import the define module that contains constants

/// This function initializes the logger system using the log4rs crate.
///
/// # Arguments
/// * `dir` - A string slice that holds the directory where the log file will be stored
/// * `name` - A string slice that holds the name of the logger and the log file
///
/// # Example
/// ```no_run
/// gabriel_conf::init_log("./log_dir", "logger_name");
/// ```
pub fn init_log(dir: &str, name: &str) {
    use crate::module::util::path::join;
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({d} - {l}: {m}{n})}")))
        .build(join(&[dir, define::path::LOG_DIR, &format!("{}.log", name)]))
        .unwrap();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))
        .unwrap();
    log4rs::init_config(config).unwrap();
}
