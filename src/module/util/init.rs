//! This module is responsible for preparing the resources needed by the application,
//! such as directories and configurations.

pub mod resource {
    use super::GabrielProperty; // Import the GabrielProperty type from the parent module
    use crate::module::util::conf;
    use crate::module::util::path::{dir, GabrielPath};
    use crate::module::util::storage::{ExternalStorage, StorageProvider};

    /// Initialize the application resources and return a GabrielProperty instance
    /// containing paths and configurations.
    ///
    /// Resolution uses the platform storage provider. Every derived path depends
    /// on the storage root, so an unresolvable root refuses to start.
    pub fn init() -> GabrielProperty {
        init_with(&ExternalStorage::new())
    }

    /// Initialize the application resources against an explicit storage provider.
    pub fn init_with(provider: &dyn StorageProvider) -> GabrielProperty {
        // Resolve the storage root, refusing to start without one
        let root = match provider.root() {
            Some(root) => root,
            None => panic!("Can't resolve storage root."),
        };

        // Materialize the directory layout under the root
        let dirs = match dir::create_app_sub_dir(&root) {
            Some(dirs) => dirs,
            None => panic!("Can't create app directories."),
        };

        // Load the app configuration file from the data directory
        let conf = conf::toml::load(&dirs.data);

        // Derive the full path set from the loaded configuration
        let path = GabrielPath::new(dirs, &conf.server.addr, conf.token.max_size);

        // Return a GabrielProperty instance that contains the paths and configurations
        GabrielProperty { path, conf }
    }
}

/// This struct represents the properties of the app, such as paths and configurations.
///
/// It is built once at startup and holds no interior mutability, so clones and
/// shared references are safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct GabrielProperty {
    pub path: crate::module::util::path::GabrielPath, // The paths of the app resources
    pub conf: crate::module::util::conf::Config,      // The configurations of the app
}
