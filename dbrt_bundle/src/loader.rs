use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use dbrt_core::utils::properties::{load_properties, parse_properties};

use crate::Locale;

/// resolves a slash separated base name plus locale to a key -> template table.
pub trait BundleLoader {
    fn load(&self, base_name : &'_ str, locale : &Locale) -> Result<HashMap<String, String>, io::Error>;
}

/// lookup order: locale specific resource first, then the bare base name.
pub fn candidate_names(base_name : &'_ str, locale : &Locale) -> [String; 2] {
    [
        format!("{}_{}", base_name, locale.tag()),
        base_name.to_string(),
    ]
}

/// loads `<name>.properties` files under a root directory.
pub struct FsBundleLoader {
    root : PathBuf,
}

impl FsBundleLoader {
    pub fn new(root : impl Into<PathBuf>) -> FsBundleLoader {
        FsBundleLoader { root : root.into() }
    }
}

impl BundleLoader for FsBundleLoader {
    fn load(&self, base_name : &'_ str, locale : &Locale) -> Result<HashMap<String, String>, io::Error> {
        for name in candidate_names(base_name, locale) {
            let path = self.root.join(format!("{}.properties", name));
            if path.is_file() {
                return load_properties(path.as_path());
            }
        }

        Err(io::Error::new(io::ErrorKind::NotFound,
            format!("no resource for base [{}] locale [{}]", base_name, locale.tag())))
    }
}

/// table set held in memory, for embedded resources and tests.
#[derive(Default)]
pub struct MemoryBundleLoader {
    tables : HashMap<String, HashMap<String, String>>,
}

impl MemoryBundleLoader {
    pub fn new() -> MemoryBundleLoader {
        MemoryBundleLoader { tables : HashMap::new() }
    }

    /// register properties text under a resource name like `dbrt/resource/Common_ja`.
    pub fn put_table(&mut self, resource_name : &'_ str, text : &'_ str) {
        self.tables.insert(resource_name.to_string(), parse_properties(text));
    }
}

impl BundleLoader for MemoryBundleLoader {
    fn load(&self, base_name : &'_ str, locale : &Locale) -> Result<HashMap<String, String>, io::Error> {
        for name in candidate_names(base_name, locale) {
            if let Some(table) = self.tables.get(name.as_str()) {
                return Ok(table.clone());
            }
        }

        Err(io::Error::new(io::ErrorKind::NotFound,
            format!("no resource for base [{}] locale [{}]", base_name, locale.tag())))
    }
}
