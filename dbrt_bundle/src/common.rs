use std::collections::HashMap;

use dbrt_core::log_debug;

use crate::format::format_template;
use crate::loader::{BundleLoader, FsBundleLoader};
use crate::Locale;

/// base name of bundle [Common]. known locales: ja.
pub const COMMON_BUNDLE_BASE : &str = "dbrt/resource/Common";

const DEFAULT_I001 : &str = "こんにちは {0}";

/// accessor for bundle [Common], generated from the resource bundle definition.
/// the backing table is loaded once at construction, best effort. when the load
/// or a key lookup fails the template baked in at generation time is used, so
/// every getter returns a formatted message no matter what.
pub struct CommonBundle {
    base_name : String,
    locale : Locale,
    table : Option<HashMap<String, String>>,
}

impl CommonBundle {
    /// process default locale, filesystem loader rooted at the working directory.
    pub fn new() -> CommonBundle {
        Self::with_locale(Locale::process_default())
    }

    pub fn with_locale(locale : Locale) -> CommonBundle {
        Self::with_loader(locale, &FsBundleLoader::new("."))
    }

    pub fn with_loader(locale : Locale, loader : &'_ dyn BundleLoader) -> CommonBundle {
        let table = match loader.load(COMMON_BUNDLE_BASE, &locale) {
            Ok(ok) => Some(ok),
            Err(err) => {
                log_debug!("bundle [{}] locale [{}] load failed, using generation time defaults - {}",
                    COMMON_BUNDLE_BASE, locale.tag(), err);
                None
            }
        };

        CommonBundle {
            base_name : COMMON_BUNDLE_BASE.to_string(),
            locale,
            table,
        }
    }

    pub fn base_name(&self) -> &str {self.base_name.as_str()}
    pub fn locale(&self) -> &Locale {&self.locale}

    /// the loaded backing table. callers must not assume it is present.
    pub fn raw_backing_table(&self) -> Option<&HashMap<String, String>> {
        self.table.as_ref()
    }

    fn template_for(&self, key : &'_ str, default_template : &'static str) -> String {
        match &self.table {
            Some(table) => match table.get(key) {
                Some(t) => t.clone(),
                None => default_template.to_string(),
            },
            None => default_template.to_string(),
        }
    }

    /// bundle [Common], key [I001]. `こんにちは {0}` (ja).
    pub fn get_i001(&self, arg0 : &'_ str) -> String {
        format_template(self.template_for("I001", DEFAULT_I001).as_str(), &[arg0])
    }
}

impl Default for CommonBundle {
    fn default() -> Self {
        Self::new()
    }
}
