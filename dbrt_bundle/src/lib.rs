pub mod loader;
pub mod format;
pub mod common;

pub use common::CommonBundle;
pub use loader::{BundleLoader, FsBundleLoader, MemoryBundleLoader};

/// locale tag for resource lookup, the language part only (`ja`, `en`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    tag : String,
}

impl Locale {
    pub fn new(tag : &'_ str) -> Locale {
        Locale { tag : tag.to_string() }
    }

    /// process default locale, read from LC_ALL then LANG.
    /// `ja_JP.UTF-8` style values are cut down to the language part. fallback is `en`.
    pub fn process_default() -> Locale {
        let raw = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| String::from("en"));

        let language = raw
            .split('.').next().unwrap_or("en")
            .split('_').next().unwrap_or("en");

        if language.is_empty() || language == "C" || language == "POSIX" {
            return Locale::new("en");
        }

        Locale::new(language)
    }

    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

#[cfg(test)]
mod locale_tests {
    use super::Locale;

    #[test]
    fn test_locale_tag() {
        assert_eq!(Locale::new("ja").tag(), "ja");
    }
}
