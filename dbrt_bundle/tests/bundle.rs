use std::io;
use std::path::PathBuf;

use dbrt_bundle::common::COMMON_BUNDLE_BASE;
use dbrt_bundle::{BundleLoader, CommonBundle, FsBundleLoader, Locale, MemoryBundleLoader};

fn ja_loader() -> MemoryBundleLoader {
    let mut loader = MemoryBundleLoader::new();
    loader.put_table(format!("{}_ja", COMMON_BUNDLE_BASE).as_str(), include_str!("./bundle.asset.properties"));
    loader
}

#[test]
fn test_get_i001_from_loaded_table() {
    let bundle = CommonBundle::with_loader(Locale::new("ja"), &ja_loader());

    assert!(bundle.raw_backing_table().is_some());
    assert_eq!(bundle.get_i001("world"), "やあ world さん");
}

#[test]
fn test_get_i001_falls_back_without_table() {
    let bundle = CommonBundle::with_loader(Locale::new("ja"), &MemoryBundleLoader::new());

    assert!(bundle.raw_backing_table().is_none());
    assert_eq!(bundle.get_i001("world"), "こんにちは world");
}

#[test]
fn test_get_i001_falls_back_on_missing_key() {
    let mut loader = MemoryBundleLoader::new();
    loader.put_table(format!("{}_ja", COMMON_BUNDLE_BASE).as_str(), "I999=unrelated {0}");

    let bundle = CommonBundle::with_loader(Locale::new("ja"), &loader);

    assert!(bundle.raw_backing_table().is_some());
    assert_eq!(bundle.get_i001("world"), "こんにちは world");
}

#[test]
fn test_locale_table_wins_over_base_table() {
    let mut loader = MemoryBundleLoader::new();
    loader.put_table(COMMON_BUNDLE_BASE, "I001=base {0}");
    loader.put_table(format!("{}_ja", COMMON_BUNDLE_BASE).as_str(), "I001=ja {0}");

    let bundle = CommonBundle::with_loader(Locale::new("ja"), &loader);

    assert_eq!(bundle.get_i001("x"), "ja x");
}

#[test]
fn test_base_table_used_for_unknown_locale() {
    let mut loader = MemoryBundleLoader::new();
    loader.put_table(COMMON_BUNDLE_BASE, "I001=base {0}");

    let bundle = CommonBundle::with_loader(Locale::new("fr"), &loader);

    assert_eq!(bundle.get_i001("x"), "base x");
}

#[test]
fn test_fs_loader_reads_locale_file() -> Result<(), io::Error> {
    let root = std::env::temp_dir().join("dbrt_bundle_fs_test");
    let resource_dir : PathBuf = root.join("dbrt/resource");
    std::fs::create_dir_all(resource_dir.as_path())?;
    std::fs::write(resource_dir.join("Common_ja.properties"), "I001=file {0}\n")?;

    let loader = FsBundleLoader::new(root.as_path());
    let table = loader.load(COMMON_BUNDLE_BASE, &Locale::new("ja"))?;
    assert_eq!(table["I001"], "file {0}");

    let bundle = CommonBundle::with_loader(Locale::new("ja"), &loader);
    assert_eq!(bundle.get_i001("world"), "file world");

    std::fs::remove_dir_all(root.as_path())?;
    Ok(())
}

#[test]
fn test_fs_loader_missing_base_is_not_found() {
    let loader = FsBundleLoader::new(std::env::temp_dir().join("dbrt_bundle_no_such_dir"));

    let ret = loader.load(COMMON_BUNDLE_BASE, &Locale::new("ja"));
    assert!(ret.is_err());
    assert_eq!(ret.err().unwrap().kind(), io::ErrorKind::NotFound);
}
