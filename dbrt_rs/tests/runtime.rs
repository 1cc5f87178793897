use dbrt_rs::bundle::common::COMMON_BUNDLE_BASE;
use dbrt_rs::bundle::{CommonBundle, Locale, MemoryBundleLoader};
use dbrt_rs::err::{refine, SqlError, SqlErrorKind};
use dbrt_rs::row::UsersRow;

#[test]
fn test_duplicate_key_flow() {
    // execution layer got a duplicate key error from the driver
    let driver_err = SqlError::full(SqlErrorKind::Generic,
        "dup key".to_string(), Some("23505".to_string()), 1062);

    let refined = refine(driver_err);

    assert_eq!(refined.kind(), SqlErrorKind::IntegrityConstraintViolation);
    assert_eq!(refined.state(), Some("23505"));
    assert_eq!(refined.vendor_code(), 1062);
    assert!(refined.reason().starts_with("データベース制約違反により変更が失敗しました。"));
    assert_eq!(refined.cause().unwrap().reason(), "dup key");
}

#[test]
fn test_greeting_message_flow() {
    let mut loader = MemoryBundleLoader::new();
    loader.put_table(format!("{}_ja", COMMON_BUNDLE_BASE).as_str(), "I001=こんにちは {0}");

    let bundle = CommonBundle::with_loader(Locale::new("ja"), &loader);
    assert_eq!(bundle.get_i001("world"), "こんにちは world");

    // no table at all still produces the generation time message
    let fallback = CommonBundle::with_loader(Locale::new("ja"), &MemoryBundleLoader::new());
    assert_eq!(fallback.get_i001("world"), "こんにちは world");
}

#[test]
fn test_row_fill_and_render() {
    let mut row = UsersRow::default();
    row.set_user_id(7);
    row.set_user_name(Some("alice".to_string()));

    assert_eq!(row.user_id(), 7);
    assert!(row.to_string().contains("[user_id=7,user_name=alice,"));
}
