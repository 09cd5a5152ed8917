use super::*;
use crate::airports::list;

#[rstest]
fn test_list_default_catalogue() {
    let mut out = Vec::new();
    list(&NetworkConfig::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().collect::<Vec<_>>(), DEFAULT_AIRPORTS);
}

#[rstest]
fn test_list_open_catalogue() {
    let mut out = Vec::new();
    list(&NetworkConfig { airports: vec![], routes: vec![] }, &mut out).unwrap();
    assert_contains!(String::from_utf8(out).unwrap(), "any airport name is accepted");
}
