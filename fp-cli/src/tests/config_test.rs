use std::io::Write;

use super::*;

#[rstest]
fn test_parse_yaml() {
    let config = NetworkConfig::parse(
        "
airports: [Dhaka, Sylhet]
routes:
  - { from: Dhaka, to: Sylhet, distance: 198 }
",
    )
    .unwrap();

    assert_eq!(config.airports, vec!["Dhaka", "Sylhet"]);
    assert_eq!(config.routes, vec![spec("Dhaka", "Sylhet", 198.0)]);
}

#[rstest]
fn test_parse_json_defaults_catalogue() {
    let config = NetworkConfig::parse(r#"{"routes": [{"from": "Paris", "to": "London", "distance": 343.5}]}"#).unwrap();

    assert_eq!(config.airports.len(), DEFAULT_AIRPORTS.len());
    assert_eq!(config.routes, vec![spec("Paris", "London", 343.5)]);
}

#[rstest]
fn test_parse_rejects_unknown_fields() {
    let err = NetworkConfig::parse("routes: []\nclock: true\n").unwrap_err();
    assert_contains!(format!("{err:#}"), "clock");
}

#[rstest]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("fp-network-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "airports: []\nroutes:\n  - {{ from: A, to: B, distance: 1 }}").unwrap();

    let config = NetworkConfig::load_or_default(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(config.airports.is_empty());
    assert_eq!(config.routes, vec![spec("A", "B", 1.0)]);
}

#[rstest]
fn test_load_missing_file() {
    let err = NetworkConfig::load(std::path::Path::new("/nonexistent/network.yaml")).unwrap_err();
    assert_contains!(err.to_string(), "could not read");
}

#[rstest]
fn test_no_file_uses_default_catalogue() {
    let config = NetworkConfig::load_or_default(None).unwrap();
    assert_eq!(config, NetworkConfig::default());
    assert!(config.airports.iter().any(|a| a == "NewYork"));
}

#[rstest]
#[case("Dhaka:Sylhet:198", spec("Dhaka", "Sylhet", 198.0))]
#[case(" Paris : London : 343.5 ", spec("Paris", "London", 343.5))]
#[case("A:B:-3", spec("A", "B", -3.0))]
fn test_route_spec_from_str(#[case] input: &str, #[case] expected: RouteSpec) {
    assert_eq!(input.parse::<RouteSpec>(), Ok(expected));
}

#[rstest]
#[case("Dhaka:Sylhet")]
#[case("Dhaka:Sylhet:far")]
#[case("a:b:c:4")]
fn test_route_spec_from_str_invalid(#[case] input: &str) {
    assert_err!(input.parse::<RouteSpec>());
}
