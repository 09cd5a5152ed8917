use fp_graph::{
    GraphError,
    InvalidRouteReason,
};

use super::*;
use crate::compute::*;

fn catalogue_config(routes: Vec<RouteSpec>) -> NetworkConfig {
    NetworkConfig { routes, ..NetworkConfig::default() }
}

#[rstest]
fn test_build_session_skips_invalid_routes() {
    let config = catalogue_config(vec![
        spec("Dhaka", "Sylhet", 5.0),
        spec("Dhaka", "Dhaka", 5.0),
        spec("Dhaka", "Gotham", 5.0),
    ]);
    let session = build_session(config, &[spec("Sylhet", "Chattogram", 3.0)], false).unwrap();

    assert_eq!(session.network().airport_count(), 3);
    assert_eq!(session.network().routes().unwrap().len(), 2);
}

#[rstest]
fn test_build_session_strict_aborts() {
    let config = catalogue_config(vec![spec("Dhaka", "Sylhet", 5.0), spec("Dhaka", "Sylhet", 0.0)]);
    let err = build_session(config, &[], true).unwrap_err();
    assert_contains!(err.to_string(), "bad distance");
}

#[rstest]
fn test_catalogue_is_enforced() {
    let mut session = Session::new(vec!["Dhaka".into(), "Sylhet".into()]);
    assert_eq!(session.submit(&spec("Dhaka", "Paris", 1.0)), Err(SubmitError::NotInCatalogue("Paris".into())));
    assert_eq!(
        session.submit(&spec("Dhaka", "Sylhet", -1.0)),
        Err(SubmitError::Graph(GraphError::InvalidRoute(InvalidRouteReason::BadDistance)))
    );
    assert_ok!(session.submit(&spec("Dhaka", "Sylhet", 1.0)));
    assert_eq!(session.network().airport_count(), 2);
}

#[rstest]
fn test_empty_catalogue_accepts_anything() {
    let mut session = Session::new(vec![]);
    assert_ok!(session.submit(&spec("Gotham", "Metropolis", 12.0)));
}

#[rstest]
fn test_render_text() {
    let session = build_session(
        catalogue_config(vec![spec("Dhaka", "Sylhet", 5.0), spec("Sylhet", "Chattogram", 3.0)]),
        &[],
        true,
    )
    .unwrap();

    let mut out = Vec::new();
    render(&session, OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_starts_with!(text, "Shortest distances between all pairs of airports:\n");
    assert_contains!(text, "From Dhaka to Chattogram: 8\n");
    assert_eq!(text.lines().count(), 10);
}

#[rstest]
fn test_render_json() {
    let session = build_session(
        catalogue_config(vec![spec("Dhaka", "Sylhet", 5.0), spec("Paris", "London", 344.0)]),
        &[],
        true,
    )
    .unwrap();

    let mut out = Vec::new();
    render(&session, OutputFormat::Json, &mut out).unwrap();
    let pairs: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(pairs.as_array().unwrap().len(), 16);
    assert_eq!(pairs[2], serde_json::json!({"from": "Dhaka", "to": "Paris", "distance": null}));
    assert_eq!(pairs[1]["distance"], serde_json::json!(5.0));
}

#[rstest]
fn test_render_empty_network() {
    let session = Session::new(vec![]);
    let mut out = Vec::new();
    render(&session, OutputFormat::Text, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Shortest distances between all pairs of airports:\n");
}
