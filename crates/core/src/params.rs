//! Parameter helpers that never fail.
//!
//! JSON helpers take an object, a key and a default: a missing key or a
//! value of the wrong type yields the default. Query helpers read a URL-style
//! query string (`?res=2048&seed=7`) the way a browser host would, again
//! falling back to a default instead of reporting an error.

use crate::canvas::MAX_RASTER_SIDE;
use serde_json::Value;

/// Reference canvas side that all sketch sizes are expressed against.
pub const DEFAULT_RESOLUTION: f64 = 4096.0;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative integers are accepted; floats fall back to `default`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Returns the raw value of `name` in a URL query string.
///
/// A leading `?` is ignored. A key without `=` has an empty value. When a key
/// repeats, the first occurrence wins.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Reads `name` from a query string as a finite, strictly positive number.
///
/// Missing, empty, unparsable, non-finite or non-positive values all yield
/// `default`.
pub fn query_f64(query: &str, name: &str, default: f64) -> f64 {
    query_param(query, name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

/// The custom raster resolution requested through the `res` query parameter.
///
/// `res` is the raster side in pixels, so values outside
/// `1..=MAX_RASTER_SIDE` fall back to the default like malformed ones.
pub fn resolution_from_query(query: Option<&str>) -> f64 {
    let res = query.map_or(DEFAULT_RESOLUTION, |q| query_f64(q, "res", DEFAULT_RESOLUTION));
    if (1.0..=MAX_RASTER_SIDE as f64).contains(&res) {
        res
    } else {
        DEFAULT_RESOLUTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"alpha": 0.25});
        assert!((param_f64(&params, "alpha", 0.4) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"border": 0});
        assert!(param_f64(&params, "border", 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_missing_or_wrong_type() {
        assert!((param_f64(&json!({}), "alpha", 0.4) - 0.4).abs() < f64::EPSILON);
        let params = json!({"alpha": "opaque"});
        assert!((param_f64(&params, "alpha", 0.4) - 0.4).abs() < f64::EPSILON);
        let params = json!("not an object");
        assert!((param_f64(&params, "alpha", 0.4) - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"amount": 64});
        assert_eq!(param_usize(&params, "amount", 1024), 64);
    }

    #[test]
    fn param_usize_rejects_floats_and_negatives() {
        assert_eq!(param_usize(&json!({"times": 2.5}), "times", 4), 4);
        assert_eq!(param_usize(&json!({"times": -1}), "times", 4), 4);
        assert_eq!(param_usize(&json!({"times": null}), "times", 4), 4);
    }

    #[test]
    fn query_param_finds_value() {
        assert_eq!(query_param("?res=2048&seed=7", "res"), Some("2048"));
        assert_eq!(query_param("res=2048&seed=7", "seed"), Some("7"));
    }

    #[test]
    fn query_param_missing_key_is_none() {
        assert_eq!(query_param("?seed=7", "res"), None);
        assert_eq!(query_param("", "res"), None);
    }

    #[test]
    fn query_param_flag_without_value_is_empty() {
        assert_eq!(query_param("?res&seed=7", "res"), Some(""));
    }

    #[test]
    fn query_param_first_occurrence_wins() {
        assert_eq!(query_param("res=1&res=2", "res"), Some("1"));
    }

    #[test]
    fn resolution_defaults_without_query() {
        assert_eq!(resolution_from_query(None), DEFAULT_RESOLUTION);
        assert_eq!(resolution_from_query(Some("")), DEFAULT_RESOLUTION);
        assert_eq!(resolution_from_query(Some("?seed=3")), DEFAULT_RESOLUTION);
    }

    #[test]
    fn resolution_reads_numeric_value() {
        assert_eq!(resolution_from_query(Some("?res=1024")), 1024.0);
        assert_eq!(resolution_from_query(Some("res= 512.5 ")), 512.5);
    }

    #[test]
    fn malformed_resolution_fails_safe_to_default() {
        for q in ["?res=abc", "?res=", "?res", "?res=-5", "?res=0", "?res=NaN", "?res=inf"] {
            assert_eq!(
                resolution_from_query(Some(q)),
                DEFAULT_RESOLUTION,
                "query {q:?} should fall back"
            );
        }
    }

    #[test]
    fn resolution_outside_raster_limits_fails_safe_to_default() {
        for q in ["?res=0.3", "?res=0.99", "?res=16385", "?res=100000"] {
            assert_eq!(
                resolution_from_query(Some(q)),
                DEFAULT_RESOLUTION,
                "query {q:?} should fall back"
            );
        }
        assert_eq!(resolution_from_query(Some("?res=1")), 1.0);
        assert_eq!(resolution_from_query(Some("?res=16384")), 16384.0);
    }

    #[test]
    fn accepted_resolution_always_builds_a_canvas() {
        use crate::{Canvas, CanvasGeometry, Srgb};
        for q in ["?res=0.3", "?res=1", "?res=100000", "?res=333.7"] {
            let res = resolution_from_query(Some(q));
            let geometry = CanvasGeometry::new(800.0, 600.0, res).unwrap();
            let side = geometry.canvas_size;
            let canvas = Canvas::new(side, side, geometry.pixel_density(), Srgb::BLACK);
            assert!(canvas.is_ok(), "query {q:?} gave res {res}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolution_is_always_finite_and_positive(query in ".{0,40}") {
                let res = resolution_from_query(Some(&query));
                let limits = 1.0..=MAX_RASTER_SIDE as f64;
                prop_assert!(limits.contains(&res), "got {res} for {query:?}");
            }

            #[test]
            fn in_range_resolution_round_trips(res in 1.0_f64..=16_384.0) {
                let query = format!("?res={res}");
                prop_assert_eq!(resolution_from_query(Some(&query)), res);
            }
        }
    }
}
