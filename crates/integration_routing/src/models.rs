//! OpenRouteService directions response models

use serde::Deserialize;

/// Top-level GeoJSON answer of `/v2/directions/{profile}`
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Candidate routes in provider order
    pub features: Vec<RouteFeature>,
}

/// One candidate route
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    /// Route properties
    pub properties: RouteProperties,
}

/// Properties of a candidate route
#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    /// Aggregate totals of the route
    pub summary: RouteSummary,
}

/// Aggregate distance and duration of a route
///
/// OpenRouteService omits both fields for zero-length routes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RouteSummary {
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Duration in seconds
    #[serde(default)]
    pub duration: f64,
}

/// Error envelope returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ProviderError,
}

/// The `error` member is either a structured object or a bare message
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProviderError {
    Detailed {
        code: i64,
        #[serde(default)]
        message: Option<String>,
    },
    Message(String),
}

/// Provider codes meaning "no route between these points"
const ROUTE_NOT_FOUND: i64 = 2009;
const POINT_NOT_ROUTABLE: i64 = 2010;

impl ProviderError {
    pub(crate) const fn is_no_route(&self) -> bool {
        matches!(
            self,
            Self::Detailed {
                code: ROUTE_NOT_FOUND | POINT_NOT_ROUTABLE,
                ..
            }
        )
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Detailed { code, message } => match message {
                Some(msg) => format!("code {code}: {msg}"),
                None => format!("code {code}"),
            },
            Self::Message(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_parsing() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {
                    "segments": [],
                    "summary": { "distance": 4215.3, "duration": 731.9 }
                },
                "geometry": { "type": "LineString", "coordinates": [] }
            }]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let summary = response.features[0].properties.summary;
        assert!((summary.distance - 4215.3).abs() < f64::EPSILON);
        assert!((summary.duration - 731.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary_reads_as_zero() {
        let json = r#"{"features": [{"properties": {"summary": {}}}]}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let summary = response.features[0].properties.summary;
        assert!(summary.distance.abs() < f64::EPSILON);
        assert!(summary.duration.abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_features_is_an_error() {
        assert!(serde_json::from_str::<DirectionsResponse>("{}").is_err());
    }

    #[test]
    fn test_detailed_error_no_route() {
        let json = r#"{"error": {"code": 2010, "message": "Could not find routable point"}}"#;
        let body: ErrorResponse = serde_json::from_str(json).unwrap();
        assert!(body.error.is_no_route());
        assert!(body.error.describe().contains("2010"));
    }

    #[test]
    fn test_string_error() {
        let json = r#"{"error": "Access to this API has been disallowed"}"#;
        let body: ErrorResponse = serde_json::from_str(json).unwrap();
        assert!(!body.error.is_no_route());
        assert_eq!(body.error.describe(), "Access to this API has been disallowed");
    }
}
