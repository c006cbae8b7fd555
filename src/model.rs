//! Wind Data Model
//!
//! Row types of the remote `wind_data` table. The store owns these rows
//! entirely (uniqueness, timestamp ordering); this client only reads them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One time-stamped weather reading, measured or model-predicted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WindObservation {
    pub id: String,
    pub timestamp_utc: DateTime<Utc>,
    pub wind_speed_ms: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub wind_gust_ms: Option<f64>,
    pub temperature_c: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub source_type: SourceType,
    pub created_at: DateTime<Utc>,
}

/// Provenance of an observation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum SourceType {
    #[serde(rename = "MEASURED")]
    Measured,
    #[serde(rename = "PREDICTED_LSTM")]
    PredictedLstm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_observation_row() {
        let row = serde_json::json!({
            "id": "0b9e6f1c-9a3e-4d2b-8f5a-1c2d3e4f5a6b",
            "timestamp_utc": "2024-06-01T12:00:00Z",
            "wind_speed_ms": 5.4,
            "wind_direction_deg": 90.0,
            "wind_gust_ms": null,
            "temperature_c": 28.3,
            "pressure_hpa": null,
            "source_type": "MEASURED",
            "created_at": "2024-06-01T12:00:05Z"
        });

        let obs: WindObservation = serde_json::from_value(row).unwrap();
        assert_eq!(obs.source_type, SourceType::Measured);
        assert_eq!(obs.wind_speed_ms, Some(5.4));
        assert_eq!(obs.wind_gust_ms, None);
    }

    #[test]
    fn test_deserialize_predicted_source() {
        let obs: SourceType = serde_json::from_str("\"PREDICTED_LSTM\"").unwrap();
        assert_eq!(obs, SourceType::PredictedLstm);
    }
}
