// Optional live weather badge. Never feeds the automatic theme.
use serde::{Deserialize, Serialize};
use shared::models::WeatherKind;

use crate::config::ForecastSettings;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the weather badge shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum ForecastStatus {
    #[default]
    Unknown,
    Denied,
    Ready { kind: WeatherKind, temperature_c: f64 },
}

impl ForecastStatus {
    pub fn label(&self) -> String {
        match self {
            ForecastStatus::Unknown => "Weather unavailable".to_string(),
            ForecastStatus::Denied => "Location not shared".to_string(),
            ForecastStatus::Ready { kind, temperature_c } => format!("{} · {:.0}°C", kind, temperature_c),
        }
    }
}

/// Maps a WMO weather interpretation code onto the three kinds the page knows.
pub fn kind_from_wmo_code(code: u16) -> WeatherKind {
    match code {
        0 | 1 => WeatherKind::Sunny,
        51..=67 | 80..=82 | 95..=99 => WeatherKind::Rainy,
        _ => WeatherKind::Cloudy,
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u16,
}

impl ForecastResponse {
    fn reading(&self) -> (WeatherKind, f64) {
        let current = &self.current_weather;
        (kind_from_wmo_code(current.weathercode), current.temperature)
    }
}

/// Thin client for an Open-Meteo compatible forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ForecastClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn current(&self, at: Coordinates) -> Result<(WeatherKind, f64)> {
        let response: ForecastResponse = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", at.latitude.to_string()),
                ("longitude", at.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.reading())
    }
}

/// Resolves the badge state. Failures degrade to `Unknown`; a missing location means `Denied`.
pub async fn resolve_forecast(location: Option<Coordinates>, client: &ForecastClient) -> ForecastStatus {
    let Some(at) = location else {
        tracing::info!("No location available for the weather badge");
        return ForecastStatus::Denied;
    };
    match client.current(at).await {
        Ok((kind, temperature_c)) => ForecastStatus::Ready { kind, temperature_c },
        Err(e) => {
            tracing::warn!("Weather lookup failed, showing unknown: {}", e);
            ForecastStatus::Unknown
        }
    }
}

/// Skips the lookup entirely when the badge is disabled.
pub async fn resolve_from_settings(settings: &ForecastSettings) -> ForecastStatus {
    if !settings.enabled {
        return ForecastStatus::Unknown;
    }
    let client = ForecastClient::new(settings.endpoint.clone());
    resolve_forecast(settings.location, &client).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_codes() {
        assert_eq!(kind_from_wmo_code(0), WeatherKind::Sunny);
        assert_eq!(kind_from_wmo_code(1), WeatherKind::Sunny);
        assert_eq!(kind_from_wmo_code(3), WeatherKind::Cloudy);
        assert_eq!(kind_from_wmo_code(45), WeatherKind::Cloudy);
        assert_eq!(kind_from_wmo_code(61), WeatherKind::Rainy);
        assert_eq!(kind_from_wmo_code(81), WeatherKind::Rainy);
        assert_eq!(kind_from_wmo_code(95), WeatherKind::Rainy);
        assert_eq!(kind_from_wmo_code(73), WeatherKind::Cloudy);
    }

    #[test]
    fn test_parse_current() {
        let body = r#"{"latitude":-6.8,"longitude":39.28,"current_weather":{"temperature":29.4,"windspeed":11.2,"weathercode":2,"time":"2026-10-16T12:00"}}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let (kind, temp) = response.reading();
        assert_eq!(kind, WeatherKind::Cloudy);
        assert!((temp - 29.4).abs() < 1e-9);

        assert!(serde_json::from_str::<ForecastResponse>("{}").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ForecastStatus::Denied.label(), "Location not shared");
        let ready = ForecastStatus::Ready { kind: WeatherKind::Sunny, temperature_c: 30.2 };
        assert_eq!(ready.label(), "sunny · 30°C");
    }

    #[tokio::test]
    async fn test_missing_location_is_denied() {
        let client = ForecastClient::new("http://127.0.0.1:9/v1/forecast");
        assert_eq!(resolve_forecast(None, &client).await, ForecastStatus::Denied);
    }

    #[tokio::test]
    async fn test_disabled_badge_stays_unknown() {
        let settings = ForecastSettings {
            enabled: false,
            location: Some(Coordinates { latitude: 0.0, longitude: 0.0 }),
            ..ForecastSettings::default()
        };
        assert_eq!(resolve_from_settings(&settings).await, ForecastStatus::Unknown);
    }
}
