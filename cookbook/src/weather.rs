use async_trait::async_trait;
use cookbook_lib::dispatch::{Weather, WeatherLookup};
use cookbook_lib::Error;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current temperature from the Open-Meteo forecast API.
pub struct OpenMeteo {
    client: reqwest::Client,
    url: String,
}

impl OpenMeteo {
    /// Client for the public endpoint.
    pub fn new() -> Self {
        Self::with_url(FORECAST_URL.to_owned())
    }

    /// Client for a custom forecast endpoint.
    pub fn with_url(url: String) -> Self {
        OpenMeteo {
            client: reqwest::Client::new(),
            url,
        }
    }

    async fn current_temperature(&self, latitude: f64, longitude: f64, unit: &str) -> Result<f64, Error> {
        let start = Instant::now();

        let response = self.client.get(&self.url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m".to_owned()),
                ("temperature_unit", unit.to_owned()),
            ])
            .send()
            .await
            .map_err(|e| Error::Weather(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Weather(e.to_string()))?;

        let body: Value = response.json().await
            .map_err(|e| Error::Weather(e.to_string()))?;

        debug!("Weather lookup ({unit}) took {} ms", start.elapsed().as_millis());

        read_temperature(&body)
    }
}

#[async_trait]
impl WeatherLookup for OpenMeteo {
    async fn get_weather(&self, latitude: f64, longitude: f64) -> Result<Weather, Error> {
        let celsius = self.current_temperature(latitude, longitude, "celsius").await?;
        let fahrenheit = self.current_temperature(latitude, longitude, "fahrenheit").await?;

        Ok(Weather { celsius, fahrenheit })
    }
}

fn read_temperature(body: &Value) -> Result<f64, Error> {
    body["current"]["temperature_2m"]
        .as_f64()
        .ok_or_else(|| Error::Weather("current.temperature_2m is missing in the forecast".to_owned()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_read_temperature() {
        let body = json!({"latitude": 19.9, "current": {"time": "2024-01-06T17:00", "temperature_2m": 26.5}});
        assert_eq!(read_temperature(&body).expect("temperature"), 26.5);

        assert!(matches!(read_temperature(&json!({"current": {}})), Err(Error::Weather(_))));
        assert!(matches!(read_temperature(&json!({"current": {"temperature_2m": "warm"}})), Err(Error::Weather(_))));
    }

    #[tokio::test]
    async fn test_get_weather() {
        let mut server = mockito::Server::new_async().await;
        let celsius = server.mock("GET", "/v1/forecast")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "19.8968".into()),
                Matcher::UrlEncoded("longitude".into(), "-155.5828".into()),
                Matcher::UrlEncoded("current".into(), "temperature_2m".into()),
                Matcher::UrlEncoded("temperature_unit".into(), "celsius".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(r#"{"current": {"temperature_2m": 26.5}}"#)
            .create_async()
            .await;
        let fahrenheit = server.mock("GET", "/v1/forecast")
            .match_query(Matcher::UrlEncoded("temperature_unit".into(), "fahrenheit".into()))
            .with_header("content-type", "application/json")
            .with_body(r#"{"current": {"temperature_2m": 79.7}}"#)
            .create_async()
            .await;

        let lookup = OpenMeteo::with_url(format!("{}/v1/forecast", server.url()));
        let weather = lookup.get_weather(19.8968, -155.5828).await.expect("weather");

        celsius.assert_async().await;
        fahrenheit.assert_async().await;
        assert_eq!(weather, Weather { celsius: 26.5, fahrenheit: 79.7 });
    }

    #[tokio::test]
    async fn test_failed_lookup() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#)
            .create_async()
            .await;

        let lookup = OpenMeteo::with_url(format!("{}/v1/forecast", server.url()));

        assert!(matches!(lookup.get_weather(123.0, 0.0).await, Err(Error::Weather(_))));
    }
}
