use async_trait::async_trait;
use crate::error::Error;

/// Current temperature at a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    /// Degrees Celsius.
    pub celsius: f64,
    /// Degrees Fahrenheit.
    pub fahrenheit: f64,
}

/// Weather data source used by the weather route.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Current temperature at `latitude`, `longitude`.
    async fn get_weather(&self, latitude: f64, longitude: f64) -> Result<Weather, Error>;
}
