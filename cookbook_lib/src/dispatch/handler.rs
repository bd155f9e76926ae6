use tracing::{debug, info};
use crate::completion::CompletionClient;
use crate::config::Params;
use crate::context::Context;
use crate::error::Error;
use crate::extract::{Extractor, FieldMap};
use super::prompts::QueryPrompts;
use super::weather::WeatherLookup;

const REASONING: &str = "reasoning";
const INTENT: &str = "intent_recognized";
const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";

/// Routes handled by the query handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Weather question.
    Weather,
    /// Anything else.
    Other,
}

impl TryFrom<&str> for Intent {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "weather" => Ok(Intent::Weather),
            "other" => Ok(Intent::Other),
            _ => Err(Error::UnknownIntent(val.to_owned())),
        }
    }
}

/// Answers a free-form query by classifying its intent first.
///
/// Weather queries take three model calls (intent, coordinates, phrasing)
/// plus a weather lookup; other queries take two (intent, general answer).
/// Every stage is a separate request with a fresh context.
pub struct QueryHandler {
    completion: CompletionClient,
    weather: Box<dyn WeatherLookup>,
    prompts: QueryPrompts,
    params: Params,
    intent_fields: Extractor,
    coordinate_fields: Extractor,
}

impl QueryHandler {

    /// Create handler with the default prompts.
    pub fn new(completion: CompletionClient, weather: Box<dyn WeatherLookup>, params: Params) -> Self {
        QueryHandler {
            completion,
            weather,
            prompts: QueryPrompts::default(),
            params,
            intent_fields: Extractor::new().with_fields(&[REASONING, INTENT]),
            coordinate_fields: Extractor::new().with_fields(&[LATITUDE, LONGITUDE]),
        }
    }

    /// Replace stage prompts.
    pub fn with_prompts(mut self, prompts: QueryPrompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Completion client used by the stages.
    pub fn completion(&self) -> &CompletionClient {
        &self.completion
    }

    /// Model parameters used by the stages.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Answer `query`.
    ///
    /// Returns `Ok(None)` when the final stage produced no completion and
    /// `Err(Error::UnknownIntent)` when the intent is neither `weather` nor
    /// `other`, including when the intent stage itself failed.
    pub async fn handle_query(&self, query: &str) -> Result<Option<String>, Error> {
        let result = self.stage(&self.prompts.intent, query, &self.intent_fields, &[REASONING, INTENT]).await;

        let intent = text_field(&result, INTENT);
        debug!("Intent reasoning: {}", text_field(&result, REASONING));
        info!("Recognized intent: \"{intent}\"");

        match Intent::try_from(intent)? {
            Intent::Weather => self.answer_weather(query).await,
            Intent::Other => {
                let context = Context::build(&self.prompts.general, query);
                Ok(self.completion.complete(&context, &self.params).await)
            }
        }
    }

    async fn answer_weather(&self, query: &str) -> Result<Option<String>, Error> {
        let result = self.stage(&self.prompts.coordinates, query, &self.coordinate_fields, &[LATITUDE, LONGITUDE]).await;

        let latitude = parse_coordinate(text_field(&result, LATITUDE))?;
        let longitude = parse_coordinate(text_field(&result, LONGITUDE))?;

        let weather = self.weather.get_weather(latitude, longitude).await?;

        let message = format!(
            "Original Message: {query}\nCurrent temperature: {}°C ({}°F)",
            weather.celsius, weather.fahrenheit
        );
        let context = Context::build(&self.prompts.weather, &message);

        Ok(self.completion.complete(&context, &self.params).await)
    }

    async fn stage(&self, system_prompt: &str, query: &str, extractor: &Extractor, fields: &[&str]) -> FieldMap {
        let context = Context::build(system_prompt, query);
        self.completion.respond(&context, extractor, fields, &self.params).await
    }
}

fn text_field<'a>(fields: &'a FieldMap, name: &str) -> &'a str {
    fields.get(name).and_then(|v| v.as_str()).unwrap_or_default()
}

fn parse_coordinate(val: &str) -> Result<f64, Error> {
    val.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::InvalidCoordinate(val.to_owned()))
}
