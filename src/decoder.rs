//! JSON decoder module
//!
//! Converts response bodies into the caller's record type. The OMDb API
//! answers lookup failures with a 200 and an error envelope, so a body that
//! doesn't fit the requested shape is checked against that envelope to produce
//! a readable error.

use log::warn;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while decoding a response body
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The API itself reported an error (e.g. "Series not found!")
    #[error("API returned an error: {0}")]
    Api(String),

    /// The body is not JSON or doesn't match the expected fields
    #[error("Failed to parse API response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The envelope OMDb sends instead of a record when a lookup fails.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: String,
}

/// Decodes `text` into a record of type `T`.
///
/// # Examples
///
/// ```
/// use episode_ranker::{decode, SeriesSummary};
///
/// let series: SeriesSummary = decode(r#"{"Title":"Dark","totalSeasons":"3"}"#).unwrap();
/// assert_eq!(series.total_seasons, 3);
/// ```
pub fn decode<T>(text: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    match serde_json::from_str::<T>(text) {
        Ok(record) => Ok(record),
        Err(parse_error) => {
            warn!("Response did not match the expected shape: {}", parse_error);
            match serde_json::from_str::<ErrorEnvelope>(text) {
                Ok(envelope) if envelope.response.eq_ignore_ascii_case("false") => {
                    Err(DecodeError::Api(envelope.error))
                }
                _ => Err(DecodeError::Malformed(parse_error)),
            }
        }
    }
}

/// Deserializes a count that may arrive as a JSON number or a numeric string.
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, found {:?}", s))),
    }
}
