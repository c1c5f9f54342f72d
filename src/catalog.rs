//! Data structures for series, seasons and episodes.
//!
//! The records deserialize straight from the OMDb JSON payloads, so the serde
//! renames below mirror the API's field names.

use serde::Deserialize;
use std::fmt;

use crate::decoder::number_or_string;

/// Rating text the API uses when an episode has not been rated
pub const UNRATED: &str = "N/A";

/// Series level summary returned by a title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesSummary {
    /// The series title
    #[serde(rename = "Title")]
    pub title: String,
    /// Number of seasons as reported by the API
    #[serde(rename = "totalSeasons", deserialize_with = "number_or_string")]
    pub total_seasons: u32,
    /// Overall IMDb rating, or "N/A"
    #[serde(rename = "imdbRating", default)]
    pub rating: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
}

/// One season and its episodes, in the order the API lists them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeasonSummary {
    /// The season number
    #[serde(rename = "Season", deserialize_with = "number_or_string")]
    pub number: u32,
    /// Episodes of this season
    #[serde(rename = "Episodes", default)]
    pub episodes: Vec<EpisodeSummary>,
}

/// A single episode as listed inside a season response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EpisodeSummary {
    /// The episode title
    #[serde(rename = "Title")]
    pub title: String,
    /// The episode number within its season
    #[serde(rename = "Episode", deserialize_with = "number_or_string")]
    pub number: u32,
    /// Rating text, e.g. "8.7", or "N/A" when unrated
    #[serde(rename = "imdbRating")]
    pub rating: String,
    /// Release date, if the API provides one
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
}

impl EpisodeSummary {
    /// Returns false when the rating is the "N/A" sentinel in any letter case.
    pub fn is_rated(&self) -> bool {
        !self.rating.eq_ignore_ascii_case(UNRATED)
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} season(s), rating {}",
            self.title, self.year, self.total_seasons, self.rating
        )?;
        if !self.genre.is_empty() {
            write!(f, ", genre: {}", self.genre)?;
        }
        if !self.actors.is_empty() {
            write!(f, ", actors: {}", self.actors)?;
        }
        Ok(())
    }
}

impl fmt::Display for SeasonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Season {} - {} episode(s): ",
            self.number,
            self.episodes.len()
        )?;
        let titles: Vec<&str> = self.episodes.iter().map(|e| e.title.as_str()).collect();
        write!(f, "{}", titles.join(", "))
    }
}

impl fmt::Display for EpisodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:02} - {} (rating {})", self.number, self.title, self.rating)?;
        if let Some(released) = &self.released {
            write!(f, ", released {}", released)?;
        }
        Ok(())
    }
}
