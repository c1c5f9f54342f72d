//! episode_ranker - Find the best rated episodes of a tv series
//!
//! This library looks up a series on the OMDb API, fetches every season it
//! reports, and ranks the episodes of all seasons by their rating.

mod catalog;
mod console;
mod decoder;
mod endpoint;
mod fetcher;
mod ranking;

use log::info;
use thiserror::Error;

// Re-export error types
pub use console::ConsoleError;
pub use decoder::DecodeError;
pub use fetcher::FetchError;

pub use catalog::{EpisodeSummary, SeasonSummary, SeriesSummary, UNRATED};
pub use console::read_series_name;
pub use decoder::decode;
pub use endpoint::{DEFAULT_API_KEY, DEFAULT_BASE_URL, OmdbEndpoint, redact_api_key};
pub use fetcher::{Fetcher, HttpFetcher};
pub use ranking::{DEFAULT_TOP_LIMIT, flatten_episodes, top_rated};

/// Progress event emitted while surveying a series
///
/// These events allow library users to print intermediate results as they
/// become available, or to stay silent.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Looking up the series summary
    FetchingSeries { series_name: String },

    /// Series summary decoded
    SeriesFetched { series: SeriesSummary },

    /// Fetching one season
    FetchingSeason { number: u32, total: u32 },

    /// Every reported season has been fetched
    SeasonsFetched { seasons: Vec<SeasonSummary> },

    /// Ranking finished
    Complete { top_rated: Vec<EpisodeSummary> },
}

/// Everything gathered for one series
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    /// The series summary
    pub series: SeriesSummary,

    /// All seasons, in fetch order
    pub seasons: Vec<SeasonSummary>,

    /// The best rated episodes, highest first
    pub top_rated: Vec<EpisodeSummary>,
}

/// Top-level error type for episode_ranker operations
#[derive(Debug, Error)]
pub enum EpisodeRankerError {
    /// Error while reading the series name
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    /// Error while talking to the API
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error while decoding an API response
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Fetches a series with all of its seasons and ranks its episodes
///
/// The series summary is fetched first; then each season from 1 to the
/// reported season count is fetched, one request at a time. Nothing is
/// retried: the first failing request or undecodable response aborts the
/// survey, and no season data is reported in that case.
///
/// # Arguments
///
/// * `fetcher` - Performs the HTTP requests
/// * `endpoint` - Builds the request URLs (base URL and API key)
/// * `series_name` - The series to look up, sent as-is (may be empty)
/// * `limit` - Maximum number of ranked episodes
/// * `progress_callback` - Closure called with progress events
///
/// # Examples
///
/// ```no_run
/// use episode_ranker::{survey_series, HttpFetcher, OmdbEndpoint, ProgressEvent};
/// use url::Url;
///
/// let endpoint = OmdbEndpoint::new(Url::parse("https://www.omdbapi.com/").unwrap(), "key");
/// let survey = survey_series(&HttpFetcher::new(), &endpoint, "Breaking Bad", 5, |event| {
///     if let ProgressEvent::FetchingSeason { number, total } = event {
///         println!("season {}/{}", number, total);
///     }
/// })
/// .unwrap();
///
/// for episode in &survey.top_rated {
///     println!("{}", episode);
/// }
/// ```
pub fn survey_series<T, F>(
    fetcher: &T,
    endpoint: &OmdbEndpoint,
    series_name: &str,
    limit: usize,
    mut progress_callback: F,
) -> Result<Survey, EpisodeRankerError>
where
    T: Fetcher + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::FetchingSeries {
        series_name: series_name.to_string(),
    });

    let body = fetcher.fetch(&endpoint.series_url(series_name))?;
    let series: SeriesSummary = decode(&body)?;
    info!(
        "Found '{}' with {} season(s)",
        series.title, series.total_seasons
    );

    progress_callback(ProgressEvent::SeriesFetched {
        series: series.clone(),
    });

    // Sized by fetched seasons, never by the reported count
    let mut seasons = Vec::new();
    for number in 1..=series.total_seasons {
        progress_callback(ProgressEvent::FetchingSeason {
            number,
            total: series.total_seasons,
        });

        let body = fetcher.fetch(&endpoint.season_url(series_name, number))?;
        let season: SeasonSummary = decode(&body)?;
        seasons.push(season);
    }

    progress_callback(ProgressEvent::SeasonsFetched {
        seasons: seasons.clone(),
    });

    let top_rated = top_rated(&seasons, limit);

    progress_callback(ProgressEvent::Complete {
        top_rated: top_rated.clone(),
    });

    Ok(Survey {
        series,
        seasons,
        top_rated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use url::Url;

    /// Answers with canned bodies keyed by the `season` query parameter.
    struct ScriptedFetcher {
        bodies: HashMap<Option<String>, String>,
        requests: RefCell<Vec<Url>>,
    }

    impl ScriptedFetcher {
        fn new(series: &str, seasons: &[&str]) -> Self {
            let mut bodies = HashMap::new();
            bodies.insert(None, series.to_string());
            for (i, body) in seasons.iter().enumerate() {
                bodies.insert(Some((i + 1).to_string()), body.to_string());
            }
            Self {
                bodies,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetcher for ScriptedFetcher {
        fn fetch(&self, url: &Url) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.clone());
            let season = url
                .query_pairs()
                .find(|(k, _)| k == "season")
                .map(|(_, v)| v.into_owned());
            self.bodies
                .get(&season)
                .cloned()
                .ok_or_else(|| FetchError::Transport {
                    url: url.to_string(),
                    reason: "connection reset".to_string(),
                })
        }
    }

    fn endpoint() -> OmdbEndpoint {
        OmdbEndpoint::new(Url::parse("http://omdb.test/").unwrap(), "key")
    }

    #[test]
    fn test_fetches_every_reported_season() {
        let fetcher = ScriptedFetcher::new(
            r#"{"Title":"Dark","totalSeasons":"3"}"#,
            &[
                r#"{"Season":"1","Episodes":[]}"#,
                r#"{"Season":"2","Episodes":[]}"#,
                r#"{"Season":"3","Episodes":[]}"#,
            ],
        );

        let survey = survey_series(&fetcher, &endpoint(), "Dark", 5, |_| {}).unwrap();

        let seasons: Vec<Option<String>> = fetcher
            .requests
            .borrow()
            .iter()
            .map(|u| {
                u.query_pairs()
                    .find(|(k, _)| k == "season")
                    .map(|(_, v)| v.into_owned())
            })
            .collect();
        assert_eq!(
            seasons,
            [
                None,
                Some("1".to_string()),
                Some("2".to_string()),
                Some("3".to_string())
            ]
        );
        assert_eq!(survey.seasons.len(), 3);
    }

    #[test]
    fn test_zero_seasons_makes_single_request() {
        let fetcher = ScriptedFetcher::new(r#"{"Title":"Dark","totalSeasons":0}"#, &[]);
        let survey = survey_series(&fetcher, &endpoint(), "Dark", 5, |_| {}).unwrap();

        assert_eq!(fetcher.requests.borrow().len(), 1);
        assert!(survey.seasons.is_empty());
        assert!(survey.top_rated.is_empty());
    }

    #[test]
    fn test_events_in_order() {
        let fetcher = ScriptedFetcher::new(
            r#"{"Title":"Dark","totalSeasons":"1"}"#,
            &[r#"{"Season":"1","Episodes":[{"Title":"Secrets","Episode":"1","imdbRating":"8.1"}]}"#],
        );

        let mut events = Vec::new();
        survey_series(&fetcher, &endpoint(), "Dark", 5, |e| events.push(e)).unwrap();

        assert!(matches!(events[0], ProgressEvent::FetchingSeries { .. }));
        assert!(matches!(events[1], ProgressEvent::SeriesFetched { .. }));
        assert!(matches!(
            events[2],
            ProgressEvent::FetchingSeason {
                number: 1,
                total: 1
            }
        ));
        assert!(matches!(events[3], ProgressEvent::SeasonsFetched { .. }));
        match &events[4] {
            ProgressEvent::Complete { top_rated } => assert_eq!(top_rated[0].title, "Secrets"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_huge_season_count_fails_on_first_season() {
        let fetcher = ScriptedFetcher::new(r#"{"Title":"X","totalSeasons":"4000000000"}"#, &[]);
        let mut events = Vec::new();

        let err = survey_series(&fetcher, &endpoint(), "X", 5, |e| events.push(e)).unwrap_err();

        assert!(matches!(err, EpisodeRankerError::Fetch(FetchError::Transport { .. })));
        assert_eq!(fetcher.requests.borrow().len(), 2);
        assert!(!events
            .iter()
            .any(|e| matches!(e, ProgressEvent::SeasonsFetched { .. })));
    }

    #[test]
    fn test_api_error_aborts() {
        let fetcher = ScriptedFetcher::new(r#"{"Response":"False","Error":"Series not found!"}"#, &[]);
        let err = survey_series(&fetcher, &endpoint(), "Nope", 5, |_| {}).unwrap_err();
        assert!(matches!(err, EpisodeRankerError::Decode(DecodeError::Api(_))));
    }
}
