//! Request URL construction for the OMDb API.

use url::Url;

/// Default base URL of the OMDb API
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Static API key used when none is configured
pub const DEFAULT_API_KEY: &str = "6585022c";

/// Builds series and season lookup URLs for one API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbEndpoint {
    base_url: Url,
    api_key: String,
}

impl OmdbEndpoint {
    /// Creates an endpoint for the given base URL and API key.
    ///
    /// Any query already present on `base_url` is discarded.
    pub fn new(mut base_url: Url, api_key: impl Into<String>) -> Self {
        base_url.set_query(None);
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// URL of the series summary: `?t=<name>&apikey=<key>`
    pub fn series_url(&self, series_name: &str) -> Url {
        self.build(series_name, None)
    }

    /// URL of one season: `?t=<name>&season=<n>&apikey=<key>`
    pub fn season_url(&self, series_name: &str, season: u32) -> Url {
        self.build(series_name, Some(season))
    }

    fn build(&self, series_name: &str, season: Option<u32>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("t", series_name);
            if let Some(season) = season {
                query.append_pair("season", &season.to_string());
            }
            query.append_pair("apikey", &self.api_key);
        }
        url
    }
}

/// Renders a URL for logs and error messages with the API key masked.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == "apikey") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> OmdbEndpoint {
        OmdbEndpoint::new(Url::parse("https://www.omdbapi.com/").unwrap(), "abc123")
    }

    #[test]
    fn test_series_url() {
        assert_eq!(
            endpoint().series_url("Breaking Bad").as_str(),
            "https://www.omdbapi.com/?t=Breaking+Bad&apikey=abc123"
        );
    }

    #[test]
    fn test_season_url() {
        assert_eq!(
            endpoint().season_url("Breaking Bad", 3).as_str(),
            "https://www.omdbapi.com/?t=Breaking+Bad&season=3&apikey=abc123"
        );
    }

    #[test]
    fn test_empty_name_keeps_title_parameter() {
        assert_eq!(
            endpoint().series_url("").as_str(),
            "https://www.omdbapi.com/?t=&apikey=abc123"
        );
    }

    #[test]
    fn test_special_characters_are_encoded() {
        let url = endpoint().series_url("Law & Order");
        assert_eq!(url.query(), Some("t=Law+%26+Order&apikey=abc123"));
    }

    #[test]
    fn test_base_query_is_dropped() {
        let endpoint =
            OmdbEndpoint::new(Url::parse("http://localhost:8080/api?x=1").unwrap(), "k");
        assert_eq!(
            endpoint.series_url("Dark").as_str(),
            "http://localhost:8080/api?t=Dark&apikey=k"
        );
    }

    #[test]
    fn test_redact_api_key() {
        let url = endpoint().season_url("Dark", 1);
        assert_eq!(
            redact_api_key(&url),
            "https://www.omdbapi.com/?t=Dark&season=1&apikey=***"
        );

        let plain = Url::parse("http://localhost/?t=Dark").unwrap();
        assert_eq!(redact_api_key(&plain), "http://localhost/?t=Dark");
    }
}
