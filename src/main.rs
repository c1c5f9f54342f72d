use clap::Parser;
use episode_ranker::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TOP_LIMIT, EpisodeRankerError, EpisodeSummary,
    HttpFetcher, OmdbEndpoint, ProgressEvent, SeasonSummary, read_series_name, survey_series,
};
use log::LevelFilter;
use std::io::{self, Write};
use std::process;
use url::Url;

/// List the best rated episodes of a tv series
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Series to look up; prompted for on stdin when omitted
    series: Option<String>,

    /// OMDb API key
    #[arg(long, default_value = DEFAULT_API_KEY)]
    api_key: String,

    /// Base URL of the OMDb API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Number of episodes to list
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    top: usize,
}

/// Lines printed once every season is in: one per season, then every
/// episode title in season-then-episode order
fn season_lines(seasons: &[SeasonSummary]) -> Vec<String> {
    let mut lines: Vec<String> = seasons.iter().map(|s| s.to_string()).collect();
    lines.extend(
        seasons
            .iter()
            .flat_map(|s| s.episodes.iter())
            .map(|e| e.title.clone()),
    );
    lines
}

/// Lines of the ranking block, starting with a blank separator line
fn ranking_lines(limit: usize, top_rated: &[EpisodeSummary]) -> Vec<String> {
    let mut lines = vec![String::new(), format!("Top {} best rated episodes:", limit)];
    lines.extend(top_rated.iter().map(|e| e.to_string()));
    lines
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::FetchingSeries { series_name } => {
            log::info!("Looking up '{}'...", series_name);
        }
        ProgressEvent::SeriesFetched { series } => {
            println!("{}", series);
        }
        ProgressEvent::FetchingSeason { number, total } => {
            log::info!("Fetching season {}/{}", number, total);
        }
        ProgressEvent::SeasonsFetched { seasons } => {
            for line in season_lines(&seasons) {
                println!("{}", line);
            }
        }
        ProgressEvent::Complete { .. } => {}
    }
}

fn prompt_for_series() -> Result<String, EpisodeRankerError> {
    print!("Enter the series name to search: ");
    io::stdout()
        .flush()
        .map_err(|e| EpisodeRankerError::Console(e.into()))?;

    let mut stdin = io::stdin().lock();
    Ok(read_series_name(&mut stdin)?)
}

fn run(cli: Cli) -> Result<(), EpisodeRankerError> {
    let series_name = match cli.series {
        Some(name) => name,
        None => prompt_for_series()?,
    };

    let endpoint = OmdbEndpoint::new(cli.base_url, cli.api_key);
    let fetcher = HttpFetcher::new();

    let survey = survey_series(
        &fetcher,
        &endpoint,
        &series_name,
        cli.top,
        handle_progress_event,
    )?;

    for line in ranking_lines(cli.top, &survey.top_rated) {
        println!("{}", line);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
