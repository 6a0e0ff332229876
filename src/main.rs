use anyhow::{Context, Result};
use argh::FromArgs;
use normsim::error::InvalidInput;
use normsim::export::write_csv_file;
use normsim::form::*;
use normsim::plot::PlotSettings;
use normsim::query::QueryKind;
use std::path::PathBuf;

#[derive(FromArgs)]
/// NORMSIM evaluates probabilities under a normal distribution.
struct Config {
    #[argh(option, default = "String::new()")]
    /// mean (µ) of the distribution
    pub mean: String,

    #[argh(option, default = "String::new()")]
    /// standard deviation (σ) of the distribution
    pub sd: String,

    #[argh(option, default = "QueryKind::default()", from_str_fn(parse_query))]
    /// the query to evaluate, for instance "P(X <= x)" (see --list-queries)
    pub query: QueryKind,

    #[argh(option, short = 'x', default = "String::new()")]
    /// x value, for point and tail queries
    pub x: String,

    #[argh(option, short = 'a', default = "String::new()")]
    /// lower bound a, for interval queries
    pub a: String,

    #[argh(option, short = 'b', default = "String::new()")]
    /// upper bound b, for interval queries
    pub b: String,

    #[argh(option)]
    /// write the sampled density curve and its shading to this CSV file
    pub csv: Option<PathBuf>,

    #[argh(option, default = "default_samples()")]
    /// number of points used to sample the density curve
    pub samples: usize,

    #[argh(option, default = "default_span()")]
    /// half-width of the plotted range, in standard deviations
    pub span: f64,

    #[argh(switch)]
    /// print the available queries and exit
    pub list_queries: bool,
}

fn default_samples() -> usize {
    1000
}

fn default_span() -> f64 {
    4.0
}

fn parse_query(s: &str) -> Result<QueryKind, String> {
    s.parse::<QueryKind>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config: Config = argh::from_env();
    if config.list_queries {
        for kind in QueryKind::ALL {
            println!("{}", kind);
        }
        return Ok(());
    }
    let settings = PlotSettings::new(config.samples, config.span).context("invalid plot settings")?;

    let mut state = AppState::new(FormInput {
        mean: config.mean,
        std_dev: config.sd,
        x: config.x,
        a: config.a,
        b: config.b,
        kind: config.query,
    });

    let outcome = match state.submit(&settings) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("rejected submission: {:?}", e);
            return Err(report(e));
        }
    };
    println!("{}", outcome.result.label);
    for marker in &outcome.render.markers {
        log::debug!("{} at {} ({})", marker.label, marker.at, marker.color);
    }

    if let Some(path) = config.csv {
        write_csv_file(&outcome.render, &path)?;
    }
    Ok(())
}

fn report(e: InvalidInput) -> anyhow::Error {
    anyhow::Error::new(e).context("Invalid Input")
}
