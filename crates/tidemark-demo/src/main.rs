// File: crates/tidemark-demo/src/main.rs
// Summary: Demo loads the climate CSVs and renders the bar, lollipop and scatter charts to PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tidemark_core::geometry::Point;
use tidemark_core::record::FromRow;
use tidemark_core::{
    load_records_from_path, theme, BarChart, BarChartConfig, ChartContext, CountryTemperature, Dataset,
    LollipopChart, LollipopConfig, ScatterConfig, ScatterPlot, SeaLevel, Theme,
};
use tidemark_render::{RenderOptions, SkiaRenderer};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const HIGHEST_CSV: &str = "data/climate-data-1.csv";
const SEA_LEVEL_CSV: &str = "data/global_sea_level_change.csv";

/// Render the Tidemark climate charts to PNG
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme preset overriding each chart's default (paper, slate)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Device pixels per chart pixel
    #[arg(long, global = true, default_value_t = 1.0)]
    scale: f32,

    /// Skip text (axis labels, titles, legends, tooltips)
    #[arg(long, global = true)]
    no_text: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Countries with the highest temperature change, as bars
    Bar(ChartArgs),
    /// Countries with the lowest temperature change, as lollipops
    Lollipop(ChartArgs),
    /// Global sea level change by year
    Scatter(ChartArgs),
    /// Render all three charts into a directory
    All {
        /// Directory holding climate-data-1.csv and global_sea_level_change.csv
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(long, default_value = "target/out")]
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// Input CSV (the lollipop chart falls back to a built-in table)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the hover state for a pointer at X,Y (canvas pixels)
    #[arg(long, value_parser = parse_point)]
    hover: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X {x:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

struct Session {
    renderer: SkiaRenderer,
    opts: RenderOptions,
    theme: Option<Theme>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let session = Session {
        renderer: SkiaRenderer::new(),
        opts: RenderOptions { scale: cli.scale, draw_text: !cli.no_text },
        theme: cli.theme.as_deref().map(theme::find),
    };

    match cli.command {
        Commands::Bar(args) => {
            let input = args.input.clone().unwrap_or_else(|| PathBuf::from(HIGHEST_CSV));
            let out = args.output.clone().unwrap_or_else(|| PathBuf::from("target/out/barchart-highest.png"));
            session.bar(&input, &out, args.hover)
        }
        Commands::Lollipop(args) => {
            let out = args.output.clone().unwrap_or_else(|| PathBuf::from("target/out/lollipop-lowest.png"));
            session.lollipop(args.input.as_deref(), &out, args.hover)
        }
        Commands::Scatter(args) => {
            let input = args.input.clone().unwrap_or_else(|| PathBuf::from(SEA_LEVEL_CSV));
            let out = args.output.clone().unwrap_or_else(|| PathBuf::from("target/out/scatterplot.png"));
            session.scatter(&input, &out, args.hover)
        }
        Commands::All { data_dir, out_dir } => {
            // each chart is independent: a failure is reported and the others still render
            let results = [
                ("bar", session.bar(&data_dir.join("climate-data-1.csv"), &out_dir.join("barchart-highest.png"), None)),
                ("lollipop", session.lollipop(None, &out_dir.join("lollipop-lowest.png"), None)),
                (
                    "scatter",
                    session.scatter(&data_dir.join("global_sea_level_change.csv"), &out_dir.join("scatterplot.png"), None),
                ),
            ];
            let mut failed = 0;
            for (name, result) in results {
                if let Err(e) = result {
                    error!(chart = name, "{e:#}");
                    failed += 1;
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of 3 charts failed to render");
            }
            Ok(())
        }
    }
}

impl Session {
    fn bar(&self, input: &Path, out: &Path, hover: Option<Point>) -> Result<()> {
        let dataset = load::<CountryTemperature>(input)?;
        let mut config = BarChartConfig::default();
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        let chart = BarChart::build(&dataset, config).context("building bar chart")?;
        self.render(&chart, hover, out)
    }

    fn lollipop(&self, input: Option<&Path>, out: &Path, hover: Option<Point>) -> Result<()> {
        let dataset = match input {
            Some(path) => load::<CountryTemperature>(path)?,
            None => Dataset::from_records(lowest_temperature_change()),
        };
        let mut config = LollipopConfig::default();
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        let chart = LollipopChart::build(&dataset, config).context("building lollipop chart")?;
        self.render(&chart, hover, out)
    }

    fn scatter(&self, input: &Path, out: &Path, hover: Option<Point>) -> Result<()> {
        let dataset = load::<SeaLevel>(input)?;
        let mut config = ScatterConfig::try_default()?;
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        let chart = ScatterPlot::build(&dataset, config).context("building scatterplot")?;
        self.render(&chart, hover, out)
    }

    fn render<C: ChartContext>(&self, chart: &C, pointer: Option<Point>, out: &Path) -> Result<()> {
        let hover = pointer.and_then(|p| chart.hover(p));
        if let (Some(p), None) = (pointer, &hover) {
            warn!(x = p.x, y = p.y, "pointer is not over any mark; rendering without tooltip");
        }
        let scene = chart.scene(hover.as_ref());
        self.renderer.render_to_png(&scene, &self.opts, out)
    }
}

fn load<R: FromRow>(path: &Path) -> Result<Dataset<R>> {
    info!(path = %path.display(), "using input file");
    let dataset = load_records_from_path::<R>(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if !dataset.rejected.is_empty() {
        warn!(dropped = dataset.rejected.len(), kept = dataset.len(), "some rows were dropped");
    }
    Ok(dataset)
}

/// Ten countries with the lowest temperature change in the last decades.
fn lowest_temperature_change() -> Vec<CountryTemperature> {
    [
        ("South Georgia and the South Sandwich Islands", 0.1606547619),
        ("Pitcairn Islands", 0.1742352941),
        ("Marshall Islands", 0.3277058824),
        ("Wake Island", 0.4051369863),
        ("Chile", 0.4345058824),
        ("Micronesia (Federated States of)", 0.4874058824),
        ("India", 0.6163764706),
        ("Norfolk Island", 0.6338805031),
        ("Argentia", 0.6474411765),
        ("Antarctica", 0.6554705882),
    ]
    .into_iter()
    .map(|(country, change)| CountryTemperature::new(country, change))
    .collect()
}
