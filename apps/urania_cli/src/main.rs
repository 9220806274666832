mod input;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use urania::chart::{BirthData, ChartSnapshot, SnapshotAssembler};
use urania::ephemeris::LayerPositions;
use urania::{analysis_to_text, snapshot_to_json};
use urania_config::ChartConfig;

#[derive(Clone, Debug, PartialEq, ValueEnum)]
enum Source {
    /// Read positions from a JSON file (`--positions`).
    File,
    /// Deterministic mock positions derived from date, time and place. Not astronomy.
    Mock,
}

#[derive(Clone, Debug, PartialEq, ValueEnum)]
enum Format {
    /// Chart snapshot as JSON.
    Json,
    /// Markdown-style interpretation text.
    Text,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Cast natal and transit chart snapshots")]
pub(crate) struct Args {
    #[arg(long, value_enum, default_value_t = Source::Mock)]
    source: Source,

    /// Natal positions JSON (bodies, houses, ascendant, midheaven).
    #[arg(long)]
    positions: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: Option<String>,

    /// Birth time, HH:MM (UTC).
    #[arg(long)]
    time: Option<String>,

    #[arg(long)]
    place: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Transit positions JSON. Implies a transit layer.
    #[arg(long)]
    transit_positions: Option<PathBuf>,

    /// Transit date, YYYY-MM-DD. Implies a transit layer.
    #[arg(long)]
    transit_date: Option<String>,

    /// Transit time, HH:MM (UTC).
    #[arg(long)]
    transit_time: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Chart config (default: configs/chart.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include minor aspects regardless of config.
    #[arg(long)]
    minor: bool,

    /// Single-line JSON regardless of config.
    #[arg(long)]
    compact: bool,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Args {
    fn birth_data(&self) -> anyhow::Result<BirthData> {
        Ok(BirthData {
            name: self.name.clone(),
            date: self.date.as_deref().map(input::parse_date).transpose()?,
            time: self.time.as_deref().map(input::parse_time).transpose()?,
            place: self.place.clone(),
            location: input::location(self.lat, self.lon),
        })
    }

    fn transit_data(&self) -> anyhow::Result<Option<BirthData>> {
        if self.transit_positions.is_none() && self.transit_date.is_none() {
            return Ok(None);
        }
        Ok(Some(BirthData {
            date: self
                .transit_date
                .as_deref()
                .map(input::parse_date)
                .transpose()?,
            time: self
                .transit_time
                .as_deref()
                .map(input::parse_time)
                .transpose()?,
            location: input::location(self.lat, self.lon),
            ..BirthData::default()
        }))
    }

    fn load_config(&self) -> anyhow::Result<ChartConfig> {
        let mut config = match &self.config {
            Some(path) => urania_config::load_chart_config_from(path)?,
            None => urania_config::load_chart_config()?,
        };
        if self.minor {
            config.include_minor = true;
        }
        if self.compact {
            config.pretty = false;
        }
        Ok(config)
    }
}

fn natal_positions(
    args: &Args,
    birth: &BirthData,
    config: &ChartConfig,
) -> anyhow::Result<LayerPositions> {
    match args.source {
        Source::File => {
            let path = args
                .positions
                .as_ref()
                .context("--source file needs --positions <PATH>")?;
            input::load_positions(path, &config.bodies)
        }
        Source::Mock => input::mock_positions(birth, &config.bodies),
    }
}

fn transit_positions(
    args: &Args,
    meta: &BirthData,
    config: &ChartConfig,
) -> anyhow::Result<LayerPositions> {
    match &args.transit_positions {
        Some(path) => input::load_positions(path, &config.bodies),
        None => input::mock_positions(meta, &config.bodies),
    }
}

fn build(args: &Args) -> anyhow::Result<(ChartSnapshot, ChartConfig)> {
    let config = args.load_config()?;
    let catalog = config.aspect_catalog()?;
    let assembler = SnapshotAssembler::new();

    let birth = args.birth_data()?;
    let natal = natal_positions(args, &birth, &config)?;
    let mut snapshot = assembler
        .from_positions(&birth, &natal, &catalog)
        .context("Natal positions are not a usable chart")?;
    log::info!(
        "Natal chart: {} planets, {} aspects",
        snapshot.planets.len(),
        snapshot.aspects.len()
    );

    if let Some(meta) = args.transit_data()? {
        let transit = transit_positions(args, &meta, &config)?;
        snapshot = assembler.merge_transit(&snapshot, &meta, &transit.bodies, &catalog);
        if let Some(t) = &snapshot.transits {
            log::info!(
                "Transit layer: {} planets, {} aspects to natal",
                t.planets.len(),
                t.aspects.len()
            );
        }
    }

    Ok((snapshot, config))
}

fn render(args: &Args, snapshot: ChartSnapshot, config: &ChartConfig) -> anyhow::Result<String> {
    match args.format {
        Format::Json => {
            let stamped = snapshot.with_timestamp(Utc::now());
            Ok(snapshot_to_json(&stamped, config.pretty)?)
        }
        Format::Text => Ok(analysis_to_text(&snapshot)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (snapshot, config) = build(&args)?;
    let output = render(&args, snapshot, &config)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}
