use anyhow::Result;
use clap::{Parser, ValueEnum};
use quake_explorer::query::{validate_hours, validate_limit};
use quake_explorer::{Client, QueryParams, SortOrder, rank, report, stats, storage};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "quakes",
    version,
    about = "Fetch and explore recent earthquakes from the USGS API (GeoJSON)."
)]
struct Cli {
    /// How far back to search (in hours).
    #[arg(long, default_value_t = 24.0, allow_negative_numbers = true)]
    hours: f64,
    /// Minimum magnitude filter.
    #[arg(long = "min-mag", default_value_t = 2.5, allow_negative_numbers = true)]
    min_mag: f64,
    /// Max number of results to request (USGS max is 20000).
    #[arg(long, default_value_t = 20)]
    limit: u32,
    /// Max number of rows to print. Defaults to --limit.
    #[arg(long)]
    display_limit: Option<u32>,
    /// How to sort displayed results.
    #[arg(long, value_enum, default_value_t = Order::Magnitude)]
    order: Order,
    /// Show a chart of magnitude over time.
    #[arg(long, default_value_t = false)]
    plot: bool,
    /// Save the chart to PATH (.png, or .svg by extension). Implies --plot.
    #[arg(long, value_name = "PATH")]
    save_plot: Option<PathBuf>,
    /// With --save-plot, don't open a chart window (useful on servers).
    #[arg(long, default_value_t = false)]
    no_show: bool,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Print magnitude statistics after the listing.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Save the ranked results to a file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Time,
    Magnitude,
}

impl From<Order> for SortOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Time => SortOrder::Time,
            Order::Magnitude => SortOrder::Magnitude,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

/// Options that passed validation; nothing here triggers a network call.
struct Checked {
    hours: f64,
    params: QueryParams,
    display_limit: u32,
}

fn check(cli: &Cli) -> quake_explorer::error::Result<Checked> {
    let hours = validate_hours(cli.hours)?;
    let limit = validate_limit(cli.limit, "--limit")?;
    let display_limit = match cli.display_limit {
        Some(n) => validate_limit(n, "--display-limit")?,
        None => limit,
    };
    let params = QueryParams::ending_now(hours, cli.min_mag, limit)?;
    Ok(Checked {
        hours,
        params,
        display_limit,
    })
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let checked = match check(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::from(2));
        }
    };

    run(&cli, &checked)?;
    Ok(ExitCode::SUCCESS)
}

fn run(cli: &Cli, checked: &Checked) -> Result<()> {
    let client = Client::new()?;
    let quakes = client.fetch_quakes(&checked.params)?;

    let ranked = rank::sort_quakes(&quakes, cli.order.into());
    let mut stdout = io::stdout().lock();
    report::print_results(&mut stdout, &ranked, checked.display_limit as usize)?;

    if cli.stats {
        print_summary(&mut stdout, &ranked)?;
    }

    if let Some(path) = cli.out.as_ref() {
        let fmt = match cli.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&ranked, path)?,
            "json" => storage::save_json(&ranked, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", ranked.len(), path.display());
    }

    if cli.plot || cli.save_plot.is_some() {
        plot(&mut stdout, cli, checked, &quakes)?;
    }

    stdout.flush()?;
    Ok(())
}

#[cfg(feature = "chart")]
fn plot<W: Write>(
    out: &mut W,
    cli: &Cli,
    checked: &Checked,
    quakes: &[quake_explorer::Quake],
) -> Result<()> {
    use quake_explorer::chart::{chart_title, plot_quakes};
    use quake_explorer::viz::PlottersChart;

    let renderer = PlottersChart::new(cli.width, cli.height);
    plot_quakes(
        out,
        &renderer,
        &rank::chronological(quakes),
        &chart_title(checked.hours, cli.min_mag),
        cli.save_plot.as_deref(),
        !cli.no_show,
    )
}

#[cfg(not(feature = "chart"))]
fn plot<W: Write>(
    _out: &mut W,
    _cli: &Cli,
    _checked: &Checked,
    _quakes: &[quake_explorer::Quake],
) -> Result<()> {
    eprintln!("quakes was built without the `chart` feature; skipping the chart");
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, quakes: &[quake_explorer::Quake]) -> io::Result<()> {
    let Some(s) = stats::magnitude_summary(quakes) else {
        return Ok(());
    };
    writeln!(out, "{}", "-".repeat(80))?;
    writeln!(
        out,
        "count={}  min=M{:.1}  max=M{:.1}  mean=M{:.2}  median=M{:.2}  mean depth={:.1} km",
        s.count,
        s.min_magnitude,
        s.max_magnitude,
        s.mean_magnitude,
        s.median_magnitude,
        s.mean_depth_km
    )?;
    writeln!(out, "strongest: {}", report::format_row(&s.strongest))
}
