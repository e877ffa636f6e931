use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use serde::Serialize;

use plotstyle::config::PlotConfig;
use plotstyle::plotting::{DashPattern, SeriesStyle, StyleCycler};
use plotstyle::setup::{setup, SetupOptions};

#[derive(Parser)]
#[command(name = "plotstyle")]
#[command(
    about = "Print-sized figures with distinguishable line styles",
    long_about = "Sets up print-sized figures and cycles colors, markers and dash patterns so that every series stays distinguishable, also in grayscale."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    /// JSON file overriding print parameters and style catalogs
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the example figure: sin/cos curves and a dashed reference line
    Demo {
        /// Output SVG file
        #[arg(short, long, required = true)]
        out: PathBuf,
        /// Scaling factor for the figure size
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Number of samples per curve
        #[arg(long, default_value_t = 80)]
        points: usize,
        /// Number of styled curves
        #[arg(long, default_value_t = 2)]
        series: usize,
        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
    /// Print the styles handed out to consecutive series
    Styles {
        /// Number of styles to print
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Points per series, used to derive the marker stride
        #[arg(long)]
        num_points: Option<usize>,
        /// Markers drawn per series (overrides the config file)
        #[arg(long)]
        markers_per_series: Option<usize>,
        #[arg(long, allow_hyphen_values = true)]
        start_color: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        start_marker: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        start_pattern: Option<i64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// One printed row of the `styles` command.
#[derive(Serialize)]
struct StyleRow {
    index: usize,
    color: String,
    marker: String,
    pattern: String,
    stride: Option<usize>,
}

impl StyleRow {
    fn new(index: usize, style: &SeriesStyle) -> Self {
        StyleRow {
            index,
            color: style.color.to_string(),
            marker: style.marker.name(),
            pattern: style.pattern.to_string(),
            stride: style.stride,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PlotConfig> {
    match path {
        Some(p) => PlotConfig::load(p)
            .with_context(|| format!("Error loading plot config {}", p.display())),
        None => Ok(PlotConfig::default()),
    }
}

fn check_output_path(path: &Path, force: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
    }
    if !force && path.exists() {
        bail!(
            "Output file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    Ok(())
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n.max(2) - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

fn curve_label(k: usize) -> String {
    let func = if k % 2 == 0 { "sin" } else { "cos" };
    match k / 2 + 1 {
        1 => format!("f(x) = {}(x)", func),
        m => format!("f(x) = {}({}x)", func, m),
    }
}

/// The last seventh of `x`, rounded up, for the reference line.
fn reference_tail(x: &[f64]) -> &[f64] {
    &x[x.len() - x.len().div_ceil(7)..]
}

fn run_demo(
    config: &PlotConfig,
    out: &Path,
    scale: f64,
    points: usize,
    series: usize,
    force: bool,
) -> Result<()> {
    if points < 2 {
        bail!("--points must be at least 2, got {}", points);
    }
    check_output_path(out, force)?;

    let options = SetupOptions {
        figsize: config.figsize,
        scale,
        ..Default::default()
    };
    let (mut fig, grid) = setup(&options, &config.rc).context("Error setting up figure")?;
    let mut styles = StyleCycler::with_catalogs(config.catalogs().context("Invalid style catalogs")?);

    let x = linspace(0.0, 1.0, points);
    let ax = fig.axes_mut(grid.first())?;

    for k in 0..series {
        let freq = 10.0 * (k / 2 + 1) as f64;
        let y: Vec<f64> = if k % 2 == 0 {
            x.iter().map(|v| (v * freq).sin()).collect()
        } else {
            x.iter().map(|v| (v * freq).cos()).collect()
        };
        let style = styles.next_style_with(Some(x.len()), config.markers_per_series);
        ax.plot(&x, y).style(&style).label(curve_label(k)).build();
    }

    // y = x over the tail of the range
    let tail = reference_tail(&x);
    ax.plot(tail, tail)
        .color("black")
        .linestyle(DashPattern::Dashed)
        .linewidth(1.0)
        .label("ref. order 1")
        .build();

    ax.set_xlabel("x");
    ax.set_ylabel("f(x)");
    ax.set_title("plotstyle example");
    ax.legend();

    fig.save(out)
        .with_context(|| format!("Error writing {}", out.display()))?;
    Ok(())
}

fn run_styles(
    config: &PlotConfig,
    count: usize,
    num_points: Option<usize>,
    markers_per_series: Option<usize>,
    start: (Option<i64>, Option<i64>, Option<i64>),
    json: bool,
) -> Result<()> {
    let mut styles = StyleCycler::with_catalogs(config.catalogs().context("Invalid style catalogs")?);
    if let Some(c) = start.0 {
        styles.set_color_index(c);
    }
    if let Some(m) = start.1 {
        styles.set_marker_index(m);
    }
    if let Some(p) = start.2 {
        styles.set_pattern_index(p);
    }

    let per_series = markers_per_series.unwrap_or(config.markers_per_series);
    let rows: Vec<StyleRow> = (0..count)
        .map(|i| StyleRow::new(i, &styles.next_style_with(num_points, per_series)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("index\tcolor\tmarker\tpattern\tstride");
        for row in &rows {
            let stride = row.stride.map_or_else(|| "-".to_string(), |s| s.to_string());
            println!(
                "{}\t{}\t{}\t{}\t{}",
                row.index, row.color, row.marker, row.pattern, stride
            );
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Demo {
            out,
            scale,
            points,
            series,
            force,
        } => run_demo(&config, out, *scale, *points, *series, *force),
        Commands::Styles {
            count,
            num_points,
            markers_per_series,
            start_color,
            start_marker,
            start_pattern,
            json,
        } => run_styles(
            &config,
            *count,
            *num_points,
            *markers_per_series,
            (*start_color, *start_marker, *start_pattern),
            *json,
        ),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let x = linspace(0.0, 1.0, 80);
        assert_eq!(x.len(), 80);
        assert_eq!(x[0], 0.0);
        assert!((x[79] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_tail_rounds_up() {
        let x = linspace(0.0, 1.0, 80);
        assert_eq!(reference_tail(&x).len(), 12);
        assert_eq!(reference_tail(&x)[11], x[79]);
        assert_eq!(reference_tail(&[0.0; 7]).len(), 1);
        assert_eq!(reference_tail(&[0.0, 1.0]).len(), 1);
        assert!(reference_tail(&[]).is_empty());
    }

    #[test]
    fn test_existing_output_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("figure.svg");
        std::fs::write(&out, "old").unwrap();
        assert!(check_output_path(&out, false).is_err());
        assert!(check_output_path(&out, true).is_ok());
    }

    #[test]
    fn test_missing_output_directory_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots").join("nested").join("figure.svg");
        check_output_path(&out, false).unwrap();
        assert!(dir.path().join("plots").join("nested").is_dir());
        assert!(!out.exists());
    }

    #[test]
    fn test_demo_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("demo.svg");
        run_demo(&PlotConfig::default(), &out, 1.0, 80, 2, true).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("f(x) = sin(x)"));
        assert!(svg.contains("f(x) = cos(x)"));
        assert!(svg.contains("ref. order 1"));
        // three dashed curves, each with a legend sample
        assert_eq!(svg.matches("stroke-dasharray").count(), 6);

        assert!(run_demo(&PlotConfig::default(), &out, 1.0, 80, 2, false).is_err());
    }

    #[test]
    fn test_curve_labels() {
        assert_eq!(curve_label(0), "f(x) = sin(x)");
        assert_eq!(curve_label(1), "f(x) = cos(x)");
        assert_eq!(curve_label(2), "f(x) = sin(2x)");
    }

    #[test]
    fn test_cli_parses_negative_start_index() {
        let cli = Cli::try_parse_from(["plotstyle", "styles", "--start-color", "-1", "--json"]).unwrap();
        match cli.command {
            Commands::Styles { start_color, json, .. } => {
                assert_eq!(start_color, Some(-1));
                assert!(json);
            }
            _ => panic!("expected styles command"),
        }
    }
}
