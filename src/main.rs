use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

use aircircle::config::{AnalyzerConfig, FileConfig, SessionConfig};
use aircircle::geometry::synth;
use aircircle::io::{StrokeReport, load_frames, load_strokes, write_report};
use aircircle::{DrawingSession, Point, ScoringMode, SessionEvent, ShapeAnalyzer};

/// Score how circular a fingertip-traced drawing is
///
/// Examples:
///   # Score every stroke in a JSON file
///   aircircle score strokes.json
///
///   # Replay a recorded frame stream through a drawing session
///   aircircle replay frames.json -o report.json
///
///   # Try the scorer on synthetic shapes with the radius-only baseline
///   aircircle demo all --mode radius-only
///
///   # Use a config file
///   aircircle --config my-settings.toml score strokes.json
#[derive(Parser, Debug)]
#[command(name = "aircircle")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches aircircle.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Scoring mode
    #[arg(long, global = true)]
    mode: Option<ScoringMode>,

    /// Minimum number of points for a stroke to be scored
    #[arg(long, global = true)]
    min_points: Option<usize>,

    /// Minimum distance in pixels between consecutive stroke points
    #[arg(long, global = true)]
    min_distance: Option<f64>,

    /// Write a JSON report to this path
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score strokes stored as JSON point arrays
    Score {
        /// JSON file with one stroke or a list of strokes
        input: PathBuf,
    },
    /// Feed a recorded frame stream through a drawing session
    Replay {
        /// JSON file with per-frame fingertip and gesture
        input: PathBuf,
    },
    /// Score synthetic shapes
    Demo {
        #[arg(value_enum, default_value = "all")]
        shape: DemoShape,

        /// Points per synthetic stroke
        #[arg(short = 'n', long, default_value = "48")]
        points: usize,

        /// Hand tremor amplitude in pixels
        #[arg(long, default_value = "0.0")]
        jitter: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoShape {
    Circle,
    Square,
    Triangle,
    Ellipse,
    Arc,
    Line,
    All,
}

impl DemoShape {
    const SHAPES: [DemoShape; 6] = [
        DemoShape::Circle,
        DemoShape::Square,
        DemoShape::Triangle,
        DemoShape::Ellipse,
        DemoShape::Arc,
        DemoShape::Line,
    ];

    fn label(&self) -> &'static str {
        match self {
            DemoShape::Circle => "circle",
            DemoShape::Square => "square",
            DemoShape::Triangle => "triangle",
            DemoShape::Ellipse => "ellipse",
            DemoShape::Arc => "arc",
            DemoShape::Line => "line",
            DemoShape::All => "all",
        }
    }

    fn points(&self, n: usize) -> Vec<Point> {
        let center = Point::new(320.0, 240.0);
        match self {
            DemoShape::Circle => synth::circle(center, 150.0, n, 0.0),
            DemoShape::Square => synth::square(center, 120.0, n),
            DemoShape::Triangle => synth::triangle(center, 150.0, n),
            DemoShape::Ellipse => synth::ellipse(center, 180.0, 90.0, n),
            DemoShape::Arc => synth::arc(center, 150.0, n, 0.0, 240.0_f64.to_radians()),
            DemoShape::Line => synth::line(Point::new(100.0, 240.0), Point::new(540.0, 240.0), n),
            DemoShape::All => Vec::new(),
        }
    }
}

struct Settings {
    analyzer: AnalyzerConfig,
    session: SessionConfig,
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    init_logging(verbose);

    let settings = resolve_settings(&args, file_config);
    if settings.session.min_points < 2 {
        bail!("--min-points must be at least 2");
    }
    if settings.session.min_point_distance < 0.0 {
        bail!("--min-distance must not be negative");
    }

    debug!("Scoring mode: {:?}", settings.analyzer.mode);
    debug!(
        "Session: min {} points, min {:.1}px spacing",
        settings.session.min_points, settings.session.min_point_distance
    );

    let start = Instant::now();
    let reports = match &args.command {
        Command::Score { input } => run_score(input, &settings)?,
        Command::Replay { input } => run_replay(input, &settings)?,
        Command::Demo {
            shape,
            points,
            jitter,
        } => run_demo(*shape, *points, *jitter, &settings)?,
    };

    if let Some(ref output) = settings.output {
        write_report(output, &reports).context("Failed to write report")?;
        println!();
        println!("Report: {}", output.display());
    }

    info!("Done in {:.2}s", start.elapsed().as_secs_f32());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn resolve_settings(args: &Args, file_config: Option<FileConfig>) -> Settings {
    let (mut analyzer, mut session, file_output) = match file_config {
        Some(c) => (c.analyzer, c.session, c.output),
        None => (AnalyzerConfig::default(), SessionConfig::default(), None),
    };

    if let Some(mode) = args.mode {
        analyzer.mode = mode;
    }
    if let Some(min_points) = args.min_points {
        session.min_points = min_points;
    }
    if let Some(min_distance) = args.min_distance {
        session.min_point_distance = min_distance;
    }

    Settings {
        analyzer,
        session,
        output: args.output.clone().or(file_output),
    }
}

fn run_score(input: &Path, settings: &Settings) -> Result<Vec<StrokeReport>> {
    let strokes = load_strokes(input).context("Failed to load strokes")?;
    let analyzer = ShapeAnalyzer::new(settings.analyzer.clone());

    println!("Scoring {} stroke(s) from {}", strokes.len(), input.display());
    println!();
    print_header();

    let mut reports = Vec::with_capacity(strokes.len());
    for (i, stroke) in strokes.iter().enumerate() {
        if stroke.len() < settings.session.min_points {
            println!(
                "{:>3}  {:>6}  {:>5}  {:<6}  {:<15}  {:<6}  too small (minimum {} points)",
                i,
                stroke.len(),
                "-",
                "-",
                "-",
                "-",
                settings.session.min_points
            );
            continue;
        }
        let report = StrokeReport::build(i, stroke, &analyzer);
        print_row(&report, stroke.len());
        reports.push(report);
    }

    Ok(reports)
}

fn run_replay(input: &Path, settings: &Settings) -> Result<Vec<StrokeReport>> {
    let frames = load_frames(input).context("Failed to load frames")?;
    let mut session = DrawingSession::new(settings.analyzer.clone(), settings.session.clone());
    session.start_game();

    let pb = create_progress_bar(frames.len() as u64);
    let mut reports = Vec::new();
    let mut finished = Vec::new();

    for frame in frames {
        match session.on_frame(frame) {
            SessionEvent::Finalized { .. } => {
                let report = StrokeReport::build(reports.len(), session.stroke(), session.analyzer());
                finished.push(stroke_line(&report));
                reports.push(report);
            }
            SessionEvent::TooSmall {
                point_count,
                feedback,
            } => {
                finished.push(format!("{} ({} points)", feedback.message, point_count));
            }
            _ => {}
        }
        pb.inc(1);
    }

    // a recording may end mid-stroke
    match session.finish_stroke() {
        SessionEvent::Finalized { .. } => {
            let report = StrokeReport::build(reports.len(), session.stroke(), session.analyzer());
            finished.push(stroke_line(&report));
            reports.push(report);
        }
        SessionEvent::TooSmall {
            point_count,
            feedback,
        } => {
            finished.push(format!("{} ({} points)", feedback.message, point_count));
        }
        _ => {}
    }

    pb.finish_with_message(format!("Replayed {} strokes", session.stats().strokes_scored));

    println!();
    for line in &finished {
        println!("  {}", line);
    }
    println!();
    print_header();
    for report in &reports {
        let count = report.metrics.as_ref().map(|m| m.point_count).unwrap_or(0);
        print_row(report, count);
    }

    let stats = session.stats();
    println!();
    println!(
        "Scored {} stroke(s), {} circle(s), {} too small, best {}",
        stats.strokes_scored,
        stats.circles,
        stats.strokes_too_small,
        stats
            .best_circularity
            .map(|b| format!("{}%", b))
            .unwrap_or_else(|| "-".to_string())
    );

    Ok(reports)
}

fn run_demo(
    shape: DemoShape,
    n: usize,
    jitter: f64,
    settings: &Settings,
) -> Result<Vec<StrokeReport>> {
    if n < settings.session.min_points {
        bail!(
            "Demo strokes need at least {} points (got {})",
            settings.session.min_points,
            n
        );
    }

    let shapes: Vec<DemoShape> = if shape == DemoShape::All {
        DemoShape::SHAPES.to_vec()
    } else {
        vec![shape]
    };

    let analyzer = ShapeAnalyzer::new(settings.analyzer.clone());
    print_header();

    let mut reports = Vec::with_capacity(shapes.len());
    for (i, s) in shapes.iter().enumerate() {
        let mut points = s.points(n);
        if jitter > 0.0 {
            points = synth::jitter(&points, jitter, i as u32);
        }
        let report = StrokeReport::build(i, &points, &analyzer).with_label(s.label());
        print_row(&report, points.len());
        reports.push(report);
    }

    Ok(reports)
}

fn stroke_line(report: &StrokeReport) -> String {
    format!(
        "stroke {}: {}% {} - {}",
        report.index,
        report.score.circularity,
        report.score.shape_name(),
        report.score.feedback
    )
}

fn print_header() {
    println!(
        "{:>3}  {:>6}  {:>5}  {:<6}  {:<15}  {:<6}  Feedback",
        "#", "Points", "Score", "Band", "Shape", "Circle"
    );
    println!("{}", "-".repeat(78));
}

fn print_row(report: &StrokeReport, point_count: usize) {
    let index = match report.label {
        Some(ref label) => label.clone(),
        None => report.index.to_string(),
    };
    println!(
        "{:>3}  {:>6}  {:>4}%  {:<6}  {:<15}  {:<6}  {}",
        index,
        point_count,
        report.score.circularity,
        report.band.label(),
        report.score.shape_name(),
        if report.score.is_circle { "yes" } else { "no" },
        report.score.feedback
    );
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} frames {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}
