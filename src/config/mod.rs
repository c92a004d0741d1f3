use log::warn;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::ScoringMode;

/// Default scoring thresholds.
///
/// All values are empirical. Percent thresholds compare against integer
/// percents (0-100); ratios are fractions of the average radius or of the
/// total point count.
///
///   Sectors:   12 x 30deg, occupied at >= 5% of points
///   Closure:   closed when start/end gap < 0.4 x avg radius
///   Combined:  0.5 angular + 0.3 consistency + 0.2 closure
///   Circle:    angular >= 75, consistency >= 50, closed
pub mod thresholds {
    pub const SECTOR_COUNT: usize = 12;
    pub const SECTOR_OCCUPANCY: f64 = 0.05;
    pub const CLOSURE_RATIO: f64 = 0.4;

    pub const ANGULAR_WEIGHT: f64 = 0.5;
    pub const CONSISTENCY_WEIGHT: f64 = 0.3;
    pub const CLOSURE_WEIGHT: f64 = 0.2;

    pub const CIRCLE_MIN_ANGULAR: u8 = 75;
    pub const CIRCLE_MIN_CONSISTENCY: u8 = 50;

    pub const BASELINE_CIRCLE_CONSISTENCY: u8 = 70;

    pub const MIN_POINTS: usize = 15;
    pub const MIN_POINT_DISTANCE: f64 = 5.0;
}

fn default_sector_count() -> usize {
    thresholds::SECTOR_COUNT
}
fn default_sector_occupancy() -> f64 {
    thresholds::SECTOR_OCCUPANCY
}
fn default_closure_ratio() -> f64 {
    thresholds::CLOSURE_RATIO
}
fn default_weights() -> ScoreWeights {
    ScoreWeights::default()
}
fn default_circle_min_angular() -> u8 {
    thresholds::CIRCLE_MIN_ANGULAR
}
fn default_circle_min_consistency() -> u8 {
    thresholds::CIRCLE_MIN_CONSISTENCY
}
fn default_baseline_circle_consistency() -> u8 {
    thresholds::BASELINE_CIRCLE_CONSISTENCY
}
fn default_classify() -> ClassifyThresholds {
    ClassifyThresholds::default()
}
fn default_praise_tiers() -> [u8; 4] {
    [90, 80, 70, 60]
}
fn default_near_miss() -> u8 {
    50
}

/// Weights of the combined circularity score
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub angular: f64,
    pub consistency: f64,
    pub closure: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            angular: thresholds::ANGULAR_WEIGHT,
            consistency: thresholds::CONSISTENCY_WEIGHT,
            closure: thresholds::CLOSURE_WEIGHT,
        }
    }
}

/// Gates of the shape decision table, evaluated in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifyThresholds {
    pub square_max_sectors: usize,
    pub square_min_consistency: u8,
    pub triangle_max_sectors: usize,
    pub triangle_min_consistency: u8,
    pub oval_min_angular: u8,
    pub oval_max_consistency: u8,
    pub rectangle_min_angular: u8,
    pub rectangle_max_consistency: u8,
    pub polygon_max_angular: u8,
}

impl Default for ClassifyThresholds {
    fn default() -> Self {
        Self {
            square_max_sectors: 4,
            square_min_consistency: 40,
            triangle_max_sectors: 3,
            triangle_min_consistency: 35,
            oval_min_angular: 60,
            oval_max_consistency: 45,
            rectangle_min_angular: 50,
            rectangle_max_consistency: 40,
            polygon_max_angular: 40,
        }
    }
}

/// Tunables of the shape analyzer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub mode: ScoringMode,
    #[serde(default = "default_sector_count")]
    pub sector_count: usize,
    /// Fraction of all points a sector needs to count as occupied
    #[serde(default = "default_sector_occupancy")]
    pub sector_occupancy: f64,
    /// Start/end gap, relative to the average radius, below which a stroke is closed
    #[serde(default = "default_closure_ratio")]
    pub closure_ratio: f64,
    #[serde(default = "default_weights")]
    pub weights: ScoreWeights,
    #[serde(default = "default_circle_min_angular")]
    pub circle_min_angular: u8,
    #[serde(default = "default_circle_min_consistency")]
    pub circle_min_consistency: u8,
    /// Radius consistency required by the radius-only scorer
    #[serde(default = "default_baseline_circle_consistency")]
    pub baseline_circle_consistency: u8,
    #[serde(default = "default_classify")]
    pub classify: ClassifyThresholds,
    /// Combined-score floors for the four praise messages, highest first
    #[serde(default = "default_praise_tiers")]
    pub praise_tiers: [u8; 4],
    /// Combined-score floor for "try to be more circular". Only closed circles
    /// below the last praise tier reach this check.
    #[serde(default = "default_near_miss")]
    pub near_miss: u8,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            sector_count: default_sector_count(),
            sector_occupancy: default_sector_occupancy(),
            closure_ratio: default_closure_ratio(),
            weights: default_weights(),
            circle_min_angular: default_circle_min_angular(),
            circle_min_consistency: default_circle_min_consistency(),
            baseline_circle_consistency: default_baseline_circle_consistency(),
            classify: default_classify(),
            praise_tiers: default_praise_tiers(),
            near_miss: default_near_miss(),
        }
    }
}

fn default_min_points() -> usize {
    thresholds::MIN_POINTS
}
fn default_min_point_distance() -> f64 {
    thresholds::MIN_POINT_DISTANCE
}
fn default_result_display_ms() -> u64 {
    4000
}
fn default_prompt_display_ms() -> u64 {
    2000
}

/// Tunables of the drawing session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Strokes with fewer points are rejected as too small
    #[serde(default = "default_min_points")]
    pub min_points: usize,
    /// Candidate points closer than this to the last kept point are dropped
    #[serde(default = "default_min_point_distance")]
    pub min_point_distance: f64,
    #[serde(default = "default_result_display_ms")]
    pub result_display_ms: u64,
    #[serde(default = "default_prompt_display_ms")]
    pub prompt_display_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_points: default_min_points(),
            min_point_distance: default_min_point_distance(),
            result_display_ms: default_result_display_ms(),
            prompt_display_ms: default_prompt_display_ms(),
        }
    }
}

impl SessionConfig {
    pub fn result_display(&self) -> Duration {
        Duration::from_millis(self.result_display_ms)
    }

    pub fn prompt_display(&self) -> Duration {
        Duration::from_millis(self.prompt_display_ms)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("aircircle.toml"));
    paths.push(PathBuf::from(".aircircle.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("aircircle").join("config.toml"));
        paths.push(config_dir.join("aircircle.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".aircircle.toml"));
    }

    paths
}
