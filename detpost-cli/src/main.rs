use clap::Parser;
use detpost::{
    ClassColors, DetectConfig, Detection, Detector, FrameSize, LabelSet, RawDetection,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "detpost CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for per-frame measurements.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DetectConfigJson {
    confidence_threshold: f32,
    suppression_threshold: f32,
    parallel: bool,
}

impl Default for DetectConfigJson {
    fn default() -> Self {
        let cfg = DetectConfig::default();
        Self {
            confidence_threshold: cfg.confidence_threshold,
            suppression_threshold: cfg.suppression_threshold,
            parallel: cfg.parallel,
        }
    }
}

impl From<DetectConfigJson> for DetectConfig {
    fn from(value: DetectConfigJson) -> Self {
        Self {
            confidence_threshold: value.confidence_threshold,
            suppression_threshold: value.suppression_threshold,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrameJson {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    labels_path: Option<String>,
    frame: Option<FrameJson>,
    detect: DetectConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_path: None,
            labels_path: None,
            frame: None,
            detect: DetectConfigJson::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDetectionJson {
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    class_scores: Vec<f32>,
}

impl From<RawDetectionJson> for RawDetection {
    fn from(value: RawDetectionJson) -> Self {
        RawDetection::new(
            value.center_x,
            value.center_y,
            value.width,
            value.height,
            value.class_scores,
        )
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    class_id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<[u8; 3]>,
}

impl DetectionRecord {
    fn new(det: &Detection, labels: Option<&LabelSet>, colors: Option<&ClassColors>) -> Self {
        Self {
            x: det.bbox.x,
            y: det.bbox.y,
            width: det.bbox.width,
            height: det.bbox.height,
            class_id: det.class_id,
            label: labels
                .and_then(|set| set.get(det.class_id))
                .map(str::to_owned),
            confidence: det.confidence,
            color: colors.and_then(|set| set.get(det.class_id)),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("detpost=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }
    let frame_cfg = config
        .frame
        .ok_or("frame dimensions must be set in the config")?;
    let frame = FrameSize::new(frame_cfg.width, frame_cfg.height)?;

    let labels = match &config.labels_path {
        Some(path) => Some(LabelSet::from_lines(&fs::read_to_string(path)?)),
        None => None,
    };
    let colors = labels.as_ref().map(ClassColors::for_labels);

    let detector = Detector::new(config.detect.into())?;

    let input_text = fs::read_to_string(&config.input_path)?;
    let rows_json: Vec<RawDetectionJson> = serde_json::from_str(&input_text)?;
    let rows: Vec<RawDetection> = rows_json.into_iter().map(RawDetection::from).collect();

    let kept = detector.process_frame(&rows, frame)?;
    let detections = kept
        .iter()
        .map(|det| DetectionRecord::new(det, labels.as_ref(), colors.as_ref()))
        .collect();
    let output = Output { detections };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
