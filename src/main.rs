use anyhow::Result;
use clap::Parser;
use softnms_cv::traits::NonMaxSuppression;
use softnms_cv::{CoordinateMode, DecayMethod, SoftNmsConfig};
use std::path::PathBuf;

mod input;

#[derive(Parser, Debug)]
#[command(author, version, about = "Soft non-maximum suppression demo")]
struct Args {
    /// Detections as JSON: {"boxes": [[x1, y1, x2, y2], ...], "scores": [...]}.
    /// Runs the built-in sample when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Suppression configuration as JSON.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Decay method: "nms", "linear", anything else selects gaussian.
    #[arg(long)]
    method: Option<String>,
    /// IoU cutoff for the nms and linear methods.
    #[arg(long)]
    overlap_threshold: Option<f64>,
    /// Gaussian bandwidth.
    #[arg(long)]
    sigma: Option<f64>,
    /// Minimum decayed score to keep a box.
    #[arg(long)]
    score_threshold: Option<f64>,
    /// Keep fractional coordinates instead of truncating them.
    #[arg(long)]
    keep_fractional: bool,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let detections = match &args.input {
        Some(path) => input::load_detections(path)?,
        None => input::sample_detections()?,
    };

    // The built-in sample demonstrates classic NMS
    let mut config = match (&args.config, &args.input) {
        (Some(path), _) => input::load_config(path)?,
        (None, None) => SoftNmsConfig::hard(),
        (None, Some(_)) => SoftNmsConfig::default(),
    };

    if let Some(method) = &args.method {
        config.method = DecayMethod::from_name(method);
    }
    if let Some(threshold) = args.overlap_threshold {
        config.overlap_threshold = threshold;
    }
    if let Some(sigma) = args.sigma {
        config.sigma = sigma;
    }
    if let Some(threshold) = args.score_threshold {
        config.score_threshold = threshold;
    }
    if args.keep_fractional {
        config.coordinates = CoordinateMode::Preserve;
    }

    log::info!(
        "filtering {} detections with {} (overlap {}, sigma {}, score {})",
        detections.len(),
        config.method,
        config.overlap_threshold,
        config.sigma,
        config.score_threshold
    );

    let result = config.suppress(&detections)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("boxes to filter:");
    for (bbox, score) in detections.iter() {
        println!("  {:?} score {:.3}", bbox.to_array(), score);
    }
    println!();
    println!("selected boxes:");
    for detection in &result.kept {
        println!(
            "  {} score {:.3} (input #{})",
            detection.bbox, detection.score, detection.index
        );
    }

    Ok(())
}
