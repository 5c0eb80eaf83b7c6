use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glyphfloat::SceneConfig;

/// Floating code-symbol backdrop.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON scene file. Missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the initial layout and the jitter sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Symbol speed in pixels per step unit.
    #[arg(long)]
    speed: Option<f64>,

    /// Symbol diameter in pixels.
    #[arg(long)]
    size: Option<f64>,

    /// Move in straight lines between bounces.
    #[arg(long)]
    no_jitter: bool,
}

impl Args {
    fn into_scene(self) -> Result<SceneConfig> {
        let mut scene = match &self.config {
            Some(path) => {
                let scene = SceneConfig::load(path)
                    .with_context(|| format!("loading {}", path.display()))?;
                info!(path = %path.display(), "loaded scene");
                scene
            }
            None => SceneConfig::default(),
        };

        if let Some(seed) = self.seed {
            scene = scene.with_seed(seed);
        }
        if let Some(speed) = self.speed {
            scene.motion = scene.motion.with_speed(speed);
        }
        if let Some(size) = self.size {
            scene.motion = scene.motion.with_symbol_size(size);
        }
        if self.no_jitter {
            scene.motion = scene.motion.with_jitter(0.0);
        }

        scene.validate()?;
        Ok(scene)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scene = Args::parse().into_scene()?;
    glyphfloat::run(scene)?;
    Ok(())
}
