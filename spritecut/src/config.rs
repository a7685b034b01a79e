//! Command line arguments and run configuration
//!
//! [`Args`] is what clap parses; [`SplitConfig`] is the validated form the
//! pipeline runs from. Nothing here touches process-wide state.

use clap::{ArgAction, Parser, ValueEnum};
use spritecut_io::ImageFormat;
use spritecut_region::{
    DEFAULT_MIN_REGION_SIZE, DEFAULT_STEP, DiscardPolicy, RegionError, SplitOptions,
    checked_step,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default factor from sheet pixels to placement units
pub const DEFAULT_SCALE: i32 = 10;

/// Default extension of source sheets and written sprites
pub const DEFAULT_EXT: &str = ".png";

/// Errors found while validating arguments
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sprites would overwrite their own source sheets
    #[error("source and output directory are the same: {0}")]
    SameDirectory(PathBuf),

    /// Step out of range
    #[error(transparent)]
    Step(#[from] RegionError),

    /// Scale must be positive
    #[error("invalid scale: {0} (must be at least 1)")]
    InvalidScale(i32),

    /// No codec for the image extension
    #[error("unsupported image extension: {0}")]
    UnsupportedExtension(String),
}

/// How undersized regions are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscardArg {
    /// Drop only the seed point; the rest may join a later region
    SeedOnly,
    /// Drop the whole undersized region
    WholeRegion,
}

impl From<DiscardArg> for DiscardPolicy {
    fn from(arg: DiscardArg) -> Self {
        match arg {
            DiscardArg::SeedOnly => DiscardPolicy::SeedOnly,
            DiscardArg::WholeRegion => DiscardPolicy::WholeRegion,
        }
    }
}

/// Split sprite sheets into sprites and index their positions
#[derive(Parser, Debug)]
#[command(name = "spritecut")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Placement file mapping sheet names to target positions
    #[arg(short = 'c', long = "config")]
    pub config: PathBuf,

    /// Directory holding the source sheets
    #[arg(short = 's', long = "src", default_value = "./")]
    pub src: PathBuf,

    /// Directory receiving sprites and the index file
    #[arg(short = 'o', long = "out", default_value = "./out")]
    pub out: PathBuf,

    /// Largest transparent gap bridged inside a sprite
    #[arg(long, default_value_t = DEFAULT_STEP)]
    pub step: u32,

    /// Regions with fewer pixels are dropped as noise
    #[arg(long = "min-size", default_value_t = DEFAULT_MIN_REGION_SIZE)]
    pub min_size: usize,

    /// What to drop when a region is too small
    #[arg(long, value_enum, default_value_t = DiscardArg::SeedOnly)]
    pub discard: DiscardArg,

    /// Placement units per sheet pixel
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: i32,

    /// Extension of source sheets and written sprites
    #[arg(long, default_value = DEFAULT_EXT)]
    pub ext: String,

    /// Enable debug logging
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub config_path: PathBuf,
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub options: SplitOptions,
    pub scale: i32,
    /// Extension with its leading dot, e.g. `.png`
    pub ext: String,
}

impl SplitConfig {
    /// Configuration with default settings for the given paths
    pub fn new(
        config_path: impl Into<PathBuf>,
        src_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            src_dir: src_dir.into(),
            out_dir: out_dir.into(),
            options: SplitOptions::default(),
            scale: DEFAULT_SCALE,
            ext: DEFAULT_EXT.to_string(),
        }
    }

    /// Check every setting.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if same_dir(&self.src_dir, &self.out_dir) {
            return Err(ConfigError::SameDirectory(self.src_dir.clone()));
        }
        checked_step(self.options.step)?;
        if self.scale < 1 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if ImageFormat::from_extension(&self.ext).is_none() {
            return Err(ConfigError::UnsupportedExtension(self.ext.clone()));
        }
        Ok(())
    }

    /// Path of the source sheet for a placement name
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.src_dir.join(format!("{}{}", name, self.ext))
    }

    /// Path of the written sprite for a region name
    pub fn output_path(&self, region_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}{}", region_name, self.ext))
    }
}

impl TryFrom<Args> for SplitConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let ext = if args.ext.starts_with('.') {
            args.ext
        } else {
            format!(".{}", args.ext)
        };

        let config = Self {
            config_path: args.config,
            src_dir: args.src,
            out_dir: args.out,
            options: SplitOptions::new(args.step)
                .with_min_region_size(args.min_size)
                .with_discard(args.discard.into()),
            scale: args.scale,
            ext,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Equal paths, or both exist and resolve to the same directory
fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("spritecut").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::try_from(parse(&["-c", "units.json"])).unwrap();
        assert_eq!(config.config_path, PathBuf::from("units.json"));
        assert_eq!(config.src_dir, PathBuf::from("./"));
        assert_eq!(config.out_dir, PathBuf::from("./out"));
        assert_eq!(config.options, SplitOptions::default());
        assert_eq!(config.scale, 10);
        assert_eq!(config.ext, ".png");
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--config", "conf/units", "-s", "sheets", "-o", "sprites", "--step", "5",
            "--min-size", "4", "--discard", "whole-region", "--scale", "2", "--ext", "jpg",
            "-d",
        ]);
        assert!(args.debug);
        let config = SplitConfig::try_from(args).unwrap();
        assert_eq!(config.options.step, 5);
        assert_eq!(config.options.min_region_size, 4);
        assert_eq!(config.options.discard, DiscardPolicy::WholeRegion);
        assert_eq!(config.scale, 2);
        assert_eq!(config.ext, ".jpg");
        assert_eq!(config.source_path("hero"), PathBuf::from("sheets/hero.jpg"));
        assert_eq!(config.output_path("hero-0"), PathBuf::from("sprites/hero-0.jpg"));
    }

    #[test]
    fn test_config_required() {
        assert!(Args::try_parse_from(["spritecut"]).is_err());
        assert!(Args::try_parse_from(["spritecut", "-c", "u", "--discard", "all"]).is_err());
    }

    #[test]
    fn test_same_directory_rejected() {
        let result = SplitConfig::try_from(parse(&["-c", "u", "-s", "sheets", "-o", "sheets/"]));
        assert!(matches!(result, Err(ConfigError::SameDirectory(_))));
    }

    #[test]
    fn test_invalid_settings() {
        let result = SplitConfig::try_from(parse(&["-c", "u", "--step", "0"]));
        assert!(matches!(
            result,
            Err(ConfigError::Step(RegionError::InvalidStep { step: 0, .. }))
        ));

        let result = SplitConfig::try_from(parse(&["-c", "u", "--scale", "0"]));
        assert!(matches!(result, Err(ConfigError::InvalidScale(0))));

        let result = SplitConfig::try_from(parse(&["-c", "u", "--ext", ".gif"]));
        assert!(matches!(result, Err(ConfigError::UnsupportedExtension(_))));
    }
}
