// Projekt-Konfiguration: Konstanten und Kommandozeile

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use prlight_core::config::{DEFAULT_MAX_BRIGHTNESS, DEFAULT_PIXEL_COUNT};
use prlight_core::{AnimationConfig, StrandConfig};

use crate::github::SearchQuery;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// spidev-Gerät für die WS2812-Datenleitung (MOSI)
pub const SPI_DEVICE: &str = "/dev/spidev0.0";

/// SPI Taktfrequenz in Hz
/// 3.2 MHz ergibt mit 4 SPI-Bits pro Datenbit gültiges WS2812-Timing
pub const SPI_SPEED_HZ: u32 = 3_200_000;

// ============================================================================
// GitHub Konfiguration
// ============================================================================

/// Basis-URL der GitHub REST API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Poll-Intervall in Sekunden
pub const POLL_INTERVAL_SECS: u64 = 10;

// ============================================================================
// Kommandozeile
// ============================================================================

/// Shows on a WS2812 LED strip whether an author has failing pull requests
#[derive(Debug, Parser)]
#[command(name = "prlight", version, about)]
pub struct Cli {
    /// The author to get failing PRs for
    #[arg(long)]
    pub author: String,

    /// GitHub OAuth token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Repository to search, as owner/name
    #[arg(long, value_parser = parse_repo)]
    pub repo: String,

    /// Number of LEDs in the strip
    #[arg(long, default_value_t = DEFAULT_PIXEL_COUNT, value_parser = parse_pixel_count)]
    pub leds: usize,

    /// Seconds between two polls
    #[arg(long, default_value_t = POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Maximum brightness (0-255)
    #[arg(long, default_value_t = DEFAULT_MAX_BRIGHTNESS)]
    pub brightness: u8,

    /// spidev device driving the strip
    #[arg(long, default_value = SPI_DEVICE)]
    pub spi: String,

    /// SPI clock in Hz
    #[arg(long, default_value_t = SPI_SPEED_HZ)]
    pub spi_hz: u32,

    /// Render the strip in the terminal instead of on hardware
    #[arg(long)]
    pub console: bool,

    /// GitHub REST API base URL
    #[arg(long, default_value = GITHUB_API_URL)]
    pub api_url: String,

    /// JSON file overriding animation timings and colors
    #[arg(long)]
    pub animations: Option<PathBuf>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_repo(value: &str) -> Result<String, String> {
    match value.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(value.to_owned())
        }
        _ => Err(format!("expected owner/name, got '{value}'")),
    }
}

fn parse_pixel_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("strip needs at least one LED".to_owned()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            api_url: self.api_url.clone(),
            repo: self.repo.clone(),
            author: self.author.clone(),
            token: self.token.clone(),
        }
    }

    pub fn strand_config(&self, animation: AnimationConfig) -> StrandConfig {
        StrandConfig {
            pixel_count: self.leds,
            max_brightness: self.brightness,
            animation,
        }
    }
}

/// Lädt die Animations-Konfiguration; ohne Datei gelten die Defaults
pub fn load_animation_config(path: Option<&Path>) -> Result<AnimationConfig> {
    let Some(path) = path else {
        return Ok(AnimationConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading animation config {}", path.display()))?;
    let config = parse_animation_config(&text)
        .with_context(|| format!("parsing animation config {}", path.display()))?;
    log::info!("Animation config loaded from {}", path.display());
    Ok(config)
}

pub fn parse_animation_config(text: &str) -> Result<AnimationConfig> {
    Ok(serde_json::from_str(text)?)
}
