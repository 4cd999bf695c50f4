// prlight - zeigt fehlschlagende Pull Requests auf einem WS2812 LED-Strip
//
// Ablauf: CLI parsen, Logger und Signal-Handler installieren, Strip
// initialisieren, dann die Status-Loop bis SIGINT/SIGTERM. Zum Schluss wird
// der Strip immer gelöscht.

// Embassy Async Runtime (std-Executor)
use embassy_executor::Spawner;
use embassy_time::Delay;

use anyhow::{Context, Result};
use clap::Parser;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

// Projekt-Module und Konfiguration
use prlight::config::{Cli, load_animation_config};
use prlight::github::GithubSearch;
use prlight::hal::{ConsoleWriter, SmartStrip};
use prlight::tasks::{install_signal_handler, status_loop};
use prlight::{StatusMonitor, StatusSource, StopToken, Strand, StrandConfig};

/// Shutdown-Anforderung, geteilt mit dem Signal-Handler
static STOP: StopToken = StopToken::new();

/// Main Entry Point
///
/// Der Executor kehrt nie zurück, deshalb endet der Prozess über
/// `std::process::exit` mit dem Exit-Code von `run()`.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let cli = Cli::parse();
    let env = env_logger::Env::default().default_filter_or(cli.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    install_signal_handler(&STOP)?;

    let animation = load_animation_config(cli.animations.as_deref())?;
    let config = cli.strand_config(animation);
    let monitor = StatusMonitor::new(GithubSearch::new(cli.search_query()), cli.poll_interval());
    log::info!("Watching {} for failing PRs by {}", cli.repo, cli.author);

    if cli.console {
        return drive(ConsoleWriter::stdout(), config, monitor).await;
    }
    drive(open_spi(&cli)?, config, monitor).await
}

#[cfg(target_os = "linux")]
fn open_spi(cli: &Cli) -> Result<prlight::hal::Ws2812Spi<linux_embedded_hal::SpidevBus>> {
    let bus = prlight::hal::open_spidev(&cli.spi, cli.spi_hz)?;
    Ok(prlight::hal::Ws2812Spi::new(bus))
}

#[cfg(not(target_os = "linux"))]
fn open_spi(_cli: &Cli) -> Result<ConsoleWriter<std::io::Stdout>> {
    anyhow::bail!("SPI output needs Linux spidev, use --console")
}

/// Strip initialisieren, Loop fahren, Strip immer freigeben
async fn drive<W, S>(writer: W, config: StrandConfig, mut monitor: StatusMonitor<S>) -> Result<()>
where
    W: SmartLedsWrite<Color = RGB8> + Send,
    W::Error: core::fmt::Debug,
    S: StatusSource,
{
    let strand = Strand::init(SmartStrip::new(writer), Delay, config)
        .context("initialising LED strip")?;
    log::debug!("{} LEDs, animations {:?}", strand.pixel_count(), strand.animation());

    let result = status_loop(&strand, &mut monitor, &STOP).await;
    // Auch nach einem Schreibfehler löschen
    let cleared = strand.shutdown().await;

    result.context("driving LED strip")?;
    cleared.context("clearing LED strip")?;
    Ok(())
}
