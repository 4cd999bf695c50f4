// Status-Loop - pollt die Quelle und zeigt das Ergebnis auf dem Strip
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal_async::delay::DelayNs;
use prlight_core::{LedError, LedStrip, StatusMonitor, StatusSource, StopToken, Strand};

/// Run-Loop bis zum Shutdown oder zum ersten Geräte-Fehler
///
/// Der erste Poll passiert sofort, danach einmal pro Intervall. Dauern Poll
/// und Animation länger als ein Intervall, verfallen die verpassten Ticks;
/// es gibt keine nachgeholten Polls. `stop` wird während des Wartens auf den
/// nächsten Tick und während einer laufenden Abfrage beachtet; Animationen
/// prüfen es zwischen zwei Frames.
///
/// Den Strip gibt die Loop nicht frei, das macht der Aufrufer mit
/// `Strand::shutdown()`. Liefert die Anzahl der Polls.
pub async fn status_loop<D, T, S>(
    strand: &Strand<D, T>,
    monitor: &mut StatusMonitor<S>,
    stop: &StopToken,
) -> Result<u64, LedError>
where
    D: LedStrip,
    T: DelayNs,
    S: StatusSource,
{
    let interval = monitor.interval();
    log::info!("Polling every {}s", interval.as_secs_f32());
    let millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
    let period = Duration::from_millis(millis.max(1));
    let mut next_tick = Instant::now() + period;
    let mut polls: u64 = 0;

    loop {
        // Abfrage abbrechen wenn der Shutdown kommt
        let sample = match select(stop.cancelled(), monitor.poll()).await {
            Either::First(()) => break,
            Either::Second(sample) => sample,
        };
        polls += 1;

        if let Some(animation) = strand.apply(&sample, stop).await? {
            log::debug!("Played {:?} animation", animation);
        }

        // Verpasste Ticks verfallen, der Takt bleibt
        let now = Instant::now();
        while next_tick <= now {
            next_tick += period;
        }
        if let Either::First(()) = select(stop.cancelled(), Timer::at(next_tick)).await {
            break;
        }
        next_tick += period;
    }

    log::info!("Done");
    Ok(polls)
}
