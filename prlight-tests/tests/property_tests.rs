//! Property Tests für den Zustandsautomaten des Strands
//!
//! Beliebige Folgen von Poll-Ergebnissen (None = Quelle nicht erreichbar)
//! werden gegen ein einfaches Modell geprüft.

mod common;

use embassy_futures::block_on;
use prlight_core::types::{GREEN, RED};
use prlight_core::{Animation, DisplayState, StatusSample, StopToken};
use proptest::prelude::*;

use common::{short_animation, solid, strand};

fn sample(poll: Option<bool>) -> StatusSample<&'static str> {
    match poll {
        Some(failing) => StatusSample::Failing(failing),
        None => StatusSample::SourceError("offline"),
    }
}

/// Erwartete Animation und Folgezustand
fn model(state: DisplayState, poll: Option<bool>) -> (Option<Animation>, DisplayState) {
    match (state, poll) {
        (_, None) => (Some(Animation::Rainbow), state),
        (DisplayState::Failing, Some(true)) => (None, DisplayState::Failing),
        (_, Some(true)) => (Some(Animation::Pulse), DisplayState::Failing),
        (DisplayState::Failing, Some(false)) => (Some(Animation::Swap), DisplayState::Passing),
        (_, Some(false)) => (None, DisplayState::Passing),
    }
}

proptest! {
    /// Zustand und Animation folgen nach jedem Sample dem Modell
    #[test]
    fn strand_follows_edge_model(
        polls in proptest::collection::vec(proptest::option::of(any::<bool>()), 1..24),
    ) {
        let (strand, _log) = strand(4, short_animation());
        let stop = StopToken::new();
        let mut expected = DisplayState::Unknown;

        for poll in polls {
            let (animation, next) = model(expected, poll);
            let played = block_on(strand.apply(&sample(poll), &stop)).unwrap();

            prop_assert_eq!(played, animation);
            prop_assert_eq!(block_on(strand.state()), next);
            expected = next;
        }
    }

    /// Ohne Fehler ist der Zustand immer das letzte Ergebnis, die Dauerfarbe passt dazu
    #[test]
    fn state_matches_last_successful_poll(
        polls in proptest::collection::vec(any::<bool>(), 1..24),
    ) {
        let (strand, log) = strand(3, short_animation());
        let stop = StopToken::new();

        for failing in polls {
            block_on(strand.apply(&StatusSample::<&str>::Failing(failing), &stop)).unwrap();

            let state = block_on(strand.state());
            prop_assert_eq!(state, DisplayState::from_failing(failing));
            let color = if failing { RED } else { GREEN };
            let frame = log.lock().unwrap().last_frame().map(<[_]>::to_vec);
            prop_assert_eq!(frame, Some(solid(3, color)));
        }
    }

    /// Nach dem Shutdown ist der Strip immer aus, egal was vorher lief
    #[test]
    fn shutdown_always_leaves_strip_off(
        polls in proptest::collection::vec(proptest::option::of(any::<bool>()), 0..12),
        repeats in 1usize..4,
    ) {
        let (strand, log) = strand(5, short_animation());
        let stop = StopToken::new();

        for poll in polls {
            block_on(strand.apply(&sample(poll), &stop)).unwrap();
        }
        for _ in 0..repeats {
            prop_assert_eq!(block_on(strand.shutdown()), Ok(()));
        }

        let log = log.lock().unwrap();
        prop_assert!(log.released);
        prop_assert_eq!(log.last_frame().map(<[_]>::to_vec), Some(solid(5, common::OFF)));
    }
}
