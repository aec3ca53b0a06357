use super::*;
use crate::seek::backend::SeekRejected;

#[derive(Default)]
struct Player {
    playing: bool,
    pauses: u32,
}

impl MediaBackend for Player {
    fn duration(&self) -> Option<f64> {
        None
    }

    fn set_position(&mut self, _seconds: f64) -> Result<(), SeekRejected> {
        Ok(())
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }
}

#[test]
fn pauses_outside_window() {
    let guard = PlaybackGuard::default();
    let mut p = Player {
        playing: true,
        ..Player::default()
    };
    assert!(guard.enforce_paused(Instant::now(), &mut p));
    assert!(!p.playing);
    assert!(!guard.enforce_paused(Instant::now(), &mut p));
    assert_eq!(p.pauses, 1);
}

#[test]
fn window_permits_play_until_it_closes() {
    let t0 = Instant::now();
    let mut guard = PlaybackGuard::default();
    guard.allow_brief_play(t0, Duration::from_millis(450));

    let mut p = Player {
        playing: true,
        ..Player::default()
    };
    assert!(!guard.enforce_paused(t0 + Duration::from_millis(100), &mut p));
    assert!(p.playing);
    assert!(guard.enforce_paused(t0 + Duration::from_millis(450), &mut p));
    assert!(!p.playing);
}

#[test]
fn shorter_window_does_not_shrink_open_one() {
    let t0 = Instant::now();
    let mut guard = PlaybackGuard::default();
    guard.allow_brief_play(t0, Duration::from_millis(450));
    guard.allow_brief_play(t0, Duration::from_millis(140));
    assert!(guard.play_allowed(t0 + Duration::from_millis(300)));
}
