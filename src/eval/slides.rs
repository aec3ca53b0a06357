use crate::animation::ease::Ease;
use crate::config::settings::SlideTuning;
use crate::eval::visual::{SlideState, SlideTransform, SlideshowState};
use crate::foundation::core::Vec2;
use crate::foundation::math::{clamp01, lerp};

/// Collage-style entry/exit pose of one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SlideMotion {
    pub(crate) enter_from: Vec2,
    pub(crate) enter_rot_deg: f64,
    pub(crate) enter_scale: f64,
    pub(crate) exit_to: Vec2,
    pub(crate) exit_rot_deg: f64,
}

const fn motion(
    from: (f64, f64),
    rot: f64,
    scale: f64,
    to: (f64, f64),
    exit_rot: f64,
) -> SlideMotion {
    SlideMotion {
        enter_from: Vec2::new(from.0, from.1),
        enter_rot_deg: rot,
        enter_scale: scale,
        exit_to: Vec2::new(to.0, to.1),
        exit_rot_deg: exit_rot,
    }
}

// Slides past the end of the table reuse the first preset.
pub(crate) const PRESETS: [SlideMotion; 5] = [
    motion((-60.0, 70.0), -5.0, 0.96, (40.0, -50.0), 4.0),
    motion((80.0, 10.0), 6.0, 0.92, (-60.0, -30.0), -4.0),
    motion((-20.0, 90.0), 2.0, 0.88, (30.0, -80.0), 2.0),
    motion((70.0, 50.0), 3.0, 0.94, (-40.0, -40.0), -2.0),
    motion((-70.0, 110.0), -3.0, 0.9, (50.0, -70.0), 3.0),
];

/// Plain right-to-left travel of the slideshow slide, in pixels.
const SLIDESHOW_ENTER_X: f64 = 320.0;
const SLIDESHOW_EXIT_X: f64 = -140.0;

/// Trail sweep, in `vw`.
const TRAIL_FROM_VW: f64 = 55.0;
const TRAIL_TO_VW: f64 = -220.0;

/// Exiting slides grow by up to this fraction.
const EXIT_GROWTH: f64 = 0.04;

/// Entry and exit envelopes of one slide at local progress `p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Envelope {
    /// Raw entry value; may overshoot `1` for the "back" ease.
    pub(crate) enter: f64,
    /// Exit value in `[0, 1]`; always `0` for the terminal slide.
    pub(crate) exit: f64,
}

impl Envelope {
    pub(crate) fn visibility(&self) -> f64 {
        clamp01(clamp01(self.enter).min(1.0 - self.exit))
    }
}

pub(crate) fn envelope(index: usize, count: usize, p: f64, tuning: &SlideTuning) -> Envelope {
    let p = clamp01(p);
    let terminal = index + 1 == count;

    let enter = if tuning.slideshow_slide == Some(index) {
        Ease::OutCubic.apply(p / tuning.slideshow_enter.max(0.001))
    } else {
        let span = if terminal {
            tuning.terminal_enter
        } else {
            tuning.enter
        };
        Ease::OutBack.apply(p / span.max(0.001))
    };

    let exit_span = if terminal { 0.0 } else { tuning.exit };
    let exit = if exit_span <= 0.0 {
        0.0
    } else {
        Ease::OutCubic.apply((p - (1.0 - exit_span)) / exit_span.max(0.001))
    };

    Envelope { enter, exit }
}

/// State of slide `index` (of `count`) at local progress `p`, scaled by `global` opacity.
pub(crate) fn slide_state(
    index: usize,
    count: usize,
    p: f64,
    global: f64,
    tuning: &SlideTuning,
) -> SlideState {
    let env = envelope(index, count, p, tuning);
    let opacity = env.visibility() * clamp01(global);

    let transform = if tuning.slideshow_slide == Some(index) {
        SlideTransform {
            translate: Vec2::new(
                lerp(SLIDESHOW_ENTER_X, 0.0, env.enter) + lerp(0.0, SLIDESHOW_EXIT_X, env.exit),
                0.0,
            ),
            rotation_deg: 0.0,
            scale: 1.0,
        }
    } else {
        let m = PRESETS.get(index).copied().unwrap_or(PRESETS[0]);
        SlideTransform {
            translate: Vec2::new(
                lerp(m.enter_from.x, 0.0, env.enter) + lerp(0.0, m.exit_to.x, env.exit),
                lerp(m.enter_from.y, 0.0, env.enter) + lerp(0.0, m.exit_to.y, env.exit),
            ),
            rotation_deg: lerp(m.enter_rot_deg, 0.0, env.enter)
                + lerp(0.0, m.exit_rot_deg, env.exit),
            scale: lerp(m.enter_scale, 1.0, env.enter) * (1.0 + EXIT_GROWTH * env.exit),
        }
    };

    SlideState { opacity, transform }
}

/// Slideshow state while its slide is at local progress `p`.
///
/// Images advance with `p`, crossfading between neighbours.
pub(crate) fn slideshow_state(p: f64, images: usize, tuning: &SlideTuning) -> SlideshowState {
    let k = clamp01(p);
    let mut opacities = vec![0.0; images];
    if images > 0 {
        let last = images - 1;
        let t = k * last as f64;
        let i0 = (t.floor() as usize).min(last);
        let i1 = (i0 + 1).min(last);
        if i0 == i1 {
            opacities[i0] = 1.0;
        } else {
            let a = clamp01(t - i0 as f64);
            opacities[i0] = 1.0 - a;
            opacities[i1] = a;
        }
    }
    SlideshowState {
        opacity: clamp01(tuning.slideshow_opacity),
        images: opacities,
        trail_offset_vw: lerp(TRAIL_FROM_VW, TRAIL_TO_VW, Ease::InOutCubic.apply(k)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/slides.rs"]
mod tests;
