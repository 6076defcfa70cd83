//! Timed stroke-fraction animations.
//!
//! Tracks animate their drawn fraction between two values over a fixed
//! duration with an easing curve. Interpolation is frame driven: the
//! [`AnimationScheduler`] hands the runtime a tick command, the runtime sends
//! back a [`FrameMsg`], and the owning component steps every animation by one
//! frame interval before asking for the next tick.
//!
//! Animations are never removed when they finish. A finished animation keeps
//! reporting its `to` value until a newer one replaces it.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for scheduler instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames per second used for interpolation.
pub const FPS: u32 = 60;

/// Timing curve applied to an animation's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slow, finishes fast.
    EaseIn,
    /// Starts fast, settles slowly. The stepper's default.
    #[default]
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One stroke-fraction animation with resolved endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeAnimation {
    /// Fraction at the start of the animation.
    pub from: f64,
    /// Fraction held once the animation finishes.
    pub to: f64,
    /// Total running time.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
    elapsed: Duration,
}

impl StrokeAnimation {
    /// Creates an animation that has not started yet.
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// Fraction to present right now.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Moves the animation forward by `dt`, stopping at its duration.
    pub fn step(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Time spent so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True once the last frame has been reached.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Message asking a stepper to interpolate one more frame.
///
/// Carries the scheduler identity so a frame meant for one stepper, or for
/// an animation that has since been superseded, is ignored.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(crate) id: i64,
    pub(crate) tag: i64,
}

/// Issues frame ticks for one component.
///
/// Every call to [`restart`](Self::restart) bumps the tag, so frames queued
/// for an earlier batch of animations stop being accepted.
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    id: i64,
    tag: i64,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    /// Creates a scheduler with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            tag: 0,
        }
    }

    /// Identity shared by every frame this scheduler issues.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current animation batch.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// Time between frames.
    pub fn frame_interval() -> Duration {
        Duration::from_nanos(1_000_000_000 / FPS as u64)
    }

    /// Starts a new batch and returns the command for its first frame.
    pub fn restart(&mut self) -> Cmd {
        self.tag += 1;
        self.next_frame()
    }

    /// Whether `msg` belongs to this scheduler's current batch.
    pub fn accepts(&self, msg: &FrameMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// Command delivering the next frame of the current batch.
    pub fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(Self::frame_interval(), move |_| {
            Box::new(FrameMsg { id, tag }) as Msg
        })
    }

    #[cfg(test)]
    pub(crate) fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}
