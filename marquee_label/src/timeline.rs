// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pacing of the marquee scroll.

use std::time::Duration;

use crate::InvalidArgument;
use crate::properties::{MarqueePacing, MarqueeRepeat};

/// How long a single line of text stays on screen.
///
/// During this time an overflowing line is shown from its start, scrolled at
/// a constant speed until its end is visible, and then rests.
/// See [`MarqueePacing`] for how the time is split.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LineDisplayTime(Duration);

impl LineDisplayTime {
    /// A line display time of zero, which never scrolls.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates a line display time from a number of seconds.
    ///
    /// Fails if `secs` is negative, not finite, or too large for a [`Duration`].
    pub fn from_secs_f64(secs: f64) -> Result<Self, InvalidArgument> {
        if !secs.is_finite() {
            return Err(InvalidArgument::NonFiniteLineDisplayTime(secs));
        }
        if secs < 0. {
            return Err(InvalidArgument::NegativeLineDisplayTime(secs));
        }
        Duration::try_from_secs_f64(secs)
            .map(Self)
            .map_err(|_| InvalidArgument::LineDisplayTimeOutOfRange(secs))
    }

    /// This time, in seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// This time as a [`Duration`].
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Whether this is [`LineDisplayTime::ZERO`].
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for LineDisplayTime {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl TryFrom<f64> for LineDisplayTime {
    type Error = InvalidArgument;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        Self::from_secs_f64(secs)
    }
}

/// Where a [`MarqueeTimeline`] is within its line display time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    /// The text fits, or the line display time is zero. Nothing moves.
    Idle,
    /// The start of the text is shown, before scrolling begins.
    LeadIn,
    /// The text is moving towards its end.
    Scrolling,
    /// The end of the text is shown, after scrolling.
    LeadOut,
    /// The line display time has passed; the end of the text stays visible.
    Finished,
}

impl ScrollPhase {
    /// Whether the timeline still needs animation frames in this phase.
    pub fn is_running(self) -> bool {
        matches!(self, Self::LeadIn | Self::Scrolling | Self::LeadOut)
    }
}

/// The status an animation can be in.
///
/// Returned when a timeline is advanced, to decide whether to request another frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// The animation has finished.
    Completed,
    /// The animation is still running.
    Ongoing,
}

impl AnimationStatus {
    /// Return true if animation has finished.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// The scroll offset of one line of text as a function of time.
///
/// This type knows nothing about widgets; the owner feeds it the measured
/// overflow and the elapsed frame time, and reads back the offset.
#[derive(Clone, Debug, Default)]
pub struct MarqueeTimeline {
    line_time: LineDisplayTime,
    /// Seconds since the line was set. Only advances while the text overflows.
    elapsed: f64,
    /// How far the text extends past the visible width, in logical pixels.
    overflow: f64,
}

impl MarqueeTimeline {
    /// Creates a timeline at its start.
    pub fn new(line_time: LineDisplayTime) -> Self {
        Self {
            line_time,
            elapsed: 0.,
            overflow: 0.,
        }
    }

    /// Starts over with a new line display time. The overflow is kept.
    pub fn restart(&mut self, line_time: LineDisplayTime) {
        self.line_time = line_time;
        self.elapsed = 0.;
    }

    /// The line display time this timeline runs for.
    pub fn line_time(&self) -> LineDisplayTime {
        self.line_time
    }

    /// Seconds since the start of the line, not counting time spent without overflow.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// How far the text extends past the visible width.
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Records a new overflow distance.
    ///
    /// Negative and non-finite values are treated as zero.
    /// Returns `true` if the text did not overflow before and does now.
    pub fn set_overflow(&mut self, overflow: f64) -> bool {
        let overflow = if overflow.is_finite() {
            overflow.max(0.)
        } else {
            0.
        };
        let started = self.overflow == 0. && overflow > 0.;
        self.overflow = overflow;
        started
    }

    /// The phase this timeline is in.
    pub fn phase(&self, pacing: &MarqueePacing) -> ScrollPhase {
        if self.overflow <= 0. || self.line_time.is_zero() {
            return ScrollPhase::Idle;
        }
        let total = self.line_time.as_secs_f64();
        let (lead_in, lead_out) = pacing.normalized();
        if self.elapsed < total * lead_in {
            ScrollPhase::LeadIn
        } else if self.elapsed < total * (1. - lead_out) {
            ScrollPhase::Scrolling
        } else if self.elapsed < total {
            ScrollPhase::LeadOut
        } else {
            ScrollPhase::Finished
        }
    }

    /// The current horizontal scroll offset, in `0.0..=overflow`.
    pub fn offset(&self, pacing: &MarqueePacing) -> f64 {
        match self.phase(pacing) {
            ScrollPhase::Idle | ScrollPhase::LeadIn => 0.,
            ScrollPhase::LeadOut | ScrollPhase::Finished => self.overflow,
            ScrollPhase::Scrolling => {
                let total = self.line_time.as_secs_f64();
                let (lead_in, lead_out) = pacing.normalized();
                let scroll_time = total * (1. - lead_in - lead_out);
                if scroll_time <= 0. {
                    return self.overflow;
                }
                let progress = (self.elapsed - total * lead_in) / scroll_time;
                debug_assert!(
                    progress.is_finite(),
                    "scroll progress {progress} for elapsed {}",
                    self.elapsed
                );
                (self.overflow * progress).clamp(0., self.overflow)
            }
        }
    }

    /// Advances this timeline by `by`.
    ///
    /// Returns the status of the animation after this advancement.
    pub fn advance(
        &mut self,
        by: Duration,
        pacing: &MarqueePacing,
        repeat: MarqueeRepeat,
    ) -> AnimationStatus {
        if self.phase(pacing) == ScrollPhase::Idle {
            return AnimationStatus::Completed;
        }
        let total = self.line_time.as_secs_f64();
        self.elapsed += by.as_secs_f64();
        if self.elapsed >= total {
            match repeat {
                MarqueeRepeat::Once => self.elapsed = total,
                MarqueeRepeat::Loop => self.elapsed %= total,
            }
        }
        if self.phase(pacing).is_running() {
            AnimationStatus::Ongoing
        } else {
            AnimationStatus::Completed
        }
    }
}
