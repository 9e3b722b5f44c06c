//! Swap choreography.
//!
//! Turns a [`SortTrace`] into a [`Timeline`]: one [`SwapCue`] per recorded
//! exchange, each split into a lift, a cross and a settle phase. The
//! visualization layer samples the timeline every frame.

use serde::{Deserialize, Serialize};
use showcase_events::{SortTrace, SwapRecord};

use crate::config::{DirectorConfig, PhaseWeights, PlaybackPolicy};

/// The three phases of a swap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Both entities leave the row
    Lift,
    /// The entities trade places
    Cross,
    /// Both entities return to the row
    Settle,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 3] = [PhaseKind::Lift, PhaseKind::Cross, PhaseKind::Settle];
}

/// One phase of a cue, in absolute timeline seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCue {
    pub kind: PhaseKind,
    pub start_secs: f32,
    pub duration_secs: f32,
}

impl PhaseCue {
    pub fn end_secs(&self) -> f32 {
        self.start_secs + self.duration_secs
    }

    /// Fraction of the phase elapsed at `t`, clamped to [0, 1].
    pub fn progress_at(&self, t: f32) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        ((t - self.start_secs) / self.duration_secs).clamp(0.0, 1.0)
    }
}

/// The timed animation slot of one swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapCue {
    /// Step of the swap record this cue animates
    pub step: u32,
    /// Left position of the exchanged pair
    pub index: usize,
    pub left_id: u64,
    pub right_id: u64,
    pub start_secs: f32,
    pub duration_secs: f32,
    pub phases: Vec<PhaseCue>,
}

impl SwapCue {
    fn from_record(swap: &SwapRecord, start_secs: f32, weights: &PhaseWeights) -> Self {
        let duration_secs = swap.duration_secs.max(0.0);
        let mut phase_start = start_secs;
        let phases = PhaseKind::ALL
            .into_iter()
            .zip(weights.split(duration_secs))
            .map(|(kind, phase_duration)| {
                let phase = PhaseCue {
                    kind,
                    start_secs: phase_start,
                    duration_secs: phase_duration,
                };
                phase_start += phase_duration;
                phase
            })
            .collect();

        Self {
            step: swap.step,
            index: swap.index,
            left_id: swap.left_id,
            right_id: swap.right_id,
            start_secs,
            duration_secs,
            phases,
        }
    }

    pub fn end_secs(&self) -> f32 {
        self.start_secs + self.duration_secs
    }

    /// Whether the cue is playing at `t`. The end is exclusive.
    pub fn is_active_at(&self, t: f32) -> bool {
        t >= self.start_secs && t < self.end_secs()
    }

    /// Phase and progress at `t`, or `None` if the cue is not playing.
    pub fn sample(&self, t: f32) -> Option<ActiveCue> {
        if !self.is_active_at(t) {
            return None;
        }
        // Rounding can leave `t` just past the last phase boundary.
        let phase = self
            .phases
            .iter()
            .find(|phase| t < phase.end_secs())
            .or_else(|| self.phases.last())?;

        Some(ActiveCue {
            step: self.step,
            index: self.index,
            left_id: self.left_id,
            right_id: self.right_id,
            phase: phase.kind,
            progress: phase.progress_at(t),
        })
    }
}

/// A cue playing at a sampled time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCue {
    pub step: u32,
    pub index: usize,
    pub left_id: u64,
    pub right_id: u64,
    pub phase: PhaseKind,
    /// Progress within `phase`, in [0, 1]
    pub progress: f32,
}

/// Every cue of one sort, in step order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub trace_id: String,
    pub cues: Vec<SwapCue>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// End of the last cue to finish, 0 for an empty timeline.
    pub fn total_secs(&self) -> f32 {
        self.cues
            .iter()
            .map(SwapCue::end_secs)
            .fold(0.0, f32::max)
    }

    /// Cues playing at `t`, in step order.
    pub fn sample(&self, t: f32) -> Vec<ActiveCue> {
        self.cues.iter().filter_map(|cue| cue.sample(t)).collect()
    }
}

/// Plans timelines from traces according to a [`DirectorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Choreographer {
    config: DirectorConfig,
}

impl Choreographer {
    pub fn new(config: DirectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn plan(&self, trace: &SortTrace) -> Timeline {
        let mut cursor = 0.0_f32;
        let cues: Vec<SwapCue> = trace
            .swaps
            .iter()
            .enumerate()
            .map(|(k, swap)| {
                let start = match self.config.playback.policy {
                    PlaybackPolicy::Sequential => cursor,
                    PlaybackPolicy::Overlapped { stagger_secs } => k as f32 * stagger_secs.max(0.0),
                };
                let cue = SwapCue::from_record(swap, start, &self.config.phases);
                cursor = cue.end_secs();
                cue
            })
            .collect();

        let timeline = Timeline {
            trace_id: trace.trace_id.clone(),
            cues,
        };
        tracing::debug!(
            "Planned {} cues for {} ({:.2}s)",
            timeline.len(),
            timeline.trace_id,
            timeline.total_secs()
        );
        timeline
    }
}
