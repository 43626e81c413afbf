//! Animation descriptions
//!
//! Animations in Umbra are data, not behavior. A widget emits an
//! [`AnimationPlan`] describing which animated values should move where
//! and how; the host's animation driver evaluates the plan frame by
//! frame. Starting a new plan for a target supersedes any in-flight
//! animation on that target, because the driver reuses the same animated
//! value.

use serde::{Deserialize, Serialize};

/// A transient animation progress value owned by a widget instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AnimatedValue {
    /// Current progress
    pub value: f32,
}

impl AnimatedValue {
    /// Create a value at the given starting point
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Snap the value to a new position without animating
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }
}

/// How an animated value should move to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnimationSpec {
    /// Physics-based spring
    Spring {
        /// Target value
        to: f32,
        /// Spring friction
        friction: f32,
        /// Spring tension
        tension: f32,
    },
    /// Fixed-duration timing curve
    Timing {
        /// Target value
        to: f32,
        /// Duration in milliseconds
        duration_ms: u32,
    },
}

impl AnimationSpec {
    /// The value this spec settles at
    pub fn target(&self) -> f32 {
        match self {
            AnimationSpec::Spring { to, .. } => *to,
            AnimationSpec::Timing { to, .. } => *to,
        }
    }
}

/// Which visual property an animation drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationTarget {
    /// Rotation progress (interpolated to degrees by the widget)
    Rotation,
    /// Uniform scale
    Scale,
    /// Opacity
    Opacity,
}

/// A sequence of specs applied to one target, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAnimation {
    /// The animated property
    pub target: AnimationTarget,
    /// Steps run back to back
    pub steps: Vec<AnimationSpec>,
}

impl TargetAnimation {
    /// Create a single-step animation
    pub fn single(target: AnimationTarget, spec: AnimationSpec) -> Self {
        Self { target, steps: vec![spec] }
    }

    /// Create a multi-step sequence
    pub fn sequence(target: AnimationTarget, steps: Vec<AnimationSpec>) -> Self {
        Self { target, steps }
    }

    /// The value the target settles at when the sequence finishes
    pub fn final_value(&self) -> Option<f32> {
        self.steps.last().map(|s| s.target())
    }
}

/// A set of target animations started together
///
/// Entries run in parallel; steps within an entry run in sequence. Plans
/// are fire-and-forget: nothing in this crate awaits their completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Animation {
    /// Animations keyed by target, run concurrently
    pub tracks: Vec<TargetAnimation>,
}

impl Animation {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the plan
    pub fn with_track(mut self, track: TargetAnimation) -> Self {
        self.tracks.push(track);
        self
    }

    /// Find the track for a target, if present
    pub fn track(&self, target: AnimationTarget) -> Option<&TargetAnimation> {
        self.tracks.iter().find(|t| t.target == target)
    }
}

/// Linear mapping from a progress range to an output range
///
/// Inputs outside the range clamp to the nearest endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    /// Input progress range
    pub input_range: (f32, f32),
    /// Output range
    pub output_range: (f32, f32),
}

impl Interpolation {
    /// Create a new interpolation
    pub fn new(input_range: (f32, f32), output_range: (f32, f32)) -> Self {
        Self { input_range, output_range }
    }

    /// Map a progress value into the output range
    pub fn map(&self, t: f32) -> f32 {
        let (in_min, in_max) = self.input_range;
        let (out_min, out_max) = self.output_range;

        if in_max == in_min {
            return out_min;
        }

        let clamped = t.clamp(in_min.min(in_max), in_min.max(in_max));
        let fraction = (clamped - in_min) / (in_max - in_min);
        out_min + fraction * (out_max - out_min)
    }
}
