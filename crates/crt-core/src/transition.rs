use crate::params::SceneConfig;

/// The object/noise phase of the showcase, with seconds left in the phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Object { remaining: f32 },
    Noise { remaining: f32 },
}

/// Emitted when the state machine crosses into a new phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The screen switched to full static; the next object is not yet shown.
    EnteredNoise,
    /// Static cleared; the visible object index should advance.
    EnteredObject,
}

impl TransitionState {
    /// Initial state: showing an object for the configured duration.
    pub fn initial(config: &SceneConfig) -> Self {
        TransitionState::Object {
            remaining: config.object_duration,
        }
    }

    pub fn remaining(&self) -> f32 {
        match self {
            TransitionState::Object { remaining } | TransitionState::Noise { remaining } => {
                *remaining
            }
        }
    }

    /// Advance the machine by one frame.
    ///
    /// The timer only counts down while `automatic_transition` is enabled,
    /// but the threshold check runs regardless, so a timer already at or
    /// below zero still fires. At most one transition happens per call: a
    /// frame delta larger than the remaining time by whole periods does not
    /// loop, the excess is dropped when the new duration is read from
    /// `config`.
    pub fn advance(&mut self, dt: f32, config: &SceneConfig) -> Option<TransitionEvent> {
        if config.automatic_transition {
            match self {
                TransitionState::Object { remaining } | TransitionState::Noise { remaining } => {
                    *remaining -= dt;
                }
            }
        }

        if self.remaining() > 0.0 {
            return None;
        }

        match self {
            TransitionState::Object { .. } => {
                *self = TransitionState::Noise {
                    remaining: config.noise_duration,
                };
                Some(TransitionEvent::EnteredNoise)
            }
            TransitionState::Noise { .. } => {
                *self = TransitionState::Object {
                    remaining: config.object_duration,
                };
                Some(TransitionEvent::EnteredObject)
            }
        }
    }
}
