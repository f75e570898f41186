use crt_core::params::SceneConfig;
use crt_core::transition::{TransitionEvent, TransitionState};

use crate::node::ObjectGroup;

/// Spin rate of the object group, radians per second.
const SPIN_RATE: f32 = 0.25;

/// Owns the object group and the object/noise state machine.
///
/// The controller is GPU-free; the frame driver applies the static-noise
/// side effect of the returned event to the screen parameters.
pub struct SceneController {
    pub group: ObjectGroup,
    transition: TransitionState,
}

impl SceneController {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            group: ObjectGroup::new(),
            transition: TransitionState::initial(config),
        }
    }

    pub fn transition(&self) -> TransitionState {
        self.transition
    }

    /// Advance one frame: spin the group, then step the transition machine.
    ///
    /// The group spins even while empty (assets still loading) and during the
    /// noise interstitial. On `EnteredObject` the visible index advances here;
    /// the caller owns the noise-intensity flip.
    pub fn tick(&mut self, dt: f32, config: &SceneConfig) -> Option<TransitionEvent> {
        self.group.rotate_y(dt * SPIN_RATE);

        let event = self.transition.advance(dt, config);
        if event == Some(TransitionEvent::EnteredObject) {
            self.group.advance_visible();
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_continues_with_empty_group() {
        let config = SceneConfig::default();
        let mut controller = SceneController::new(&config);
        controller.tick(2.0, &config);
        assert!((controller.group.yaw() - 0.5).abs() < 1e-6);
        assert!(controller.group.is_empty());
    }
}
