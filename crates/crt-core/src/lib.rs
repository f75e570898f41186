pub mod clock;
pub mod colorspace;
pub mod crt;
pub mod geometry;
pub mod noise;
pub mod params;
pub mod transition;

pub use clock::FrameClock;
pub use geometry::Aabb;
pub use params::{SceneConfig, ScreenParams};
pub use transition::{TransitionEvent, TransitionState};
