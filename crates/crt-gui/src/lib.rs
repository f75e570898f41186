pub mod panel;
pub mod preset;

pub use panel::{draw_scene_panel, draw_screen_panel};
pub use preset::{load_preset, save_preset, PresetFile};
