use std::io;
use std::path::Path;

use crt_core::params::{SceneConfig, ScreenParams};
use serde::{Deserialize, Serialize};

/// On-disk preset file format.
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetFile {
    pub version: u32,
    pub screen: ScreenParams,
    pub scene: SceneConfig,
}

pub const PRESET_VERSION: u32 = 1;

impl PresetFile {
    pub fn new(screen: ScreenParams, scene: SceneConfig) -> Self {
        Self {
            version: PRESET_VERSION,
            screen,
            scene,
        }
    }
}

/// Save a preset to disk as JSON.
pub fn save_preset(path: &Path, preset: &PresetFile) -> io::Result<()> {
    let json = serde_json::to_string_pretty(preset)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load a preset from disk.
pub fn load_preset(path: &Path) -> io::Result<PresetFile> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
