//! Sprite-sheet manifest loading.
//!
//! The manifest JSON describes where each animation lives on the character
//! sheet. Regions are tuned to one specific sheet, so they are data, not
//! code.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::sprites::animation::SpriteRect;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read sprite manifest {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse sprite manifest {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite manifest {file} is invalid: {message}")]
    Invalid { file: String, message: &'static str },
}

/// Pixel offset on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetPoint {
    pub x: u32,
    pub y: u32,
}

/// Layout of the character sprite sheet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpriteSheetLayout {
    /// Image path relative to the asset folder
    pub image: String,
    pub frame_width: u32,
    pub frame_height: u32,
    /// First frame of the walk cycle
    pub walk_origin: SheetPoint,
    pub frame_count: u32,
    pub walk_ticks_per_frame: u32,
    pub sprint_ticks_per_frame: u32,
    pub idle_origin: SheetPoint,
    pub dash_origin: SheetPoint,
    /// Row holding the attack frames; the combo index picks the column
    pub attack_row: u32,
}

impl Default for SpriteSheetLayout {
    fn default() -> Self {
        Self {
            image: "sprites/runner.png".to_string(),
            frame_width: 32,
            frame_height: 32,
            walk_origin: SheetPoint { x: 0, y: 32 },
            frame_count: 8,
            walk_ticks_per_frame: 5,
            sprint_ticks_per_frame: 3,
            idle_origin: SheetPoint { x: 32, y: 0 },
            dash_origin: SheetPoint { x: 64, y: 64 },
            attack_row: 64,
        }
    }
}

impl SpriteSheetLayout {
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.frame_width as f32, self.frame_height as f32)
    }

    pub fn rect_at(&self, origin: SheetPoint) -> SpriteRect {
        SpriteRect {
            x: origin.x,
            y: origin.y,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    pub fn idle_rect(&self) -> SpriteRect {
        self.rect_at(self.idle_origin)
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err("frame size must be positive");
        }
        if self.frame_count == 0 {
            return Err("frame_count must be positive");
        }
        if self.walk_ticks_per_frame == 0 || self.sprint_ticks_per_frame == 0 {
            return Err("ticks per frame must be positive");
        }
        if self.image.is_empty() {
            return Err("image must name a file");
        }
        Ok(())
    }
}

pub fn parse_manifest(file: &str, contents: &str) -> Result<SpriteSheetLayout, ManifestError> {
    let layout: SpriteSheetLayout =
        serde_json::from_str(contents).map_err(|e| ManifestError::Parse {
            file: file.to_string(),
            source: e,
        })?;
    layout.validate().map_err(|message| ManifestError::Invalid {
        file: file.to_string(),
        message,
    })?;
    Ok(layout)
}

/// Load the manifest. A missing file yields the built-in layout and `false`.
pub fn load_manifest(path: &Path) -> Result<(SpriteSheetLayout, bool), ManifestError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok((SpriteSheetLayout::default(), false));
        }
        Err(e) => {
            return Err(ManifestError::Io {
                file: file_name,
                source: e,
            });
        }
    };
    Ok((parse_manifest(&file_name, &contents)?, true))
}
