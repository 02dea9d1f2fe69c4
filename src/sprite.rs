//! Optional ASCII-art helicopter asset.
//!
//! The default art is compiled into the binary; a configured file overrides it.
//! The sprite is decoration only. When an override cannot be loaded the
//! renderer draws the player's hitbox square instead and the game carries on.

use std::fs;
use std::io;
use std::path::Path;

const BUNDLED_ART: &str = include_str!("../assets/helicopter.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub lines: Vec<String>,
    /// Widest line, in characters.
    pub width: usize,
}

impl Sprite {
    /// Parse sprite art. Trailing blank lines are dropped; art with no visible
    /// characters is rejected.
    pub fn parse(art: &str) -> io::Result<Self> {
        let mut lines: Vec<String> = art.lines().map(|l| l.trim_end().to_string()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "sprite has no visible characters",
            ));
        }
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Ok(Self { lines, width })
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// The helicopter shipped with the game.
    pub fn bundled() -> io::Result<Self> {
        Self::parse(BUNDLED_ART)
    }

    /// Load the configured sprite, or the bundled one without a path. Failures
    /// are logged and give `None`.
    pub fn load_or_fallback(path: Option<&Path>) -> Option<Self> {
        let Some(path) = path else {
            return Self::bundled()
                .map_err(|e| log::warn!("Bundled sprite unusable ({}), drawing hitbox instead", e))
                .ok();
        };
        match Self::load(path) {
            Ok(sprite) => {
                log::info!("Loaded sprite {}", path.display());
                Some(sprite)
            }
            Err(e) => {
                log::warn!(
                    "Could not load sprite {} ({}), drawing hitbox instead",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}
