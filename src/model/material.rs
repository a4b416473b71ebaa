//! Color-keyed material registry.
//!
//! CAD imports reuse a small palette (typically the 8-entry index palette),
//! so materials are deduplicated by their quantized RGBA color: two requests
//! for the same color always resolve to the same index and never create a
//! second entry. Identity is the color tuple only; the physical parameters
//! are defaults the downstream material table may edit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Default for colorless imports (point clouds, untagged entities).
    pub const GRAY: Self = Self::opaque(200, 200, 200);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Quantize floating-point channels by rounding and clamping each to
    /// `[0, 255]`. This is the dedup key construction: callers with float
    /// colors must go through here so equal colors land on equal keys.
    #[must_use]
    pub fn from_float_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        let quantize = |c: f64| {
            if c.is_finite() {
                c.round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        };
        Self::new(quantize(r), quantize(g), quantize(b), quantize(a))
    }
}

/// One registry entry: the color key plus derived physical parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub color: RgbaColor,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
}

impl MaterialEntry {
    /// Physical defaults used for every new entry.
    #[must_use]
    pub const fn physical(color: RgbaColor) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
        }
    }
}

/// Insertion-ordered color-to-material mapping.
///
/// All mutation goes through `&mut self`; concurrent imports must serialize
/// their `get_or_create` calls (single-writer discipline).
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    entries: Vec<MaterialEntry>,
    by_color: HashMap<RgbaColor, u32>,
}

impl MaterialRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the material index for `color`, creating an entry on first use.
    pub fn get_or_create(&mut self, color: RgbaColor) -> u32 {
        if let Some(&index) = self.by_color.get(&color) {
            return index;
        }
        let index = self.entries.len() as u32;
        self.entries.push(MaterialEntry::physical(color));
        self.by_color.insert(color, index);
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: u32) -> Option<&MaterialEntry> {
        self.entries.get(index as usize)
    }

    /// Mutable access for the host's material editing (sliders etc.);
    /// the color key itself must not be edited through this.
    pub fn entry_mut(&mut self, index: u32) -> Option<&mut MaterialEntry> {
        self.entries.get_mut(index as usize)
    }
}
