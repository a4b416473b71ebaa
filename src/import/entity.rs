//! CAD entity records handed to the tessellation driver.
//!
//! Entities arrive already parsed; this module only defines the record
//! shapes and the color resolution rules. Geometry lives in world
//! coordinates with +Z up.

use serde::{Deserialize, Serialize};

use crate::geom::Point3;
use crate::model::RgbaColor;

/// Fixed index palette for color-by-number entities.
///
/// Index 0 is white, matching drawings that leave the color code unset;
/// out-of-range indices also resolve to white rather than failing the entity.
pub const INDEX_PALETTE: [RgbaColor; 8] = [
    RgbaColor::opaque(255, 255, 255),
    RgbaColor::opaque(255, 0, 0),
    RgbaColor::opaque(255, 255, 0),
    RgbaColor::opaque(0, 255, 0),
    RgbaColor::opaque(0, 255, 255),
    RgbaColor::opaque(0, 0, 255),
    RgbaColor::opaque(255, 0, 255),
    RgbaColor::opaque(0, 0, 0),
];

/// Geometric payload of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityGeometry {
    Line {
        start: Point3,
        end: Point3,
    },
    Circle {
        center: Point3,
        radius: f64,
    },
    /// Arcs are tessellated as full circles regardless of angular extent.
    Arc {
        center: Point3,
        radius: f64,
    },
    Polyline {
        points: Vec<Point3>,
        closed: bool,
    },
    /// Anything the parser recognized but this engine cannot triangulate.
    /// The field name stays clear of the enum's `kind` tag.
    Unsupported {
        source_kind: String,
    },
}

impl EntityGeometry {
    /// Short name used in skip diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Arc { .. } => "arc",
            Self::Polyline { .. } => "polyline",
            Self::Unsupported { source_kind } => source_kind,
        }
    }
}

/// How an entity record names its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityColor {
    /// Palette index into [`INDEX_PALETTE`].
    ByIndex(u16),
    /// Explicit truecolor value.
    Rgb(RgbaColor),
}

impl EntityColor {
    /// Resolve to a concrete color. Unknown palette indices map to white.
    #[must_use]
    pub fn resolve(self) -> RgbaColor {
        match self {
            Self::ByIndex(index) => INDEX_PALETTE
                .get(usize::from(index))
                .copied()
                .unwrap_or(INDEX_PALETTE[0]),
            Self::Rgb(color) => color,
        }
    }
}

impl Default for EntityColor {
    fn default() -> Self {
        Self::ByIndex(0)
    }
}

/// One entity from an imported drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub geometry: EntityGeometry,
    #[serde(default)]
    pub color: EntityColor,
    /// Source layer name, if the drawing had one.
    #[serde(default)]
    pub layer: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(geometry: EntityGeometry) -> Self {
        Self {
            geometry,
            color: EntityColor::default(),
            layer: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: EntityColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }
}
