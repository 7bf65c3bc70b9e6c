// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Deserializer, Serialize};

/// Default location of the metadata document.
pub const DEFAULT_METADATA_PATH: &str = "/timwork/data/metadata.json";

/// Default directory that drawing image files are served from.
pub const DEFAULT_DRAWING_BASE_PATH: &str = "/timwork/data/drawings";

/// How a layer is composited over the layers below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Plain source-over.
    #[default]
    Normal,
    /// Multiply, which keeps dark linework from both layers visible.
    Multiply,
}

impl BlendMode {
    /// Returns the CSS `mix-blend-mode` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
        }
    }
}

/// Opacity and blend mode of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Blend mode.
    pub blend_mode: BlendMode,
}

/// A style as written in a configuration document, where either field may be
/// left out.
#[derive(Deserialize)]
struct PartialLayerStyle {
    opacity: Option<f64>,
    blend_mode: Option<BlendMode>,
}

impl LayerStyle {
    /// Style of discipline overlays: translucent, multiplied.
    pub const OVERLAY: Self = Self {
        opacity: 0.45,
        blend_mode: BlendMode::Multiply,
    };

    /// Style of the default region layer: opaque, normal.
    pub const REGION: Self = Self {
        opacity: 1.0,
        blend_mode: BlendMode::Normal,
    };

    fn merged(self, partial: PartialLayerStyle) -> Self {
        Self {
            opacity: partial.opacity.unwrap_or(self.opacity),
            blend_mode: partial.blend_mode.unwrap_or(self.blend_mode),
        }
    }
}

fn overlay_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LayerStyle, D::Error> {
    PartialLayerStyle::deserialize(deserializer).map(|p| LayerStyle::OVERLAY.merged(p))
}

fn region_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LayerStyle, D::Error> {
    PartialLayerStyle::deserialize(deserializer).map(|p| LayerStyle::REGION.merged(p))
}

/// Explorer configuration.
///
/// Every field has a default, so a partial TOML or JSON document only needs
/// the fields it changes. A style that sets only some of its fields keeps
/// the rest from [`LayerStyle::OVERLAY`] or [`LayerStyle::REGION`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Location of the metadata document.
    pub metadata_path: String,
    /// Directory that drawing image files are served from.
    pub drawing_base_path: String,
    /// Style of discipline overlay layers.
    #[serde(deserialize_with = "overlay_style")]
    pub overlay_style: LayerStyle,
    /// Style of the default region layer.
    #[serde(deserialize_with = "region_style")]
    pub region_style: LayerStyle,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            metadata_path: DEFAULT_METADATA_PATH.to_owned(),
            drawing_base_path: DEFAULT_DRAWING_BASE_PATH.to_owned(),
            overlay_style: LayerStyle::OVERLAY,
            region_style: LayerStyle::REGION,
        }
    }
}

impl ExplorerConfig {
    /// Returns the URL of a drawing image file.
    #[must_use]
    pub fn drawing_url(&self, file_name: &str) -> String {
        crate::drawing_url(&self.drawing_base_path, file_name)
    }
}
