//! Status palettes (info, success, warning, danger)
//!
//! Each semantic scale borrows the lightness ramp of the primary scale and
//! keeps the hue of a fixed base color, at 80% of that base's chroma.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{parse_color, Color};
use crate::scale::Scale;

/// Chroma multiplier applied to the semantic base colors.
pub const SEMANTIC_CHROMA_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticCategory {
    Info,
    Success,
    Warning,
    Danger,
}

impl SemanticCategory {
    pub const ALL: [SemanticCategory; 4] = [
        SemanticCategory::Info,
        SemanticCategory::Success,
        SemanticCategory::Warning,
        SemanticCategory::Danger,
    ];

    /// Base color whose hue and chroma define the category.
    pub fn base_hex(self) -> &'static str {
        match self {
            SemanticCategory::Info => "#2563eb",
            SemanticCategory::Success => "#16a34a",
            SemanticCategory::Warning => "#f59e0b",
            SemanticCategory::Danger => "#dc2626",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SemanticCategory::Info => "info",
            SemanticCategory::Success => "success",
            SemanticCategory::Warning => "warning",
            SemanticCategory::Danger => "danger",
        }
    }

    fn base(self) -> Color {
        // Base colors are literal hex constants
        parse_color(self.base_hex()).unwrap_or_else(|_| Color::gray(0.5))
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four status scales generated from one primary scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticPalette {
    pub info: Scale,
    pub success: Scale,
    pub warning: Scale,
    pub danger: Scale,
}

impl SemanticPalette {
    pub fn get(&self, category: SemanticCategory) -> &Scale {
        match category {
            SemanticCategory::Info => &self.info,
            SemanticCategory::Success => &self.success,
            SemanticCategory::Warning => &self.warning,
            SemanticCategory::Danger => &self.danger,
        }
    }

    /// Scales in [`SemanticCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticCategory, &Scale)> {
        SemanticCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Build one scale for a category, following the primary lightness ramp.
pub fn semantic_scale(primary: &Scale, category: SemanticCategory) -> Scale {
    let base = category.base();
    let chroma = base.c * SEMANTIC_CHROMA_FACTOR;
    let hue = base.hue_or_zero();
    Scale::from_fn(|shade| Color::new(primary.color(shade).l, chroma, hue))
}

pub fn generate_semantic(primary: &Scale) -> SemanticPalette {
    SemanticPalette {
        info: semantic_scale(primary, SemanticCategory::Info),
        success: semantic_scale(primary, SemanticCategory::Success),
        warning: semantic_scale(primary, SemanticCategory::Warning),
        danger: semantic_scale(primary, SemanticCategory::Danger),
    }
}
