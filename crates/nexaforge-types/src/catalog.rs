//! Fixed catalogs offered by the forge form.
//!
//! Order matters: the form preselects the first industry and theme, and the
//! visual fallback always picks the first palette.

use serde::Serialize;

use crate::forge::ColorPalette;

/// Supported industries (24).
pub const INDUSTRY_OPTIONS: [&str; 24] = [
    "AI & Machine Learning",
    "SaaS",
    "Fintech",
    "E-commerce",
    "Healthcare",
    "Wellness & Fitness",
    "Education",
    "Real Estate",
    "Hospitality",
    "Travel",
    "Food & Beverage",
    "Fashion",
    "Beauty",
    "Legal",
    "Consulting",
    "Marketing Agency",
    "Creative Studio",
    "Photography",
    "Architecture",
    "Construction",
    "Automotive",
    "Nonprofit",
    "Gaming",
    "Web3",
];

/// Supported visual themes (20).
pub const THEME_OPTIONS: [&str; 20] = [
    "Glassmorphism",
    "Neumorphism",
    "Minimalist",
    "Brutalist",
    "Cyberpunk",
    "Retro Futurism",
    "Editorial",
    "Luxury",
    "Organic",
    "Monochrome",
    "Gradient Mesh",
    "Aurora",
    "Dark Mode Pro",
    "Pastel",
    "Swiss Grid",
    "Material",
    "Skeuomorphic",
    "Y2K",
    "Bauhaus",
    "Vaporwave",
];

/// Features sent to the architect when the request lists none.
pub const DEFAULT_FEATURES: [&str; 6] = [
    "AI-generated hero visuals",
    "Animated section transitions",
    "Stripe checkout",
    "Booking calendar",
    "Lead capture form",
    "SEO-optimized blog",
];

/// Call-to-action phrases appended to the fallback sub-headline.
pub const CTA_VARIANTS: [&str; 4] = [
    "Start forging today",
    "Launch your blueprint now",
    "Ship your next site this week",
    "Turn ideas into live experiences",
];

/// A named color palette from the built-in library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteSpec {
    pub name: &'static str,
    pub accents: &'static [&'static str],
    pub neutrals: &'static [&'static str],
}

impl PaletteSpec {
    /// Owned palette colors as used in a `VisualDirective`.
    pub fn to_color_palette(&self) -> ColorPalette {
        ColorPalette {
            accents: self.accents.iter().map(|c| c.to_string()).collect(),
            neutrals: self.neutrals.iter().map(|c| c.to_string()).collect(),
        }
    }
}

pub const PALETTE_LIBRARY: [PaletteSpec; 4] = [
    PaletteSpec {
        name: "Nebula Pulse",
        accents: &["#7C3AED", "#22D3EE", "#F472B6"],
        neutrals: &["#0B1020", "#1E2235", "#E2E8F0"],
    },
    PaletteSpec {
        name: "Solar Drift",
        accents: &["#F59E0B", "#EF4444", "#FDE68A"],
        neutrals: &["#111827", "#374151", "#F9FAFB"],
    },
    PaletteSpec {
        name: "Glacier Mint",
        accents: &["#10B981", "#38BDF8", "#A7F3D0"],
        neutrals: &["#0F172A", "#334155", "#F1F5F9"],
    },
    PaletteSpec {
        name: "Obsidian Gold",
        accents: &["#D4AF37", "#B45309", "#FCD34D"],
        neutrals: &["#09090B", "#27272A", "#FAFAF9"],
    },
];
