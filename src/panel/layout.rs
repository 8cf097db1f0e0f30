use clap::ValueEnum;
use serde::Serialize;

use crate::panel::config::{MAX_LOGOS, MIN_LOGOS};

/// Sizing bucket selected by the number of simultaneously displayed logos.
/// Both the inline preview and the fullscreen view resolve the same tier for
/// a given count; only the absolute pixel sizes differ between them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeTier {
    Xl,
    L,
    M,
    S,
    Xs,
    Xxs,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Preview,
    Fullscreen,
}

impl ViewMode {
    /// The fullscreen view never renders gaps tighter than 24px so the grid
    /// stays legible at venue-screen viewing distance.
    fn gap_floor_px(self) -> u32 {
        match self {
            ViewMode::Preview => 12,
            ViewMode::Fullscreen => 24,
        }
    }
}

/// Grid shape for one logo count: column count, sizing tier, and whether the
/// per-logo social/phone line is even allowed at this density.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogoGrid {
    pub columns: u8,
    pub tier: SizeTier,
    pub social_line_allowed: bool,
}

/// Resolve the tier table for a logo count. Counts outside 1..=9 cannot be
/// produced by the editor; values from hand-edited store files are clamped
/// into range so the resolver stays total.
pub fn resolve_grid(count: u8) -> LogoGrid {
    let count = count.clamp(MIN_LOGOS, MAX_LOGOS);
    let (columns, tier) = match count {
        1 => (1, SizeTier::Xl),
        2 => (2, SizeTier::L),
        3 | 4 => (2, SizeTier::M),
        5 | 6 => (3, SizeTier::S),
        7 | 8 => (3, SizeTier::Xs),
        _ => (3, SizeTier::Xxs),
    };

    // Above 6 logos the social handle and phone number are illegible from a
    // distance, so they are force-hidden independent of the producer's
    // exibirRedesSociais toggle.
    LogoGrid {
        columns,
        tier,
        social_line_allowed: count <= 6,
    }
}

pub fn grid_columns(count: u8) -> u8 {
    resolve_grid(count).columns
}

/// Inter-logo spacing: the configured value is divided down as the grid gets
/// denser, with a per-view floor.
pub fn effective_gap(espacamento_logos: u16, count: u8, view: ViewMode) -> u32 {
    let count = count.clamp(MIN_LOGOS, MAX_LOGOS);
    let divisor: u32 = match count {
        1..=3 => 1,
        4..=6 => 2,
        _ => 3,
    };
    (u32::from(espacamento_logos) / divisor).max(view.gap_floor_px())
}

impl SizeTier {
    pub fn logo_px(self, view: ViewMode) -> u32 {
        match view {
            ViewMode::Fullscreen => match self {
                SizeTier::Xl => 192,
                SizeTier::L => 160,
                SizeTier::M => 128,
                SizeTier::S => 112,
                SizeTier::Xs => 96,
                SizeTier::Xxs => 80,
            },
            ViewMode::Preview => match self {
                SizeTier::Xl => 96,
                SizeTier::L => 80,
                SizeTier::M => 64,
                SizeTier::S => 56,
                SizeTier::Xs => 48,
                SizeTier::Xxs => 40,
            },
        }
    }

    pub fn label_font_px(self, view: ViewMode) -> u32 {
        match view {
            ViewMode::Fullscreen => match self {
                SizeTier::Xl => 30,
                SizeTier::L => 24,
                SizeTier::M => 20,
                SizeTier::S => 18,
                SizeTier::Xs => 16,
                SizeTier::Xxs => 14,
            },
            ViewMode::Preview => match self {
                SizeTier::Xl => 20,
                SizeTier::L => 18,
                SizeTier::M => 16,
                SizeTier::S => 14,
                SizeTier::Xs => 12,
                SizeTier::Xxs => 11,
            },
        }
    }
}
