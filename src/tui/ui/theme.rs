//! Colour palette for the dashboard.
//!
//! Semantic colours (success=green, error=red) match the toast kinds and
//! container state badges.

use crate::dashboard::ToastKind;
use crate::format::StateClass;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // === Primary colors ===
    /// Main text color
    pub text: Color,
    /// Muted/secondary text color
    pub muted: Color,
    /// Active elements and highlights
    pub accent: Color,

    // === Border colors ===
    pub border: Color,
    pub border_focused: Color,

    // === Semantic colors ===
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // === Tab bar colors ===
    pub tab_active: Color,
    pub tab_inactive: Color,

    /// Background of the selected list row
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl Theme {
    pub fn dashboard() -> Self {
        Self {
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::Gray,
            border_focused: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            tab_active: Color::Cyan,
            tab_inactive: Color::Gray,
            selection_bg: Color::Rgb(40, 44, 52),
        }
    }

    pub fn state_color(&self, class: StateClass) -> Color {
        match class {
            StateClass::Running => self.success,
            StateClass::Exited => self.error,
            StateClass::Created => self.info,
            StateClass::Paused => self.warning,
            StateClass::Other => self.muted,
        }
    }

    pub fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
            ToastKind::Info => self.info,
        }
    }
}
