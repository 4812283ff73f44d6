//! Theme constants for the Mancala GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 94, 52);
pub const PIT_BG: Color32 = Color32::from_rgb(101, 67, 33);
pub const PIT_BG_HOVER: Color32 = Color32::from_rgb(120, 82, 45);
pub const PIT_BG_DISABLED: Color32 = Color32::from_rgb(92, 62, 32);
pub const STORE_BG: Color32 = Color32::from_rgb(84, 55, 27);
pub const STORE_BG_ACTIVE: Color32 = Color32::from_rgb(110, 74, 38);

// Accents
pub const ACTIVE_OUTLINE: Color32 = Color32::from_rgb(255, 205, 95);
pub const HINT_MARKER: Color32 = Color32::from_rgb(80, 200, 120);
pub const LANDING_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Board text
pub const COUNT_TEXT: Color32 = Color32::from_rgb(245, 238, 225);
pub const LABEL_TEXT: Color32 = Color32::from_rgb(215, 190, 160);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Side accents for the two players
pub const PLAYER_A_ACCENT: Color32 = Color32::from_rgb(95, 160, 250);
pub const PLAYER_B_ACCENT: Color32 = Color32::from_rgb(240, 140, 90);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_EXTRA: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_OVER: Color32 = Color32::from_rgb(50, 220, 50);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const SLOT_GAP: f32 = 12.0;
pub const PIT_RADIUS_RATIO: f32 = 0.42;
pub const LANDING_MARKER_RADIUS: f32 = 5.0;
pub const BOARD_CORNER: u8 = 12;
pub const STORE_CORNER: u8 = 10;
