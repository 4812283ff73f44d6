//! Board rendering for the Mancala GUI
//!
//! Draws the board the way the physical game sits on a table: Player B's
//! pits run right-to-left along the top row, Player A's pits left-to-right
//! along the bottom, with each player's store on their outer flank.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{is_playing_pit, Board, Pits, Player, A_STORE, B_STORE, SLOT_COUNT};
use crate::rules::is_legal_move;

use super::theme::*;

const LABEL_HEIGHT: f32 = 26.0;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached slot rectangles for hit testing, indexed like the pits
    slot_rects: [Rect; SLOT_COUNT],
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            slot_rects: [Rect::NOTHING; SLOT_COUNT],
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pit, if any.
    ///
    /// `displayed` is what gets drawn (it lags `board` during sowing
    /// playback); legality always follows the committed `board`. While
    /// `locked` no pit accepts input.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        displayed: &Pits,
        hint_pit: Option<usize>,
        last_landing: Option<usize>,
        locked: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Eight columns: store, six pits, store
        let cell = ((available.x - 2.0 * BOARD_MARGIN - 7.0 * SLOT_GAP) / 8.0)
            .min((available.y - 2.0 * BOARD_MARGIN - 2.0 * LABEL_HEIGHT - SLOT_GAP) / 2.0)
            .max(40.0);

        let board_size = Vec2::new(
            2.0 * BOARD_MARGIN + 8.0 * cell + 7.0 * SLOT_GAP,
            2.0 * BOARD_MARGIN + 2.0 * LABEL_HEIGHT + 2.0 * cell + SLOT_GAP,
        );

        let (response, painter) = ui.allocate_painter(board_size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, CornerRadius::same(BOARD_CORNER), BOARD_BG);

        self.layout_slots(rect, cell);
        self.draw_side_labels(&painter, rect, board);
        self.draw_stores(&painter, displayed, board);

        // Hover state feeds the pit fill, so resolve it before drawing
        let hovered = if locked {
            None
        } else {
            response
                .hover_pos()
                .and_then(|pos| self.slot_at(pos))
                .filter(|&pit| is_legal_move(board, pit))
        };

        self.draw_pits(&painter, displayed, board, hovered, locked);

        if let Some(pit) = hint_pit {
            self.draw_hint_marker(&painter, pit);
        }
        if let Some(slot) = last_landing {
            self.draw_landing_marker(&painter, slot);
        }

        match hovered {
            Some(pit) if response.clicked() => Some(pit),
            _ => None,
        }
    }

    /// Compute the 14 slot rectangles for this frame
    fn layout_slots(&mut self, rect: Rect, cell: f32) {
        let left = rect.min.x + BOARD_MARGIN;
        let top = rect.min.y + BOARD_MARGIN + LABEL_HEIGHT;
        let column = |i: f32| left + i * (cell + SLOT_GAP);

        // Stores span both rows on the outer flanks
        let store_size = Vec2::new(cell, 2.0 * cell + SLOT_GAP);
        self.slot_rects[B_STORE] = Rect::from_min_size(Pos2::new(column(0.0), top), store_size);
        self.slot_rects[A_STORE] = Rect::from_min_size(Pos2::new(column(7.0), top), store_size);

        let pit_size = Vec2::new(cell, cell);
        for offset in 0..6 {
            // Top row: B's pits 12 down to 7, left to right
            self.slot_rects[12 - offset] = Rect::from_min_size(
                Pos2::new(column(1.0 + offset as f32), top),
                pit_size,
            );
            // Bottom row: A's pits 0 to 5, left to right
            self.slot_rects[offset] = Rect::from_min_size(
                Pos2::new(column(1.0 + offset as f32), top + cell + SLOT_GAP),
                pit_size,
            );
        }
    }

    /// Side captions above and below the pit rows
    fn draw_side_labels(&self, painter: &Painter, rect: Rect, board: &Board) {
        let centre_x = rect.center().x;
        let rows = [
            (
                Player::B,
                "Player B",
                Pos2::new(centre_x, rect.min.y + BOARD_MARGIN + LABEL_HEIGHT * 0.5),
            ),
            (
                Player::A,
                "Player A",
                Pos2::new(centre_x, rect.max.y - BOARD_MARGIN - LABEL_HEIGHT * 0.5),
            ),
        ];

        for (player, caption, pos) in rows {
            let color = if board.current_player == player && !board.is_game_over() {
                ACTIVE_OUTLINE
            } else {
                LABEL_TEXT
            };
            painter.text(pos, Align2::CENTER_CENTER, caption, FontId::proportional(15.0), color);
        }
    }

    /// Draw the two stores with their counts
    fn draw_stores(&self, painter: &Painter, displayed: &Pits, board: &Board) {
        for (player, store) in [(Player::A, A_STORE), (Player::B, B_STORE)] {
            let rect = self.slot_rects[store];
            let active = board.current_player == player && !board.is_game_over();
            let fill = if active { STORE_BG_ACTIVE } else { STORE_BG };

            painter.rect_filled(rect, CornerRadius::same(STORE_CORNER), fill);

            let accent = match player {
                Player::A => PLAYER_A_ACCENT,
                Player::B => PLAYER_B_ACCENT,
            };
            painter.text(
                Pos2::new(rect.center().x, rect.min.y + 16.0),
                Align2::CENTER_CENTER,
                player.name(),
                FontId::proportional(14.0),
                accent,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                displayed[store].to_string(),
                FontId::proportional(28.0),
                COUNT_TEXT,
            );
        }
    }

    /// Draw the twelve playing pits with their counts
    fn draw_pits(
        &self,
        painter: &Painter,
        displayed: &Pits,
        board: &Board,
        hovered: Option<usize>,
        locked: bool,
    ) {
        for pit in (0..SLOT_COUNT).filter(|&i| is_playing_pit(i)) {
            let rect = self.slot_rects[pit];
            let radius = rect.width() * PIT_RADIUS_RATIO;
            let playable = !locked && is_legal_move(board, pit);

            let fill = if hovered == Some(pit) {
                PIT_BG_HOVER
            } else if playable {
                PIT_BG
            } else {
                PIT_BG_DISABLED
            };
            painter.circle_filled(rect.center(), radius, fill);

            if playable {
                painter.circle_stroke(rect.center(), radius, Stroke::new(2.0, ACTIVE_OUTLINE));
            }

            let count = displayed[pit];
            let color = if count == 0 {
                Color32::from_rgba_unmultiplied(245, 238, 225, 90)
            } else {
                COUNT_TEXT
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                FontId::proportional(22.0),
                color,
            );
        }
    }

    /// Ring around the pit suggested by the hint
    fn draw_hint_marker(&self, painter: &Painter, pit: usize) {
        let rect = self.slot_rects[pit];
        let radius = rect.width() * PIT_RADIUS_RATIO + 4.0;
        painter.circle_stroke(rect.center(), radius, Stroke::new(3.0, HINT_MARKER));
    }

    /// Dot on the slot the last stone landed in
    fn draw_landing_marker(&self, painter: &Painter, slot: usize) {
        let rect = self.slot_rects[slot];
        let pos = Pos2::new(rect.center().x, rect.min.y + 6.0);
        painter.circle_filled(pos, LANDING_MARKER_RADIUS, LANDING_MARKER);
    }

    /// Playing pit under the pointer, if any
    fn slot_at(&self, pos: Pos2) -> Option<usize> {
        (0..SLOT_COUNT)
            .filter(|&i| is_playing_pit(i))
            .find(|&i| self.slot_rects[i].contains(pos))
    }
}
