//! Main application for the Mancala GUI

use eframe::egui;
use egui::{
    Align2, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2,
};

use crate::board::Player;
use crate::rules::{outcome, Outcome};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main Mancala application
pub struct MancalaApp {
    state: GameState,
    board_view: BoardView,
    confirm_reset: bool,
}

impl Default for MancalaApp {
    fn default() -> Self {
        Self {
            state: GameState::default(),
            board_view: BoardView::default(),
            confirm_reset: false,
        }
    }
}

impl MancalaApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for stones in [3, 4, 6] {
                        let label = format!("New Game ({stones} stones per pit)");
                        if ui.button(label).clicked() {
                            self.state.new_game(stones);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Reset").clicked() {
                        self.confirm_reset = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("Rules", |ui| {
                    ui.checkbox(&mut self.state.rules.relay_sowing, "Relay sowing");
                    ui.label(
                        RichText::new("Occupied landing pits are picked up and sown onward")
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let variant = if self.state.rules.relay_sowing {
                        "Relay sowing"
                    } else {
                        "Standard Kalah"
                    };
                    ui.label(format!("{variant} - {} stones per pit", self.state.stones_per_pit));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.state.board.is_game_over() && !self.state.is_animating() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn accent_for(player: Player) -> egui::Color32 {
        match player {
            Player::A => PLAYER_A_ACCENT,
            Player::B => PLAYER_B_ACCENT,
        }
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●●").size(20.0).color(LABEL_TEXT));
            ui.add_space(4.0);
            ui.label(RichText::new("MANCALA").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Kalah").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.board.current_player;
            let accent = Self::accent_for(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    player.name(),
                    egui::FontId::proportional(24.0),
                    PANEL_BG,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("PLAYER {}", player.name()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (status, color) = if self.state.is_animating() {
                        ("Sowing...".to_string(), STATUS_WARNING)
                    } else if self.state.board.is_game_over() {
                        ("Game over".to_string(), STATUS_OVER)
                    } else if self.state.board.extra_turn {
                        ("Extra turn!".to_string(), STATUS_EXTRA)
                    } else {
                        ("Your move".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render the store totals card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let displayed = *self.state.displayed_pits();
            let total = self.state.board.total_stones();
            let majority = total / 2 + 1;

            for player in [Player::A, Player::B] {
                let count = displayed[player.store()];
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Player {}", player.name()))
                            .size(13.0)
                            .color(Self::accent_for(player)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = if count >= majority {
                            RichText::new(format!("{count} ★")).size(15.0).strong().color(STATUS_OVER)
                        } else {
                            RichText::new(count.to_string()).size(15.0).color(TEXT_PRIMARY)
                        };
                        ui.label(text);
                    });
                });
                ui.add_space(4.0);
            }

            ui.label(
                RichText::new(format!("{majority} stones banked settles it"))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let hint = egui::Label::new(
                        RichText::new("Hint (H)").size(12.0).color(TEXT_PRIMARY),
                    )
                    .sense(egui::Sense::click());
                    if ui.add(hint).clicked() {
                        self.state.request_hint();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let reset = egui::Label::new(
                        RichText::new("Reset").size(12.0).color(TEXT_PRIMARY),
                    )
                    .sense(egui::Sense::click());
                    if ui.add(reset).clicked() && !self.state.is_animating() {
                        self.confirm_reset = true;
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.moves_played))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let board = &self.state.board;
        let headline = match outcome(board) {
            Outcome::WinA => "PLAYER A WINS!",
            Outcome::WinB => "PLAYER B WINS!",
            Outcome::Draw => "IT'S A DRAW",
        };
        let score = format!(
            "{} – {}",
            board.store_count(Player::A),
            board.store_count(Player::B)
        );

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(score).size(14.0).color(STATUS_OVER));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let again = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(again).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(self.state.status_line())
                        .size(14.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(8.0);

                let displayed = *self.state.displayed_pits();
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    &displayed,
                    self.state.hint_pit,
                    self.state.last_landing,
                    self.state.is_animating() || self.confirm_reset,
                );

                if let Some(pit) = clicked {
                    if let Err(msg) = self.state.try_sow(pit) {
                        self.state.message = Some(msg);
                    }
                }
            });
        });
    }

    /// Reset confirmation dialog
    fn render_reset_dialog(&mut self, ctx: &Context) {
        if !self.confirm_reset {
            return;
        }

        egui::Window::new("Reset Game")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to reset the game?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.state.reset();
                        self.confirm_reset = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // H - Mark the greedy suggestion
            if i.key_pressed(egui::Key::H) {
                self.state.request_hint();
            }

            // N - New game with the current settings
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
                self.confirm_reset = false;
            }
        });
    }
}

impl eframe::App for MancalaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Drive the sowing playback
        if self.state.tick() {
            ctx.request_repaint();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_reset_dialog(ctx);
    }
}
