use std::path::{Path, PathBuf};
use std::time::Duration;

use eframe::egui;
use engine::game::{Clock, Direction, FruitKind, GameSession, TickOutcome};
use engine::log;
use engine::save::{SAVE_FILE_EXTENSION, generate_save_filename, load_game, save_game};

use crate::audio::{LogSoundPlayer, SoundClip, SoundPlayer};
use crate::board_panel;
use crate::config::Config;
use crate::side_panel;

/// Render frames are capped at 50 per second; the logic clock runs at its
/// own configured rate.
const FRAME_TIME: Duration = Duration::from_millis(1000 / 50);

pub const SIDE_PANEL_WIDTH: f32 = 300.0;

pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// The whole application: one session, one clock, one thread. Input, logic
/// ticks and drawing all happen inside the egui update callback.
pub struct SnakeApp {
    session: GameSession,
    clock: Clock,
    sound: Box<dyn SoundPlayer>,
    status: Option<StatusMessage>,
}

impl SnakeApp {
    pub fn new(config: &Config, initial_save: Option<PathBuf>) -> Self {
        let seed: u64 = rand::random();
        let session = GameSession::new(config.to_game_settings(), seed);
        let mut clock = Clock::new(config.logic_updates_per_second);
        clock.set_paused(true);

        let mut app = Self {
            session,
            clock,
            sound: Box::new(LogSoundPlayer),
            status: None,
        };
        if let Some(path) = initial_save {
            app.load_from(&path);
        }
        app
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let mut new_direction = None;
        let mut pause_pressed = false;
        let mut reset_pressed = false;
        let mut save_pressed = false;
        let mut load_pressed = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::North);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::South);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::West);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::East);
            }
            pause_pressed = i.key_pressed(egui::Key::P);
            reset_pressed = i.key_pressed(egui::Key::Enter);
            save_pressed = i.key_pressed(egui::Key::S);
            load_pressed = i.key_pressed(egui::Key::L);
        });

        if let Some(direction) = new_direction {
            // The session rejects reversals and overfull queues on its own.
            self.session.try_enqueue(direction);
        }
        if pause_pressed {
            self.toggle_pause();
        }
        if reset_pressed && (self.session.is_new_game() || self.session.is_game_over()) {
            self.start_new_game();
        }
        if save_pressed {
            self.save_dialog();
        }
        if load_pressed {
            self.load_dialog();
        }
    }

    fn step_simulation(&mut self) {
        self.clock.update();
        if self.clock.has_elapsed_cycle() {
            let outcome = self.session.update();
            match outcome {
                TickOutcome::Collision | TickOutcome::Ate(FruitKind::Bad) => {
                    self.clock.set_paused(true);
                    self.sound.stop(SoundClip::Background);
                    self.sound.play(SoundClip::GameOver);
                    log!("Game over with score {}", self.session.score());
                }
                _ => {}
            }
        }
    }

    fn toggle_pause(&mut self) {
        if !self.session.is_running() {
            return;
        }
        let paused = !self.session.is_paused();
        self.session.set_paused(paused);
        self.clock.set_paused(paused);
        if paused {
            self.sound.stop(SoundClip::Background);
        } else {
            self.sound.play(SoundClip::Background);
        }
    }

    fn start_new_game(&mut self) {
        self.session.reset();
        self.clock.reset();
        self.status = None;
        self.sound.play(SoundClip::Background);
    }

    fn save_dialog(&mut self) {
        if !self.session.is_running() {
            return;
        }
        self.pause_for_dialog();

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Snake saves", &[SAVE_FILE_EXTENSION])
            .set_file_name(generate_save_filename(engine::ENGINE_VERSION))
            .save_file()
        else {
            return;
        };

        match save_game(&path, &self.session.to_saved()) {
            Ok(()) => {
                log!("Game saved to: {}", path.display());
                self.status = Some(StatusMessage {
                    text: format!("Saved to {}", path.display()),
                    is_error: false,
                });
            }
            Err(e) => {
                log!("Failed to save game: {}", e);
                self.status = Some(StatusMessage {
                    text: format!("Save failed: {}", e),
                    is_error: true,
                });
            }
        }
    }

    fn load_dialog(&mut self) {
        if self.session.is_game_over() {
            return;
        }
        self.pause_for_dialog();

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Snake saves", &[SAVE_FILE_EXTENSION])
            .pick_file()
        else {
            return;
        };

        self.load_from(&path);
    }

    /// A failed load reports the error and leaves the running session as it
    /// was; a successful one replaces it wholesale, paused.
    fn load_from(&mut self, path: &Path) {
        match load_game(path).and_then(|saved| self.session.restore(saved)) {
            Ok(()) => {
                self.clock.set_paused(true);
                log!("Game loaded from: {}", path.display());
                self.status = Some(StatusMessage {
                    text: format!("Loaded {}", path.display()),
                    is_error: false,
                });
            }
            Err(e) => {
                log!("Failed to load game: {}", e);
                self.status = Some(StatusMessage {
                    text: format!("Load failed: {}", e),
                    is_error: true,
                });
            }
        }
    }

    fn pause_for_dialog(&mut self) {
        if self.session.is_running() {
            self.session.set_paused(true);
        }
        self.clock.set_paused(true);
        self.sound.stop(SoundClip::Background);
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.step_simulation();

        egui::SidePanel::right("side_panel")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                side_panel::render_side_panel(ui, &self.session, self.status.as_ref());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            board_panel::render_board(ui, &self.session);
        });

        ctx.request_repaint_after(FRAME_TIME);
    }
}
