use crate::clock::FrameLimiter;
use crate::game::{Game, GameView};
use crate::highscore::ScoreStore;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives a [`Game`] at a frame rate that goes up as the player scores
#[derive(Debug)]
pub(crate) struct App<S, R> {
    game: Game<S, R>,
    limiter: FrameLimiter,
    started: Instant,
    /// How long the previous frame took
    frame_time: Duration,
    quitting: bool,
}

impl<S: ScoreStore, R: Rng> App<S, R> {
    pub(crate) fn new(game: Game<S, R>) -> App<S, R> {
        App {
            game,
            limiter: FrameLimiter::new(),
            started: Instant::now(),
            frame_time: Duration::ZERO,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let r = self.run_loop(&mut terminal);
        self.game.finish();
        r
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.process_input()?;
            if self.quitting {
                break;
            }
            self.game.step();
            self.draw(terminal)?;
            self.game.decay_message(self.frame_time);
            self.frame_time = self.limiter.tick(self.game.tick_rate());
        }
        Ok(())
    }

    /// Handle every event that has arrived since the last frame without
    /// blocking
    fn process_input(&mut self) -> io::Result<()> {
        while poll(Duration::ZERO)? {
            if self.game.handle_event(read()?).is_break() {
                log::info!("Quitting");
                self.quitting = true;
                break;
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let clock = self.started.elapsed();
        terminal.draw(|frame| {
            frame.render_widget(GameView::new(&self.game, clock), frame.area());
        })?;
        Ok(())
    }
}
