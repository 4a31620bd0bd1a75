mod direction;
mod snake;
mod view;
pub(crate) use self::view::GameView;
use self::direction::Direction;
use self::snake::Snake;
use crate::command::Command;
use crate::consts;
use crate::highscore::{FileScoreStore, ScoreStore};
use crate::messages::{self, MessageKind};
use crate::util::{error_chain, Bounds};
use crossterm::event::Event;
use rand::Rng;
use ratatui::layout::Position;
use std::ops::ControlFlow;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<S = FileScoreStore, R = rand::rngs::ThreadRng> {
    rng: R,
    store: S,
    bounds: Bounds,
    snake: Snake,
    food: Position,
    score: u32,
    high_score: u32,
    state: GameState,
    message: Option<Message>,
}

impl<S: ScoreStore> Game<S, rand::rngs::ThreadRng> {
    pub(crate) fn new(store: S) -> Self {
        Game::new_with_rng(store, rand::rng())
    }
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    pub(crate) fn new_with_rng(store: S, rng: R) -> Game<S, R> {
        Game::with_bounds(Bounds::from(consts::GRID_SIZE), store, rng)
    }

    fn with_bounds(bounds: Bounds, store: S, rng: R) -> Game<S, R> {
        let high_score = store.load();
        let mut game = Game {
            rng,
            store,
            bounds,
            snake: Snake::new(start_position(bounds), Direction::East),
            food: Position::ORIGIN,
            score: 0,
            high_score,
            state: GameState::Running,
            message: None,
        };
        game.place_food();
        game
    }

    /// Start over with a fresh snake, food, & score.  The high score is
    /// reloaded from the store but never goes down.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds), Direction::East);
        self.score = 0;
        self.high_score = self.high_score.max(self.store.load());
        self.state = GameState::Running;
        self.message = None;
        self.place_food();
        log::info!("Starting a new game");
    }

    pub(crate) fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        if event == Event::FocusLost {
            if self.running() {
                self.pause();
            }
            return ControlFlow::Continue(());
        }
        match event.as_key_press_event().and_then(Command::from_key_event) {
            Some(cmd) => self.handle_command(cmd),
            None => ControlFlow::Continue(()),
        }
    }

    /// Apply a command from the player.  Returns `Break` if the player wants
    /// to stop playing.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match (self.state, cmd) {
            (_, Command::Quit) => return ControlFlow::Break(()),
            (GameState::GameOver, Command::Space | Command::Restart) => self.reset(),
            (GameState::Running, Command::Space) => self.pause(),
            (GameState::Paused, Command::Space) => self.resume(),
            (GameState::Running, Command::Up) => self.snake.turn(Direction::North),
            (GameState::Running, Command::Down) => self.snake.turn(Direction::South),
            (GameState::Running, Command::Left) => self.snake.turn(Direction::West),
            (GameState::Running, Command::Right) => self.snake.turn(Direction::East),
            _ => (),
        }
        ControlFlow::Continue(())
    }

    /// Advance the game by one tick
    pub(crate) fn step(&mut self) {
        if !self.running() {
            return;
        }
        let Some(head) = self.snake.next_head(self.bounds) else {
            self.collide();
            return;
        };
        if self.snake.occupies(head) {
            self.collide();
            return;
        }
        let ate = head == self.food;
        self.snake.slither(head, ate);
        if ate {
            self.eat();
        }
    }

    /// Save the current score if it beats what's on record.  Called when the
    /// program is exiting.
    pub(crate) fn finish(&mut self) {
        if self.score > self.store.load() {
            self.save_score(self.score);
        }
    }

    fn eat(&mut self) {
        self.score = self.score.saturating_add(consts::FOOD_SCORE);
        self.show_message(MessageKind::FoodEaten);
        self.place_food();
        if self.score > self.high_score {
            self.high_score = self.score;
            self.save_score(self.high_score);
            self.show_message(MessageKind::NewHighScore);
        }
    }

    fn collide(&mut self) {
        self.state = GameState::GameOver;
        log::info!("Game over with a score of {}", self.score);
        self.show_message(MessageKind::GameOver);
    }

    fn save_score(&mut self, score: u32) {
        if let Err(e) = self.store.save(score) {
            log::error!("{}", error_chain(&e));
        }
    }

    /// Move the food to a random cell not occupied by the snake.  If the snake
    /// fills the whole grid, the food stays where it is.
    fn place_food(&mut self) {
        if self.snake.len() >= self.bounds.area() {
            log::warn!("No free cells left for food");
            return;
        }
        loop {
            let pos = Position::new(
                self.rng.random_range(0..self.bounds.width),
                self.rng.random_range(0..self.bounds.height),
            );
            if !self.snake.occupies(pos) {
                self.food = pos;
                return;
            }
        }
    }

    fn show_message(&mut self, kind: MessageKind) {
        let text = messages::pick(kind, &mut self.rng);
        log::info!("{text}");
        self.message = Some(Message {
            text,
            remaining: kind.display_time(),
        });
    }
}

impl<S, R> Game<S, R> {
    /// Simulation rate in ticks per second, which goes up with the score
    pub(crate) fn tick_rate(&self) -> f64 {
        f64::from(self.score / consts::SPEED_STEP_SCORE)
            .mul_add(consts::SPEED_INCREMENT, consts::BASE_SPEED)
    }

    /// Count down the display time of the current message by `elapsed`,
    /// removing it once the time is up
    pub(crate) fn decay_message(&mut self, elapsed: Duration) {
        if let Some(msg) = self.message.as_mut() {
            msg.remaining = msg.remaining.saturating_sub(elapsed);
            if msg.remaining.is_zero() {
                self.message = None;
            }
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused;
        log::debug!("Paused");
    }

    fn resume(&mut self) {
        self.state = GameState::Running;
        log::debug!("Resumed");
    }
}

fn start_position(bounds: Bounds) -> Position {
    Position::new(bounds.width / 2, bounds.height / 2)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
    GameOver,
}

/// A transient message shown above the playing field
#[derive(Clone, Debug, Eq, PartialEq)]
struct Message {
    text: &'static str,
    remaining: Duration,
}
