//! Flavor text shown when things happen in the game
use crate::consts;
use rand::{seq::IndexedRandom, Rng};
use std::time::Duration;

/// The kinds of events that get a message
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MessageKind {
    Startup,
    FoodEaten,
    GameOver,
    NewHighScore,
}

impl MessageKind {
    pub(crate) fn pool(self) -> &'static [&'static str] {
        match self {
            MessageKind::Startup => STARTUP,
            MessageKind::FoodEaten => FOOD_EATEN,
            MessageKind::GameOver => GAME_OVER,
            MessageKind::NewHighScore => NEW_HIGH_SCORE,
        }
    }

    /// How long a message of this kind stays on screen
    pub(crate) fn display_time(self) -> Duration {
        match self {
            MessageKind::NewHighScore => consts::HIGH_SCORE_MESSAGE_TIME,
            _ => consts::MESSAGE_TIME,
        }
    }
}

/// Choose a message of the given kind uniformly at random
pub(crate) fn pick<R: Rng + ?Sized>(kind: MessageKind, rng: &mut R) -> &'static str {
    kind.pool().choose(rng).copied().unwrap_or_default()
}

static STARTUP: &[&str] = &[
    "Unspooling one (1) snake...",
    "Sharpening the walls. For safety.",
    "Counting pixels so you don't have to.",
    "Reticulating snake splines...",
    "Teaching the snake which way is forward...",
    "Preheating the food to a crisp 8 bits.",
    "Your productivity is now officially on pause.",
    "Now with 100% more grid!",
];

static FOOD_EATEN: &[&str] = &[
    "Nom nom nom!",
    "Delicious. Tastes like pixels.",
    "The snake grows stronger.",
    "Zero calories, infinite satisfaction.",
    "One more for the tail!",
    "Chef's kiss.",
    "That one had a little crunch to it.",
    "Snake.exe has grown successfully.",
];

static GAME_OVER: &[&str] = &[
    "The wall was not food. Noted.",
    "Your snake has tied itself in a knot.",
    "Plot twist: that was your own tail.",
    "Ouch. Just ouch.",
    "The snake has left the grid.",
    "Illegal U-turn detected. Sort of.",
    "That went about as well as expected.",
    "Turns out snakes can't eat themselves.",
];

static NEW_HIGH_SCORE: &[&str] = &[
    "NEW HIGH SCORE! Frame it!",
    "RECORD BROKEN! The leaderboard trembles.",
    "HIGH SCORE! Put it on your resume.",
    "NEW BEST! The snake is legendary now.",
    "HIGH SCORE! Somebody call the newspaper.",
];
