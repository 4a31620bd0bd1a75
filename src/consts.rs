//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of the playing surface in "pixels"
pub(crate) const WINDOW_WIDTH: u16 = 800;

/// Height of the playing surface in "pixels"
pub(crate) const WINDOW_HEIGHT: u16 = 600;

/// Size of one grid cell in "pixels"
pub(crate) const CELL_SIZE: u16 = 20;

/// Number of cells in the grid the snake moves within
pub(crate) const GRID_SIZE: Size = Size {
    width: WINDOW_WIDTH / CELL_SIZE,
    height: WINDOW_HEIGHT / CELL_SIZE,
};

/// Number of terminal columns used to draw one grid cell.  Terminal cells are
/// roughly twice as tall as they are wide, so two of them make a square.
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_SCORE: u32 = 10;

/// Simulation rate, in ticks per second, at a score of zero
pub(crate) const BASE_SPEED: f64 = 10.0;

/// Amount by which the simulation rate increases for every
/// [`SPEED_STEP_SCORE`] points
pub(crate) const SPEED_INCREMENT: f64 = 0.5;

/// Score interval at which the simulation rate increases
pub(crate) const SPEED_STEP_SCORE: u32 = 50;

/// How long an ordinary transient message stays on screen
pub(crate) const MESSAGE_TIME: Duration = Duration::from_millis(2000);

/// How long a new-high-score message stays on screen
pub(crate) const HIGH_SCORE_MESSAGE_TIME: Duration = Duration::from_millis(3000);

/// Period of the food's pulsing animation
pub(crate) const PULSE_PERIOD: Duration = Duration::from_millis(1000);

/// Food is drawn at full size when its pulsing size factor is at least this
pub(crate) const FOOD_FULL_SIZE: f64 = 0.9;

/// Default location of the high score file, relative to the current directory
pub(crate) const HIGH_SCORE_FILE: &str = "high_score.txt";

/// Glyphs for the snake's head (it has eyes)
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "••";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyphs for the food at full size
pub(crate) const FOOD_SYMBOL: &str = "██";

/// Glyphs for the food at the small end of its pulse
pub(crate) const FOOD_SMALL_SYMBOL: &str = "▐▌";

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Styles that the segments of the snake's body cycle through
pub(crate) const SNAKE_BODY_PALETTE: [Style; 6] = [
    Style::new().fg(Color::Green),
    Style::new().fg(Color::Blue),
    Style::new().fg(Color::Magenta),
    Style::new().fg(Color::Rgb(255, 165, 0)),
    Style::new().fg(Color::LightMagenta),
    Style::new().fg(Color::Cyan),
];

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for transient messages
pub(crate) const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Style laid over the playing field while the game is paused or over
pub(crate) const OVERLAY_STYLE: Style = Style::new().add_modifier(Modifier::DIM);
