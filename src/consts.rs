//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Draw everything inside a rectangle of at least this size in the center of
/// the terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Side length of the playing grid when not otherwise configured
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid side length accepted from the configuration
pub(crate) const MIN_GRID_SIZE: u16 = 10;

/// Largest grid side length accepted from the configuration
pub(crate) const MAX_GRID_SIZE: u16 = 64;

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Number of cells in a freshly-started snake
pub(crate) const SNAKE_START_LENGTH: u16 = 5;

/// Eating a `LengthDown` food never shrinks the snake below this many cells
pub(crate) const MIN_SNAKE_LENGTH: usize = 5;

/// Time between movements of the snake at the start of a game
pub(crate) const INITIAL_TICK: Duration = Duration::from_millis(500);

/// Fastest allowed tick interval
pub(crate) const MIN_TICK: Duration = Duration::from_millis(50);

/// Slowest allowed tick interval
pub(crate) const MAX_TICK: Duration = Duration::from_millis(500);

/// How much a speed-changing food (or a level) changes the tick interval by
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(50);

/// Points awarded for eating a `Score` food
pub(crate) const SCORE_FOOD_POINTS: u32 = 10;

/// Score at which the player advances to the next level
pub(crate) const LEVEL_UP_SCORE: u32 = 50;

/// Range of the number of foods placed by each respawn
pub(crate) const FOOD_COUNT: RangeInclusive<usize> = 5..=15;

/// Time between food respawns
pub(crate) const FOOD_SPAWN_PERIOD: Duration = Duration::from_secs(15);

/// Glyphs for a cell of the snake's body or head
pub(crate) const SNAKE_SYMBOL: &str = "██";

/// Glyphs for a food item
pub(crate) const FOOD_SYMBOL: &str = "● ";

/// Glyphs for an empty cell of the grid
pub(crate) const GRID_SYMBOL: &str = "· ";

/// Glyphs for the snake's head once it has crashed
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for empty grid cells
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

pub(crate) const SCORE_FOOD_STYLE: Style = Style::new().fg(Color::Red);

pub(crate) const SPEED_UP_FOOD_STYLE: Style = Style::new().fg(Color::Blue);

pub(crate) const SPEED_DOWN_FOOD_STYLE: Style = Style::new().fg(Color::Magenta);

pub(crate) const LENGTH_UP_FOOD_STYLE: Style = Style::new().fg(Color::Indexed(208));

pub(crate) const LENGTH_DOWN_FOOD_STYLE: Style = Style::new().fg(Color::Indexed(94));

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected dialog button
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
