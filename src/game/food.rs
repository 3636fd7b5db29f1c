use super::grid::Grid;
use super::snake::Snake;
use crate::consts;
use enum_map::Enum;
use rand::{seq::IteratorRandom, Rng};
use ratatui::{layout::Position, style::Style};

/// The kinds of food, each with its own effect on the snake
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub(crate) enum FoodKind {
    /// Scores points, speeds the snake up, and makes it one cell longer
    Score,
    SpeedUp,
    SpeedDown,
    LengthUp,
    /// Makes the snake one cell shorter, down to
    /// [`MIN_SNAKE_LENGTH`][consts::MIN_SNAKE_LENGTH]
    LengthDown,
}

impl FoodKind {
    /// Cumulative percentages for choosing the kind of a newly-placed food.
    /// A roll in `0..100` selects the first entry whose threshold exceeds it.
    const TABLE: [(u32, FoodKind); 5] = [
        (60, FoodKind::Score),
        (70, FoodKind::SpeedUp),
        (80, FoodKind::SpeedDown),
        (90, FoodKind::LengthUp),
        (100, FoodKind::LengthDown),
    ];

    pub(crate) fn from_roll(roll: u32) -> FoodKind {
        FoodKind::TABLE
            .iter()
            .find(|&&(threshold, _)| roll < threshold)
            .map_or(FoodKind::LengthDown, |&(_, kind)| kind)
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> FoodKind {
        FoodKind::from_roll(rng.random_range(0..100))
    }

    /// Text describing the food's effect, as shown in the legend
    pub(crate) fn description(self) -> &'static str {
        match self {
            FoodKind::Score => "Score, Speed Up, Length Up",
            FoodKind::SpeedUp => "Speed Up",
            FoodKind::SpeedDown => "Speed Down",
            FoodKind::LengthUp => "Length Up",
            FoodKind::LengthDown => "Length Down",
        }
    }

    pub(crate) fn style(self) -> Style {
        match self {
            FoodKind::Score => consts::SCORE_FOOD_STYLE,
            FoodKind::SpeedUp => consts::SPEED_UP_FOOD_STYLE,
            FoodKind::SpeedDown => consts::SPEED_DOWN_FOOD_STYLE,
            FoodKind::LengthUp => consts::LENGTH_UP_FOOD_STYLE,
            FoodKind::LengthDown => consts::LENGTH_DOWN_FOOD_STYLE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Position,
    pub(crate) kind: FoodKind,
}

/// Place a new batch of food on `grid`.
///
/// A random number of foods in [`FOOD_COUNT`][consts::FOOD_COUNT] is chosen,
/// and each is put on a distinct cell not occupied by `snake`.  The cells are
/// drawn without replacement from the free cells of the grid, so fewer foods
/// are placed if the grid doesn't have room for all of them.
pub(crate) fn spawn_foods<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Vec<Food> {
    let qty = rng.random_range(consts::FOOD_COUNT);
    let cells = grid
        .positions()
        .filter(|&p| !snake.contains(p))
        .choose_multiple(rng, qty);
    cells
        .into_iter()
        .map(|position| Food {
            position,
            kind: FoodKind::random(rng),
        })
        .collect()
}
