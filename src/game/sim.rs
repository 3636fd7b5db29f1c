use super::direction::Direction;
use super::food::{spawn_foods, Food, FoodKind};
use super::grid::Grid;
use super::snake::Snake;
use super::speed::TickInterval;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The complete state of one game, advanced one step at a time by
/// [`Simulation::tick()`].  Knows nothing about timers, drawing, or sound.
#[derive(Clone, Debug)]
pub(crate) struct Simulation<R> {
    rng: R,
    grid: Grid,
    pub(super) snake: Snake,
    pub(super) direction: Direction,
    pub(super) foods: Vec<Food>,
    pub(super) score: u32,
    pub(super) level: u32,
    paused: bool,
    phase: Phase,
    pub(super) interval: TickInterval,
}

/// Where the game is in its life cycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Playing,
    /// The player has just reached a new level; the game stays still until
    /// this is acknowledged.
    LevelingUp,
    GameOver,
}

/// What happened during a call to [`Simulation::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game is paused or not in play, so nothing moved.
    Idle,
    Moved {
        /// The kind of the food the snake ate on this move, if any
        eaten: Option<FoodKind>,
        /// The new level, if eating pushed the player up a level
        level_up: Option<u32>,
    },
    Crashed(Crash),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Crash {
    Wall,
    Body,
}

impl<R: Rng> Simulation<R> {
    /// Start a new game on `grid`
    pub(crate) fn new(grid: Grid, rng: R) -> Simulation<R> {
        let snake = Snake::new(grid, consts::SNAKE_START_LENGTH);
        let direction = snake.heading().unwrap_or(Direction::Left);
        let mut sim = Simulation {
            rng,
            grid,
            snake,
            direction,
            foods: Vec::new(),
            score: 0,
            level: 1,
            paused: false,
            phase: Phase::Playing,
            interval: TickInterval::initial(),
        };
        sim.respawn_foods();
        sim
    }

    /// Put everything back the way it was at the start of the game
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(self.grid, consts::SNAKE_START_LENGTH);
        self.direction = self.snake.heading().unwrap_or(Direction::Left);
        self.score = 0;
        self.level = 1;
        self.paused = false;
        self.phase = Phase::Playing;
        self.interval = TickInterval::initial();
        self.respawn_foods();
    }

    /// Advance the game by one step: move the snake, eat whatever food is
    /// under its new head, and check whether it crashed.
    pub(crate) fn tick(&mut self) -> Tick {
        if !self.running() {
            return Tick::Idle;
        }
        let Some(head) = self.direction.advance(self.snake.head(), self.grid) else {
            return self.crash(Crash::Wall);
        };
        let tail = self.snake.slither(head);
        let mut eaten = None;
        let mut level_up = None;
        if let Some(i) = self.foods.iter().position(|f| f.position == head) {
            let food = self.foods.remove(i);
            level_up = self.apply_food(food.kind, tail);
            eaten = Some(food.kind);
        }
        if self.snake.bites_itself() {
            return self.crash(Crash::Body);
        }
        Tick::Moved { eaten, level_up }
    }

    /// Apply the effect of eating a food of the given kind.  `tail` is the
    /// cell the snake's tail just left.  Returns the new level if the player
    /// leveled up.
    fn apply_food(&mut self, kind: FoodKind, tail: Position) -> Option<u32> {
        tracing::debug!(?kind, score = self.score, len = self.snake.len(), "food eaten");
        match kind {
            FoodKind::Score => {
                self.score += consts::SCORE_FOOD_POINTS;
                self.interval = self.interval.faster();
                self.snake.grow(tail);
                return self.check_level_up();
            }
            FoodKind::SpeedUp => self.interval = self.interval.faster(),
            FoodKind::SpeedDown => self.interval = self.interval.slower(),
            FoodKind::LengthUp => self.snake.grow(tail),
            FoodKind::LengthDown => {
                if !self.snake.shrink(consts::MIN_SNAKE_LENGTH) {
                    tracing::debug!(len = self.snake.len(), "snake already at minimum length");
                }
            }
        }
        None
    }

    fn check_level_up(&mut self) -> Option<u32> {
        if self.score < consts::LEVEL_UP_SCORE {
            return None;
        }
        self.level += 1;
        self.score = 0;
        self.interval = TickInterval::for_level(self.level);
        self.respawn_foods();
        if let Some(d) = self.snake.heading() {
            self.direction = d;
        }
        self.phase = Phase::LevelingUp;
        tracing::info!(level = self.level, "level up");
        Some(self.level)
    }

    /// Replace all food on the grid with a freshly-placed batch
    pub(crate) fn respawn_foods(&mut self) {
        self.foods = spawn_foods(&mut self.rng, self.grid, &self.snake);
        tracing::debug!(qty = self.foods.len(), "respawned food");
    }
}

impl<R> Simulation<R> {
    /// Ask the snake to turn.  The request is refused (returning `false`) if
    /// the game is over or leveling up, or if the turn would send the snake
    /// straight back into itself.  Turns are accepted while paused and take
    /// effect once play resumes.
    pub(crate) fn request_turn(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Playing || direction == self.direction.reverse() {
            return false;
        }
        // A turn made earlier in the same tick may have already changed
        // `self.direction`, so also check against the body's actual shape.
        let onto_neck = self
            .snake
            .neck()
            .is_some_and(|neck| direction.advance(self.snake.head(), self.grid) == Some(neck));
        if onto_neck {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Pause or unpause the game.  Returns whether the game is now paused.
    /// Has no effect once the game is over.
    pub(crate) fn toggle_pause(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Resume play after a level-up
    pub(crate) fn acknowledge_level_up(&mut self) {
        if self.phase == Phase::LevelingUp {
            self.phase = Phase::Playing;
        }
    }

    fn crash(&mut self, crash: Crash) -> Tick {
        self.phase = Phase::GameOver;
        tracing::info!(level = self.level, ?crash, "game over");
        Tick::Crashed(crash)
    }

    /// Is the snake currently moving?
    pub(crate) fn running(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn level(&self) -> u32 {
        self.level
    }

    pub(crate) fn paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn interval(&self) -> TickInterval {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_sim(side: u16) -> Simulation<ChaCha12Rng> {
        Simulation::new(Grid::new(side), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    /// A length-5 snake with its head at `(9, 10)`, facing right, and no food
    fn heading_right() -> Simulation<ChaCha12Rng> {
        let mut sim = new_sim(20);
        sim.snake = Snake::from_cells((5..=9).rev().map(|x| Position::new(x, 10)));
        sim.direction = Direction::Right;
        sim.foods.clear();
        sim
    }

    fn place(sim: &mut Simulation<ChaCha12Rng>, x: u16, y: u16, kind: FoodKind) {
        sim.foods.push(Food {
            position: Position::new(x, y),
            kind,
        });
    }

    #[test]
    fn new_game() {
        let sim = new_sim(20);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.level(), 1);
        assert_eq!(sim.snake().len(), 5);
        assert_eq!(sim.snake().head(), Position::new(8, 10));
        assert_eq!(sim.direction(), Direction::Left);
        assert_eq!(sim.interval().get(), Duration::from_millis(500));
        assert_eq!(sim.phase(), Phase::Playing);
        assert!(sim.running());
        assert!(consts::FOOD_COUNT.contains(&sim.foods().len()));
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let mut sim = heading_right();
        for x in 10..19 {
            assert_eq!(
                sim.tick(),
                Tick::Moved {
                    eaten: None,
                    level_up: None
                }
            );
            assert_eq!(sim.snake().len(), 5);
            assert_eq!(sim.snake().head(), Position::new(x, 10));
            assert!(sim.snake().cells.iter().all(|&p| sim.grid().contains(p)));
        }
    }

    #[test]
    fn eat_score_food() {
        let mut sim = heading_right();
        place(&mut sim, 10, 10, FoodKind::Score);
        assert_eq!(
            sim.tick(),
            Tick::Moved {
                eaten: Some(FoodKind::Score),
                level_up: None
            }
        );
        assert_eq!(sim.snake().len(), 6);
        assert_eq!(sim.score(), 10);
        assert_eq!(sim.interval().get(), Duration::from_millis(450));
        assert!(sim.foods().is_empty());
    }

    #[test]
    fn score_food_at_min_speed() {
        let mut sim = heading_right();
        sim.interval = TickInterval::MIN;
        place(&mut sim, 10, 10, FoodKind::Score);
        let _ = sim.tick();
        assert_eq!(sim.interval(), TickInterval::MIN);
    }

    #[rstest]
    #[case(FoodKind::SpeedUp, 5, 450)]
    #[case(FoodKind::SpeedDown, 5, 500)]
    #[case(FoodKind::LengthUp, 6, 500)]
    #[case(FoodKind::LengthDown, 5, 500)]
    fn eat_other_food(#[case] kind: FoodKind, #[case] len: usize, #[case] millis: u64) {
        let mut sim = heading_right();
        place(&mut sim, 10, 10, kind);
        let _ = sim.tick();
        assert_eq!(sim.snake().len(), len);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.interval().get(), Duration::from_millis(millis));
    }

    #[test]
    fn length_down_above_minimum() {
        let mut sim = heading_right();
        sim.snake = Snake::from_cells((3..=9).rev().map(|x| Position::new(x, 10)));
        place(&mut sim, 10, 10, FoodKind::LengthDown);
        let _ = sim.tick();
        assert_eq!(sim.snake().len(), 6);
    }

    #[test]
    fn only_food_under_head_is_eaten() {
        let mut sim = heading_right();
        place(&mut sim, 12, 10, FoodKind::Score);
        place(&mut sim, 10, 10, FoodKind::LengthUp);
        place(&mut sim, 10, 11, FoodKind::Score);
        let _ = sim.tick();
        assert_eq!(sim.foods().len(), 2);
        assert_eq!(sim.snake().len(), 6);
        assert_eq!(sim.score(), 0);
    }

    #[test]
    fn level_up() {
        let mut sim = heading_right();
        sim.score = 40;
        place(&mut sim, 10, 10, FoodKind::Score);
        assert_eq!(
            sim.tick(),
            Tick::Moved {
                eaten: Some(FoodKind::Score),
                level_up: Some(2)
            }
        );
        assert_eq!(sim.level(), 2);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.interval().get(), Duration::from_millis(400));
        assert_eq!(sim.phase(), Phase::LevelingUp);
        assert_eq!(sim.direction(), Direction::Right);
        assert!(!sim.foods().is_empty());
        assert!(sim.foods().iter().all(|f| !sim.snake().contains(f.position)));

        let head = sim.snake().head();
        assert_eq!(sim.tick(), Tick::Idle);
        assert_eq!(sim.snake().head(), head);
        sim.acknowledge_level_up();
        assert_eq!(sim.phase(), Phase::Playing);
        assert!(matches!(sim.tick(), Tick::Moved { .. }));
    }

    #[test]
    fn no_level_up_below_threshold() {
        let mut sim = heading_right();
        sim.score = 30;
        place(&mut sim, 10, 10, FoodKind::Score);
        let _ = sim.tick();
        assert_eq!(sim.level(), 1);
        assert_eq!(sim.score(), 40);
        assert_eq!(sim.phase(), Phase::Playing);
    }

    #[rstest]
    #[case(Position::new(0, 7), Direction::Left)]
    #[case(Position::new(19, 7), Direction::Right)]
    #[case(Position::new(7, 0), Direction::Up)]
    #[case(Position::new(7, 19), Direction::Down)]
    fn wall_crash_fires_once(#[case] head: Position, #[case] direction: Direction) {
        let mut sim = new_sim(20);
        sim.snake = Snake::from_cells([head]);
        sim.direction = direction;
        assert_eq!(sim.tick(), Tick::Crashed(Crash::Wall));
        assert_eq!(sim.phase(), Phase::GameOver);
        assert_eq!(sim.snake().head(), head);
        assert_eq!(sim.tick(), Tick::Idle);
        assert_eq!(sim.tick(), Tick::Idle);
    }

    #[test]
    fn self_crash() {
        let mut sim = new_sim(20);
        sim.snake = Snake::from_cells([
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
            Position::new(1, 2),
        ]);
        sim.direction = Direction::Down;
        sim.foods.clear();
        assert_eq!(sim.tick(), Tick::Crashed(Crash::Body));
        assert_eq!(sim.phase(), Phase::GameOver);
        assert_eq!(sim.tick(), Tick::Idle);
    }

    #[test]
    fn chasing_tail_is_not_a_crash() {
        let mut sim = new_sim(20);
        sim.snake = Snake::from_cells([
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(3, 3),
            Position::new(2, 3),
        ]);
        sim.direction = Direction::Down;
        sim.foods.clear();
        assert!(matches!(sim.tick(), Tick::Moved { .. }));
    }

    #[rstest]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    fn reverse_turn_rejected(#[case] heading: Direction) {
        let mut sim = new_sim(20);
        sim.direction = heading;
        assert!(!sim.request_turn(heading.reverse()));
        assert_eq!(sim.direction(), heading);
    }

    #[test]
    fn turns() {
        let mut sim = heading_right();
        assert!(sim.request_turn(Direction::Up));
        assert_eq!(sim.direction(), Direction::Up);
        // The snake hasn't moved yet, so going left would run into its neck.
        assert!(!sim.request_turn(Direction::Left));
        assert_eq!(sim.direction(), Direction::Up);
        let _ = sim.tick();
        assert!(sim.request_turn(Direction::Left));
        assert_eq!(sim.direction(), Direction::Left);
    }

    #[test]
    fn turn_while_paused() {
        let mut sim = heading_right();
        assert!(sim.toggle_pause());
        assert!(!sim.request_turn(Direction::Left));
        assert_eq!(sim.direction(), Direction::Right);
        assert!(sim.request_turn(Direction::Up));
        assert_eq!(sim.direction(), Direction::Up);
        assert_eq!(sim.tick(), Tick::Idle);
        assert_eq!(sim.snake().head(), Position::new(9, 10));
        assert!(!sim.toggle_pause());
        let _ = sim.tick();
        assert_eq!(sim.snake().head(), Position::new(9, 9));
    }

    #[test]
    fn pause_suspends_ticks() {
        let mut sim = heading_right();
        assert!(sim.toggle_pause());
        assert_eq!(sim.tick(), Tick::Idle);
        assert_eq!(sim.snake().head(), Position::new(9, 10));
        assert!(!sim.toggle_pause());
        let _ = sim.tick();
        assert_eq!(sim.snake().head(), Position::new(10, 10));
    }

    #[test]
    fn reset() {
        let mut sim = heading_right();
        sim.score = 30;
        sim.level = 3;
        sim.interval = TickInterval::MIN;
        let _ = sim.toggle_pause();
        sim.reset();
        let fresh = new_sim(20);
        assert_eq!(sim.snake(), fresh.snake());
        assert_eq!(sim.direction(), fresh.direction());
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.level(), 1);
        assert!(!sim.paused());
        assert_eq!(sim.phase(), Phase::Playing);
        assert_eq!(sim.interval(), TickInterval::initial());
        assert!(!sim.foods().is_empty());
    }

    #[test]
    fn interval_stays_bounded() {
        let mut sim = heading_right();
        for kind in [FoodKind::SpeedDown; 4]
            .into_iter()
            .chain([FoodKind::Score; 4])
            .chain([FoodKind::SpeedUp; 8])
        {
            sim.snake = Snake::from_cells([Position::new(9, 10)]);
            sim.direction = Direction::Right;
            sim.score = 0;
            place(&mut sim, 10, 10, kind);
            let _ = sim.tick();
            assert!(
                (TickInterval::MIN..=TickInterval::MAX).contains(&sim.interval()),
                "{:?}",
                sim.interval()
            );
        }
        assert_eq!(sim.interval(), TickInterval::MIN);
    }
}
