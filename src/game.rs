use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{ApplePlacement, GameConfig};
use crate::grid::Grid;
use crate::snake::{Direction, MoveResult, Snake};
use crate::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The snake ran into itself and restarted from the centre.
    SelfCollision,
    AppleEaten,
}

/// Everything the renderer needs from one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub event: Option<TickEvent>,
    pub head: Coords,
    /// Absent after a reset, where there is no previous head to repaint.
    pub old_head: Option<Coords>,
    /// Head first.
    pub body: Vec<Coords>,
    /// Tail cell given up by this move.
    pub vacated: Option<Coords>,
    pub apple: Coords,
    pub direction: Direction,
}

impl TickResult {
    pub fn collided(&self) -> bool {
        self.event == Some(TickEvent::SelfCollision)
    }

    pub fn ate_apple(&self) -> bool {
        self.event == Some(TickEvent::AppleEaten)
    }
}

/// Snake, apple and board for one session. Randomness comes only from `rng`.
pub struct GameState<R> {
    config: GameConfig,
    snake: Snake,
    apple: Coords,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let snake = Snake::new(config.grid.center(), Direction::Right);
        let apple = sample_apple(&config, &snake, &mut rng);

        info!(
            "New game on a {}x{} grid, apple at {:?} ({:?})",
            config.grid.width(),
            config.grid.height(),
            apple,
            config.apple_placement
        );

        GameState { config, snake, apple, rng }
    }

    /// Starts from a prepared board.
    pub fn from_parts(config: GameConfig, rng: R, snake: Snake, apple: Coords) -> Self {
        assert!(config.grid.contains(apple), "apple {:?} is off the grid", apple);
        assert!(
            snake.body().iter().all(|pos| config.grid.contains(*pos)),
            "snake leaves the grid"
        );

        GameState { config, snake, apple, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.config.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn body(&self) -> &[Coords] {
        self.snake.body()
    }

    pub fn head(&self) -> Coords {
        self.snake.head()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn desired_len(&self) -> usize {
        self.snake.desired_len()
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    /// Requests a turn for the next tick. Reversals are dropped silently.
    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    pub fn tick(&mut self) -> TickResult {
        self.snake.apply_pending();

        match self.snake.move_step(&self.config.grid) {
            MoveResult::Crashed { at } => {
                let len = self.snake.len();
                let direction = *Direction::ALL.choose(&mut self.rng).unwrap_or(&Direction::Right);
                self.snake.reset(self.config.grid.center(), direction);

                info!("Snake of length {} hit itself at {:?}, restarting {:?}", len, at, direction);
                self.result(Some(TickEvent::SelfCollision), None, None)
            }
            MoveResult::Moved { new_head, old_head, vacated } => {
                let mut event = None;

                if new_head == self.apple {
                    self.snake.grow();
                    self.apple = sample_apple(&self.config, &self.snake, &mut self.rng);
                    event = Some(TickEvent::AppleEaten);

                    debug!(
                        "Apple eaten at {:?}, length {} -> {}, next apple at {:?}",
                        new_head,
                        self.snake.len(),
                        self.snake.desired_len(),
                        self.apple
                    );
                }

                trace!("Head {:?} -> {:?}, vacated {:?}", old_head, new_head, vacated);
                self.result(event, Some(old_head), vacated)
            }
        }
    }

    fn result(&self, event: Option<TickEvent>, old_head: Option<Coords>, vacated: Option<Coords>) -> TickResult {
        TickResult {
            event,
            head: self.snake.head(),
            old_head,
            body: self.snake.body().to_vec(),
            vacated,
            apple: self.apple,
            direction: self.snake.direction(),
        }
    }
}

fn sample_apple<R: Rng>(config: &GameConfig, snake: &Snake, rng: &mut R) -> Coords {
    let grid = config.grid;

    if config.apple_placement == ApplePlacement::AvoidSnake {
        let free: Vec<Coords> = grid.cells().filter(|pos| !snake.occupies(*pos)).collect();
        if let Some(pos) = free.choose(rng) {
            return *pos;
        }
    }

    (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    // Always yields zero: picks Up and the first candidate cell
    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn game_with(snake: Snake, apple: Coords) -> GameState<StepRng> {
        GameState::from_parts(GameConfig::default(), zero_rng(), snake, apple)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(GameConfig::default(), zero_rng());
        assert_eq!(game.body(), &[(16, 12)]);
        assert_eq!(game.direction(), Right);
        assert_eq!(game.desired_len(), 1);
        assert_eq!(game.apple(), (0, 0));
    }

    #[test]
    fn test_straight_move() {
        let mut game = game_with(Snake::from_segments(vec![(5, 5), (4, 5), (3, 5)], Right), (0, 0));
        let res = game.tick();

        assert_eq!(res.event, None);
        assert_eq!(res.head, (6, 5));
        assert_eq!(res.old_head, Some((5, 5)));
        assert_eq!(res.vacated, Some((3, 5)));
        assert_eq!(game.body(), &[(6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn test_wraps_around_edges() {
        let cases = [
            ((31, 4), Right, (0, 4)),
            ((0, 4), Left, (31, 4)),
            ((8, 0), Up, (8, 23)),
            ((8, 23), Down, (8, 0)),
        ];

        for (start, dir, expected) in cases.iter() {
            let mut game = game_with(Snake::new(*start, *dir), (20, 20));
            let res = game.tick();
            assert_eq!(res.head, *expected);
            assert!(game.grid().contains(res.head));
        }
    }

    #[test]
    fn test_reversal_ignored() {
        let mut game = game_with(Snake::from_segments(vec![(5, 5), (4, 5)], Right), (0, 0));
        game.set_desired_direction(Left);
        game.tick();

        assert_eq!(game.direction(), Right);
        assert_eq!(game.head(), (6, 5));
    }

    #[test]
    fn test_turn_applied_on_tick() {
        let mut game = game_with(Snake::new((5, 5), Right), (0, 0));
        game.set_desired_direction(Down);
        assert_eq!(game.direction(), Right);

        game.tick();
        assert_eq!(game.direction(), Down);
        assert_eq!(game.head(), (5, 6));
        assert_eq!(game.snake().pending_direction(), None);
    }

    #[test]
    fn test_last_request_wins() {
        let mut game = game_with(Snake::new((5, 5), Right), (0, 0));
        game.set_desired_direction(Up);
        game.set_desired_direction(Down);
        game.tick();

        assert_eq!(game.head(), (5, 6));
    }

    #[test]
    fn test_growth_shows_up_next_tick() {
        let mut game = game_with(Snake::from_segments(vec![(5, 5), (4, 5)], Right), (6, 5));

        let res = game.tick();
        assert!(res.ate_apple());
        assert_eq!(game.desired_len(), 3);
        assert_eq!(game.body().len(), 2);
        assert_eq!(res.vacated, Some((4, 5)));

        let res = game.tick();
        assert_eq!(res.event, None);
        assert_eq!(res.vacated, None);
        assert_eq!(game.body(), &[(7, 5), (6, 5), (5, 5)]);

        let res = game.tick();
        assert_eq!(res.vacated, Some((5, 5)));
        assert_eq!(game.body().len(), 3);
    }

    #[test]
    fn test_self_collision_resets() {
        let body = vec![(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)];
        let mut game = game_with(Snake::from_segments(body, Left), (20, 20));
        game.set_desired_direction(Down);

        let res = game.tick();
        assert!(res.collided());
        assert_eq!(res.body, vec![(16, 12)]);
        assert_eq!(res.old_head, None);
        assert_eq!(res.vacated, None);
        assert_eq!(game.body(), &[(16, 12)]);
        assert_eq!(game.desired_len(), 1);
        assert_eq!(game.direction(), Up);
        assert_eq!(game.apple(), (20, 20));
    }

    #[test]
    fn test_tail_cell_counts_as_collision() {
        let body = vec![(5, 5), (6, 5), (6, 6), (5, 6)];
        let mut game = game_with(Snake::from_segments(body, Left), (20, 20));
        game.set_desired_direction(Down);

        assert!(game.tick().collided());
        assert_eq!(game.body().len(), 1);
    }

    #[test]
    fn test_reset_does_not_eat_apple_at_center() {
        let body = vec![(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)];
        let mut game = game_with(Snake::from_segments(body, Left), (16, 12));
        game.set_desired_direction(Down);

        let res = game.tick();
        assert_eq!(res.event, Some(TickEvent::SelfCollision));
        assert_eq!(game.apple(), (16, 12));
        assert_eq!(game.desired_len(), 1);
    }

    #[test]
    fn test_apple_avoids_snake() {
        // Zero rng would pick (0, 0) if it were free
        let snake = Snake::from_segments(vec![(1, 0), (2, 0)], Left);
        let mut game = game_with(snake, (0, 0));

        assert!(game.tick().ate_apple());
        assert_eq!(game.body(), &[(0, 0), (1, 0)]);
        assert_eq!(game.apple(), (2, 0));

        let config = GameConfig::new(3, 1);
        let snake = Snake::from_segments(vec![(1, 0), (0, 0)], Right);
        let mut game = GameState::from_parts(config, zero_rng(), snake, (2, 0));
        game.tick();
        assert!(!game.body().contains(&game.apple()));
    }

    #[test]
    fn test_apple_anywhere_may_land_on_snake() {
        let config = GameConfig::default().with_apple_placement(ApplePlacement::Anywhere);
        let snake = Snake::new((31, 0), Right);
        let mut game = GameState::from_parts(config, zero_rng(), snake, (0, 0));

        let res = game.tick();
        assert!(res.ate_apple());
        assert_eq!(res.head, (0, 0));
        assert_eq!(res.apple, (0, 0));
    }

    #[test]
    fn test_apple_on_full_board_falls_back() {
        let config = GameConfig::new(2, 1);
        let snake = Snake::from_segments(vec![(0, 0)], Right);
        let mut game = GameState::from_parts(config, zero_rng(), snake, (1, 0));

        // Desired length 2 on a 2 cell board, no free cell left after growing
        assert!(game.tick().ate_apple());
        game.tick();
        assert_eq!(game.body().len(), 2);
        assert!(game.grid().contains(game.apple()));
    }

    #[test]
    fn test_accessors_are_stable() {
        let mut game = GameState::new(GameConfig::default(), Pcg32::seed_from_u64(7));
        game.tick();

        let (body, apple) = (game.body().to_vec(), game.apple());
        assert_eq!(game.body(), &body[..]);
        assert_eq!(game.body(), &body[..]);
        assert_eq!(game.apple(), apple);
        assert_eq!(game.apple(), apple);
    }

    proptest! {
        #[test]
        fn short_snake_never_collides(seed in any::<u64>(), turns in prop::collection::vec(0usize..4, 1..200)) {
            let mut game = GameState::new(GameConfig::new(4, 4), Pcg32::seed_from_u64(seed));

            for turn in turns {
                let len = game.body().len();
                game.set_desired_direction(Direction::ALL[turn]);
                let res = game.tick();
                if len <= 2 {
                    prop_assert!(!res.collided());
                }
            }
        }

        #[test]
        fn apple_never_spawns_on_body(seed in any::<u64>(), turns in prop::collection::vec(0usize..4, 1..300)) {
            let mut game = GameState::new(GameConfig::new(6, 5), Pcg32::seed_from_u64(seed));

            for turn in turns {
                game.set_desired_direction(Direction::ALL[turn]);
                let res = game.tick();
                if res.ate_apple() && res.body.len() < game.grid().cell_count() {
                    prop_assert!(!res.body.contains(&res.apple));
                }
            }
        }
    }
}
