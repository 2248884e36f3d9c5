use grid_snake::engine::{GameState, RandomSource, Status};
use grid_snake::grid::{Cell, Direction};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Replays a fixed sequence of unit values, then repeats zero.
struct ScriptedRandom(Vec<f64>);

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.0.is_empty() { 0.0 } else { self.0.remove(0) }
    }
}

fn state_with_food(food: Cell) -> GameState {
    GameState {
        snake: vec![
            Cell { x: 8, y: 10 },
            Cell { x: 7, y: 10 },
            Cell { x: 6, y: 10 },
        ],
        direction: Direction::Right,
        pending_direction: Direction::Right,
        food: Some(food),
        score: 0,
        status: Status::Running,
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut rng = ScriptedRandom(vec![0.0]);
    let mut state = state_with_food(Cell { x: 9, y: 10 });

    // Eat straight ahead: grow to four segments and respawn food at the
    // first free cell in row-major order.
    state = state.tick(&mut rng);
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake[0], Cell { x: 9, y: 10 });
    assert_eq!(state.food, Some(Cell { x: 0, y: 0 }));

    // A reversal request is dropped; the snake keeps moving right.
    state = state.queue_direction(Direction::Left);
    state = state.tick(&mut rng);
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.snake[0], Cell { x: 10, y: 10 });
    assert_eq!(state.direction, Direction::Right);

    // Turn up and drive into the top wall.
    state = state.queue_direction(Direction::Up);
    for _ in 0..10 {
        state = state.tick(&mut rng);
    }
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.snake[0], Cell { x: 10, y: 0 });

    let before_crash = state.clone();
    state = state.tick(&mut rng);
    assert_eq!(state.status, Status::Ended);
    assert_eq!(state.snake, before_crash.snake);
    assert_eq!(state.score, before_crash.score);

    // Ended is terminal: further ticks and pause requests change nothing.
    assert_eq!(state.tick(&mut rng), state);
    assert_eq!(state.toggle_pause(), state);

    // Only a restart recovers.
    let restarted = GameState::restart(&mut ScriptedRandom(vec![0.0]));
    assert_eq!(restarted.status, Status::Running);
    assert_eq!(restarted.score, 0);
    assert_eq!(restarted.snake.len(), 3);
}

#[test]
fn pause_freezes_the_simulation_but_keeps_queued_input() {
    let mut rng = ScriptedRandom(vec![]);
    let mut state = state_with_food(Cell { x: 0, y: 0 });

    state = state.toggle_pause();
    assert_eq!(state.status, Status::Paused);

    let frozen = state.clone();
    state = state.tick(&mut rng);
    assert_eq!(state, frozen);

    // Input queued during the pause applies on the first tick after resume.
    state = state.queue_direction(Direction::Down);
    state = state.toggle_pause();
    state = state.tick(&mut rng);

    assert_eq!(state.status, Status::Running);
    assert_eq!(state.snake[0], Cell { x: 8, y: 11 });
    assert_eq!(state.direction, Direction::Down);
}

#[test]
fn seeded_runs_replay_identically() {
    let inputs = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);
        for direction in inputs {
            state = state.queue_direction(direction);
            state = state.tick(&mut rng);
            state = state.tick(&mut rng);
        }
        state
    };

    let first = run(1234);
    let second = run(1234);

    assert_eq!(first, second);
    for segment in &first.snake {
        assert!(segment.is_within_bounds());
    }
}
