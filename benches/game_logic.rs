use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tui_snake::core::{Food, Game, GameConfig, GameSnapshot, Snake};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GridVector};

fn bench_snake_step(c: &mut Criterion) {
    let mut snake = Snake::new(GridVector::new(10, 10), 200);

    c.bench_function("snake_step", |b| {
        b.iter(|| {
            if snake.head().x > 10_000 {
                snake.reset(GridVector::new(10, 10), 200);
            }
            snake.step();
            black_box(snake.check_self_collision());
        })
    });
}

fn bench_food_respawn_crowded(c: &mut Criterion) {
    // All but one cell of a 20x20 board is occupied.
    let free = GridVector::new(13, 7);
    let taken: Vec<GridVector> = (0..20)
        .flat_map(|y| (0..20).map(move |x| GridVector::new(x, y)))
        .filter(|p| *p != free)
        .collect();
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut food = Food::new(GridVector::ZERO);

    c.bench_function("food_respawn_crowded", |b| {
        b.iter(|| {
            black_box(food.respawn(&mut rng, 20, 20, &taken));
        })
    });
}

fn bench_game_update(c: &mut Criterion) {
    let config = GameConfig::default().with_board(200, 200).with_seed(12345);

    c.bench_function("game_update", |b| {
        let mut game = Game::new(config, Direction::Right).unwrap();
        game.request_start();
        b.iter(|| {
            if !game.state().is_running() {
                game.request_start();
            }
            black_box(game.update());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), Direction::Right).unwrap();
    game.request_start();
    let view = GameView::default();
    let mut snap: GameSnapshot = game.snapshot();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_snake_step,
    bench_food_respawn_crowded,
    bench_game_update,
    bench_render
);
criterion_main!(benches);
