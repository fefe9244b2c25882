//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_snake::term`.
//! Simulation ticks are driven by the fixed-timestep scheduler, one render per frame.

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{FrameHandler, Game, GameConfig, GameSnapshot, MonotonicClock, Scheduler};
use tui_snake::input::{handle_key_event, should_quit, DirectionInput};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Environment variable naming the log file. Unset means no logging.
const LOG_ENV: &str = "TUI_SNAKE_LOG";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    config.validate()?;
    init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args(args: &[String]) -> Result<GameConfig> {
    let mut config = GameConfig::default().with_seed(wall_clock_seed());
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag));
        match flag {
            "--cols" => config.cols = parse_num(flag, value?)?,
            "--rows" => config.rows = parse_num(flag, value?)?,
            "--tick-ms" => config.tick_ms = parse_num(flag, value?)?,
            "--seed" => config.seed = parse_num(flag, value?)?,
            "--max-catch-up" => config.max_ticks_per_frame = Some(parse_num(flag, value?)?),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

fn parse_num<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).map_err(|e| anyhow!("cannot open log file {}: {}", path, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Ties one frame's ticks and render to the game and terminal.
struct Frame<'a> {
    game: &'a mut Game<DirectionInput>,
    view: &'a GameView,
    term: &'a mut TerminalRenderer,
    snapshot: &'a mut GameSnapshot,
    fb: &'a mut FrameBuffer,
    error: Option<anyhow::Error>,
}

impl FrameHandler for Frame<'_> {
    fn update(&mut self) {
        self.game.update();
    }

    fn render(&mut self) {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.game.snapshot_into(self.snapshot);
        self.view.render_into(self.snapshot, Viewport::new(w, h), self.fb);
        if let Err(e) = self.term.draw_swap(self.fb) {
            self.error = Some(e);
        }
    }
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config, DirectionInput::new())?;
    let mut scheduler = Scheduler::from_config(MonotonicClock::default(), &config)?;
    let view = GameView::default();
    let mut snapshot = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    info!(
        cols = config.cols,
        rows = config.rows,
        tick_ms = config.tick_ms,
        seed = config.seed,
        "tui-snake starting"
    );

    scheduler.start();
    loop {
        // Wait for input until the next frame is due.
        let timeout = scheduler
            .clock()
            .time_until_frame()
            .unwrap_or_else(|| scheduler.clock().frame_interval());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(run_id = game.run_id(), "quit");
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        game.input_mut().handle_command(cmd);
                    }
                    game.poll_start();
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let Some(now_ms) = scheduler.clock_mut().take_due_frame() else {
            continue;
        };
        let mut frame = Frame {
            game: &mut game,
            view: &view,
            term: &mut *term,
            snapshot: &mut snapshot,
            fb: &mut fb,
            error: None,
        };
        scheduler.on_signal(now_ms, &mut frame);
        if let Some(e) = frame.error {
            return Err(e);
        }
    }
}
