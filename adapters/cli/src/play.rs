//! Line-oriented play loop over stdin and stdout.
//!
//! The loop owns its own wall clock and feeds the elapsed real time to the
//! world as `Tick` commands before every input it processes.

use std::{
    io::{BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use maze_game_core::{Command, Direction, Event, MoveRejection};
use maze_game_world::{self as world, query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;

const HELP: &str = "commands: up/down/left/right (w/a/s/d, k/j/h/l), new, quit";

/// Single line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// Take one step.
    Step(Direction),
    /// Throw the current maze away and start on a fresh one.
    NewMaze,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses a trimmed, case-insensitive input line.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let input = match line.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Self::Step(Direction::Up),
            "down" | "s" | "j" => Self::Step(Direction::Down),
            "left" | "a" | "h" => Self::Step(Direction::Left),
            "right" | "d" | "l" => Self::Step(Direction::Right),
            "new" | "n" => Self::NewMaze,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(input)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs an interactive session until `quit` or end of input.
pub(crate) fn run<R, W>(config: &GameConfig, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let seed = config.seed_or_random();
    let world = World::new(config.size(), seed).context("failed to generate maze")?;
    let mut session = PlaySession::new(world, seed);

    session.greet(&mut output)?;
    for line in input.lines() {
        let line = line.context("failed to read player input")?;
        if line.trim().is_empty() {
            continue;
        }

        if session.handle_line(&line, &mut output)? == Flow::Quit {
            break;
        }
    }

    output.flush().context("failed to flush output")
}

struct PlaySession {
    world: World,
    seeds: ChaCha8Rng,
    last_tick: Instant,
}

impl PlaySession {
    fn new(world: World, seed: u64) -> Self {
        Self {
            world,
            seeds: ChaCha8Rng::seed_from_u64(seed),
            last_tick: Instant::now(),
        }
    }

    fn greet<W: Write>(&self, output: &mut W) -> Result<()> {
        let maze = query::maze(&self.world);
        writeln!(
            output,
            "{} maze (seed {}); you are at {}, the goal is at {}",
            maze.size(),
            query::seed(&self.world),
            query::player(&self.world),
            query::goal(&self.world),
        )?;
        writeln!(output, "{HELP}")?;
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let Some(input) = Input::parse(line) else {
            writeln!(output, "unrecognised input '{}'; {HELP}", line.trim())?;
            return Ok(Flow::Continue);
        };

        let command = match input {
            Input::Quit => return Ok(Flow::Quit),
            Input::Step(direction) => Command::MovePlayer { direction },
            Input::NewMaze => Command::ResetMaze {
                seed: self.seeds.gen(),
            },
        };

        let mut events = Vec::new();
        self.tick(&mut events);
        world::apply(&mut self.world, command, &mut events);

        for event in &events {
            self.describe(event, output)?;
        }
        Ok(Flow::Continue)
    }

    fn tick(&mut self, events: &mut Vec<Event>) {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        world::apply(&mut self.world, Command::Tick { dt }, events);
    }

    fn describe<W: Write>(&self, event: &Event, output: &mut W) -> Result<()> {
        match event {
            Event::TimeAdvanced { .. } => {}
            Event::PlayerMoved { to, .. } => writeln!(output, "moved to {to}")?,
            Event::MoveRejected {
                direction, reason, ..
            } => writeln!(
                output,
                "cannot move {}: {}",
                direction_name(*direction),
                rejection_text(*reason)
            )?,
            Event::GoalReached { elapsed, moves } => writeln!(
                output,
                "goal reached in {:.2} seconds after {moves} moves; type 'new' for another maze or 'quit' to exit",
                elapsed.as_secs_f64()
            )?,
            Event::MazeGenerated { size, seed } => writeln!(
                output,
                "new {size} maze (seed {seed}); you are at {}, the goal is at {}",
                query::player(&self.world),
                query::goal(&self.world),
            )?,
            Event::ResetRejected { reason, .. } => {
                writeln!(output, "could not generate a new maze: {reason}")?;
            }
        }
        Ok(())
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up",
        Direction::Right => "right",
        Direction::Down => "down",
        Direction::Left => "left",
    }
}

fn rejection_text(reason: MoveRejection) -> &'static str {
    match reason {
        MoveRejection::OutOfBounds => "that is the edge of the maze",
        MoveRejection::NotAdjacent => "that is not a single step",
        MoveRejection::Blocked => "a wall is in the way",
        MoveRejection::SessionFinished => "the maze is already solved",
    }
}
