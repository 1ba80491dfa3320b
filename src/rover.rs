use crate::command::Command;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::orientation::Orientation;

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct RoverState {
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) orientation: Orientation,
}

impl RoverState {
    pub(crate) fn new(x: i64, y: i64, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    fn forward(self) -> Self {
        let (dx, dy) = self.orientation.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn turn(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.orientation)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum RunResult {
    Position(RoverState),
    /// Last in-bounds position, facing the way the rover was when it fell off.
    Lost(RoverState),
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunResult::Position(state) => write!(f, "{}", state),
            RunResult::Lost(state) => write!(f, "{} LOST", state),
        }
    }
}

pub(crate) fn simulate(start: RoverState, commands: &[Command], grid: Grid) -> Result<RunResult> {
    if !grid.contains(start.x, start.y) {
        return Err(Error::OutOfBoundsStart {
            x: start.x,
            y: start.y,
            width: grid.width,
            height: grid.height,
        });
    }

    let mut state = start;
    for &command in commands {
        use Command::*;
        state = match command {
            TurnLeft => state.turn(state.orientation.counter_clockwise()),
            TurnRight => state.turn(state.orientation.clockwise()),
            Forward => {
                let next = state.forward();
                if !grid.contains(next.x, next.y) {
                    tracing::debug!("rover lost moving from {} to ({}, {})", state, next.x, next.y);
                    return Ok(RunResult::Lost(state));
                }
                next
            }
        };
        tracing::debug!("{} -> {}", command.letter(), state);
    }

    Ok(RunResult::Position(state))
}
