use nom::{
    bytes::complete::tag,
    character::complete::{anychar, char, digit1},
    combinator::{all_consuming, map, map_res},
    multi::many1,
    sequence::{delimited, separated_pair, terminated, tuple},
    Finish, IResult,
};

use std::convert::TryFrom;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::orientation::Orientation;
use crate::rover::RoverState;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RoverLine {
    pub(crate) start: RoverState,
    pub(crate) commands: Vec<Command>,
}

fn coordinate(input: &str) -> IResult<&str, i64> {
    map_res(digit1, |n: &str| n.parse::<i64>())(input)
}

fn orientation(input: &str) -> IResult<&str, Orientation> {
    map_res(anychar, Orientation::try_from)(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    map_res(anychar, Command::try_from)(input)
}

fn start(input: &str) -> IResult<&str, RoverState> {
    map(
        delimited(
            char('('),
            tuple((
                terminated(coordinate, tag(", ")),
                terminated(coordinate, tag(", ")),
                orientation,
            )),
            char(')'),
        ),
        |(x, y, o)| RoverState::new(x, y, o),
    )(input)
}

fn rover_line(input: &str) -> IResult<&str, RoverLine> {
    map(
        separated_pair(start, char(' '), many1(command)),
        |(start, commands)| RoverLine { start, commands },
    )(input)
}

/// Parses `(x, y, O) CMDS`. The whole line has to match, spacing included.
pub(crate) fn parse_rover_line(line: &str) -> Result<RoverLine> {
    all_consuming(rover_line)(line)
        .finish()
        .map(|(_, r)| r)
        .map_err(|e| {
            Error::Format(format!(
                "expected `(x, y, O) COMMANDS`, got `{}` (failed at `{}`)",
                line, e.input
            ))
        })
}
