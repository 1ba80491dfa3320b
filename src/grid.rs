use nom::{
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, verify},
    sequence::{delimited, separated_pair},
    Finish, IResult,
};

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Grid {
    pub(crate) fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }
}

fn dimension(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, |n: &str| n.parse::<u32>()), |n: &u32| *n >= 1)(input)
}

fn grid(input: &str) -> IResult<&str, Grid> {
    map(
        delimited(
            multispace0,
            separated_pair(dimension, multispace1, dimension),
            multispace0,
        ),
        |(width, height)| Grid { width, height },
    )(input)
}

/// Parses the first input line, `width height`.
pub(crate) fn parse_grid_size(line: &str) -> Result<Grid> {
    all_consuming(grid)(line)
        .finish()
        .map(|(_, g)| g)
        .map_err(|e| {
            Error::Format(format!(
                "expected two positive integers, e.g. `4 8`, got `{}` (failed at `{}`)",
                line.trim(),
                e.input
            ))
        })
}
