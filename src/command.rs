use crate::error::Error;

use std::convert::TryFrom;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub(crate) fn letter(self) -> char {
        use Command::*;
        match self {
            Forward => 'F',
            TurnLeft => 'L',
            TurnRight => 'R',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        use Command::*;
        match c {
            'F' => Ok(Forward),
            'L' => Ok(TurnLeft),
            'R' => Ok(TurnRight),
            _ => Err(Error::InvalidCommand(c)),
        }
    }
}
