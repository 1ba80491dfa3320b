use crate::error::Error;

use std::convert::TryFrom;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Orientation {
    North,
    East,
    South,
    West,
}

// Clockwise order.
const ORDER: [Orientation; 4] = [
    Orientation::North,
    Orientation::East,
    Orientation::South,
    Orientation::West,
];

impl Orientation {
    fn index(self) -> usize {
        use Orientation::*;
        match self {
            North => 0,
            East => 1,
            South => 2,
            West => 3,
        }
    }

    pub(crate) fn clockwise(self) -> Self {
        ORDER[(self.index() + 1) % ORDER.len()]
    }

    pub(crate) fn counter_clockwise(self) -> Self {
        ORDER[(self.index() + ORDER.len() - 1) % ORDER.len()]
    }

    /// Unit step taken by a forward move, as `(dx, dy)`.
    pub(crate) fn delta(self) -> (i64, i64) {
        use Orientation::*;
        match self {
            North => (0, 1),
            East => (1, 0),
            South => (0, -1),
            West => (-1, 0),
        }
    }

    pub(crate) fn letter(self) -> char {
        use Orientation::*;
        match self {
            North => 'N',
            East => 'E',
            South => 'S',
            West => 'W',
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        use Orientation::*;
        match c {
            'N' => Ok(North),
            'E' => Ok(East),
            'S' => Ok(South),
            'W' => Ok(West),
            _ => Err(Error::InvalidOrientation(c)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::*;

    #[test]
    fn turn_right() {
        assert_eq!(North.clockwise(), East);
        assert_eq!(East.clockwise(), South);
        assert_eq!(South.clockwise(), West);
        assert_eq!(West.clockwise(), North);
    }

    #[test]
    fn turn_left() {
        assert_eq!(North.counter_clockwise(), West);
        assert_eq!(West.counter_clockwise(), South);
        assert_eq!(South.counter_clockwise(), East);
        assert_eq!(East.counter_clockwise(), North);
    }

    #[test]
    fn four_turns_is_identity() {
        for o in &ORDER {
            let mut right = *o;
            let mut left = *o;
            for _ in 0..4 {
                right = right.clockwise();
                left = left.counter_clockwise();
            }
            assert_eq!(right, *o);
            assert_eq!(left, *o);
            assert_eq!(o.clockwise().counter_clockwise(), *o);
        }
    }

    #[test]
    fn delta() {
        assert_eq!(North.delta(), (0, 1));
        assert_eq!(East.delta(), (1, 0));
        assert_eq!(South.delta(), (0, -1));
        assert_eq!(West.delta(), (-1, 0));
    }

    #[test]
    fn letters() {
        for o in &ORDER {
            assert_eq!(Orientation::try_from(o.letter()), Ok(*o));
        }
        assert_eq!(North.to_string(), "N");
        assert_eq!(
            Orientation::try_from('X'),
            Err(Error::InvalidOrientation('X'))
        );
        assert!(Orientation::try_from('n').is_err());
    }
}
