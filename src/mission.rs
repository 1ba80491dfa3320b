use anyhow::{anyhow, Context, Result};

use crate::grid::{self, Grid};
use crate::parse;
use crate::rover;

fn simulate_line(line: &str, grid: Grid) -> Result<String> {
    let parsed = parse::parse_rover_line(line)?;
    let result = rover::simulate(parsed.start, &parsed.commands, grid)?;
    Ok(result.to_string())
}

/// Runs a whole input: the grid size line, then one rover per line. Results
/// come back in input order.
pub(crate) fn run<I, S>(lines: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bounds = None;
    let mut outputs = vec![];

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let lineno = i + 1;

        match bounds {
            None => {
                let g = grid::parse_grid_size(line)
                    .with_context(|| format!("line {}: invalid grid size", lineno))?;
                tracing::info!("grid {}x{}", g.width, g.height);
                bounds = Some(g);
            }
            Some(g) => {
                let output = simulate_line(line, g).map_err(|e| {
                    tracing::warn!("aborting at line {}: {}", lineno, e);
                    e.context(format!("line {}: invalid rover", lineno))
                })?;
                tracing::info!("{} => {}", line, output);
                outputs.push(output);
            }
        }
    }

    if bounds.is_none() {
        return Err(anyhow!("missing grid size line"));
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn runs_every_rover_in_order() {
        let input = "4 8\n(2, 3, N) FLLFR\n(1, 0, S) FFRLFR\n";
        assert_eq!(
            run(input.lines()).unwrap(),
            vec!["(2, 3, W)", "(1, 0, S) LOST"]
        );
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let lines = vec!["", "5 5  ", "  (1, 2, N) FFLR\r", "", "(0, 0, N) FFFFF", "\n"];
        assert_eq!(run(lines).unwrap(), vec!["(1, 4, N)", "(0, 4, N) LOST"]);
    }

    #[test]
    fn grid_without_rovers() {
        assert!(run(vec!["3 3"]).unwrap().is_empty());
    }

    #[test]
    fn missing_grid() {
        assert!(run(Vec::<String>::new()).is_err());
        assert!(run(vec!["", "  "]).is_err());
    }

    #[test]
    fn errors_name_the_line() {
        let err = run(vec!["5 5", "(1, 1, N) F", "(5, 0, N) F"]).unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid rover");
        assert!(matches!(
            err.root_cause().downcast_ref::<Error>(),
            Some(Error::OutOfBoundsStart { x: 5, y: 0, .. })
        ));

        let err = run(vec!["5 x"]).unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid grid size");
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Format(_))));

        assert!(run(vec!["5 5", "(1, 1, N) FX"]).is_err());
    }

    #[test]
    fn bad_command_letter_rejects_whole_line() {
        let err = run(vec!["5 5", "(0, 0, N) FFFFFZ"]).unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid rover");
        assert!(matches!(
            err.root_cause().downcast_ref::<Error>(),
            Some(Error::Format(_))
        ));
    }
}
