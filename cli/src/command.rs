use core::str::FromStr;

use anyhow::{Context, bail};
use mineboard_core::{Coord, Coord2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Chord(Coord2),
    Mark(Coord2),
    NewGame,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  o <col> <row>   open a cell
  c <col> <row>   open the neighbors of a satisfied number
  m <col> <row>   cycle flag / question mark
  n               new game
  h               this help
  q               quit";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "o" | "open" => Self::Reveal(parse_coords(&mut parts)?),
            "c" | "chord" => Self::Chord(parse_coords(&mut parts)?),
            "m" | "mark" => Self::Mark(parse_coords(&mut parts)?),
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" => Self::Quit,
            other => bail!("unknown command `{other}`"),
        };

        if let Some(extra) = parts.next() {
            bail!("unexpected argument `{extra}`");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(parts: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<Coord> {
        let value = parts.next().with_context(|| format!("missing {axis}"))?;
        value
            .parse()
            .with_context(|| format!("invalid {axis} `{value}`"))
    };
    Ok((next("column")?, next("row")?))
}
