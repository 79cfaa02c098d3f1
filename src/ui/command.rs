use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, map, map_res, value};
use nom::sequence::separated_pair;
use nom::IResult;

use crate::cmds::Cmd;
use crate::error::{Error, Result};

pub const HELP_TEXT: &str = "\
commands:
  open PATH      o   navigate to a path (/, /index.html, /articles/...)
  day N          d   open the holiday article shown on day N
  next / prev    n p step the displayed month
  back / forward b f move through the session history
  lang CODE      l   switch the active language
  country CODE   c   switch the active country
  help           h   show this text
  quit           q   leave";

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

fn open(input: &str) -> IResult<&str, Cmd> {
    map(
        separated_pair(alt((tag("open"), tag("o"))), space1, token),
        |(_, path): (&str, &str)| Cmd::Open(path.to_owned()),
    )(input)
}

fn open_day(input: &str) -> IResult<&str, Cmd> {
    map_res(
        separated_pair(alt((tag("day"), tag("d"))), space1, digit1),
        |(_, digits): (&str, &str)| digits.parse::<u32>().map(Cmd::OpenDay),
    )(input)
}

fn language(input: &str) -> IResult<&str, Cmd> {
    map(
        separated_pair(alt((tag("lang"), tag("l"))), space1, token),
        |(_, code): (&str, &str)| Cmd::ChangeLanguage(code.to_owned()),
    )(input)
}

fn country(input: &str) -> IResult<&str, Cmd> {
    map(
        separated_pair(alt((tag("country"), tag("c"))), space1, token),
        |(_, code): (&str, &str)| Cmd::ChangeCountry(code.to_owned()),
    )(input)
}

fn bare(input: &str) -> IResult<&str, Cmd> {
    alt((
        value(Cmd::NextMonth, alt((tag("next"), tag("n")))),
        value(Cmd::PrevMonth, alt((tag("prev"), tag("p")))),
        value(Cmd::Back, alt((tag("back"), tag("b")))),
        value(Cmd::Forward, alt((tag("forward"), tag("f")))),
        value(Cmd::Help, alt((tag("help"), tag("h")))),
        value(Cmd::Exit, alt((tag("quit"), tag("q")))),
    ))(input)
}

/// Parses one input line into a [`Cmd`]. Blank lines are a no-op.
pub fn parse(line: &str) -> Result<Cmd> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Cmd::Noop);
    }

    match all_consuming(alt((open_day, open, language, country, bare)))(line) {
        Ok((_, cmd)) => Ok(cmd),
        Err(err) => {
            Err(Error::from(err).with_msg(&format!("unrecognized command '{}'", line)))
        }
    }
}
