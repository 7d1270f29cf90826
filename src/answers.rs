//! Known answers, read from a TOML file keyed by input file stem:
//!
//! ```toml
//! [day7test1]
//! part1 = 3749
//! part2 = 11387
//!
//! [day17]
//! part1 = "7,6,1,5,3,1,4,2,6"
//! ```

use crate::Error;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expected {
    pub part1: Option<Answer>,
    pub part2: Option<Answer>,
}

impl Expected {
    pub fn part(&self, part: u8) -> Option<&Answer> {
        match part {
            1 => self.part1.as_ref(),
            2 => self.part2.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    Correct,
    Unchecked,
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Expected>);

impl Answers {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path`; a missing file means there is nothing to check against.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no answers file");
                return Ok(Answers::default());
            }
            Err(source) => return Err(Error::ReadAnswers { path: path.to_owned(), source }),
        };
        Self::parse(&text).map_err(|source| Error::ParseAnswers { path: path.to_owned(), source })
    }

    pub fn expected(&self, input: &str, part: u8) -> Option<&Answer> {
        self.0.get(input).and_then(|expected| expected.part(part))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expected)> {
        self.0.iter().map(|(input, expected)| (input.as_str(), expected))
    }

    pub fn check(&self, input: &str, part: u8, actual: &str) -> Result<Verdict, Error> {
        match self.expected(input, part) {
            None => Ok(Verdict::Unchecked),
            Some(expected) if expected.to_string() == actual => Ok(Verdict::Correct),
            Some(expected) => Err(Error::WrongAnswer {
                input: input.to_owned(),
                part,
                actual: actual.to_owned(),
                expected: expected.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWERS: &str = r#"
        [day1test1]
        part1 = 11
        part2 = 31

        [day23test1]
        part2 = "co,de,ka,ta"
    "#;

    #[test]
    fn numbers_and_strings_compare_as_text() {
        let answers = Answers::parse(ANSWERS).unwrap();
        assert_eq!(answers.check("day1test1", 1, "11").unwrap(), Verdict::Correct);
        assert_eq!(answers.check("day23test1", 2, "co,de,ka,ta").unwrap(), Verdict::Correct);
        assert_eq!(answers.check("day23test1", 1, "7").unwrap(), Verdict::Unchecked);
        assert_eq!(answers.check("day9", 1, "1928").unwrap(), Verdict::Unchecked);
    }

    #[test]
    fn mismatch_is_an_error() {
        let answers = Answers::parse(ANSWERS).unwrap();
        let err = answers.check("day1test1", 2, "30").unwrap_err();
        assert_eq!(err.to_string(), "day1test1 part 2: got 30, expected 31");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Answers::parse("[day1]\npart3 = 1\n").is_err());
    }

    #[test]
    fn missing_file_checks_nothing() {
        let answers = Answers::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(answers.iter().count(), 0);
    }
}
