use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("there is no day {0}")]
    UnknownDay(usize),

    #[error("day {day} has no part {part}")]
    UnknownPart { day: usize, part: u8 },

    #[error("day {day} part {part}: {cause:#}")]
    Solve { day: usize, part: u8, cause: anyhow::Error },

    #[error("{input} part {part}: got {actual}, expected {expected}")]
    WrongAnswer { input: String, part: u8, actual: String, expected: String },

    #[error("cannot read answers from {}", .path.display())]
    ReadAnswers {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed answers file {}", .path.display())]
    ParseAnswers {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
