use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("couldn't open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {text:?} is too large")]
    NumberTooLarge { line: usize, text: String },

    #[error("calorie total overflowed")]
    Overflow,

    // Ranking needs the three largest block sums.
    #[error("need at least 3 blocks, found {blocks}")]
    InsufficientData { blocks: usize },
}
