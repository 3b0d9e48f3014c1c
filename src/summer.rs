use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use crate::parser::{classify_line, Line};
use crate::Error;

#[derive(Default)]
struct State {
    sums: Vec<u64>,
    acc: u64,
}

impl State {
    fn add(self, n: u64) -> Result<State, Error> {
        let State { sums, acc } = self;
        let acc = acc.checked_add(n).ok_or(Error::Overflow)?;
        Ok(State { sums, acc })
    }

    fn next(self) -> State {
        let State { mut sums, acc } = self;
        debug!("block {} sums to {}", sums.len(), acc);
        sums.push(acc);
        State { sums, acc: 0 }
    }

    // The trailing block is pushed even when the input ended on a delimiter,
    // which leaves an extra zero in that case.
    fn finish(self) -> Vec<u64> {
        self.next().sums
    }
}

/// Per-block sums, in the order the blocks appear.
pub fn block_sums<I, S>(lines: I) -> Result<Vec<u64>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    try_block_sums(lines.into_iter().map(Ok::<_, Error>))
}

/// Like [`block_sums`], for lines that can fail to read. Stops at the first
/// failure.
pub fn try_block_sums<I, S, E>(lines: I) -> Result<Vec<u64>, Error>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
    Error: From<E>,
{
    let state = lines
        .into_iter()
        .enumerate()
        .try_fold(State::default(), |state, (i, item)| {
            let s = item?;
            let s = s.as_ref();
            match classify_line(s) {
                Ok(Line::Calories(n)) => state.add(n),
                Ok(Line::Delimiter) => Ok(state.next()),
                Err(_) => Err(Error::NumberTooLarge {
                    line: i + 1,
                    text: s.trim().to_owned(),
                }),
            }
        })?;

    Ok(state.finish())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub max: u64,
    pub top_three: u64,
}

impl Summary {
    pub fn from_block_sums(sums: Vec<u64>) -> Result<Summary, Error> {
        let blocks = sums.len();
        let ranked = sums
            .into_iter()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect::<Vec<_>>();

        match ranked.as_slice() {
            &[a, b, c, ..] => {
                let top_three = a
                    .checked_add(b)
                    .and_then(|ab| ab.checked_add(c))
                    .ok_or(Error::Overflow)?;
                info!("{} blocks, max {}, top three {}", blocks, a, top_three);
                Ok(Summary { max: a, top_three })
            }
            _ => Err(Error::InsufficientData { blocks }),
        }
    }
}

// Top-three total first, then the maximum.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.top_three)?;
        write!(f, "{}", self.max)
    }
}

pub fn summarize<I, S>(lines: I) -> Result<Summary, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Summary::from_block_sums(block_sums(lines)?)
}

pub fn summarize_file<P>(path: P) -> Result<Summary, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    info!("reading {}", path.display());

    let sums = try_block_sums(BufReader::new(file).lines())?;
    Summary::from_block_sums(sums)
}
