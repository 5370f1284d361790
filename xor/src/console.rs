use std::collections::VecDeque;
use std::io::BufRead;

/// Reads pairs of whitespace-separated integers from
/// a buffered source, across line boundaries.
///
/// The stream ends at end of input, at the first read
/// error, or at the first token that isn't an integer.
pub struct PairReader<R> {
    source: R,
    tokens: VecDeque<String>,
    finished: bool,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(source: R) -> PairReader<R> {
        PairReader {
            source,
            tokens: VecDeque::new(),
            finished: false,
        }
    }

    fn next_integer(&mut self) -> Option<i64> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            match self.source.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => self
                    .tokens
                    .extend(line.split_whitespace().map(String::from)),
            }
        }
        self.tokens.pop_front()?.parse().ok()
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.finished {
            return None;
        }
        let pair = self
            .next_integer()
            .and_then(|a| self.next_integer().map(|b| (a, b)));
        if pair.is_none() {
            self.finished = true;
        }
        pair
    }
}
