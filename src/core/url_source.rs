use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Lazy, single-pass sequence of target URLs read line by line.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. A read error ends the sequence; it is held back until the caller
/// asks for it through [`UrlSource::finish`].
pub struct UrlSource<R> {
    lines: Lines<R>,
    error: Option<io::Error>,
    done: bool,
}

impl UrlSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> UrlSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            error: None,
            done: false,
        }
    }

    /// Reports the read error that terminated the sequence, if any. Only
    /// meaningful once the iterator has been drained.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

impl<R: BufRead> Iterator for UrlSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) if is_skipped(&line) => continue,
                Some(Ok(line)) => return Some(line),
                Some(Err(err)) => {
                    self.error = Some(err);
                    self.done = true;
                    return None;
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
