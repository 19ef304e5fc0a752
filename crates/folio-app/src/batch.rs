//! Non-interactive mode: one submission per input line.

use std::io::{self, BufRead};

use folio_terminal::{Session, ViewSink};

/// Submit every line of `input`, in order. Returns the number of lines read.
pub fn run(session: &mut Session, view: &mut dyn ViewSink, input: impl BufRead) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        session.submit(&line?, view);
        count += 1;
    }
    log::debug!("batch mode processed {count} lines");
    Ok(count)
}
