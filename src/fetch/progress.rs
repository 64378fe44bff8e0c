//! In-place progress rendering for streaming transfers.
//!
//! One of two presentations is selected when the transfer starts: a
//! percentage bar when the total size is known, or a rotating wheel when
//! it is not. The line is redrawn over itself after every chunk.

use std::io::{self, Write};

use super::plan::TotalSize;

/// Number of cells in the known-size progress bar.
pub const BAR_WIDTH: u64 = 50;

/// Wheel symbols for unknown-size transfers, advanced one per chunk.
pub const WHEEL: [char; 5] = ['|', '/', '—', '\\', '—'];

/// Running transfer state: downloaded bytes and chunks emitted so far.
///
/// The counters only move forward; a new transfer gets a new `Progress`.
#[derive(Debug)]
pub struct Progress {
    total: TotalSize,
    downloaded: u64,
    chunks: u64,
}

impl Progress {
    /// Creates a fresh counter for one transfer.
    #[must_use]
    pub fn new(total: TotalSize) -> Self {
        Self {
            total,
            downloaded: 0,
            chunks: 0,
        }
    }

    /// Records one chunk of `len` bytes.
    pub fn record(&mut self, len: u64) {
        self.downloaded += len;
        self.chunks += 1;
    }

    /// Bytes downloaded so far.
    #[must_use]
    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }

    /// Floored integer percentage, when the total size is known.
    ///
    /// Reaches 100 only when every declared byte has arrived.
    #[must_use]
    pub fn percent(&self) -> Option<u64> {
        match self.total {
            TotalSize::Known(0) => Some(100),
            TotalSize::Known(total) => Some(self.downloaded.saturating_mul(100) / total),
            TotalSize::Unknown => None,
        }
    }

    /// Index into [`WHEEL`] for the most recently recorded chunk.
    #[must_use]
    pub fn wheel_index(&self) -> usize {
        usize::try_from(self.chunks.saturating_sub(1) % WHEEL.len() as u64).unwrap_or(0)
    }

    fn filled_cells(&self) -> Option<usize> {
        let cells = match self.total {
            TotalSize::Known(0) => BAR_WIDTH,
            TotalSize::Known(total) => (self.downloaded.saturating_mul(BAR_WIDTH) / total).min(BAR_WIDTH),
            TotalSize::Unknown => return None,
        };
        Some(usize::try_from(cells).unwrap_or(0))
    }

    /// Renders the current progress line (without the leading `\r`).
    #[must_use]
    pub fn render_line(&self) -> String {
        match (self.percent(), self.filled_cells()) {
            (Some(percent), Some(filled)) => {
                let empty = usize::try_from(BAR_WIDTH).unwrap_or(filled).saturating_sub(filled);
                format!(
                    "{percent:>3}% [{}{}]  {} B",
                    "#".repeat(filled),
                    " ".repeat(empty),
                    self.downloaded
                )
            }
            _ => format!("{}, {} B", WHEEL[self.wheel_index()], self.downloaded),
        }
    }

    /// Redraws the progress line in place on stdout.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when stdout is unwritable.
    pub fn draw(&self) -> io::Result<()> {
        let mut out = io::stdout();
        write!(out, "\r{}", self.render_line())?;
        out.flush()
    }

    /// Terminates the in-place line once streaming ends.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when stdout is unwritable.
    pub fn finish(&self) -> io::Result<()> {
        if self.chunks > 0 {
            writeln!(io::stdout())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_floored() {
        let mut progress = Progress::new(TotalSize::Known(3));
        progress.record(1);
        // 1/3 = 33.33..% floors to 33
        assert_eq!(progress.percent(), Some(33));
        progress.record(1);
        assert_eq!(progress.percent(), Some(66));
    }

    #[test]
    fn test_percent_reaches_100_only_at_full_size() {
        let mut progress = Progress::new(TotalSize::Known(1000));
        progress.record(999);
        assert_eq!(progress.percent(), Some(99));
        progress.record(1);
        assert_eq!(progress.percent(), Some(100));
    }

    #[test]
    fn test_percent_is_monotonically_non_decreasing() {
        let mut progress = Progress::new(TotalSize::Known(4096));
        let mut last = 0;
        for _ in 0..8 {
            progress.record(512);
            let percent = progress.percent().unwrap();
            assert!(percent >= last, "percent went backwards: {percent} < {last}");
            last = percent;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_percent_unknown_size_is_none() {
        let mut progress = Progress::new(TotalSize::Unknown);
        progress.record(4096);
        assert_eq!(progress.percent(), None);
    }

    #[test]
    fn test_wheel_index_cycles_through_five_symbols() {
        let mut progress = Progress::new(TotalSize::Unknown);
        for chunk in 0..12u64 {
            progress.record(1);
            let expected = usize::try_from(chunk % 5).unwrap();
            assert_eq!(progress.wheel_index(), expected, "chunk {chunk}");
        }
    }

    #[test]
    fn test_render_known_has_fifty_cell_bar() {
        let mut progress = Progress::new(TotalSize::Known(100));
        progress.record(50);
        let line = progress.render_line();
        assert!(line.starts_with(" 50% ["), "unexpected line: {line}");
        let bar: String = line
            .chars()
            .skip_while(|c| *c != '[')
            .skip(1)
            .take_while(|c| *c != ']')
            .collect();
        assert_eq!(bar.len(), 50);
        assert_eq!(bar.chars().filter(|c| *c == '#').count(), 25);
        assert!(line.ends_with("50 B"), "unexpected line: {line}");
    }

    #[test]
    fn test_render_unknown_shows_wheel_and_byte_count() {
        let mut progress = Progress::new(TotalSize::Unknown);
        progress.record(4096);
        let line = progress.render_line();
        assert!(line.starts_with(WHEEL[0]), "unexpected line: {line}");
        assert!(line.ends_with("4096 B"), "unexpected line: {line}");
    }

    #[test]
    fn test_zero_byte_total_renders_full() {
        let progress = Progress::new(TotalSize::Known(0));
        assert_eq!(progress.percent(), Some(100));
        let line = progress.render_line();
        assert!(line.starts_with("100%"), "unexpected line: {line}");
    }
}
