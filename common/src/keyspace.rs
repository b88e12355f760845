//! # Keyspace Generator
//!
//! Produces the ordered sequence of candidate PINs for one run: every
//! zero-padded decimal string of a fixed width, ascending from `0` to
//! `10^width - 1`.
//!
//! The sequence is lazy so the coordinator can throttle dispatch instead of
//! materializing ten thousand strings up front, and two generators built
//! with the same parameters always yield the same sequence.

/// Lazy iterator over the candidate PINs of a fixed-width decimal keyspace.
#[derive(Clone, Debug)]
pub struct Keyspace {
    width: u32,
    next: u64,
    end: u64,
}

impl Keyspace {
    pub fn new(width: u32) -> Self {
        Self::with_offset(width, 0)
    }

    /// Starts the sequence at `start` instead of zero. Offsets past the end
    /// of the keyspace yield an empty sequence.
    pub fn with_offset(width: u32, start: u64) -> Self {
        let end = Self::size(width);
        Self {
            width,
            next: start.min(end),
            end,
        }
    }

    /// Total number of candidates for a given width. A width of zero is an
    /// empty keyspace, not a single empty string.
    pub fn size(width: u32) -> u64 {
        if width == 0 {
            0
        } else {
            10u64.saturating_pow(width)
        }
    }
}

impl Iterator for Keyspace {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.end {
            return None;
        }
        let candidate = format!("{:0width$}", self.next, width = self.width as usize);
        self.next += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Keyspace {}
