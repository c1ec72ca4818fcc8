//! Splinter size probe
//!
//! Wraps the `splinter-rs` compressed set. The reported footprint is the
//! encoded size of the structure in bytes.

use splinter_rs::{Encodable, Splinter};

use crate::probe::SizeProbe;

/// Size probe backed by a `Splinter`.
pub struct SplinterProbe {
    splinter: Splinter,
}

impl SplinterProbe {
    pub fn new() -> Self {
        Self {
            splinter: Splinter::from_iter(std::iter::empty::<u32>()),
        }
    }
}

impl Default for SplinterProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeProbe for SplinterProbe {
    fn build(&mut self, values: &[u32]) {
        self.splinter = Splinter::from_iter(values.iter().copied());
    }

    fn size_in_bytes(&self) -> u64 {
        self.splinter.encoded_size() as u64
    }

    fn name(&self) -> &str {
        "Splinter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_reports_its_overhead() {
        let probe = SplinterProbe::new();
        // Header bytes only, but defined.
        let _ = probe.size_in_bytes();
    }

    #[test]
    fn growing_the_set_grows_the_encoding() {
        let mut probe = SplinterProbe::new();
        probe.build(&[1]);
        let one = probe.size_in_bytes();
        probe.build(&(0..10_000).map(|i| i * 17).collect::<Vec<u32>>());
        assert!(probe.size_in_bytes() > one);
    }
}
