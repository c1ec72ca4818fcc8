//! Roaring bitmap size probe
//!
//! Wraps the `roaring` crate's `RoaringBitmap`. The reported footprint is
//! the portable serialized size, so it is comparable across runs and
//! platforms.

use roaring::RoaringBitmap;

use crate::probe::SizeProbe;

/// Size probe backed by a `RoaringBitmap`.
#[derive(Default)]
pub struct RoaringProbe {
    bitmap: RoaringBitmap,
}

impl RoaringProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SizeProbe for RoaringProbe {
    fn build(&mut self, values: &[u32]) {
        self.bitmap = values.iter().copied().collect();
    }

    fn size_in_bytes(&self) -> u64 {
        self.bitmap.serialized_size() as u64
    }

    fn name(&self) -> &str {
        "Roaring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_duplicates_into_a_set() {
        let mut probe = RoaringProbe::new();
        probe.build(&[1, 2, 2, 3]);
        assert_eq!(probe.bitmap.len(), 3);
    }

    #[test]
    fn sparse_values_still_have_a_size() {
        let mut probe = RoaringProbe::new();
        probe.build(&[0, u32::MAX]);
        assert!(probe.size_in_bytes() > 0);
    }
}
