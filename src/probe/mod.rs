pub mod roaring;
pub mod splinter;

/// Represents a trait for compact integer-set representations whose byte
/// footprint is being measured.
///
/// Probes are write-once for sizing purposes: `build` replaces any
/// previously held representation, `size_in_bytes` reports the footprint
/// of the last build. Implementations are free to sort or de-duplicate
/// internally but must leave the input slice untouched.
pub trait SizeProbe {
    /// Constructs the representation from the provided values.
    fn build(&mut self, values: &[u32]);

    /// Returns the encoded size of the representation in bytes.
    fn size_in_bytes(&self) -> u64;

    /// Returns the name of the representation.
    fn name(&self) -> &str;
}

/// The registered representations, in report column order.
///
/// Adding a representation to the comparison only means appending it here.
pub fn default_probes() -> Vec<Box<dyn SizeProbe>> {
    vec![
        Box::new(roaring::RoaringProbe::new()),
        Box::new(splinter::SplinterProbe::new()),
    ]
}
