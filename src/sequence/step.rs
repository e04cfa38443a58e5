use derive_more::{Display, IsVariant};

/// An opaque token identifying one backing allocation of a sequence.
///
/// Ids are generations local to a single sequence: a new one is handed out exactly when the
/// sequence moves to a new block. Comparing ids of different sequences means nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("#{_0}")]
pub struct StorageId(u64);

impl StorageId {
    /// The id of a sequence that hasn't allocated yet.
    pub const EMPTY: StorageId = StorageId(0);

    /// Returns the id of the block allocated after this one. Wraps around, skipping
    /// [`StorageId::EMPTY`].
    pub(crate) const fn next(self) -> StorageId {
        match self.0.wrapping_add(1) {
            0 => StorageId(1),
            generation => StorageId(generation),
        }
    }

    /// Returns the generation number behind this id.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// A snapshot of a sequence taken right after an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthStep {
    /// Zero-based index of the append that produced this step.
    pub step: usize,
    pub len: usize,
    pub cap: usize,
    pub storage: StorageId,
    /// True iff `storage` differs from the storage before the append.
    pub reallocated: bool,
}

/// What an append had to do to fit the new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Appended {
    /// The element was written into spare capacity.
    InPlace,
    /// The sequence was full and moved to a new block.
    Reallocated {
        from: usize,
        to: usize,
    },
}
