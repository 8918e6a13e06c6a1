/// Hands out ascending ids for one entity kind.
///
/// The next id is one past the larger of the highest live id and the highest
/// id ever issued, so deleting the newest record never frees its id.
/// Owned by a single store actor; it has no internal synchronisation.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last_issued: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, existing: impl IntoIterator<Item = u64>) -> u64 {
        let current_max = existing.into_iter().max().unwrap_or(0);
        let next = current_max.max(self.last_issued) + 1;
        self.last_issued = next;
        next
    }
}
