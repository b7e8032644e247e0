/// Caps how many source items a run transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferLimiter {
    limit: usize,
}

impl TransferLimiter {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of items a run over `total_items` will transfer; also the
    /// progress total.
    pub fn effective_count(&self, total_items: usize) -> usize {
        self.limit.min(total_items)
    }

    /// `processed` is 1-based.
    pub fn should_stop(&self, processed: usize) -> bool {
        processed == self.limit
    }
}
