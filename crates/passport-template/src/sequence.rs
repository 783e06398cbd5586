//! Identifier sequences (asset tags, serial numbers)

use std::sync::atomic::{AtomicU64, Ordering};

/// Owned, thread-safe counter producing prefixed zero-padded identifiers
///
/// ```
/// use passport_template::SerialSequence;
///
/// let tags = SerialSequence::new("INV-", 6, 41);
/// assert_eq!(tags.next_id(), "INV-000041");
/// assert_eq!(tags.next_id(), "INV-000042");
/// ```
#[derive(Debug)]
pub struct SerialSequence {
    prefix: String,
    width: usize,
    next: AtomicU64,
}

impl SerialSequence {
    /// Create a sequence whose first identifier uses `start`
    pub fn new<S: Into<String>>(prefix: S, width: usize, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            next: AtomicU64::new(start),
        }
    }

    /// Allocate the next number
    pub fn next_number(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Allocate the next formatted identifier
    pub fn next_id(&self) -> String {
        self.format(self.next_number())
    }

    /// Number the next call will allocate
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Format a number with this sequence's prefix and padding
    pub fn format(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_and_order() {
        let seq = SerialSequence::new("SN", 4, 1);
        assert_eq!(seq.next_id(), "SN0001");
        assert_eq!(seq.next_id(), "SN0002");
        assert_eq!(seq.peek(), 3);
        assert_eq!(seq.format(123456), "SN123456");
    }

    #[test]
    fn test_independent_sequences() {
        let a = SerialSequence::new("A-", 2, 1);
        let b = SerialSequence::new("A-", 2, 1);
        a.next_id();
        assert_eq!(b.next_id(), "A-01");
    }

    #[test]
    fn test_concurrent_allocation_is_unique() {
        let seq = SerialSequence::new("", 0, 0);
        let ids: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..250).map(|_| seq.next_number()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 1000);
        assert_eq!(seq.peek(), 1000);
    }
}
