/// One confirmed count together with the sum of every count confirmed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub count: u32,
    pub cumulative_sum: u64,
}

/// Append-only record of confirmed counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, count: u32) -> LogEntry {
        let entry = LogEntry {
            count,
            cumulative_sum: self.running_sum() + u64::from(count),
        };
        self.entries.push(entry);
        entry
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn running_sum(&self) -> u64 {
        self.entries.last().map_or(0, |entry| entry.cumulative_sum)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
