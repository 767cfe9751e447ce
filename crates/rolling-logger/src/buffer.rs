//! Circular buffer of recent log lines

use std::collections::VecDeque;

use parking_lot::Mutex;

pub struct RecentLines {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append every non-empty line of `text`, dropping the oldest when full
    pub fn push_text(&self, text: &str) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
