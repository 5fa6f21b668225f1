//! Shortcut Expander (§4.5): user-defined abbreviation -> expansion table
//! with longest-match resolution at word boundaries. Grounded in the
//! sibling `gonhanh.org` engine's `ShortcutTable`, adapted to the
//! case-sensitive, priority-then-insertion-order tie-break this spec asks
//! for instead of that engine's case-insensitive matching.

use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub trigger: String,
    pub expansion: String,
    pub priority: i32,
    /// Monotonically increasing, used to break ties after priority.
    insertion_order: u64,
}

/// Case-sensitive trigger -> expansion table. Triggers are ASCII; longest
/// trigger wins, ties broken by higher priority, then by insertion order.
#[derive(Debug, Default)]
pub struct ShortcutTable {
    shortcuts: HashMap<String, Shortcut>,
    next_order: u64,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trigger: &str, expansion: &str, priority: i32) {
        let order = self.next_order;
        self.next_order += 1;
        self.shortcuts.insert(
            trigger.to_string(),
            Shortcut {
                trigger: trigger.to_string(),
                expansion: expansion.to_string(),
                priority,
                insertion_order: order,
            },
        );
    }

    pub fn remove(&mut self, trigger: &str) -> bool {
        self.shortcuts.remove(trigger).is_some()
    }

    pub fn clear(&mut self) {
        self.shortcuts.clear();
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Look up the longest suffix of `buffer` (case-sensitive) that matches
    /// a trigger. §4.5 says "the current buffer", so in practice this is
    /// called with the whole just-completed buffer, but matching on the
    /// longest matching suffix lets a shortcut fire even if the buffer
    /// carries leading context the caller didn't trim.
    pub fn lookup(&self, buffer: &str) -> Option<&Shortcut> {
        let mut candidates: Vec<&Shortcut> = self
            .shortcuts
            .values()
            .filter(|s| buffer.ends_with(s.trigger.as_str()))
            .collect();
        candidates.sort_by_key(|s| (Reverse(s.trigger.chars().count()), Reverse(s.priority), s.insertion_order));
        candidates.into_iter().next()
    }
}
