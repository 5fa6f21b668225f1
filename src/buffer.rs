//! Session Buffer (§3, §4.2): the ordered sequence of committed scalars
//! forming the syllable in progress, plus a one-deep undo record keyed by
//! the trigger key that produced the most recent transformation.

/// Buffer capacity. §3 asks for >= 16; this crate sizes it to match the
/// FFI result's 32-scalar output cap (§6.1) so B1's boundary case — a
/// buffer of length 31 needing a 32nd output scalar — is representable.
pub const CAPACITY: usize = 32;

/// Fixed-capacity scalar buffer backing the current syllable.
#[derive(Debug, Clone)]
pub struct Buffer {
    data: [char; CAPACITY],
    len: usize,
    /// Pre-transform snapshot plus the key that triggered the transform
    /// producing the current buffer contents. Cleared on any word boundary,
    /// method switch, enable toggle, or explicit clear.
    undo: Option<Undo>,
}

#[derive(Debug, Clone)]
struct Undo {
    trigger_key: char,
    snapshot: [char; CAPACITY],
    snapshot_len: usize,
}

impl Default for Buffer {
    fn default() -> Self {
        Self { data: ['\0'; CAPACITY], len: 0, undo: None }
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_chars(&self) -> &[char] {
        &self.data[..self.len]
    }

    pub fn to_string(&self) -> String {
        self.as_chars().iter().collect()
    }

    /// Push a single scalar with no validation. Drops the oldest half of
    /// the buffer first if it's already full (§7 overflow recovery).
    pub fn append(&mut self, ch: char) {
        if self.len == CAPACITY {
            self.drop_oldest_half();
        }
        self.data[self.len] = ch;
        self.len += 1;
    }

    fn drop_oldest_half(&mut self) {
        let half = CAPACITY / 2;
        let remaining = CAPACITY - half;
        for i in 0..remaining {
            self.data[i] = self.data[i + half];
        }
        self.len = remaining;
    }

    /// Replace the trailing `n` scalars with `chars`. Recorded as the
    /// conceptual edit every transformation performs; the result builder
    /// (§4.6) derives the actual host-facing backspace/output from the
    /// before/after buffer contents, not from this call directly.
    pub fn replace_tail(&mut self, n: usize, chars: &[char]) {
        let keep = self.len.saturating_sub(n);
        let mut new_data = ['\0'; CAPACITY];
        new_data[..keep].copy_from_slice(&self.data[..keep]);
        let mut new_len = keep;
        for &ch in chars {
            if new_len == CAPACITY {
                break;
            }
            new_data[new_len] = ch;
            new_len += 1;
        }
        self.data = new_data;
        self.len = new_len;
    }

    /// Record an undo point: the buffer contents *before* applying a
    /// transformation triggered by `trigger_key`.
    pub fn record_undo(&mut self, trigger_key: char, pre_transform: &Buffer) {
        let mut snapshot = ['\0'; CAPACITY];
        snapshot[..pre_transform.len].copy_from_slice(&pre_transform.data[..pre_transform.len]);
        self.undo = Some(Undo { trigger_key, snapshot, snapshot_len: pre_transform.len });
    }

    /// If `key` matches the trigger that produced the current contents,
    /// restore the pre-transform snapshot and clear the undo record (a
    /// second press of the same key does not itself become revertible).
    pub fn try_revert(&mut self, key: char) -> bool {
        let Some(undo) = self.undo.take() else { return false };
        if undo.trigger_key != key {
            self.undo = Some(undo);
            return false;
        }
        self.data = undo.snapshot;
        self.len = undo.snapshot_len;
        true
    }

    pub fn has_undo_for(&self, key: char) -> bool {
        self.undo.as_ref().is_some_and(|u| u.trigger_key == key)
    }

    /// Drop the undo record without touching the buffer contents. A plain
    /// append has no revert edge in the §4.3.3 state machine, so it must
    /// not leave a stale undo point behind for a later, unrelated trigger
    /// key to revert across.
    pub fn clear_undo(&mut self) {
        self.undo = None;
    }

    /// Empties the buffer and the undo record (word boundary, §3 I3).
    pub fn clear(&mut self) {
        self.len = 0;
        self.undo = None;
    }

    pub fn snapshot(&self) -> Buffer {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: Buffer) {
        *self = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_to_string() {
        let mut buf = Buffer::new();
        buf.append('h');
        buf.append('o');
        buf.append('a');
        assert_eq!(buf.to_string(), "hoa");
    }

    #[test]
    fn replace_tail_reshapes_buffer() {
        let mut buf = Buffer::new();
        for ch in "hoa".chars() {
            buf.append(ch);
        }
        buf.replace_tail(1, &['à']);
        assert_eq!(buf.to_string(), "hoà");
    }

    #[test]
    fn undo_round_trip() {
        let mut buf = Buffer::new();
        for ch in "a".chars() {
            buf.append(ch);
        }
        let before = buf.snapshot();
        buf.replace_tail(1, &['á']);
        buf.record_undo('s', &before);
        assert!(buf.try_revert('s'));
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn undo_ignores_mismatched_key() {
        let mut buf = Buffer::new();
        buf.append('a');
        let before = buf.snapshot();
        buf.replace_tail(1, &['á']);
        buf.record_undo('s', &before);
        assert!(!buf.try_revert('f'));
        assert_eq!(buf.to_string(), "á");
    }

    #[test]
    fn clear_drops_undo() {
        let mut buf = Buffer::new();
        buf.append('a');
        let before = buf.snapshot();
        buf.replace_tail(1, &['á']);
        buf.record_undo('s', &before);
        buf.clear();
        assert!(!buf.try_revert('s'));
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_undo_drops_only_the_undo_record() {
        let mut buf = Buffer::new();
        buf.append('a');
        let before = buf.snapshot();
        buf.replace_tail(1, &['á']);
        buf.record_undo('s', &before);
        buf.clear_undo();
        assert!(!buf.try_revert('s'));
        assert_eq!(buf.to_string(), "á");
    }

    #[test]
    fn overflow_drops_oldest_half() {
        let mut buf = Buffer::new();
        for _ in 0..CAPACITY {
            buf.append('x');
        }
        assert_eq!(buf.len(), CAPACITY);
        buf.append('y');
        assert_eq!(buf.len(), CAPACITY / 2 + 1);
        assert_eq!(buf.as_chars()[buf.len() - 1], 'y');
    }
}
