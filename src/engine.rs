//! The `Engine`: the process-wide state machine (§2, §3) wrapping the
//! session buffer, method, enabled flag and shortcut table. `ffi.rs` is the
//! only caller that reaches across the mutex boundary; everything here is
//! plain, synchronous and allocation-light on the `on_key` hot path aside
//! from the `Decision`'s output `Vec` (bounded to 31 scalars, §4.6).

use crate::buffer::Buffer;
use crate::keys::{self, InputToken};
use crate::methods::InputMethod;
use crate::pipeline::{self, Action, Decision};
use crate::shortcut::ShortcutTable;

pub struct Engine {
    buffer: Buffer,
    method: InputMethod,
    enabled: bool,
    shortcuts: ShortcutTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self { buffer: Buffer::new(), method: InputMethod::Telex, enabled: true, shortcuts: ShortcutTable::new() }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main hot path (§4.3, §6.1 `ime_key_ext`).
    pub fn on_key(&mut self, keycode: u16, caps: bool, ctrl: bool, shift: bool) -> Decision {
        if !self.enabled {
            return Decision::none();
        }

        let token = keys::classify(keycode, caps, shift, ctrl);
        match token {
            InputToken::Passthrough | InputToken::ModifierOnly => Decision::none(),
            InputToken::Navigation => {
                log::trace!("engine: navigation key, clearing buffer");
                self.buffer.clear();
                Decision::none()
            }
            InputToken::Separator(ch) => self.handle_boundary(ch),
            // Shifted digits are treated as symbol separators (§9 open
            // question), so they close the syllable the same way a
            // punctuation separator would, without themselves counting as
            // a Telex/VNI trigger.
            InputToken::SymbolKey(ch) => self.handle_boundary(ch),
            InputToken::LetterKey(_) | InputToken::DigitKey(_) => {
                pipeline::run_letter_pipeline(&mut self.buffer, self.method, token)
            }
        }
    }

    /// Legacy entry point: `shift` defaults to `caps` (§6.1 `ime_key`).
    pub fn on_key_legacy(&mut self, keycode: u16, caps: bool, ctrl: bool) -> Decision {
        self.on_key(keycode, caps, ctrl, caps)
    }

    /// Word boundary: check the just-completed buffer against the shortcut
    /// table (§4.5), then clear regardless of whether one matched.
    fn handle_boundary(&mut self, separator: char) -> Decision {
        let word = self.buffer.to_string();
        let decision = if word.is_empty() {
            Decision::none()
        } else {
            match self.shortcuts.lookup(&word) {
                Some(shortcut) => {
                    let backspace = word.chars().count().min(31) as u8;
                    let mut output: Vec<char> = shortcut.expansion.chars().collect();
                    output.push(separator);
                    output.truncate(31);
                    Decision { action: Action::Send, backspace_count: backspace, output }
                }
                None => Decision::none(),
            }
        };
        self.buffer.clear();
        decision
    }

    pub fn set_method(&mut self, method: InputMethod) {
        self.method = method;
        self.buffer.clear();
    }

    pub fn method(&self) -> InputMethod {
        self.method
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.buffer.clear();
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer_text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn add_shortcut(&mut self, trigger: &str, expansion: &str, priority: i32) {
        self.shortcuts.insert(trigger, expansion, priority);
    }

    pub fn remove_shortcut(&mut self, trigger: &str) -> bool {
        self.shortcuts.remove(trigger)
    }

    pub fn clear_shortcuts(&mut self) {
        self.shortcuts.clear();
    }

    pub fn shortcuts_count(&self) -> usize {
        self.shortcuts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keycode_for(letter: char) -> u16 {
        match letter {
            'a' => 38, 'b' => 56, 'c' => 54, 'd' => 40, 'e' => 26, 'f' => 41, 'g' => 42, 'h' => 43,
            'i' => 31, 'j' => 44, 'k' => 45, 'l' => 46, 'm' => 58, 'n' => 57, 'o' => 32, 'p' => 33,
            'q' => 24, 'r' => 27, 's' => 39, 't' => 28, 'u' => 30, 'v' => 55, 'w' => 25, 'x' => 53,
            'y' => 29, 'z' => 52,
            _ => panic!("no keycode for {letter}"),
        }
    }

    const KEY_SPACE: u16 = 65;

    fn type_word(engine: &mut Engine, word: &str) {
        for ch in word.chars() {
            engine.on_key(keycode_for(ch), false, false, false);
        }
    }

    #[test]
    fn disabled_engine_is_passthrough() {
        let mut engine = Engine::new();
        engine.set_enabled(false);
        let decision = engine.on_key(keycode_for('a'), false, false, false);
        assert_eq!(decision.action, Action::None);
    }

    #[test]
    fn ctrl_is_always_passthrough() {
        let mut engine = Engine::new();
        let decision = engine.on_key(keycode_for('a'), false, true, false);
        assert_eq!(decision.action, Action::None);
    }

    #[test]
    fn shortcut_expands_at_space_boundary() {
        let mut engine = Engine::new();
        engine.add_shortcut("vn", "Việt Nam", 0);
        type_word(&mut engine, "vn");
        let decision = engine.on_key(KEY_SPACE, false, false, false);
        assert_eq!(decision.action, Action::Send);
        assert_eq!(decision.backspace_count, 2);
        let expected: Vec<char> = "Việt Nam ".chars().collect();
        assert_eq!(decision.output, expected);
    }

    #[test]
    fn method_switch_resets_buffer() {
        let mut engine = Engine::new();
        type_word(&mut engine, "a");
        engine.set_method(InputMethod::Vni);
        assert!(engine.buffer_text().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut engine = Engine::new();
        type_word(&mut engine, "ho");
        engine.clear();
        engine.clear();
        assert!(engine.buffer_text().is_empty());
    }
}
