//! Input Classifier (§4.1): maps a raw key event to a logical input token.
//! Keycodes here follow the donor's X11 virtual-keycode table, reused
//! verbatim since the classifier is keyboard-layout data, not engine logic.

/// Logical token the classifier hands to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    LetterKey(char),
    DigitKey(u8),
    SymbolKey(char),
    /// The literal character the host would type for this separator
    /// (space, tab, newline) — needed by the shortcut expander (§4.5),
    /// which appends it after the expansion.
    Separator(char),
    Navigation,
    ModifierOnly,
    Passthrough,
}

const KEY_A: u16 = 38;
const KEY_Z: u16 = 52;
const KEY_0: u16 = 19;
const KEY_9: u16 = 18;
const KEY_1: u16 = 10;
const KEY_SPACE: u16 = 65;
const KEY_TAB: u16 = 23;
const KEY_ENTER: u16 = 36;
const KEY_BACKSPACE: u16 = 22;
const KEY_ESCAPE: u16 = 9;
const KEY_LEFT: u16 = 113;
const KEY_RIGHT: u16 = 114;
const KEY_UP: u16 = 111;
const KEY_DOWN: u16 = 116;
const KEY_HOME: u16 = 110;
const KEY_END: u16 = 115;
const KEY_DELETE: u16 = 119;

/// US-QWERTY letters in keycode order, `KEY_A..=KEY_Z`.
const LETTERS: &str = "asdfghjklqwertyuiopzxcvbnm";

fn letter_for_keycode(keycode: u16) -> Option<char> {
    if !(KEY_A..=KEY_Z).contains(&keycode) {
        return None;
    }
    // The donor's keycode table does not enumerate contiguous alphabetic
    // order; encode the actual X11 scan-code -> letter mapping directly.
    let table: &[(u16, char)] = &[
        (38, 'a'), (56, 'b'), (54, 'c'), (40, 'd'), (26, 'e'), (41, 'f'), (42, 'g'), (43, 'h'),
        (31, 'i'), (44, 'j'), (45, 'k'), (46, 'l'), (58, 'm'), (57, 'n'), (32, 'o'), (33, 'p'),
        (24, 'q'), (27, 'r'), (39, 's'), (28, 't'), (30, 'u'), (55, 'v'), (25, 'w'), (53, 'x'),
        (29, 'y'), (52, 'z'),
    ];
    table.iter().find(|(code, _)| *code == keycode).map(|(_, ch)| *ch)
}

fn digit_for_keycode(keycode: u16) -> Option<u8> {
    let table: &[(u16, u8)] = &[
        (KEY_1, 1), (11, 2), (12, 3), (13, 4), (14, 5), (15, 6), (16, 7), (17, 8), (KEY_9, 9),
        (KEY_0, 0),
    ];
    table.iter().find(|(code, _)| *code == keycode).map(|(_, d)| *d)
}

fn is_navigation(keycode: u16) -> bool {
    matches!(
        keycode,
        KEY_LEFT | KEY_RIGHT | KEY_UP | KEY_DOWN | KEY_HOME | KEY_END | KEY_DELETE | KEY_ESCAPE
    )
}

fn is_separator(keycode: u16) -> bool {
    matches!(keycode, KEY_SPACE | KEY_TAB | KEY_ENTER)
}

/// Classify a raw key event per §4.1. The classifier is total: every input
/// maps to exactly one token, never an error.
pub fn classify(keycode: u16, caps: bool, shift: bool, ctrl_like: bool) -> InputToken {
    if ctrl_like {
        return InputToken::Passthrough;
    }
    if keycode == 0 {
        return InputToken::ModifierOnly;
    }
    if is_navigation(keycode) {
        return InputToken::Navigation;
    }
    if is_separator(keycode) {
        let ch = match keycode {
            KEY_TAB => '\t',
            KEY_ENTER => '\n',
            _ => ' ',
        };
        return InputToken::Separator(ch);
    }
    if keycode == KEY_BACKSPACE {
        return InputToken::Navigation;
    }
    if let Some(letter) = letter_for_keycode(keycode) {
        let upper = caps ^ shift;
        return InputToken::LetterKey(if upper { letter.to_ascii_uppercase() } else { letter });
    }
    if let Some(digit) = digit_for_keycode(keycode) {
        return if shift {
            InputToken::SymbolKey(shifted_digit_symbol(digit))
        } else {
            InputToken::DigitKey(digit)
        };
    }
    InputToken::Passthrough
}

fn shifted_digit_symbol(digit: u8) -> char {
    const SYMBOLS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];
    SYMBOLS[digit as usize]
}
