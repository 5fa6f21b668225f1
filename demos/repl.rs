//! Interactive REPL for trying the engine from a terminal, driving
//! `Engine::on_key` directly rather than going through the C ABI.
//! Adapted from the donor crate's whole-buffer `telex`/`vni` REPL to this
//! crate's stateful, per-keystroke `Engine`.

use rustyline::DefaultEditor;
use vi_ime::{Action, Engine, InputMethod};

/// Maps an ASCII input char to the X11 keycode `keys::classify` expects.
/// Only covers what a terminal REPL can plausibly send: letters, digits,
/// space. Anything else is skipped. Mirrors `keys.rs`'s scattered X11
/// scan-code table verbatim (letters are not contiguous by keycode).
fn keycode_for(ch: char) -> Option<u16> {
    match ch.to_ascii_lowercase() {
        'a' => Some(38), 'b' => Some(56), 'c' => Some(54), 'd' => Some(40),
        'e' => Some(26), 'f' => Some(41), 'g' => Some(42), 'h' => Some(43),
        'i' => Some(31), 'j' => Some(44), 'k' => Some(45), 'l' => Some(46),
        'm' => Some(58), 'n' => Some(57), 'o' => Some(32), 'p' => Some(33),
        'q' => Some(24), 'r' => Some(27), 's' => Some(39), 't' => Some(28),
        'u' => Some(30), 'v' => Some(55), 'w' => Some(25), 'x' => Some(53),
        'y' => Some(29), 'z' => Some(52),
        '0' => Some(19), '1' => Some(10), '2' => Some(11), '3' => Some(12),
        '4' => Some(13), '5' => Some(14), '6' => Some(15), '7' => Some(16),
        '8' => Some(17), '9' => Some(18),
        ' ' => Some(65),
        _ => None,
    }
}

fn main() {
    env_logger::init();

    let mut engine = Engine::new();
    engine.set_method(InputMethod::Telex);

    let mut rl = DefaultEditor::new().unwrap();
    loop {
        let Ok(input) = rl.readline("(input): ") else {
            break;
        };

        let mut output = String::new();
        for ch in input.chars().chain(std::iter::once(' ')) {
            let Some(keycode) = keycode_for(ch) else {
                output.push(ch);
                continue;
            };
            let caps = ch.is_ascii_uppercase();
            let decision = engine.on_key(keycode, caps, false, false);
            if decision.action == Action::Send {
                for _ in 0..decision.backspace_count {
                    output.pop();
                }
                output.extend(decision.output.iter());
            }
        }

        println!("(output): {}", output.trim_end());
        engine.clear();
    }
}
