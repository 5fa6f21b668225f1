//! Snapshot tests over representative word lists (§C "Test tooling" of
//! `SPEC_FULL.md`), driving `Engine::on_key` the way a host would and
//! applying each `Decision` to a plain `String` the way §6.2's host
//! contract describes (backspace N, then insert the output scalars).
//!
//! Uses `insta` for the assertions (inline snapshots, so no `testdata/`
//! fixtures are needed). `serde` is carried over from the donor crate's
//! dev-dependencies the same way the donor's own `tests/shared.rs` uses
//! it: to attach `Settings::set_info` metadata to a snapshot, not to
//! serialize the snapshotted value itself.

use serde::Serialize;
use vi_ime::{Action, Engine, InputMethod};

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

/// Types `keys` through a fresh engine in `method` and returns the visible
/// text the host would end up with, applying each `Send` decision's
/// backspace/insert against a plain `String`.
fn type_visible(method: InputMethod, keys: &str) -> String {
    let mut engine = Engine::new();
    engine.set_method(method);
    let mut visible = String::new();
    for ch in keys.chars() {
        let Some(keycode) = keycode_for(ch) else { continue };
        let caps = ch.is_ascii_uppercase();
        let decision = engine.on_key(keycode, caps, false, false);
        if decision.action == Action::Send {
            for _ in 0..decision.backspace_count {
                visible.pop();
            }
            visible.extend(decision.output.iter());
        } else {
            // §6.2(f): on `action == None` the host passes the original
            // key event through unchanged.
            visible.push(ch);
        }
    }
    visible
}

#[test]
fn telex_word_list() {
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "vieetj"), @"việt");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "nam "), @"nam ");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "hoas"), @"hoá");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "gias"), @"giá");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "quas"), @"quá");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "ddoongf"), @"đồng");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "ngonj"), @"ngọn");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "camr"), @"cảm");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "own"), @"ơn");
    insta::assert_snapshot!(type_visible(InputMethod::Telex, "chaof"), @"chào");
}

#[test]
fn vni_word_list() {
    insta::assert_snapshot!(type_visible(InputMethod::Vni, "vie6t5"), @"việt");
    insta::assert_snapshot!(type_visible(InputMethod::Vni, "hoa3"), @"hoả");
    insta::assert_snapshot!(type_visible(InputMethod::Vni, "d9u7o7ng2"), @"đường");
    insta::assert_snapshot!(type_visible(InputMethod::Vni, "ca3m"), @"cảm");
}

#[derive(Serialize)]
struct WordListMetadata {
    method: &'static str,
    word_count: usize,
}

/// Mirrors the donor's `tests/shared.rs` `gen_test!` pattern: attach
/// `Serialize` metadata to the snapshot via `Settings::set_info` rather
/// than snapshotting the serialized struct itself, then assert a plain
/// string snapshot whose exact formatting stays under our control.
#[test]
fn word_case_shapes_snapshot() {
    let cases = [("telex", "hoas"), ("telex", "chaof"), ("vni", "hoa3")];
    let rendered: Vec<String> = cases
        .iter()
        .map(|(method, keys)| {
            let m = if *method == "telex" { InputMethod::Telex } else { InputMethod::Vni };
            let visible = type_visible(m, keys);
            format!("{method} {keys} -> {visible} ({} chars)", visible.chars().count())
        })
        .collect();

    let metadata = WordListMetadata { method: "mixed", word_count: cases.len() };
    let mut settings = insta::Settings::clone_current();
    settings.set_info(&metadata);
    settings.bind(|| {
        insta::assert_snapshot!(rendered.join("\n"), @r###"
        telex hoas -> hoá (3 chars)
        telex chaof -> chào (4 chars)
        vni hoa3 -> hoả (3 chars)
        "###);
    });
}
