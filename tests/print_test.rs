mod common;
use common::*;
use zerobasics::mach::{Event, Runtime};

#[test]
fn test_print_joins_words() {
    let mut r = script("$who = World\nprint {Hello,} $who {and} {all of you}");
    assert_eq!(exec(&mut r), "Hello, World and all of you\n");
}

#[test]
fn test_print_nline() {
    let mut r = script("print {a} nline {b}\nprint nline");
    assert_eq!(exec(&mut r), "a\n\nb\n\n");
}

#[test]
fn test_print_colour_runs() {
    let mut r = script("print {plain} col green {go} {on} nline {reset}");
    assert_eq!(
        events(&mut r),
        vec![
            Event::Print("plain".to_string(), None),
            Event::Print("go on".to_string(), Some("green".to_string())),
            Event::Print("".to_string(), None),
            Event::Print("reset".to_string(), None),
        ]
    );
}

#[test]
fn test_print_trailing_col_is_text() {
    let mut r = script("print {x} col");
    assert_eq!(exec(&mut r), "x col\n");
}

#[test]
fn test_print_nothing() {
    let mut r = script("print\nPRINT $unset");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_comment_inside_braces_truncates() {
    let mut r = Runtime::default();
    r.enter("print {a # b}");
    assert_eq!(exec(&mut r), "{a\n");
}

#[test]
fn test_if_pressed_is_assumed() {
    let mut r = script("if pressed {q} - print {quit}");
    assert_eq!(
        exec(&mut r),
        "Assuming key q was pressed\nRunning command: print {quit}\nquit\n"
    );
}
