mod common;
use common::*;
use zerobasics::config::Config;
use zerobasics::lang::ErrorCode;
use zerobasics::mach::{Event, Runtime};

#[test]
fn test_first_chapter_only() {
    let mut r = script("chp one\nprint {1}\nend chp\nchp two\nprint {2}\nend chp");
    assert_eq!(exec(&mut r), "1\n");
    assert_eq!(r.result(), Some(true));
}

#[test]
fn test_implicit_main() {
    let r = script("print {a}\nprint {b}");
    let names: Vec<&str> = r.listing().chapters().map(|c| c.name()).collect();
    assert_eq!(names, vec!["main"]);
}

#[test]
fn test_run_is_a_call() {
    let mut r = script(
        "chp main\nprint {one}\nrun two\nprint {three}\nend chp\n\
         chp two\nprint {two}\nrun missing\nend chp",
    );
    assert_eq!(exec(&mut r), "one\ntwo\nthree\n");
}

#[test]
fn test_chapter_stack() {
    let mut r = script("chp a\nrun b\nchp b\ninput $x\n");
    exec(&mut r);
    assert_eq!(r.chapter_stack(), vec!["a", "b"]);
    assert_eq!(r.current_chapter(), Some("b"));
    r.enter("");
    exec(&mut r);
    assert!(r.chapter_stack().is_empty());
    assert_eq!(r.current_chapter(), None);
}

#[test]
fn test_rpl_run() {
    let mut r = script("chp main\n$n = 0\nrpl 3 run tick\nprint $n\nchp tick\ncalc $n + 1 - n");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_exit_in_called_chapter() {
    let mut r = script("chp main\nrun quit\nprint {never}\nchp quit\nprint {bye}\nexit\nprint {never}");
    assert_eq!(exec(&mut r), "bye\n");
    assert_eq!(r.result(), Some(false));
}

#[test]
fn test_self_recursion_fails() {
    let mut r = script("chp loop\nprint {x}\nrun loop");
    let out = exec(&mut r);
    assert_eq!(out.matches("x\n").count(), 256);
    assert!(out.ends_with("?OUT OF MEMORY IN loop; NESTING TOO DEEP\n"));
    assert_eq!(r.result(), Some(false));
    assert!(!r.is_running());
}

#[test]
fn test_depth_is_configurable() {
    let mut r = Runtime::with_config(Config::default().with_max_depth(4));
    r.load("chp a\nrpl 2 run a", None);
    r.run().unwrap();
    match events(&mut r).last() {
        Some(Event::Errors(errors)) => assert!(errors[0].is(ErrorCode::OutOfMemory)),
        event => panic!("unexpected {:?}", event),
    }
}

#[test]
fn test_deep_if_nesting() {
    let line = format!("{}print {{deep}}", "if $a = {} - ".repeat(40));
    let mut r = Runtime::default();
    r.enter(&line);
    let out = exec(&mut r);
    assert_eq!(out, "?OUT OF MEMORY; NESTING TOO DEEP\n");
}

#[test]
fn test_empty_script() {
    let mut r = Runtime::default();
    r.load("# only a comment\n\n", None);
    assert!(r.run().unwrap_err().is(ErrorCode::UndefinedChapter));
}

#[test]
fn test_load_resets_state() {
    let mut r = script("$x = 1");
    exec(&mut r);
    r.load("print {b}", None);
    assert_eq!(r.vars().get("x"), None);
    assert!(!r.exit_requested());
}

#[test]
fn test_chapter_replaced_while_running() {
    let mut r = script("chp main\nrpl 1 chp main\nprint {still runs}");
    assert_eq!(exec(&mut r), "still runs\n");
    assert!(r.listing().get("main").map(|c| c.is_empty()).unwrap_or(false));
}
