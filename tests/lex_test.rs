use proptest::prelude::*;
use zerobasics::lang::{lex, strip_comment};
use zerobasics::mach::{resolve_text, Listing, Var};

#[test]
fn test_brace_span_is_one_token() {
    assert_eq!(
        lex("if $a = {hello world} - print {hi}"),
        vec!["if", "$a", "=", "{hello world}", "-", "print", "{hi}"]
    );
}

#[test]
fn test_tabs_and_stray_brace() {
    assert_eq!(lex("print\t} {a\tb}"), vec!["print", "}", "{a\tb}"]);
    assert_eq!(lex("print {open ended"), vec!["print", "{open ended"]);
}

#[test]
fn test_comment() {
    assert_eq!(strip_comment("print {a} # note"), "print {a}");
    assert!(lex("# only").is_empty());
}

proptest! {
    #[test]
    fn plain_words_split_on_spaces(words in prop::collection::vec("[a-zA-Z0-9$=,.-]{1,8}", 1..8)) {
        let line = words.join(" ");
        prop_assert_eq!(lex(&line), words.clone());
        let spaced = format!("  {}\t", words.join(" \t "));
        prop_assert_eq!(lex(&spaced), words);
    }

    #[test]
    fn braced_words_stay_together(words in prop::collection::vec("[a-z0-9 ]{0,12}", 1..5)) {
        let spans: Vec<String> = words.iter().map(|w| format!("{{{}}}", w)).collect();
        let line = format!("print {}", spans.join(" "));
        let mut expected = vec!["print".to_string()];
        expected.extend(spans);
        prop_assert_eq!(lex(&line), expected);
    }

    #[test]
    fn text_without_markup_resolves_to_itself(s in "[^{}$]{0,40}") {
        prop_assert_eq!(resolve_text(&s, &Var::new()), s);
    }

    #[test]
    fn headerless_lines_land_in_main(words in prop::collection::vec("[a-z]{1,6}( [a-z]{1,6}){0,3}", 1..10)) {
        let lines: Vec<String> = words.iter().map(|w| format!("print {}", w)).collect();
        let listing = Listing::load(&lines.join("\n"));
        prop_assert_eq!(listing.len(), 1);
        let main = listing.get("main").map(|c| c.lines().len()).unwrap_or(0);
        prop_assert_eq!(main, lines.len());
    }
}
