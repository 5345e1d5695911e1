//! End-to-end behavior of the escape-aware string value.

use colorstr::ColorStr;
use tagmark::Mode;

fn red_test() -> ColorStr {
    ColorStr::with_mode("{red}Test{/red}", Mode::dark())
}

#[test]
fn renditions_never_diverge() {
    let value = red_test();
    assert_eq!(value.plain(), tagmark::strip_codes(value.colored()));

    let transformed = value.to_uppercase().center(10, '*').repeat(2);
    assert_eq!(
        transformed.plain(),
        tagmark::strip_codes(transformed.colored())
    );
}

#[test]
fn slicing_keeps_edge_escapes() {
    let value = red_test();
    let head = value.slice(0, 2);
    assert_eq!(head.colored(), "\x1b[31mTe");
    assert_eq!(head.plain(), "Te");

    let tail = value.slice(2, 4);
    assert_eq!(tail.colored(), "st\x1b[39m");

    let clamped = value.slice(2, 99);
    assert_eq!(clamped.plain(), "st");
}

#[test]
fn interior_slice_starts_at_the_character() {
    // An interior cut does not carry the escape run preceding its first
    // character; get() is the call that preserves effective color.
    let value = ColorStr::from_colored("a\x1b[31mb".to_string());
    assert_eq!(value.slice(1, 2).colored(), "b");
    let styled = value.get(1).map(|c| c.colored().to_string());
    assert_eq!(styled.as_deref(), Some("\x1b[31mb"));
}

#[test]
fn split_cuts_colored_at_plain_boundaries() {
    let value = ColorStr::with_mode("{red}a,b,c{/red}", Mode::dark());
    let parts = value.split(",");
    let colored: Vec<&str> = parts.iter().map(ColorStr::colored).collect();
    assert_eq!(colored, vec!["\x1b[31ma", "b", "c\x1b[39m"]);

    let plain: Vec<&str> = parts.iter().map(ColorStr::plain).collect();
    assert_eq!(plain, vec!["a", "b", "c"]);
}

#[test]
fn split_without_match_returns_whole() {
    let value = red_test();
    assert_eq!(value.split(","), vec![value.clone()]);
    assert_eq!(value.split(""), vec![value]);
}

#[test]
fn split_trailing_separator() {
    let value = ColorStr::with_mode("{red}a,{/red}", Mode::dark());
    let plain: Vec<String> = value
        .split(",")
        .iter()
        .map(|p| p.plain().to_string())
        .collect();
    assert_eq!(plain, vec!["a", ""]);
}

#[test]
fn splitlines_drops_terminators() {
    let value = ColorStr::with_mode("{red}one\ntwo{/red}", Mode::dark());
    let colored: Vec<String> = value
        .splitlines()
        .iter()
        .map(|l| l.colored().to_string())
        .collect();
    assert_eq!(colored, vec!["\x1b[31mone", "two\x1b[39m"]);

    let crlf = ColorStr::with_mode("a\r\nb\n", Mode::dark());
    let plain: Vec<String> = crlf
        .splitlines()
        .iter()
        .map(|l| l.plain().to_string())
        .collect();
    assert_eq!(plain, vec!["a", "b"]);
}

#[test]
fn join_uses_colored_separator() {
    let sep = ColorStr::with_mode(", ", Mode::dark());
    let parts = [
        ColorStr::with_mode("{red}a{/red}", Mode::dark()),
        ColorStr::with_mode("{blue}b{/blue}", Mode::dark()),
    ];
    let joined = sep.join(&parts);
    assert_eq!(joined.colored(), "\x1b[31ma\x1b[39m, \x1b[34mb\x1b[39m");
    assert_eq!(joined.plain(), "a, b");
}

#[test]
fn format_inserts_colored_and_recompiles() {
    let template = ColorStr::with_mode("{b}{0}{/b}", Mode::dark());
    assert_eq!(template.colored(), "\x1b[1m{0}\x1b[22m");

    let filled = template.format(&[&red_test()]);
    // Adjacent escapes introduced by substitution merge on recompile.
    assert_eq!(filled.colored(), "\x1b[1;31mTest\x1b[39;22m");
    assert_eq!(filled.plain(), "Test");
}

#[test]
fn format_resolves_tags_from_arguments() {
    let template = ColorStr::from_colored("{b}{0}{/b}".to_string());
    let filled = template.format(&[&ColorStr::from_colored("hi".to_string())]);
    assert_eq!(filled.colored(), "\x1b[1mhi\x1b[22m");
}

#[test]
fn format_named_substitutes_keys() {
    let template = ColorStr::with_mode("{red}{name}{/red}", Mode::dark());
    let filled = template.format_named(&[("name", &ColorStr::from_colored("x".to_string()))]);
    assert_eq!(filled.colored(), "\x1b[31mx\x1b[39m");
}

#[test]
fn colorize_validates_tag() {
    let ok = ColorStr::colorize("red", "boom", false);
    assert!(ok.is_ok_and(|v| v.plain() == "boom"));
    assert!(ColorStr::colorize("nosuchcolor", "boom", false).is_err());
}

#[test]
fn per_color_constructors() {
    assert_eq!(ColorStr::green("go").plain(), "go");
    assert_eq!(ColorStr::bgred("stop").colored(), "\x1b[41mstop\x1b[49m");
    // Auto variants resolve against the process default (dark background).
    assert_eq!(ColorStr::autored("hot").plain(), "hot");
}

#[test]
fn transform_pipeline() {
    let value = ColorStr::with_mode("{red}hello{/red} {b}world{/b}", Mode::dark());
    let rows = [
        ("upper", value.to_uppercase()),
        ("title", value.title()),
        ("swap", value.swapcase()),
        ("center", value.center(17, '.')),
    ];
    let rendered: Vec<String> = rows
        .iter()
        .map(|(name, v)| format!("{name}: {}", v.colored().escape_debug()))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    upper: \u{1b}[31mHELLO\u{1b}[39m \u{1b}[1mWORLD\u{1b}[22m
    title: \u{1b}[31mHello\u{1b}[39m \u{1b}[1mWorld\u{1b}[22m
    swap: \u{1b}[31mHELLO\u{1b}[39m \u{1b}[1mWORLD\u{1b}[22m
    center: ...\u{1b}[31mhello\u{1b}[39m \u{1b}[1mworld\u{1b}[22m...
    ");
}

#[test]
fn predicates_ignore_escapes() {
    let digits = ColorStr::with_mode("{green}123{/green}", Mode::dark());
    assert!(digits.is_digit());
    assert!(digits.is_decimal());
    assert!(digits.is_numeric());
    assert!(!digits.is_alpha());
    assert!(digits.is_alnum());

    let upper = ColorStr::with_mode("{red}ABC{/red}", Mode::dark());
    assert!(upper.is_upper());
    assert!(!upper.is_lower());
    assert!(ColorStr::with_mode("  ", Mode::dark()).is_space());
    assert!(!ColorStr::with_mode("", Mode::dark()).is_space());
}
