use wordgrep_lib::Entry;

use super::{best, grep, total};

fn entries() -> Vec<Entry> {
    vec![Entry::new("FELIX", 363), Entry::new("HELLO", 24)]
}

#[test]
fn grep_renders_lines() {
    insta::assert_snapshot!(grep::render(&entries(), false), @r"
    FELIX 363
    HELLO 24
    ");
    assert_eq!(grep::render(&[], false), "");
}

#[test]
fn grep_renders_json() {
    insta::assert_snapshot!(grep::render(&entries(), true), @r#"
    [
      {
        "word": "FELIX",
        "freq": 363
      },
      {
        "word": "HELLO",
        "freq": 24
      }
    ]
    "#);
    assert_eq!(grep::render(&[], true), "[]\n");
}

#[test]
fn best_skips_the_sentinel() {
    assert_eq!(best::render(&Entry::new("HECTOR", 900), false), "HECTOR 900\n");
    assert_eq!(
        best::render(&Entry::new("HECTOR", 900), true),
        "{\"word\":\"HECTOR\",\"freq\":900}\n"
    );
    assert_eq!(best::render(&Entry::default(), false), "");
    assert_eq!(best::render(&Entry::default(), true), "null\n");
}

#[test]
fn total_renders() {
    assert_eq!(total::render(".....", 135, false), "135\n");
    assert_eq!(
        total::render(".....", 135, true),
        "{\"regex\":\".....\",\"total\":135}\n"
    );
}
