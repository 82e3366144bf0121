use std::collections::HashMap;

use packal_core::lang::keywords;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_lowercase_ascii_words() {
    // The lexer only hands alphanumeric runs starting with a letter to the registry.
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(first.is_ascii_lowercase(), "keyword {:?} must start with a letter", info.canonical);
        assert!(
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "keyword {:?} must be a lowercase alphanumeric run",
            info.canonical
        );
    }
}

#[test]
fn core_reserved_words_are_registered() {
    for spelling in ["program", "var", "const", "begin", "end", "integer", "readln", "writeln"] {
        assert!(
            keywords::from_str(spelling).is_some(),
            "missing reserved word {:?}",
            spelling
        );
    }
}
