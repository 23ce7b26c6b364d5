//! Multi-pattern matching of a response body against the catalog

use super::catalog::PatternCatalog;
use crate::models::Finding;

/// Lazily yields every match of every catalog regex in `body`.
///
/// Order is catalog order, then regex order within a pattern, then
/// left-to-right position in the body. Matches are non-overlapping and
/// leftmost-first per regex. Nothing is deduplicated: the same text matched
/// by two patterns yields two findings. Zero-width matches are dropped so
/// `matched` is never empty.
pub fn scan<'a>(
    catalog: &'a PatternCatalog,
    url: &'a str,
    body: &'a str,
) -> impl Iterator<Item = Finding> + 'a {
    catalog.patterns().iter().flat_map(move |pattern| {
        pattern.regexes().iter().flat_map(move |re| {
            re.find_iter(body)
                .filter(|m| !m.as_str().is_empty())
                .map(move |m| Finding {
                    url: url.to_string(),
                    severity: pattern.severity.clone(),
                    name: pattern.name.clone(),
                    matched: m.as_str().to_string(),
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pattern;

    const URL: &str = "https://target.example";

    fn catalog(patterns: Vec<Pattern>) -> PatternCatalog {
        PatternCatalog::compile(patterns).expect("catalog compiles")
    }

    fn pattern(name: &str, regexes: &[&str], severity: &str) -> Pattern {
        Pattern::new(
            name,
            regexes.iter().map(|r| r.to_string()).collect(),
            severity,
        )
    }

    #[test]
    fn aws_key_scenario() {
        let c = catalog(vec![pattern("AWS Key", &["AKIA[0-9A-Z]{16}"], "high")]);
        let findings: Vec<Finding> = scan(&c, URL, "token=AKIA1234567890ABCDEF end").collect();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].matched, "AKIA1234567890ABCDEF");
        assert_eq!(findings[0].severity, "high");
        assert_eq!(findings[0].name, "AWS Key");
        assert_eq!(findings[0].url, URL);
    }

    #[test]
    fn overlapping_patterns_are_reported_independently() {
        let c = catalog(vec![
            pattern("Admin word", &["admin"], "low"),
            pattern("Admin path", &["adm[a-z]n"], "medium"),
        ]);
        let findings: Vec<Finding> = scan(&c, URL, "go to /admin now").collect();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].name, "Admin word");
        assert_eq!(findings[1].name, "Admin path");
        assert!(findings.iter().all(|f| f.matched == "admin"));
    }

    #[test]
    fn empty_body_yields_nothing() {
        let c = catalog(vec![
            pattern("Any", &["."], "info"),
            pattern("Star", &["a*"], "info"),
        ]);
        assert_eq!(scan(&c, URL, "").count(), 0);
    }

    #[test]
    fn repeated_matches_are_not_deduplicated() {
        let c = catalog(vec![pattern("Key", &["key"], "low")]);
        assert_eq!(scan(&c, URL, "key key key key key").count(), 5);
    }

    #[test]
    fn order_follows_catalog_then_regex_then_position() {
        let c = catalog(vec![
            pattern("first", &["b\\d", "a\\d"], "low"),
            pattern("second", &["c\\d"], "high"),
        ]);
        let body = "c1 a1 b1 a2 b2 c2";
        let got: Vec<(String, String)> = scan(&c, URL, body)
            .map(|f| (f.name, f.matched))
            .collect();
        let want: Vec<(String, String)> = [
            ("first", "b1"),
            ("first", "b2"),
            ("first", "a1"),
            ("first", "a2"),
            ("second", "c1"),
            ("second", "c2"),
        ]
        .iter()
        .map(|(n, m)| (n.to_string(), m.to_string()))
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn count_equals_sum_of_per_regex_matches() {
        let c = catalog(vec![
            pattern("digits", &["\\d+", "[0-9]"], "low"),
            pattern("words", &["[a-z]+"], "low"),
        ]);
        let body = "abc 123 de 4 f56";
        let expected: usize = c
            .patterns()
            .iter()
            .flat_map(|p| p.regexes())
            .map(|re| re.find_iter(body).count())
            .sum();
        assert_eq!(scan(&c, URL, body).count(), expected);
    }

    #[test]
    fn scanning_twice_is_identical() {
        let c = catalog(vec![
            pattern("email", &["[a-z]+@[a-z]+\\.com"], "medium"),
            pattern("secret", &["(?i)secret=\\w+"], "high"),
        ]);
        let body = "a@b.com SECRET=xyz c@d.com secret=abc";
        let first: Vec<Finding> = scan(&c, URL, body).collect();
        let second: Vec<Finding> = scan(&c, URL, body).collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_width_matches_are_dropped() {
        let c = catalog(vec![pattern("maybe", &["x*"], "low")]);
        let findings: Vec<Finding> = scan(&c, URL, "ab xx c x").collect();
        let matched: Vec<&str> = findings.iter().map(|f| f.matched.as_str()).collect();
        assert_eq!(matched, vec!["xx", "x"]);
    }

    #[test]
    fn matched_text_is_verbatim() {
        let c = catalog(vec![pattern("ws", &["Key:\\s+\\S+"], "low")]);
        let findings: Vec<Finding> = scan(&c, URL, "Key:\t  VALUE\n").collect();
        assert_eq!(findings[0].matched, "Key:\t  VALUE");
    }

    #[test]
    fn replacement_characters_do_not_break_matching() {
        let raw = b"prefix \xff\xfe token=AKIA1234567890ABCDEF";
        let body = String::from_utf8_lossy(raw);
        let c = catalog(vec![pattern("AWS Key", &["AKIA[0-9A-Z]{16}"], "high")]);
        assert_eq!(scan(&c, URL, &body).count(), 1);
    }
}
