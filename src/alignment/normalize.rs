use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HYPHEN_BREAK: Regex = Regex::new(r"-\s+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonicalizes raw text for comparison: lowercase, hyphenation breaks
/// removed, configured artifact sequences stripped, whitespace runs collapsed
/// to single spaces, trimmed.
///
/// A hyphen followed by any whitespace run counts as a hyphenation break.
/// Matching the full run (rather than just `-\n` and `- `) keeps the pass
/// idempotent: a tab after a hyphen would otherwise collapse to `- ` and only
/// disappear on a second pass.
///
/// Idempotent; both recognized lines and the reference must pass through this
/// before any matching.
pub fn normalize(text: &str, artifact_sequences: &[String]) -> String {
    let mut text = text.to_lowercase();
    text = HYPHEN_BREAK.replace_all(&text, "").into_owned();
    for artifact in artifact_sequences {
        // The text is already lowercased at this point, so the configured
        // sequence has to be folded the same way to ever match.
        let artifact = artifact.to_lowercase();
        if !artifact.is_empty() {
            text = text.replace(artifact.as_str(), "");
        }
    }
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> Vec<String> {
        vec!["Â¬".to_string()]
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Hello World  ", &artifacts()), "hello world");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a\t b\n\nc", &artifacts()), "a b c");
    }

    #[test]
    fn removes_hyphenation_breaks() {
        // A hyphen followed by a line break rejoins the split word.
        assert_eq!(normalize("ver-\nsion", &artifacts()), "version");
        assert_eq!(normalize("ver- sion", &artifacts()), "version");
    }

    #[test]
    fn hyphen_before_any_whitespace_run_is_a_break() {
        assert_eq!(normalize("ver-\tsion", &artifacts()), "version");
        assert_eq!(normalize("ver-\r\nsion", &artifacts()), "version");
        assert_eq!(normalize("ver- \n sion", &artifacts()), "version");
    }

    #[test]
    fn strips_artifact_sequences() {
        assert_eq!(normalize("fooÂ¬bar", &artifacts()), "foobar");
    }

    #[test]
    fn empty_artifact_list_leaves_glyphs() {
        assert_eq!(normalize("fooÂ¬bar", &[]), "fooâ¬bar");
    }

    #[test]
    fn interior_hyphens_survive() {
        assert_eq!(normalize("well-known", &artifacts()), "well-known");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "  Hello World  ",
            "ver-\nsion one",
            "a-\tb",
            "a\t b\n\nc",
            "fooÂ¬bar",
            "",
        ];
        for input in inputs {
            let once = normalize(input, &artifacts());
            assert_eq!(normalize(&once, &artifacts()), once);
        }
    }
}
