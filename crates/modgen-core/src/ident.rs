//! Identifier normalization for scaffolded resources.
//!
//! Converts a free-form, user-supplied resource name into the two naming
//! conventions used across generated files: kebab-case (file names) and
//! PascalCase (class names). Both forms are derived independently from the
//! raw input: kebab-case comes from an acronym-aware tokenization, while
//! PascalCase comes from a word-boundary uppercasing pass. On inputs mixing
//! separators and casing the two can disagree (e.g. `XMLHttp` yields
//! `xml-http` / `XMLHttp`, and `my_module` yields `my-module` / `Mymodule`
//! because an underscore is a word character). That divergence is part of
//! the contract; neither form is ever computed from the other.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches every character that starts a word for PascalCase purposes:
/// the first word character, any uppercase letter, or a word character
/// preceded by a word boundary.
static WORD_INITIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w|[A-Z]|\b\w").expect("word-initial pattern is valid"));

/// Separator runs stripped out of the PascalCase form.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]+").expect("separator pattern is valid"));

/// The kebab-case and PascalCase forms of one resource name.
///
/// Computed once per generation and reused for every template and output
/// filename of that invocation, so all files of one resource agree on
/// casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedName {
    /// Lowercase tokens joined with `-`, e.g. `aws-helper`
    pub kebab: String,
    /// Concatenated capitalized words, e.g. `AwsHelper`
    pub pascal: String,
}

/// Derive both naming conventions from a raw resource name.
///
/// Never fails: an empty input yields empty strings, and an input that
/// produces no tokens at all (symbols only) keeps the raw input verbatim as
/// its kebab form.
pub fn normalize(raw: &str) -> NormalizedName {
    NormalizedName {
        kebab: to_kebab_case(raw),
        pascal: to_pascal_case(raw),
    }
}

/// Convert a string to kebab-case using acronym-aware tokenization.
///
/// Falls back to the input unchanged when tokenization yields nothing.
pub fn to_kebab_case(raw: &str) -> String {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return raw.to_string();
    }
    tokens
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a string to PascalCase by uppercasing every word-initial
/// character and stripping separator runs.
pub fn to_pascal_case(raw: &str) -> String {
    let capitalized = WORD_INITIAL.replace_all(raw, |caps: &regex::Captures<'_>| {
        caps[0].to_uppercase()
    });
    SEPARATORS.replace_all(&capitalized, "").to_string()
}

/// Split a raw name into identifier tokens.
///
/// At each position the scanner tries, in order: a run of two or more
/// uppercase letters that ends at an Upper+lower word or a word boundary
/// (acronyms), an optionally-capitalized lowercase word with trailing
/// digits, a single uppercase letter, and a bare digit run. Characters that
/// start no token are skipped.
fn tokenize(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match token_len_at(&chars, i) {
            Some(len) => {
                tokens.push(chars[i..i + len].iter().collect());
                i += len;
            }
            None => i += 1,
        }
    }
    tokens
}

fn token_len_at(chars: &[char], start: usize) -> Option<usize> {
    let len = chars.len();

    // Acronym: 2+ uppercase letters, longest run first, kept only when the
    // run ends right before an Upper+lower word or at a word boundary.
    let mut run = 0;
    while start + run < len && chars[start + run].is_ascii_uppercase() {
        run += 1;
    }
    if run >= 2 {
        for k in (2..=run).rev() {
            if acronym_break(chars, start + k) {
                return Some(k);
            }
        }
    }

    // Word: optional leading uppercase, 1+ lowercase, 0+ digits.
    let mut j = start;
    if j < len && chars[j].is_ascii_uppercase() {
        j += 1;
    }
    let lower_start = j;
    while j < len && chars[j].is_ascii_lowercase() {
        j += 1;
    }
    if j > lower_start {
        while j < len && chars[j].is_ascii_digit() {
            j += 1;
        }
        return Some(j - start);
    }

    // Lone uppercase letter.
    if chars[start].is_ascii_uppercase() {
        return Some(1);
    }

    // Digit run.
    let mut j = start;
    while j < len && chars[j].is_ascii_digit() {
        j += 1;
    }
    if j > start {
        return Some(j - start);
    }

    None
}

/// True when an uppercase run may end at `pos`: either an Upper+lower word
/// starts there, or `pos` sits on a word boundary (end of input or a
/// non-word character).
fn acronym_break(chars: &[char], pos: usize) -> bool {
    if pos < chars.len()
        && chars[pos].is_ascii_uppercase()
        && pos + 1 < chars.len()
        && chars[pos + 1].is_ascii_lowercase()
    {
        return true;
    }
    pos == chars.len() || !is_word_char(chars[pos])
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("user"), "user");
        assert_eq!(to_kebab_case("AwsHelper"), "aws-helper");
        assert_eq!(to_kebab_case("findPetsByStatus"), "find-pets-by-status");
        assert_eq!(to_kebab_case("HTTPServer2"), "http-server2");
        assert_eq!(to_kebab_case("XMLHttp"), "xml-http");
        assert_eq!(to_kebab_case("my_module"), "my-module");
        assert_eq!(to_kebab_case("my module"), "my-module");
        assert_eq!(to_kebab_case("HTTP"), "http");
        assert_eq!(to_kebab_case("ABC2"), "a-b-c-2");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("aws helper"), "AwsHelper");
        assert_eq!(to_pascal_case("my-module"), "MyModule");
        assert_eq!(to_pascal_case("AwsHelper"), "AwsHelper");
        // Uppercase letters are never lowered by the word-boundary rule.
        assert_eq!(to_pascal_case("HTTPServer2"), "HTTPServer2");
        // An underscore is a word character, so it does not start a word.
        assert_eq!(to_pascal_case("my_module"), "Mymodule");
    }

    #[test]
    fn test_dual_derivation_divergence() {
        // The two forms come from different scans of the same raw input and
        // may disagree; deriving pascal from the kebab tokens would give
        // "XmlHttp" here instead.
        let name = normalize("XMLHttp");
        assert_eq!(name.kebab, "xml-http");
        assert_eq!(name.pascal, "XMLHttp");

        let name = normalize("my_module");
        assert_eq!(name.kebab, "my-module");
        assert_eq!(name.pascal, "Mymodule");
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = normalize("");
        assert_eq!(empty.kebab, "");
        assert_eq!(empty.pascal, "");

        // No tokens at all: kebab keeps the raw input verbatim.
        let symbols = normalize("---");
        assert_eq!(symbols.kebab, "---");
        assert_eq!(symbols.pascal, "");
    }

    #[test]
    fn test_kebab_idempotence() {
        for input in ["HTTPServer2", "AwsHelper", "findPetsByStatus", "user", "XMLHttp"] {
            let once = to_kebab_case(input);
            assert_eq!(to_kebab_case(&once), once, "kebab of {input:?} not stable");
        }
    }

    #[test]
    fn test_kebab_alphabet() {
        for input in ["HTTPServer2", "Aws Helper", "find_pets", "Billing", "v2Api"] {
            let kebab = to_kebab_case(input);
            assert!(
                kebab
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {kebab:?}"
            );
            assert!(!kebab.starts_with('-') && !kebab.ends_with('-'));
            assert!(!kebab.contains("--"));
        }
    }
}
