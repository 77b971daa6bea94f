//! Placeholder substitution for personal data, applied before cleaning.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! anonymize_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

anonymize_pattern!(RE_EMAIL, r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}\b");
anonymize_pattern!(RE_LONG_NUMBER, r"\b\d{4,}\b");
anonymize_pattern!(RE_FULL_NAME, r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b");

pub const EMAIL_PLACEHOLDER: &str = "<EMAIL>";
pub const NUMBER_PLACEHOLDER: &str = "<NUMBER>";
pub const NAME_PLACEHOLDER: &str = "<NAME>";

/// Replace emails, numbers of four or more digits, and capitalized
/// `First Last` pairs with placeholders. Emails go first so their digits
/// are never masked separately.
pub fn anonymize(text: &str) -> String {
    let steps: [(&LazyLock<Option<Regex>>, &str); 3] = [
        (&RE_EMAIL, EMAIL_PLACEHOLDER),
        (&RE_LONG_NUMBER, NUMBER_PLACEHOLDER),
        (&RE_FULL_NAME, NAME_PLACEHOLDER),
    ];
    let mut out = text.to_string();
    for (regex, placeholder) in steps {
        if let Some(re) = regex.as_ref() {
            out = re.replace_all(&out, placeholder).into_owned();
        }
    }
    out
}
