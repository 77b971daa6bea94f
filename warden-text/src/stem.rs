//! Light suffix stemming.
//!
//! Strips the common inflections (`-ies`, `-es`, `-s`, `-ing`, `-ed`, `-ly`)
//! and undoes consonant doubling. It is not a full Porter stemmer; stems are
//! only used for cleaned text and TF-IDF, never for severity.

const MIN_STEM: usize = 3;

pub fn stem(w: &str) -> String {
    if w.len() <= MIN_STEM || !w.is_ascii() {
        return w.to_string();
    }
    if let Some(base) = w.strip_suffix("ies") {
        if base.len() >= 2 {
            return format!("{base}i");
        }
    }
    if w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
        return w.to_string();
    }
    for suffix in ["sses", "xes", "ches", "shes"] {
        if w.ends_with(suffix) {
            return w[..w.len() - 2].to_string();
        }
    }
    if let Some(base) = w.strip_suffix('s') {
        return base.to_string();
    }
    for suffix in ["ing", "ed"] {
        if let Some(base) = w.strip_suffix(suffix) {
            if base.len() >= MIN_STEM && base.chars().any(is_vowel) {
                return undouble(base);
            }
        }
    }
    if let Some(base) = w.strip_suffix("ly") {
        if base.len() >= MIN_STEM {
            return base.to_string();
        }
    }
    w.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn undouble(base: &str) -> String {
    let bytes = base.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && !matches!(bytes[n - 1], b'l' | b's' | b'z') {
        return base[..n - 1].to_string();
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::stem;

    #[test]
    fn strips_common_inflections() {
        assert_eq!(stem("losers"), "loser");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("talked"), "talk");
        assert_eq!(stem("bullies"), "bulli");
        assert_eq!(stem("watches"), "watch");
        assert_eq!(stem("quickly"), "quick");
    }

    #[test]
    fn leaves_short_and_protected_words() {
        assert_eq!(stem("die"), "die");
        assert_eq!(stem("class"), "class");
        assert_eq!(stem("bus"), "bus");
        assert_eq!(stem("sing"), "sing");
    }
}
