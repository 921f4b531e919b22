use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]+").expect("valid non-word regex"));

/// Lowercases `raw`, turns every run of non-word characters into one space and trims the ends.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!..."), "");
    }

    #[test]
    fn punctuation_and_whitespace_collapse() {
        assert_eq!(
            normalize("  Dia itu ANJING dan bangsat,   benar-benar\tjelek!! "),
            "dia itu anjing dan bangsat benar benar jelek"
        );
    }

    #[test]
    fn underscores_and_digits_are_word_characters() {
        assert_eq!(normalize("Kelas_7A: ujian #2"), "kelas_7a ujian 2");
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(normalize("Ṣalāh — DOA!"), "ṣalāh doa");
    }
}
