use crate::shared::constants::MAX_KEYPHRASES;

/// User-supplied phrases to look for in window transcripts.
///
/// Phrases are trimmed and lowercased on entry; matching is plain substring
/// containment against the lowercased transcript.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyphraseSet {
    phrases: Vec<String>,
}

impl KeyphraseSet {
    /// Parse a comma-separated list, dropping empty entries and keeping at
    /// most the first ten phrases.
    pub fn parse(input: &str) -> Self {
        let phrases = input
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .take(MAX_KEYPHRASES)
            .collect();
        Self { phrases }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// True when the transcript contains any phrase, case-insensitively.
    pub fn matches(&self, transcript: &str) -> bool {
        let haystack = transcript.to_lowercase();
        self.phrases.iter().any(|p| haystack.contains(p))
    }
}

impl std::fmt::Display for KeyphraseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phrases.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let set = KeyphraseSet::parse("  Hola ,  MUNDO  ");
        assert_eq!(set.phrases(), &["hola".to_string(), "mundo".to_string()]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let set = KeyphraseSet::parse("uno,, ,dos");
        assert_eq!(set.phrases().len(), 2);
    }

    #[test]
    fn test_parse_caps_at_ten() {
        let set = KeyphraseSet::parse("a,b,c,d,e,f,g,h,i,j,k,l");
        assert_eq!(set.phrases().len(), MAX_KEYPHRASES);
        assert_eq!(set.phrases().last().unwrap(), "j");
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let set = KeyphraseSet::parse("hola");
        assert!(set.matches("Hola mundo"));
        assert!(set.matches("dijo HOLA al entrar"));
        assert!(!set.matches("adios mundo"));
    }

    #[test]
    fn test_match_any_phrase_suffices() {
        let set = KeyphraseSet::parse("contrato, factura");
        assert!(set.matches("la factura llegó ayer"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = KeyphraseSet::parse("   ");
        assert!(set.is_empty());
        assert!(!set.matches("anything at all"));
    }

    #[test]
    fn test_display_joins_with_commas() {
        let set = KeyphraseSet::parse("uno, dos");
        assert_eq!(set.to_string(), "uno, dos");
    }
}
