use serde::{Deserialize, Serialize};

const TATWEEL: char = '\u{0640}';

/// Arabic orthography normalizer.
///
/// Folds a word to a canonical spelling before it is indexed: strips
/// tashkeel and tatweel and unifies the letter variants Arabic text spells
/// inconsistently. Every option defaults to on; turn individual ones off
/// with struct-update syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    /// Strip the diacritical marks (tashkeel).
    pub strip_diacritics: bool,
    /// Strip tatweel (kashida) stretching.
    pub strip_tatweel: bool,
    /// Fold the alef variants آ أ إ ٱ to bare alef.
    pub unify_alef: bool,
    /// Fold alef maqsura (ى) to yaa.
    pub unify_yaa: bool,
    /// Fold taa marbuta (ة) to haa.
    pub unify_taa_marbuta: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            strip_tatweel: true,
            unify_alef: true,
            unify_yaa: true,
            unify_taa_marbuta: true,
        }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize one word or phrase in a single pass.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().filter_map(|ch| self.fold(ch)).collect()
    }

    /// Map one scalar to its normalized form, or drop it entirely.
    fn fold(&self, ch: char) -> Option<char> {
        if self.strip_diacritics && is_tashkeel(ch) {
            return None;
        }
        if self.strip_tatweel && ch == TATWEEL {
            return None;
        }
        if self.unify_alef && matches!(ch, '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}') {
            return Some('\u{0627}');
        }
        if self.unify_yaa && ch == '\u{0649}' {
            return Some('\u{064A}');
        }
        if self.unify_taa_marbuta && ch == '\u{0629}' {
            return Some('\u{0647}');
        }
        Some(ch)
    }
}

/// The combining-mark run of the basic Arabic block, plus the superscript
/// alef that sits apart from it.
fn is_tashkeel(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tashkeel() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("كِتَابٌ"), "كتاب");
        assert_eq!(normalizer.normalize("مُدَرِّسٌ"), "مدرس");
    }

    #[test]
    fn strips_tatweel() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("كـــاتب"), "كاتب");
    }

    #[test]
    fn unifies_alef_variants() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("أكل"), "اكل");
        assert_eq!(normalizer.normalize("إسلام"), "اسلام");
        assert_eq!(normalizer.normalize("آمين"), "امين");
    }

    #[test]
    fn folds_alef_maqsura_to_yaa() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("مستشفى"), "مستشفي");
    }

    #[test]
    fn folds_taa_marbuta_to_haa() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("مدرسة"), "مدرسه");
    }

    #[test]
    fn options_disable_individual_folds() {
        let keep_taa = Normalizer {
            unify_taa_marbuta: false,
            ..Normalizer::default()
        };
        assert_eq!(keep_taa.normalize("مدرسة"), "مدرسة");

        let keep_marks = Normalizer {
            strip_diacritics: false,
            ..Normalizer::default()
        };
        assert_eq!(keep_marks.normalize("كِتَابٌ"), "كِتَابٌ");
    }

    #[test]
    fn plain_text_passes_through() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("كتب"), "كتب");
        assert_eq!(normalizer.normalize(""), "");
    }
}
