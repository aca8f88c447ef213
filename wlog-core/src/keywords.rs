use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Today,
    Yesterday,
    #[strum(serialize = "last week")]
    LastWeek,
    LastMonth,
    ThisWeek,
    ThisMonth,
}

pub struct Keywords;

impl Keywords {
    /// Returns the global keyword registry (input → canonical).
    ///
    /// Initialized once on first access, wrapped in an [`RwLock`] so config
    /// loading can extend it with synonyms. All keys are stored lowercased
    /// for case-insensitive lookups.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let mut m = HashMap::new();
            m.insert("monday".to_string(), Keyword::Monday);
            m.insert("tuesday".to_string(), Keyword::Tuesday);
            m.insert("wednesday".to_string(), Keyword::Wednesday);
            m.insert("thursday".to_string(), Keyword::Thursday);
            m.insert("friday".to_string(), Keyword::Friday);
            m.insert("saturday".to_string(), Keyword::Saturday);
            m.insert("sunday".to_string(), Keyword::Sunday);
            m.insert("today".to_string(), Keyword::Today);
            m.insert("yesterday".to_string(), Keyword::Yesterday);
            m.insert("last week".to_string(), Keyword::LastWeek);
            m.insert("last month".to_string(), Keyword::LastMonth);
            m.insert("this week".to_string(), Keyword::ThisWeek);
            m.insert("this month".to_string(), Keyword::ThisMonth);

            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined synonyms.
    ///
    /// Each pair is `(alias, target)`. The target must already be known in the
    /// registry (a canonical keyword or an existing synonym); unknown targets
    /// are ignored silently. Keys are lowercased to keep lookups
    /// case-insensitive. Typical call site: `Config::load` after reading the
    /// `[synonyms]` table from `config.toml`.
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = Self::registry().write().unwrap();
        for (alias, target) in synonyms {
            if let Some(&canonical) = reg.get(&target.to_ascii_lowercase()) {
                reg.insert(alias.to_ascii_lowercase(), canonical);
            }
        }
    }

    /// Returns `true` if `word` is a canonical keyword (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Returns `true` if `input` equals (case-insensitively) the given
    /// canonical keyword or any of its registered synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        let reg = Self::registry().read().unwrap();
        reg.get(&input.to_ascii_lowercase())
            .map(|&canon| canon == keyword)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords_match_themselves() {
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "YESTERDAY"));
        assert!(Keywords::matches(Keyword::LastWeek, "last week"));
        assert!(!Keywords::matches(Keyword::Today, "yesterday"));
    }

    #[test]
    fn synonyms_extend() {
        Keywords::extend(&[
            ("ytd".into(), "yesterday".into()),
            ("ayer".into(), "yesterday".into()),
        ]);
        assert!(Keywords::matches(Keyword::Yesterday, "ytd"));
        assert!(Keywords::matches(Keyword::Yesterday, "AYER"));
    }

    #[test]
    fn unknown_target_is_ignored() {
        Keywords::extend(&[("someday".into(), "no-such-keyword".into())]);
        assert!(!Keywords::matches(Keyword::Today, "someday"));
    }

    #[test]
    fn canonical_words_are_recognized() {
        assert!(Keywords::is_canonical("today"));
        assert!(Keywords::is_canonical("last week"));
        assert!(!Keywords::is_canonical("ytd"));
    }
}
