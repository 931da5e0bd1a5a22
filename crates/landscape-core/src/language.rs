use fnv::FnvHashMap;

/// Two-letter language code to display name.
#[derive(Clone, Debug, Default)]
pub struct LanguageTable {
    names: FnvHashMap<String, String>,
}

impl LanguageTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// The languages lectures in the collection are recorded in.
    pub fn common() -> Self {
        Self::from_pairs([
            ("ar", "Arabic"),
            ("bs", "Bosnian"),
            ("ca", "Catalan"),
            ("cs", "Czech"),
            ("da", "Danish"),
            ("de", "German"),
            ("el", "Greek"),
            ("en", "English"),
            ("es", "Spanish"),
            ("et", "Estonian"),
            ("eu", "Basque"),
            ("fi", "Finnish"),
            ("fr", "French"),
            ("hr", "Croatian"),
            ("hu", "Hungarian"),
            ("it", "Italian"),
            ("ja", "Japanese"),
            ("ko", "Korean"),
            ("lt", "Lithuanian"),
            ("lv", "Latvian"),
            ("mk", "Macedonian"),
            ("nl", "Dutch"),
            ("no", "Norwegian"),
            ("pl", "Polish"),
            ("pt", "Portuguese"),
            ("ro", "Romanian"),
            ("ru", "Russian"),
            ("sk", "Slovak"),
            ("sl", "Slovene"),
            ("sr", "Serbian"),
            ("sv", "Swedish"),
            ("tr", "Turkish"),
            ("uk", "Ukrainian"),
            ("zh", "Chinese"),
        ])
    }
}
