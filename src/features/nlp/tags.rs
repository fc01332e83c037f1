use std::fmt;
use std::str::FromStr;

/// Penn Treebank part-of-speech tags, plus the punctuation tags the Treebank
/// tokenizer conventions produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    CoordinatingConjunction,
    Cardinal,
    Determiner,
    Existential,
    Foreign,
    Preposition,
    Adjective,
    ComparativeAdjective,
    SuperlativeAdjective,
    ListMarker,
    Modal,
    Noun,
    PluralNoun,
    ProperNoun,
    PluralProperNoun,
    Predeterminer,
    Possessive,
    PersonalPronoun,
    PossessivePronoun,
    Adverb,
    ComparativeAdverb,
    SuperlativeAdverb,
    Particle,
    Symbol,
    To,
    Interjection,
    Verb,
    PastTense,
    Gerund,
    PastParticiple,
    PresentVerb,
    ThirdPersonVerb,
    WhDeterminer,
    WhPronoun,
    PossessiveWhPronoun,
    WhAdverb,
    Terminator,
    Comma,
    Colon,
    OpenBracket,
    CloseBracket,
    OpenQuote,
    CloseQuote,
    Dollar,
    Hash,
}

impl PosTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CoordinatingConjunction => "CC",
            Self::Cardinal => "CD",
            Self::Determiner => "DT",
            Self::Existential => "EX",
            Self::Foreign => "FW",
            Self::Preposition => "IN",
            Self::Adjective => "JJ",
            Self::ComparativeAdjective => "JJR",
            Self::SuperlativeAdjective => "JJS",
            Self::ListMarker => "LS",
            Self::Modal => "MD",
            Self::Noun => "NN",
            Self::PluralNoun => "NNS",
            Self::ProperNoun => "NNP",
            Self::PluralProperNoun => "NNPS",
            Self::Predeterminer => "PDT",
            Self::Possessive => "POS",
            Self::PersonalPronoun => "PRP",
            Self::PossessivePronoun => "PRP$",
            Self::Adverb => "RB",
            Self::ComparativeAdverb => "RBR",
            Self::SuperlativeAdverb => "RBS",
            Self::Particle => "RP",
            Self::Symbol => "SYM",
            Self::To => "TO",
            Self::Interjection => "UH",
            Self::Verb => "VB",
            Self::PastTense => "VBD",
            Self::Gerund => "VBG",
            Self::PastParticiple => "VBN",
            Self::PresentVerb => "VBP",
            Self::ThirdPersonVerb => "VBZ",
            Self::WhDeterminer => "WDT",
            Self::WhPronoun => "WP",
            Self::PossessiveWhPronoun => "WP$",
            Self::WhAdverb => "WRB",
            Self::Terminator => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::OpenBracket => "(",
            Self::CloseBracket => ")",
            Self::OpenQuote => "``",
            Self::CloseQuote => "''",
            Self::Dollar => "$",
            Self::Hash => "#",
        }
    }

    /// Every `NN*` tag.
    pub fn is_noun(self) -> bool {
        self.as_str().starts_with("NN")
    }

    pub fn is_verb(self) -> bool {
        self.as_str().starts_with("VB")
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part-of-speech tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for PosTag {
    type Err = UnknownTag;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tag = match value {
            "CC" => Self::CoordinatingConjunction,
            "CD" => Self::Cardinal,
            "DT" => Self::Determiner,
            "EX" => Self::Existential,
            "FW" => Self::Foreign,
            "IN" => Self::Preposition,
            "JJ" => Self::Adjective,
            "JJR" => Self::ComparativeAdjective,
            "JJS" => Self::SuperlativeAdjective,
            "LS" => Self::ListMarker,
            "MD" => Self::Modal,
            "NN" => Self::Noun,
            "NNS" => Self::PluralNoun,
            "NNP" => Self::ProperNoun,
            "NNPS" => Self::PluralProperNoun,
            "PDT" => Self::Predeterminer,
            "POS" => Self::Possessive,
            "PRP" => Self::PersonalPronoun,
            "PRP$" => Self::PossessivePronoun,
            "RB" => Self::Adverb,
            "RBR" => Self::ComparativeAdverb,
            "RBS" => Self::SuperlativeAdverb,
            "RP" => Self::Particle,
            "SYM" => Self::Symbol,
            "TO" => Self::To,
            "UH" => Self::Interjection,
            "VB" => Self::Verb,
            "VBD" => Self::PastTense,
            "VBG" => Self::Gerund,
            "VBN" => Self::PastParticiple,
            "VBP" => Self::PresentVerb,
            "VBZ" => Self::ThirdPersonVerb,
            "WDT" => Self::WhDeterminer,
            "WP" => Self::WhPronoun,
            "WP$" => Self::PossessiveWhPronoun,
            "WRB" => Self::WhAdverb,
            "." => Self::Terminator,
            "," => Self::Comma,
            ":" => Self::Colon,
            "(" => Self::OpenBracket,
            ")" => Self::CloseBracket,
            "``" => Self::OpenQuote,
            "''" => Self::CloseQuote,
            "$" => Self::Dollar,
            "#" => Self::Hash,
            other => return Err(UnknownTag(other.to_string())),
        };
        Ok(tag)
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: PosTag,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: PosTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penn_codes_parse_back_to_the_same_tag() {
        for code in ["NN", "NNS", "NNP", "NNPS", "PRP$", "WP$", "``", "''", "VBZ", "."] {
            let tag: PosTag = code.parse().expect("known tag");
            assert_eq!(tag.as_str(), code);
        }
    }

    #[test]
    fn only_nn_family_counts_as_noun() {
        assert!(PosTag::Noun.is_noun());
        assert!(PosTag::PluralProperNoun.is_noun());
        assert!(!PosTag::Adjective.is_noun());
        assert!(!PosTag::Verb.is_noun());
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!("XYZ".parse::<PosTag>(), Err(UnknownTag("XYZ".to_string())));
    }
}
