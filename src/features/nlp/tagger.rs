//! Lexicon-and-heuristics part-of-speech tagger producing Penn Treebank tags.
//!
//! Each token first receives a lexical guess (overrides, punctuation,
//! numbers, closed-class words, known open-class words, suffixes), then a
//! left-to-right pass corrects guesses that depend on the previous tag.

use crate::features::nlp::resources::NlpResources;
use crate::features::nlp::tags::{PosTag, TaggedWord};

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion", "trillion",
];

const VERB_LEMMAS: &[&str] = &[
    "accept", "achieve", "adopt", "affect", "agree", "allow", "argue", "ask", "ban", "become",
    "believe", "bring", "build", "buy", "call", "change", "claim", "come", "compete", "consider",
    "contribute", "create", "decide", "deny", "depend", "destroy", "develop", "disagree",
    "discourage", "eliminate", "enable", "encourage", "ensure", "exist", "explain", "fail",
    "feel", "find", "follow", "get", "give", "go", "grow", "happen", "harm", "help", "hold",
    "improve", "include", "increase", "invest", "involve", "justify", "keep", "know", "lead",
    "learn", "leave", "let", "live", "lose", "maintain", "make", "mean", "move", "need", "occur",
    "offer", "oppose", "outweigh", "pay", "prevent", "produce", "promote", "protect", "provide",
    "raise", "read", "reduce", "reflect", "regulate", "reject", "rely", "remain", "remove",
    "replace", "require", "restrict", "run", "say", "see", "seem", "sell", "serve", "show",
    "solve", "speak", "spend", "succeed", "suggest", "support", "take", "teach", "tell",
    "think", "threaten", "try", "undermine", "understand", "use", "want", "win", "write",
];

const IRREGULAR_PAST: &[&str] = &[
    "said", "made", "took", "gave", "went", "came", "became", "found", "thought", "knew", "saw",
    "told", "got", "began", "ran", "wrote", "led", "left", "held", "brought", "kept", "meant",
    "paid", "sent", "built", "felt", "grew", "spoke", "won", "lost", "bought", "sold", "taught",
    "understood", "rose", "fell", "drove",
];

const IRREGULAR_PARTICIPLES: &[&str] = &[
    "taken", "given", "gone", "known", "seen", "shown", "grown", "written", "spoken", "begun",
    "driven", "risen", "fallen", "chosen", "forgotten", "done",
];

const ADJECTIVES: &[&str] = &[
    "able", "bad", "big", "black", "blue", "bright", "certain", "cheap", "clear", "cold",
    "common", "cool", "current", "dark", "different", "difficult", "digital", "early", "easy",
    "economic", "effective", "efficient", "environmental", "essential", "ethical", "expensive",
    "fair", "false", "free", "full", "future", "general", "global", "good", "great", "green",
    "hard", "high", "hot", "human", "illegal", "important", "impossible", "key", "large", "late",
    "legal", "likely", "little", "local", "long", "low", "main", "major", "medical", "minor",
    "modern", "moral", "national", "natural", "necessary", "negative", "new", "old", "open",
    "political", "poor", "positive", "possible", "private", "public", "real", "recent", "red",
    "rich", "right", "safe", "serious", "short", "significant", "simple", "small", "social",
    "strong", "sure", "true", "unfair", "unlikely", "warm", "weak", "white", "whole", "wrong",
    "yellow", "young",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

/// Words the suffix rules would mistag.
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "alternative", "anomaly", "archive", "assembly", "detective", "directive", "executive",
    "family", "incentive", "initiative", "monopoly", "motive", "objective", "perspective",
    "reply", "representative", "supply", "vegetable", "thing", "nothing", "something",
    "anything", "everything", "morning", "evening", "ceiling", "sibling", "spring", "string",
];

/// Tags `words` in order; the output has one entry per input token.
pub fn tag_words(words: &[String], resources: &NlpResources) -> Vec<TaggedWord> {
    let mut tags: Vec<PosTag> = words
        .iter()
        .enumerate()
        .map(|(index, word)| lexical_tag(word, index == 0, resources))
        .collect();

    for index in 1..tags.len() {
        let lower = words[index].to_lowercase();
        let before_previous = index.checked_sub(2).map(|i| tags[i]);
        let adjusted = contextual_tag(
            tags[index],
            &lower,
            tags[index - 1],
            &words[index - 1].to_lowercase(),
            before_previous,
        );
        tags[index] = adjusted;
    }

    words
        .iter()
        .zip(tags)
        .map(|(word, tag)| TaggedWord::new(word.clone(), tag))
        .collect()
}

fn lexical_tag(word: &str, first: bool, resources: &NlpResources) -> PosTag {
    let lower = word.to_lowercase();

    if let Some(tag) = resources.lexicon_tag(&lower) {
        return tag;
    }
    if let Some(tag) = punctuation_tag(word) {
        return tag;
    }
    if is_numeric(word) || NUMBER_WORDS.contains(&lower.as_str()) {
        return PosTag::Cardinal;
    }
    if let Some(tag) = closed_class_tag(&lower) {
        return tag;
    }
    if is_acronym(word) || (!first && starts_uppercase(word)) {
        return PosTag::ProperNoun;
    }
    if let Some(tag) = open_class_tag(&lower) {
        return tag;
    }

    suffix_tag(&lower).unwrap_or_else(|| default_noun_tag(&lower))
}

fn contextual_tag(
    current: PosTag,
    lower: &str,
    previous: PosTag,
    previous_lower: &str,
    before_previous: Option<PosTag>,
) -> PosTag {
    use PosTag::*;

    let after_modal = previous == Modal || (previous == Adverb && before_previous == Some(Modal));
    let after_auxiliary = is_auxiliary(previous_lower)
        || (previous == Adverb && before_previous.is_some_and(|tag| tag.is_verb()));
    let after_nominal_modifier = matches!(
        previous,
        Determiner
            | PossessivePronoun
            | Adjective
            | ComparativeAdjective
            | SuperlativeAdjective
            | Preposition
            | Cardinal
            | Possessive
    );

    match current {
        Noun | PresentVerb if after_modal => Verb,
        Verb | PresentVerb if after_nominal_modifier => Noun,
        ThirdPersonVerb if after_nominal_modifier && !is_auxiliary(lower) => PluralNoun,
        Gerund if matches!(previous, Determiner | PossessivePronoun | Adjective) => Noun,
        PastTense if matches!(previous, Determiner | PossessivePronoun) => Adjective,
        PastTense if after_auxiliary => PastParticiple,
        Verb if matches!(previous, PersonalPronoun | PluralNoun)
            && !matches!(previous_lower, "he" | "she" | "it") =>
        {
            PresentVerb
        }
        Possessive if matches!(previous, PersonalPronoun | Existential | WhPronoun | WhAdverb) => {
            ThirdPersonVerb
        }
        Determiner if lower == "that" && matches!(previous, Noun | PluralNoun) => WhDeterminer,
        other => other,
    }
}

fn is_auxiliary(lower: &str) -> bool {
    matches!(
        lower,
        "is" | "are" | "am" | "was" | "were" | "be" | "been" | "being" | "has" | "have" | "had"
            | "having" | "'ve" | "'re" | "'m"
    )
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    let tag = match word {
        "." | "!" | "?" | "?!" | "!?" => PosTag::Terminator,
        "," => PosTag::Comma,
        ":" | ";" | "-" | "--" | "..." => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenBracket,
        ")" | "]" | "}" => PosTag::CloseBracket,
        "``" | "`" => PosTag::OpenQuote,
        "''" | "'" => PosTag::CloseQuote,
        "$" => PosTag::Dollar,
        "#" => PosTag::Hash,
        other if !other.is_empty() && other.chars().all(|ch| ch.is_ascii_punctuation()) => {
            PosTag::Symbol
        }
        _ => return None,
    };
    Some(tag)
}

fn is_numeric(word: &str) -> bool {
    let body = word.strip_suffix('s').unwrap_or(word);
    body.chars().any(|ch| ch.is_ascii_digit())
        && body
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '%' | '-' | '/' | ':'))
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2
        && word.chars().all(|ch| ch.is_alphabetic())
        && word.chars().all(|ch| ch.is_uppercase())
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn closed_class_tag(lower: &str) -> Option<PosTag> {
    use PosTag::*;

    let tag = match lower {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "each" | "every" | "some"
        | "any" | "no" | "another" | "either" | "neither" | "all" | "both" => Determiner,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "himself" | "herself" | "itself" | "ourselves"
        | "themselves" => PersonalPronoun,
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => PossessivePronoun,
        "can" | "could" | "may" | "might" | "must" | "shall" | "should" | "will" | "would"
        | "ca" | "wo" | "'ll" | "'d" => Modal,
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "about" | "against" | "between"
        | "into" | "through" | "during" | "before" | "after" | "above" | "below" | "from"
        | "over" | "under" | "since" | "without" | "within" | "because" | "although"
        | "though" | "while" | "if" | "than" | "as" | "like" | "upon" | "toward" | "towards"
        | "among" | "amongst" | "per" | "via" | "whether" | "unless" | "until" | "across"
        | "behind" | "beyond" | "despite" | "near" | "onto" | "throughout" | "around"
        | "along" | "beside" | "besides" | "except" | "inside" | "outside" | "off" | "out"
        | "up" | "down" => Preposition,
        "and" | "or" | "but" | "nor" | "yet" | "&" => CoordinatingConjunction,
        "to" => To,
        "there" => Existential,
        "which" | "whichever" => WhDeterminer,
        "who" | "whom" | "what" | "whoever" => WhPronoun,
        "whose" => PossessiveWhPronoun,
        "when" | "where" | "why" | "how" | "whenever" | "wherever" => WhAdverb,
        "not" | "n't" | "very" | "also" | "often" | "always" | "never" | "too" | "only"
        | "just" | "quite" | "rather" | "already" | "still" | "even" | "here" | "now" | "then"
        | "soon" | "however" | "perhaps" | "almost" | "again" | "ever" | "instead" | "thus"
        | "therefore" | "so" | "well" | "indeed" => Adverb,
        "more" | "less" | "better" | "worse" => ComparativeAdjective,
        "most" | "least" | "best" | "worst" => SuperlativeAdjective,
        "many" | "few" | "several" | "other" | "such" | "same" | "own" | "much" => Adjective,
        "yes" | "oh" | "hello" => Interjection,
        "is" | "has" | "does" => ThirdPersonVerb,
        "are" | "am" | "have" | "do" | "'re" | "'m" | "'ve" => PresentVerb,
        "was" | "were" | "had" | "did" => PastTense,
        "be" => Verb,
        "been" => PastParticiple,
        "being" | "having" | "doing" => Gerund,
        "'s" => Possessive,
        _ => return None,
    };
    Some(tag)
}

fn open_class_tag(lower: &str) -> Option<PosTag> {
    if VERB_LEMMAS.contains(&lower) {
        return Some(PosTag::Verb);
    }
    if IRREGULAR_PAST.contains(&lower) {
        return Some(PosTag::PastTense);
    }
    if IRREGULAR_PARTICIPLES.contains(&lower) {
        return Some(PosTag::PastParticiple);
    }
    if ADJECTIVES.contains(&lower) {
        return Some(PosTag::Adjective);
    }
    if let Some(tag) = adjective_degree(lower) {
        return Some(tag);
    }
    if is_third_person_form(lower) {
        return Some(PosTag::ThirdPersonVerb);
    }
    None
}

fn adjective_degree(lower: &str) -> Option<PosTag> {
    for (suffix, tag) in [
        ("est", PosTag::SuperlativeAdjective),
        ("er", PosTag::ComparativeAdjective),
    ] {
        let Some(stem) = lower.strip_suffix(suffix) else {
            continue;
        };
        if stem.len() < 2 {
            continue;
        }

        let mut candidates = vec![stem.to_string(), format!("{stem}e")];
        if let Some(base) = stem.strip_suffix('i') {
            candidates.push(format!("{base}y"));
        }
        let mut tail = stem.chars().rev();
        if let (Some(last), Some(before)) = (tail.next(), tail.next())
            && last == before
        {
            candidates.push(stem[..stem.len() - last.len_utf8()].to_string());
        }

        if candidates
            .iter()
            .any(|candidate| ADJECTIVES.contains(&candidate.as_str()))
        {
            return Some(tag);
        }
    }
    None
}

fn is_third_person_form(lower: &str) -> bool {
    let mut stems = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        stems.push(stem.to_string());
    }

    stems
        .iter()
        .any(|stem| VERB_LEMMAS.contains(&stem.as_str()))
}

fn suffix_tag(lower: &str) -> Option<PosTag> {
    if SUFFIX_EXCEPTIONS.contains(&lower) {
        return Some(default_noun_tag(lower));
    }

    let length = lower.chars().count();
    if length > 4 && lower.ends_with("ly") {
        return Some(PosTag::Adverb);
    }
    if length > 4 && lower.ends_with("ing") {
        return Some(PosTag::Gerund);
    }
    if length > 4 && lower.ends_with("eed") {
        let verb = lower.strip_suffix('d').is_some_and(|stem| VERB_LEMMAS.contains(&stem));
        return Some(if verb { PosTag::PastTense } else { PosTag::Noun });
    }
    if length > 4 && lower.ends_with("ed") {
        return Some(PosTag::PastTense);
    }
    if length > 5
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return Some(PosTag::Adjective);
    }
    None
}

fn default_noun_tag(lower: &str) -> PosTag {
    let plural = lower.chars().count() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|suffix| lower.ends_with(suffix));
    if plural {
        PosTag::PluralNoun
    } else {
        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::tokenizer::split_words;

    fn tags_for(sentence: &str) -> Vec<&'static str> {
        tags_with(sentence, &NlpResources::builtin())
    }

    fn tags_with(sentence: &str, resources: &NlpResources) -> Vec<&'static str> {
        tag_words(&split_words(sentence), resources)
            .into_iter()
            .map(|tagged| tagged.tag.as_str())
            .collect()
    }

    #[test]
    fn tags_modal_clause() {
        assert_eq!(
            tags_for("AI should replace doctors."),
            vec!["NNP", "MD", "VB", "NNS", "."]
        );
    }

    #[test]
    fn tags_copular_clause() {
        assert_eq!(tags_for("The sky is blue."), vec!["DT", "NN", "VBZ", "JJ", "."]);
    }

    #[test]
    fn noun_after_modal_becomes_verb() {
        assert_eq!(
            tags_for("We will benefit from cheaper energy"),
            vec!["PRP", "MD", "VB", "IN", "JJR", "NN"]
        );
    }

    #[test]
    fn verb_after_determiner_becomes_noun() {
        assert_eq!(tags_for("the use of data"), vec!["DT", "NN", "IN", "NN"]);
    }

    #[test]
    fn past_form_after_auxiliary_is_participle() {
        assert_eq!(
            tags_for("Prices have increased sharply"),
            vec!["NNS", "VBP", "VBN", "RB"]
        );
    }

    #[test]
    fn plural_subject_takes_present_verb() {
        assert_eq!(
            tags_for("Doctors use AI daily"),
            vec!["NNS", "VBP", "NNP", "RB"]
        );
    }

    #[test]
    fn clitic_after_pronoun_is_verb() {
        assert_eq!(tags_for("It's 3 o'clock"), vec!["PRP", "VBZ", "CD", "NN"]);
    }

    #[test]
    fn lexicon_override_wins() {
        let resources = NlpResources::builtin().with_lexicon_entry("sky", PosTag::Adjective);
        assert_eq!(
            tags_with("The sky is blue.", &resources),
            vec!["DT", "JJ", "VBZ", "JJ", "."]
        );
    }

    #[test]
    fn doubled_final_letter_is_undone_for_degrees() {
        assert_eq!(adjective_degree("bigger"), Some(PosTag::ComparativeAdjective));
        assert_eq!(adjective_degree("hottest"), Some(PosTag::SuperlativeAdjective));
    }

    #[test]
    fn multibyte_stems_are_handled_by_char() {
        assert_eq!(adjective_degree("\u{5555}er"), None);
        assert_eq!(adjective_degree("\u{5555}\u{5555}est"), None);
        assert_eq!(tags_for("Visit the \u{5555}er today.").len(), 5);
    }

    #[test]
    fn capitalised_words_mid_sentence_are_proper_nouns() {
        assert_eq!(
            tags_for("Officials from Paris visited Berlin"),
            vec!["NNS", "IN", "NNP", "VBD", "NNP"]
        );
    }
}
