//! Sentence and word segmentation following Punkt-style boundary rules and
//! Penn Treebank token conventions.

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}'];
const OPENERS: &[char] = &['(', '[', '{', '"', '\'', '`', '\u{201c}', '\u{2018}'];
const TRAILING: &[char] = &[
    ')', ']', '}', '"', '\'', '\u{201d}', '\u{2019}', ',', ';', ':', '!', '?',
];
const CONTRACTION_SUFFIXES: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Lowercase forms, without the final period, that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "dept", "est", "approx", "fig", "gen", "gov", "rep", "sen", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
    "a.m", "p.m",
];

/// Abbreviations that only hold before a number, as in "No. 5".
const NUMBER_ABBREVIATIONS: &[&str] = &["no", "nos"];

/// Splits `text` into trimmed, non-empty sentences in source order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !TERMINATORS.contains(&ch) {
            continue;
        }

        let mut end = index + ch.len_utf8();
        let mut period_only = ch == '.';
        while let Some(&(next_index, next)) = chars.peek() {
            if TERMINATORS.contains(&next) {
                period_only &= next == '.';
            } else if !CLOSERS.contains(&next) {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }

        let rest = &text[end..];
        let at_boundary = match rest.chars().next() {
            None => true,
            Some(next) if next.is_whitespace() => !period_only || starts_new_sentence(rest),
            Some(_) => false,
        };
        if !at_boundary {
            continue;
        }
        if period_only && ends_with_abbreviation(&text[start..index], rest) {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn starts_new_sentence(rest: &str) -> bool {
    match rest.trim_start().chars().next() {
        None => true,
        Some(next) => !next.is_lowercase(),
    }
}

fn ends_with_abbreviation(before_period: &str, after_period: &str) -> bool {
    let word = before_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(OPENERS);

    if word.is_empty() {
        return false;
    }

    let lower = word.to_lowercase();
    if NUMBER_ABBREVIATIONS.contains(&lower.as_str()) {
        return after_period
            .trim_start()
            .starts_with(|ch: char| ch.is_ascii_digit());
    }

    // The pronoun "I" is not an initial.
    let mut letters = word.chars();
    let single_initial = matches!(
        (letters.next(), letters.next()),
        (Some(first), None) if first.is_alphabetic() && first != 'I'
    );

    single_initial || ABBREVIATIONS.contains(&lower.as_str())
}

/// Splits one sentence into word and punctuation tokens.
///
/// Opening and closing punctuation is split off each whitespace chunk,
/// double quotes become the Treebank `` and '' tokens, clitics such as `n't`
/// and `'s` become separate tokens, and a period is split off only at the end
/// of the sentence so abbreviations keep theirs.
pub fn split_words(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut tokens = Vec::new();

    for (position, chunk) in chunks.iter().enumerate() {
        let is_last = position + 1 == chunks.len();
        split_chunk(chunk, is_last, &mut tokens);
    }

    tokens
}

fn split_chunk(chunk: &str, is_last: bool, tokens: &mut Vec<String>) {
    let mut core = chunk;

    while let Some(first) = core.chars().next() {
        if !OPENERS.contains(&first) || core.len() == first.len_utf8() && !is_quote(first) {
            break;
        }
        tokens.push(opening_token(first));
        core = &core[first.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
        let Some(last) = core.chars().last() else {
            break;
        };
        if core == "..." {
            break;
        }
        let peel_period = last == '.' && (is_last || core.ends_with("...")) && core.len() > 1;
        if !(TRAILING.contains(&last) || peel_period) {
            break;
        }
        if core.ends_with("...") && core.len() > 3 {
            trailing.push("...".to_string());
            core = &core[..core.len() - 3];
            continue;
        }
        if core.len() == last.len_utf8() {
            break;
        }
        trailing.push(closing_token(last));
        core = &core[..core.len() - last.len_utf8()];
    }

    if !core.is_empty() {
        split_contraction(core, tokens);
    }

    tokens.extend(trailing.into_iter().rev());
}

fn split_contraction(word: &str, tokens: &mut Vec<String>) {
    let normalised = word.replace('\u{2019}', "'");
    let lower = normalised.to_lowercase();

    if lower.ends_with("n't") && lower.len() > 3 {
        let split = normalised.len() - 3;
        tokens.push(normalised[..split].to_string());
        tokens.push(normalised[split..].to_string());
        return;
    }

    for suffix in CONTRACTION_SUFFIXES {
        if lower.ends_with(suffix) && lower.len() > suffix.len() {
            let split = normalised.len() - suffix.len();
            tokens.push(normalised[..split].to_string());
            tokens.push(normalised[split..].to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}

fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\u{201c}' | '\u{201d}')
}

fn opening_token(ch: char) -> String {
    match ch {
        '"' | '\u{201c}' => "``".to_string(),
        '\u{2018}' => "`".to_string(),
        other => other.to_string(),
    }
}

fn closing_token(ch: char) -> String {
    match ch {
        '"' | '\u{201d}' => "''".to_string(),
        '\u{2019}' => "'".to_string(),
        other => other.to_string(),
    }
}

/// True when every character of `token` is ASCII punctuation.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_punctuation())
}
