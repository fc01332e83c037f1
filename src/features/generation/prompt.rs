pub const DEFAULT_SIDE: &str = "For";

/// Builds the generation prompt; `side` biases Persona A's opening turn.
pub fn build_debate_prompt(article: &str, side: &str) -> String {
    let side_lower = side.to_lowercase();
    format!(
        r#"
You are a debate generator. Your task:

1. Extract exactly 3-4 debatable key claims from the text.
2. Generate a short debate (2 exchanges, max 3 sentences each) between:
   - Persona A (supports claims)
   - Persona B (challenges claims)

If side is "{side}", make Persona A argue for {side_lower} in the first turn.

Output ONLY in this format:

Key Claims:
1. [Claim 1]
2. [Claim 2]
3. [Claim 3]

Debate:
Persona A: [Opening statement]
Persona B: [Counter-argument]
Persona A: [Rebuttal]
Persona B: [Final counter-rebuttal]

Article:
{article}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn against_side_instructs_persona_a() {
        let prompt = build_debate_prompt("Cities should ban cars.", "Against");
        assert!(prompt.contains("If side is \"Against\", make Persona A argue for against in the first turn."));
    }

    #[test]
    fn article_closes_the_prompt() {
        let prompt = build_debate_prompt("Cities should ban cars.", DEFAULT_SIDE);
        assert!(prompt.ends_with("Article:\nCities should ban cars.\n"));
        assert!(prompt.contains("argue for for in the first turn"));
        assert!(prompt.contains("Extract exactly 3-4 debatable key claims"));
    }
}
