pub const PEST_ADVICE: &str = "Common pests: aphids, caterpillars, fungal infections. Try neem oil spray, manual removal, and ensure good airflow.";
pub const FERTILIZER_ADVICE: &str = "General fertilizer advice: use NPK balanced fertilizer; apply during active growth; organic compost improves soil long-term.";
pub const SEASONAL_ADVICE: &str = "Seasonal suggestion: plant quick-growing leafy greens in short rainy seasons; choose drought-tolerant varieties in hot months.";
pub const FALLBACK_ADVICE: &str = "For best results, describe the crop, symptoms, and local climate. You can also upload a photo in Urban mode for quick analysis.";

/// A canned answer triggered by any of its keywords.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl Rule {
    /// `prompt` must already be lower-cased.
    fn matches(&self, prompt: &str) -> bool {
        self.keywords.iter().any(|k| prompt.contains(k))
    }
}

/// Evaluated top to bottom; the first match wins.
pub const RULES: [Rule; 3] = [
    Rule {
        keywords: &["pest", "hole", "yellow"],
        response: PEST_ADVICE,
    },
    Rule {
        keywords: &["fert", "nitrogen", "fertil"],
        response: FERTILIZER_ADVICE,
    },
    Rule {
        keywords: &["season", "plant"],
        response: SEASONAL_ADVICE,
    },
];

/// Canned advice for a free-text prompt. Never fails.
pub fn reply(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&prompt))
        .map_or(FALLBACK_ADVICE, |rule| rule.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pest_rule_wins_over_season() {
        assert_eq!(reply("I see yellow spots and it's pest season"), PEST_ADVICE);
    }

    #[test]
    fn test_fertilizer_question() {
        assert_eq!(reply("What fertilizer schedule?"), FERTILIZER_ADVICE);
    }

    #[test]
    fn test_unmatched_prompt_falls_back() {
        assert_eq!(reply("hello"), FALLBACK_ADVICE);
        assert_eq!(reply(""), FALLBACK_ADVICE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(reply("HOLES in my leaves"), PEST_ADVICE);
        assert_eq!(reply("Need NITROGEN"), FERTILIZER_ADVICE);
        assert_eq!(reply("When to PLANT beans?"), SEASONAL_ADVICE);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "planting" contains "plant", "pesticide" contains "pest".
        assert_eq!(reply("planting calendar"), SEASONAL_ADVICE);
        assert_eq!(reply("which pesticide"), PEST_ADVICE);
    }

    #[test]
    fn test_fertilizer_wins_over_season() {
        assert_eq!(reply("fertilize before the planting season"), FERTILIZER_ADVICE);
    }

    #[test]
    fn test_every_answer_is_one_of_four() {
        let answers = [PEST_ADVICE, FERTILIZER_ADVICE, SEASONAL_ADVICE, FALLBACK_ADVICE];
        for prompt in ["", "  ", "🌽", "rain", "Yellowing", "Season", "çà"] {
            assert!(answers.contains(&reply(prompt)), "{prompt:?}");
        }
    }
}
