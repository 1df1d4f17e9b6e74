/// Reader profiles and the stylistic clause each one adds to the prompt.
pub const TARGET_AUDIENCES: &[(&str, &str)] = &[
    (
        "child",
        "Use the simplest possible vocabulary, speak kindly, and break the translation into short sentences.",
    ),
    (
        "teen",
        "Use friendly vocabulary and a style that a teenager can easily follow.",
    ),
    (
        "adult",
        "Use natural, easy-to-understand expressions and give an accurate, clear translation.",
    ),
    (
        "expert",
        "Use technical terms and expressions precisely and faithfully reflect the academic or professional context.",
    ),
];

/// Look up the instruction clause for an audience key. Unknown keys yield an empty clause.
pub fn audience_instructions(audience: &str) -> &'static str {
    TARGET_AUDIENCES
        .iter()
        .find(|(key, _)| *key == audience)
        .map(|(_, instructions)| *instructions)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_audiences_resolve() {
        for key in ["child", "teen", "adult", "expert"] {
            assert!(!audience_instructions(key).is_empty(), "{key} has no instructions");
        }
    }

    #[test]
    fn test_unknown_audience_is_empty() {
        assert_eq!(audience_instructions("martian"), "");
        assert_eq!(audience_instructions(""), "");
        assert_eq!(audience_instructions("Adult"), "");
    }
}
