/// Palette id derivation: lower-cases `name` and turns every space into a hyphen.
///
/// Nothing else is touched: punctuation, tabs and non-ASCII letters pass
/// through as-is, and runs of spaces become runs of hyphens. The result is
/// stored as the palette id, so this must stay stable.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn replaces_spaces_and_lowercases() {
        assert_eq!(slugify("Dark Wonderland"), "dark-wonderland");
        assert_eq!(slugify("Ocean Blues"), "ocean-blues");
    }

    #[test]
    fn keeps_every_space_and_other_characters() {
        assert_eq!(slugify("  Red  "), "--red--");
        assert_eq!(slugify("Rock & Roll!"), "rock-&-roll!");
        assert_eq!(slugify("tab\there"), "tab\there");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(slugify("Same Name"), slugify("Same Name"));
    }
}
