// Name normalization for fuzzy matching of ODsay route and stop names.

/// Canonicalizes a route or stop name for substring comparison.
///
/// ODsay names vary in spacing and parenthetical annotations
/// ("273" vs "273 (간선)"), and riders tack the counter suffix '번' onto
/// bus numbers ("401번"). Stripping parens, whitespace and that suffix
/// makes a plain `contains` check good enough here.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(text) => text
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '번'))
            .collect(),
    }
}
