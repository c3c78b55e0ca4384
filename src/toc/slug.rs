/// Converts heading text into a URL-fragment-safe anchor slug: lowercased,
/// non-alphanumeric runs collapsed to a single `-`, outer separators stripped.
/// Identical titles produce identical slugs; collisions are not de-duplicated.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
