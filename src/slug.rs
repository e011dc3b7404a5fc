use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9-]+").expect("valid slug pattern"));
static REPEATED_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("-{2,}").expect("valid dash pattern"));

/// Derives a URL slug from a title.
///
/// Every run of characters outside `[A-Za-z0-9-]` becomes a single `-`, then
/// runs of dashes are collapsed. Case is preserved and leading or trailing
/// dashes are kept. Diacritics are not transliterated: `é` is treated like
/// any other non-ASCII character and replaced.
pub fn slugify(title: &str) -> String {
    let replaced = DISALLOWED.replace_all(title, "-");
    REPEATED_DASHES.replace_all(&replaced, "-").into_owned()
}
