use crate::ir::Rejection;
use regex::Regex;
use std::sync::LazyLock;

static RE_GROUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@bugurt_thread").unwrap());
static RE_SPAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"://|#БТnews|(?i:\[club\d+\|.+\])").unwrap());

pub fn strip_group_tag(text: &str) -> String {
    RE_GROUP_TAG.replace_all(text, "").into_owned()
}

/// Removes the group self-mention and decides whether the post is worth
/// normalizing. On success the tag-stripped text is returned for the
/// line stages.
pub fn screen(raw: &str) -> Result<String, Rejection> {
    let text = strip_group_tag(raw);
    if !text.contains(['@', '>']) {
        return Err(Rejection::NoMarkers);
    }
    if RE_SPAM.is_match(&text) {
        return Err(Rejection::Spam);
    }
    Ok(text)
}
