use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip HTML tags from text, leaving entities untouched
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Generate a namespaced anchor slug from heading text.
///
/// Markup is stripped and entities decoded before normalising, so
/// `Caf&eacute; &amp; <em>Cream</em>` and `Café & Cream` produce the same
/// slug. Text with nothing sluggable yields `"{namespace}-"`.
pub fn generate_slug(text: &str, namespace: &str) -> String {
    let plain = strip_html_tags(text);
    let decoded = html_escape::decode_html_entities(&plain);
    format!("{}-{}", namespace, slug::slugify(&decoded))
}
