use crate::toc::types::{HeadingMatch, TocMarkup};

/// Render the listing fragment for `headings`.
///
/// The intro label is plain text and gets escaped; heading text already is
/// HTML and is emitted as found.
pub fn render_listing(headings: &[HeadingMatch], intro_label: &str, markup: &TocMarkup) -> String {
    let mut html = format!(
        "<p class='{}'>{}</p>\n<ol class='{}'>\n",
        markup.title_class,
        html_escape::encode_text(intro_label),
        markup.list_class
    );

    for heading in headings {
        html.push_str(&format!(
            "<li class='{}{}'><a class='{}' href='#{}'>{}</a></li>\n",
            markup.item_class_prefix,
            heading.level.tag(),
            markup.link_class,
            heading.slug,
            heading.inner_text
        ));
    }

    html.push_str("</ol>\n");
    html
}

/// Render the block that replaces a heading: an empty anchor directly
/// followed by the heading with its inline markup dropped
pub fn render_replacement(heading: &HeadingMatch, markup: &TocMarkup) -> String {
    let tag = heading.level.tag();
    format!(
        "<span class='{}' id='{}'></span><{tag}>{}</{tag}>",
        markup.anchor_class, heading.slug, heading.inner_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::level::HeadingLevel;

    fn heading(level: HeadingLevel, text: &str, slug: &str) -> HeadingMatch {
        HeadingMatch {
            level,
            span: 0..0,
            raw_block: String::new(),
            inner_text: text.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_render_listing() {
        let headings = vec![
            heading(HeadingLevel::H2, "Intro", "index-intro"),
            heading(HeadingLevel::H4, "Deep", "index-deep"),
        ];
        let html = render_listing(&headings, "Contents & more", &TocMarkup::default());

        assert!(html.starts_with("<p class='title-table-content'>Contents &amp; more</p>"));
        assert!(html.contains("<ol class='table-content'>"));
        assert!(html.contains(
            "<li class='index-header-h2'><a class='index-header-link' href='#index-intro'>Intro</a></li>"
        ));
        assert!(html.contains("<li class='index-header-h4'>"));
        assert!(html.find("Intro").unwrap() < html.find("Deep").unwrap());
        assert!(html.ends_with("</ol>\n"));
    }

    #[test]
    fn test_render_replacement() {
        let block = render_replacement(
            &heading(HeadingLevel::H3, "Setup", "index-setup"),
            &TocMarkup::default(),
        );
        assert_eq!(
            block,
            "<span class='index-anchor' id='index-setup'></span><h3>Setup</h3>"
        );
    }

    #[test]
    fn test_custom_classes() {
        let markup = TocMarkup {
            anchor_class: "anchor".to_string(),
            ..TocMarkup::default()
        };
        let block = render_replacement(&heading(HeadingLevel::H2, "A", "toc-a"), &markup);
        assert!(block.starts_with("<span class='anchor' id='toc-a'>"));
    }
}
