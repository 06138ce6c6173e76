// src/core/html.rs
use html5ever::{
    driver::{self, ParseOpts},
    tendril::TendrilSink,
    tree_builder::TreeBuilderOpts,
};
use scraper::{Html, HtmlTreeSink, Selector};

/// Parse as a non-scripting user agent would, so `<noscript>` content is
/// real markup instead of a text blob.
fn parse(doc: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(doc)
}

/// Every non-blank `<img src>` in the document, in document order.
///
/// Values are returned trimmed but otherwise raw (relative paths, duplicates
/// and all). html5ever never rejects input, so there is no error case here.
pub fn image_sources(doc: &str) -> Vec<String> {
    let document = parse(doc);
    let Ok(selector) = Selector::parse("img[src]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| s!(src))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let doc = r#"
            <html><body>
              <img src="a.png"><p>text</p>
              <div><IMG SRC="/b.jpg" alt="b"></div>
              <img src="a.png">
            </body></html>"#;
        assert_eq!(image_sources(doc), vec!["a.png", "/b.jpg", "a.png"]);
    }

    #[test]
    fn includes_images_inside_noscript() {
        let doc = r#"
            <img src="lazy-placeholder.gif">
            <noscript><img src="real.jpg"></noscript>
            <template><img src="tpl.png"></template>"#;
        assert_eq!(image_sources(doc), vec!["lazy-placeholder.gif", "real.jpg", "tpl.png"]);
    }

    #[test]
    fn skips_missing_and_blank_src() {
        let doc = r#"<img alt="none"><img src="   "><img src=" c.gif "><script src="x.js"></script>"#;
        assert_eq!(image_sources(doc), vec!["c.gif"]);
    }

    #[test]
    fn tolerates_broken_markup() {
        let doc = r#"<div><p><img src="one.png"><span><img src=two.png></div>"#;
        assert_eq!(image_sources(doc), vec!["one.png", "two.png"]);
    }

    #[test]
    fn no_images() {
        assert!(image_sources("<html><body><p>hello</p></body></html>").is_empty());
    }
}
