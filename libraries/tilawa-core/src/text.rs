//! Plain-text helpers for upstream verse content.
//!
//! Translation texts arrive with inline HTML: footnote markers such as
//! `<sup foot_note=1234>1</sup>` and the occasional `<i>` or `<span>`.
//! Terminal output and shared text want none of that.

/// Strip markup from a translation text.
///
/// Footnote markers (`<sup>...</sup>`) are dropped together with their
/// content, other tags are removed while their content is kept, a handful of
/// common entities are decoded and runs of whitespace collapse to one space.
pub fn plain_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tag = &rest[start..];

        if tag.starts_with("<sup") {
            match tag.find("</sup>") {
                Some(end) => rest = &tag[end + "</sup>".len()..],
                None => {
                    rest = "";
                }
            }
            continue;
        }

        match tag.find('>') {
            Some(end) => rest = &tag[end + 1..],
            None => {
                // Unterminated tag, keep the text as-is
                out.push_str(tag);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_footnotes_with_their_markers() {
        let raw = "Allah - there is no deity except Him,<sup foot_note=\"1\">1</sup> the Ever-Living";
        assert_eq!(
            plain_text(raw),
            "Allah - there is no deity except Him, the Ever-Living"
        );
    }

    #[test]
    fn keeps_content_of_other_tags() {
        assert_eq!(plain_text("In the <i>name</i> of God"), "In the name of God");
    }

    #[test]
    fn decodes_entities_and_collapses_whitespace() {
        assert_eq!(plain_text("a&nbsp;&amp;   b\n c"), "a & b c");
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(plain_text("x < y"), "x < y");
    }

    #[test]
    fn plain_input_is_unchanged() {
        assert_eq!(plain_text("Praise be to God"), "Praise be to God");
    }
}
