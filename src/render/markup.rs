//! Markup helpers shared by the section renderers.

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render each item and concatenate the fragments
pub fn render_each<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect()
}

/// ` class="..."` for non-empty class lists, nothing otherwise
pub fn class_attr(classes: &[&str]) -> String {
    let joined = classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_class_attr() {
        assert_eq!(class_attr(&[]), "");
        assert_eq!(class_attr(&["", ""]), "");
        assert_eq!(class_attr(&["portfolio-item", "", "show"]), r#" class="portfolio-item show""#);
    }

    #[test]
    fn test_render_each_preserves_order() {
        let out = render_each(&[1, 2, 3], |n| format!("<{}>", n));
        assert_eq!(out, "<1><2><3>");
        assert_eq!(render_each::<u8>(&[], |_| unreachable!()), "");
    }
}
