//! Home section markup.

use super::markup::{escape_html, render_each};
use crate::models::HomeConfig;

/// Class of the element the typing widget writes into
pub const TYPING_TARGET_CLASS: &str = "iTyped";

pub fn render_home(home: &HomeConfig) -> String {
    let social = render_each(&home.social_links, |link| {
        format!(
            r#"<a href="{}" target="_blank"><i class="{}"></i></a>"#,
            escape_html(&link.url),
            escape_html(&link.icon),
        )
    });

    format!(
        r#"<div class="intro"><img src="{image}" alt="profile" class="shadow-dark"><h1>{name}</h1><span class="{typing}"></span><div class="social-links">{social}</div></div>"#,
        image = escape_html(&home.image),
        name = escape_html(&home.name),
        typing = TYPING_TARGET_CLASS,
        social = social,
    )
}

/// Static text shown in the typing placeholder when the widget cannot run
pub fn typing_fallback(home: &HomeConfig) -> Option<&str> {
    home.typing_text.first().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SocialLink;

    #[test]
    fn test_render_home() {
        let home = HomeConfig {
            image: "img/me.jpg".to_string(),
            name: "Ada <Lovelace>".to_string(),
            typing_text: vec!["Engineer".to_string()],
            social_links: vec![SocialLink {
                url: "https://github.com/ada".to_string(),
                icon: "fa fa-github".to_string(),
            }],
        };
        let html = render_home(&home);

        assert!(html.contains(r#"<img src="img/me.jpg" alt="profile""#));
        assert!(html.contains("<h1>Ada &lt;Lovelace&gt;</h1>"));
        assert!(html.contains(r#"<span class="iTyped"></span>"#));
        assert!(html.contains(r#"<a href="https://github.com/ada" target="_blank"><i class="fa fa-github"></i></a>"#));
    }

    #[test]
    fn test_render_home_without_links() {
        let html = render_home(&HomeConfig::default());
        assert!(html.contains(r#"<div class="social-links"></div>"#));
    }

    #[test]
    fn test_typing_fallback() {
        let mut home = HomeConfig::default();
        assert_eq!(typing_fallback(&home), None);
        home.typing_text = vec!["Data Science".to_string(), "AI".to_string()];
        assert_eq!(typing_fallback(&home), Some("Data Science"));
    }
}
