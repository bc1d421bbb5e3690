//! Blog list and post markup.

use super::markup::{escape_html, render_each};
use crate::models::{BlogEntry, BlogPost};

/// Back control shared by the post and error views
const BACK_BUTTON: &str = r#"<button id="back-to-list" class="btn">Back to Blog List</button>"#;

pub fn render_blog_list(entries: &[BlogEntry]) -> String {
    render_each(entries, |blog| {
        let tags = blog
            .tags
            .iter()
            .map(|tag| format!(r##"<a href="#">{}</a>"##, escape_html(tag)))
            .collect::<Vec<_>>()
            .join(" , ");
        format!(
            concat!(
                r#"<div class="blog-item padd-15" data-blog="{file}"><div class="blog-item-inner shadow-dark">"#,
                r#"<div class="blog-img"><img src="{image}" alt="{title}"><div class="blog-date">{date}</div></div>"#,
                r#"<div class="blog-info"><h4 class="blog-title">{title}</h4><p class="blog-description">{summary}</p><p class="blog-tags">Tags : {tags}</p></div>"#,
                r#"</div></div>"#,
            ),
            file = escape_html(&blog.file),
            image = escape_html(&blog.image),
            title = escape_html(&blog.title),
            date = escape_html(&blog.date),
            summary = escape_html(&blog.summary),
            tags = tags,
        )
    })
}

/// Post view; `content` is pre-formatted markup and inserted as is
pub fn render_blog_post(post: &BlogPost) -> String {
    format!(
        r#"<div class="blog-post"><h1>{}</h1><p class="blog-post-date"><em>{}</em></p><div class="blog-post-content">{}</div>{}</div>"#,
        escape_html(&post.title),
        escape_html(&post.date),
        post.content,
        BACK_BUTTON,
    )
}

pub fn render_blog_error() -> String {
    format!(
        r#"<div class="blog-error"><p>Sorry, this blog post could not be loaded. Please try again later.</p>{}</div>"#,
        BACK_BUTTON
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::BlogIndex;

    fn entry(title: &str, date: &str) -> BlogEntry {
        BlogEntry {
            title: title.to_string(),
            date: date.to_string(),
            summary: format!("About {}", title),
            tags: vec!["rust".to_string(), "web".to_string()],
            image: "img/blog.jpg".to_string(),
            file: format!("blogs/{}.json", title),
        }
    }

    #[test]
    fn test_newer_entry_rendered_first() {
        let index = BlogIndex::from_entries(vec![entry("winter", "2024-01-01"), entry("summer", "2024-06-01")]);
        let html = render_blog_list(index.list());

        let summer = html.find("blogs/summer.json").unwrap();
        let winter = html.find("blogs/winter.json").unwrap();
        assert!(summer < winter);
    }

    #[test]
    fn test_entry_markup() {
        let html = render_blog_list(&[entry("intro", "2024-06-01")]);
        assert!(html.contains(r#"data-blog="blogs/intro.json""#));
        assert!(html.contains(r#"<div class="blog-date">2024-06-01</div>"#));
        assert!(html.contains(r##"Tags : <a href="#">rust</a> , <a href="#">web</a>"##));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_blog_list(&[]), "");
    }

    #[test]
    fn test_post_content_inserted_verbatim() {
        let post = BlogPost {
            title: "A & B".to_string(),
            date: "2024-06-01".to_string(),
            content: "<p>Hello <b>world</b></p>".to_string(),
        };
        let html = render_blog_post(&post);
        assert!(html.contains("<h1>A &amp; B</h1>"));
        assert!(html.contains(r#"<div class="blog-post-content"><p>Hello <b>world</b></p></div>"#));
        assert!(html.contains(r#"id="back-to-list""#));
    }

    #[test]
    fn test_error_view_has_back_control() {
        let html = render_blog_error();
        assert!(html.contains("could not be loaded"));
        assert!(html.contains(r#"id="back-to-list""#));
    }
}
