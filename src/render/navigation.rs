//! Navigation menu markup.

use super::markup::{class_attr, escape_html, render_each};
use crate::models::NavItem;

/// One `<li>` per entry in configuration order; entries for which
/// `is_active` holds carry the `active` marker.
pub fn render_navigation(items: &[NavItem], is_active: impl Fn(&str) -> bool) -> String {
    render_each(items, |item| {
        let active = if is_active(&item.id) { "active" } else { "" };
        format!(
            r##"<li><a href="#{id}"{class}><i class="{icon}"></i> {label}</a></li>"##,
            id = escape_html(&item.id),
            class = class_attr(&[active]),
            icon = escape_html(&item.icon),
            label = escape_html(&item.label),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(id: &str, label: &str) -> NavItem {
        NavItem {
            id: id.to_string(),
            icon: format!("fa fa-{}", id),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_marks_active_entry_in_order() {
        let html = render_navigation(&[nav("home", "Home"), nav("about", "About")], |id| id == "home");
        assert_eq!(
            html,
            concat!(
                r##"<li><a href="#home" class="active"><i class="fa fa-home"></i> Home</a></li>"##,
                r##"<li><a href="#about"><i class="fa fa-about"></i> About</a></li>"##,
            )
        );
    }

    #[test]
    fn test_no_entry_active_for_unknown_id() {
        let html = render_navigation(&[nav("home", "Home")], |id| id == "blog");
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_empty_navigation() {
        assert_eq!(render_navigation(&[], |_| true), "");
    }
}
