//! Portfolio section markup.
//!
//! Filter buttons carry `data-filter`, cards carry `data-category` and
//! `data-index`; the filter and lightbox act on those attributes.

use super::markup::{class_attr, escape_html};
use crate::gallery::PortfolioFilter;
use crate::models::PortfolioConfig;

pub fn render_portfolio(portfolio: &PortfolioConfig, filter: &PortfolioFilter) -> String {
    let buttons: String = portfolio
        .filters
        .iter()
        .map(|button| {
            let active = if filter.is_highlighted(&button.id) { "active" } else { "" };
            format!(
                r#"<button type="button"{class} data-filter="{id}">{label}</button>"#,
                class = class_attr(&[active]),
                id = escape_html(&button.id),
                label = escape_html(&button.label),
            )
        })
        .collect();

    let cards: String = portfolio
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = filter.marker(&item.category).map(|m| m.as_class()).unwrap_or("");
            format!(
                concat!(
                    r#"<div{class} data-category="{category}" data-index="{index}">"#,
                    r#"<div class="portfolio-item-inner shadow-dark">"#,
                    r#"<div class="portfolio-img"><img src="{image}" alt="{alt}"></div>"#,
                    r#"<div class="portfolio-info"><h4>{title}</h4><div class="icon"><i class="fa fa-search"></i></div></div>"#,
                    r#"</div></div>"#,
                ),
                class = class_attr(&["portfolio-item", "padd-15", marker]),
                category = escape_html(&item.category),
                index = index,
                image = escape_html(&item.image),
                alt = escape_html(&item.alt),
                title = escape_html(&item.title),
            )
        })
        .collect();

    format!(
        r#"<div class="row"><div class="portfolio-filter padd-15">{}</div></div><div class="row">{}</div>"#,
        buttons, cards
    )
}
