//! UI Components
//!
//! Pieces of the page shell. Section bodies come from the pure renderers in
//! `crate::render` and are applied through `inner_html`.

mod aside;
mod section_pane;
mod home_section;
mod portfolio_section;
mod blog_reader;
mod lightbox;
mod preloader;

pub use aside::Aside;
pub use section_pane::SectionPane;
pub use home_section::HomeSection;
pub use portfolio_section::PortfolioSection;
pub use blog_reader::BlogReader;
pub use lightbox::LightboxOverlay;
pub use preloader::Preloader;
