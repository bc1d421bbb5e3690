//! Template Renderer
//!
//! Pure functions turning configuration records into markup fragments.
//! Nothing here touches the DOM; components apply the strings to mount points.

mod markup;
mod navigation;
mod home;
mod about;
mod portfolio;
mod contact;
mod blog;

pub use navigation::render_navigation;
pub use home::{render_home, typing_fallback, TYPING_TARGET_CLASS};
pub use about::render_about;
pub use portfolio::render_portfolio;
pub use contact::render_contact;
pub use blog::{render_blog_error, render_blog_list, render_blog_post};
