mod common;
mod instagram_feed;

pub use common::{health, not_found, root};
pub use instagram_feed::get_instagram_feed;
