//! RSS feed rendering

mod renderer;

pub use renderer::render_feed;
