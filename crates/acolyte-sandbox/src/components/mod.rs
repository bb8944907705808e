//! UI components for the showcase app.

mod app;
mod coming_soon;
mod demo_card;
mod footer;
mod header;
mod progress_banner;
mod view_toggle;

pub use app::*;
pub use coming_soon::*;
pub use demo_card::*;
pub use footer::*;
pub use header::*;
pub use progress_banner::*;
pub use view_toggle::*;
