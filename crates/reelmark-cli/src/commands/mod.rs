//! Command implementations for the `reel` binary.

mod add;
mod list;
mod open;

pub use add::add_links;
pub use list::list_links;
pub use open::open_link;
