pub mod banner;
pub mod pagination;
pub mod screen;

pub use banner::{Banner, banners};
pub use pagination::PaginationControls;
pub use screen::{Screen, Section, Table};
