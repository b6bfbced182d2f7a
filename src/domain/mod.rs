//! Domain types for the admin front end.
//! Records as the backend sends them, form inputs, and the error shapes views render.

pub mod complaint;
pub mod error;
pub mod forms;
pub mod ids;
pub mod office;
pub mod page;
pub mod realestate;
pub mod service;
pub mod verification;

pub use complaint::*;
pub use error::*;
pub use forms::*;
pub use ids::*;
pub use office::*;
pub use page::*;
pub use realestate::*;
pub use service::*;
pub use verification::*;
