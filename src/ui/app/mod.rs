//! Application state and the store that drives it.
//!
//! [`AdminApp`] owns the [`AppState`], the backend handle and the channel the
//! async runtime reports back on. Pages dispatch [`Action`]s; reducers turn
//! them into state changes plus commands; the runtime runs the commands on
//! tokio tasks and posts their outcomes back as further actions.

mod polling;
mod root;
mod state;
mod store;

#[cfg(test)]
mod tests;

pub use root::AdminApp;
pub use state::{
    AppState, AppView, AuthSlice, ComplaintsSlice, OfficeSlice, RealEstateSlice, ServicesSlice,
    UiState, VerificationSlice,
};
pub use store::{
    Action, AsyncAction, AuthAction, Command, ComplaintsAction, ListCollection, NavigationAction,
    OfficeAction, Operation, Outcome, Pagination, RealEstateAction, RequestKey, RequestState,
    RequestTracker, ServicesAction, SliceId, Ticket, VerificationAction, page_from_link,
};
