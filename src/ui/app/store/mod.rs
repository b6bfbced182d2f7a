//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod lifecycle;
mod list;
mod pagination;
mod reducer;
mod requests;
mod runtime;

pub use action::{
    Action, AsyncAction, AuthAction, ComplaintsAction, NavigationAction, OfficeAction, Outcome,
    RealEstateAction, ServicesAction, VerificationAction,
};
pub use command::Command;
pub use lifecycle::RequestState;
pub use list::ListCollection;
pub use pagination::{Pagination, page_from_link};
pub use requests::{Operation, RequestKey, RequestTracker, SliceId, Ticket};

use super::AdminApp;

impl AdminApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        self.prune_in_flight();
        for command in commands {
            runtime::run(self, command);
        }
    }
}
