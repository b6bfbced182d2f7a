//! Request identity and stale-response bookkeeping.
//!
//! Every network call gets a [`Ticket`]: the operation it performs, the record
//! it targets (for per-record mutations) and a generation number. Starting a
//! request with the same [`RequestKey`] supersedes the previous one, whose
//! response is then discarded when it lands. Creates never share a key, so
//! each one runs to completion.
//!
//! [`RequestTracker`] in the state is the only record of what is pending; the
//! app keeps nothing but a cancellation token per pending key.

use std::collections::HashMap;
use std::fmt;

use crate::domain::RecordId;

/// Which slice an operation reports its lifecycle to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceId {
    Auth,
    Office,
    Verification,
    Services,
    RealEstate,
}

/// Every asynchronous backend operation, by action-type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    RegisterAdmin,
    FetchUsers,
    FetchProfile,
    FetchPropertyDetails,
    DeleteOffice,
    FetchOfficeRequests,
    SendOfficeRequest,
    DeleteOfficeRequest,
    CreateVerification,
    UpdateVerification,
    FetchVerifications,
    DeleteVerification,
    FetchServiceTypes,
    FetchServiceInfo,
    DeleteService,
    DeleteServiceType,
    CreateServiceType,
    FetchLocations,
    AddLocation,
    DeleteLocation,
    FetchPropertyStats,
    FetchProperties,
    DeleteProperty,
}

impl Operation {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Login => "auth/login",
            Self::RegisterAdmin => "auth/registerAdmin",
            Self::FetchUsers => "auth/getAllUsers",
            Self::FetchProfile => "auth/profile",
            Self::FetchPropertyDetails => "realEstate/getDetails",
            Self::DeleteOffice => "office/deleteOffice",
            Self::FetchOfficeRequests => "office/indexSent",
            Self::SendOfficeRequest => "office/sendRequest",
            Self::DeleteOfficeRequest => "office/deleteRequest",
            Self::CreateVerification => "verifications/create",
            Self::UpdateVerification => "verifications/update",
            Self::FetchVerifications => "verifications/getAll",
            Self::DeleteVerification => "verifications/delete",
            Self::FetchServiceTypes => "services/getAll",
            Self::FetchServiceInfo => "services/getInfoById",
            Self::DeleteService => "services/deleteService",
            Self::DeleteServiceType => "services/deleteMainServiceType",
            Self::CreateServiceType => "services/createServiceType",
            Self::FetchLocations => "realEstate/getLocation",
            Self::AddLocation => "realEstate/addLocation",
            Self::DeleteLocation => "realEstate/deleteLocation",
            Self::FetchPropertyStats => "realEstate/getStatus",
            Self::FetchProperties => "realEstate/index",
            Self::DeleteProperty => "realEstate/delete",
        }
    }

    pub fn slice(self) -> SliceId {
        match self {
            Self::Login
            | Self::RegisterAdmin
            | Self::FetchUsers
            | Self::FetchProfile
            | Self::FetchPropertyDetails
            | Self::DeleteOffice => SliceId::Auth,
            Self::FetchOfficeRequests | Self::SendOfficeRequest | Self::DeleteOfficeRequest => {
                SliceId::Office
            }
            Self::CreateVerification
            | Self::UpdateVerification
            | Self::FetchVerifications
            | Self::DeleteVerification => SliceId::Verification,
            Self::FetchServiceTypes
            | Self::FetchServiceInfo
            | Self::DeleteService
            | Self::DeleteServiceType
            | Self::CreateServiceType => SliceId::Services,
            Self::FetchLocations
            | Self::AddLocation
            | Self::DeleteLocation
            | Self::FetchPropertyStats
            | Self::FetchProperties
            | Self::DeleteProperty => SliceId::RealEstate,
        }
    }

    /// Per-record mutations are tracked per record; everything else fills a
    /// single slot, so only the latest request for it counts.
    fn keyed_by_record(self) -> bool {
        matches!(
            self,
            Self::DeleteOffice
                | Self::DeleteOfficeRequest
                | Self::UpdateVerification
                | Self::DeleteVerification
                | Self::DeleteService
                | Self::DeleteServiceType
                | Self::DeleteLocation
                | Self::DeleteProperty
        )
    }

    /// Every call creates a new record; none replaces another.
    fn is_create(self) -> bool {
        matches!(
            self,
            Self::RegisterAdmin
                | Self::SendOfficeRequest
                | Self::CreateVerification
                | Self::CreateServiceType
                | Self::AddLocation
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub operation: Operation,
    pub record: Option<RecordId>,
    /// Set for creates: the generation that issued them.
    pub call: Option<u64>,
}

impl RequestKey {
    pub fn new(operation: Operation, record: Option<RecordId>) -> Self {
        let record = if operation.keyed_by_record() {
            record
        } else {
            None
        };
        Self {
            operation,
            record,
            call: None,
        }
    }

    /// The key a request started as `generation` is tracked under.
    pub fn for_generation(self, generation: u64) -> Self {
        if self.operation.is_create() {
            Self {
                call: Some(generation),
                ..self
            }
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub key: RequestKey,
    pub generation: u64,
}

impl Ticket {
    pub fn operation(&self) -> Operation {
        self.key.operation
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key.record {
            Some(id) => write!(f, "{}#{} (gen {})", self.key.operation, id, self.generation),
            None => write!(f, "{} (gen {})", self.key.operation, self.generation),
        }
    }
}

/// Latest generation started per key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestTracker {
    latest: HashMap<RequestKey, u64>,
}

impl RequestTracker {
    pub fn begin(&mut self, ticket: Ticket) {
        self.latest.insert(ticket.key, ticket.generation);
    }

    /// True when `ticket` is the newest request for its key; the key is then
    /// no longer pending. False means the response is stale.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        match self.latest.get(&ticket.key) {
            Some(&generation) if generation == ticket.generation => {
                self.latest.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, key: &RequestKey) -> bool {
        self.latest.contains_key(key)
    }

    pub fn pending(&self) -> usize {
        self.latest.len()
    }

    /// Whether any request reporting to `slice` is still outstanding.
    pub fn pending_in(&self, slice: SliceId) -> bool {
        self.latest.keys().any(|key| key.operation.slice() == slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(operation: Operation, record: Option<u64>, generation: u64) -> Ticket {
        Ticket {
            key: RequestKey::new(operation, record.map(RecordId)),
            generation,
        }
    }

    #[test]
    fn newer_request_supersedes_older_for_same_key() {
        let mut tracker = RequestTracker::default();
        let page_two = ticket(Operation::FetchVerifications, None, 1);
        let page_three = ticket(Operation::FetchVerifications, None, 2);
        tracker.begin(page_two);
        tracker.begin(page_three);

        assert!(!tracker.finish(&page_two));
        assert!(tracker.finish(&page_three));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn deletes_of_different_records_do_not_interfere() {
        let mut tracker = RequestTracker::default();
        let first = ticket(Operation::DeleteVerification, Some(1), 1);
        let second = ticket(Operation::DeleteVerification, Some(2), 2);
        tracker.begin(first);
        tracker.begin(second);
        assert!(tracker.finish(&first));
        assert!(tracker.pending_in(SliceId::Verification));
        assert!(tracker.finish(&second));
        assert!(!tracker.pending_in(SliceId::Verification));
    }

    #[test]
    fn single_slot_fetches_ignore_the_record() {
        let a = RequestKey::new(Operation::FetchServiceInfo, Some(RecordId(1)));
        let b = RequestKey::new(Operation::FetchServiceInfo, Some(RecordId(2)));
        assert_eq!(a, b);
    }

    #[test]
    fn creates_are_tracked_per_call() {
        let mut tracker = RequestTracker::default();
        let key = RequestKey::new(Operation::CreateServiceType, None);
        let first = Ticket {
            key: key.for_generation(1),
            generation: 1,
        };
        let second = Ticket {
            key: key.for_generation(2),
            generation: 2,
        };
        assert_ne!(first.key, second.key);

        tracker.begin(first);
        tracker.begin(second);
        assert!(tracker.finish(&first));
        assert!(tracker.is_pending(&second.key));
        assert!(tracker.finish(&second));
    }

    #[test]
    fn fetches_keep_one_slot_across_generations() {
        let key = RequestKey::new(Operation::FetchLocations, None);
        assert_eq!(key.for_generation(1), key.for_generation(2));
    }

    #[test]
    fn unknown_ticket_is_stale() {
        let mut tracker = RequestTracker::default();
        assert!(!tracker.finish(&ticket(Operation::FetchUsers, None, 5)));
    }
}
