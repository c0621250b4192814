//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::cmp::Ordering;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Comparison used by [`ResourceRequest::Sort`]. A plain function pointer keeps the request `Send`.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Request sent to the actor.
///
/// The variants follow the **CRUD** lifecycle of a resource, plus collection-level reads
/// and an `Action` escape hatch:
///
/// - **Create**: draws an id and appends a new resource built from [`ActorEntity::Create`].
/// - **Get**: first resource with the given id.
/// - **List**: every resource, in collection order.
/// - **Update**: applies [`ActorEntity::Update`] to the first resource with the given id.
/// - **Delete**: removes *every* resource with the given id.
/// - **Sort**: stable in-place reordering of the whole collection.
/// - **Action**: runs a custom [`ActorEntity::Action`] on one resource.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<usize>,
    },
    Sort {
        compare: Comparator<T>,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            Self::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            Self::List { .. } => f.write_str("List"),
            Self::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            Self::Delete { id, .. } => f.debug_struct("Delete").field("id", id).finish(),
            Self::Sort { .. } => f.write_str("Sort"),
            Self::Action { id, action, .. } => f
                .debug_struct("Action")
                .field("id", id)
                .field("action", action)
                .finish(),
        }
    }
}
