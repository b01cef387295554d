use thiserror::Error;

/// Error returned by operations that need at least one element.
///
/// This is the list's only recoverable failure: [`front`](crate::RingList::front),
/// [`back`](crate::RingList::back), their `_mut` variants, the pops, and
/// [`remove`](crate::RingList::remove) report it instead of touching an empty
/// ring. A call that returns `EmptyError` leaves the list unchanged.
///
/// Misuse of positions (resolving one whose node was removed, erasing the end
/// position of a non-empty list) is not an `EmptyError`; those are contract
/// violations and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("list is empty")]
pub struct EmptyError;
