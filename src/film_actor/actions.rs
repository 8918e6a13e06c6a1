use crate::domain::UserId;

/// Custom actions for Film entities.
///
/// Likes are mutated only through these actions, so every change to a
/// film's like set runs inside the film store's critical section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmAction {
    /// Records a like. Liking twice is the same as liking once.
    AddLike(UserId),
    /// Drops a like if the user had given one.
    RemoveLike(UserId),
}

/// Outcome of a [`FilmAction`], one variant per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmActionResult {
    /// `true` if the like was not recorded before
    AddLike(bool),
    /// `true` if a like was removed
    RemoveLike(bool),
}
