use std::collections::BTreeSet;

use crate::domain::UserId;

/// An unordered pair of distinct user ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendshipEdge {
    low: UserId,
    high: UserId,
}

impl FriendshipEdge {
    /// `None` when both ends are the same user.
    pub fn new(a: UserId, b: UserId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The end that is not `user`, if `user` is on this edge.
    pub fn other(&self, user: UserId) -> Option<UserId> {
        if user == self.low {
            Some(self.high)
        } else if user == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Friendship edges stored once per pair, so both directions always agree.
#[derive(Debug, Default)]
pub struct FriendGraph {
    edges: BTreeSet<FriendshipEdge>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the edge was already present.
    pub fn insert(&mut self, edge: FriendshipEdge) -> bool {
        self.edges.insert(edge)
    }

    /// Returns `false` if there was nothing to remove.
    pub fn remove(&mut self, edge: FriendshipEdge) -> bool {
        self.edges.remove(&edge)
    }

    pub fn contains(&self, edge: FriendshipEdge) -> bool {
        self.edges.contains(&edge)
    }

    pub fn friends_of(&self, user: UserId) -> BTreeSet<UserId> {
        self.edges.iter().filter_map(|edge| edge.other(user)).collect()
    }

    pub fn mutual_friends(&self, user: UserId, other: UserId) -> BTreeSet<UserId> {
        let theirs = self.friends_of(other);
        self.friends_of(user).intersection(&theirs).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
