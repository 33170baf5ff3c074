use crate::{Error, ScoreEntry};

/// Outcome of a leaderboard insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<A> {
    /// The candidate was ranked without evicting anyone.
    Inserted {
        /// Zero-based rank the candidate landed at.
        rank: usize,
    },
    /// The candidate was ranked and the lowest entry was evicted.
    Replaced {
        /// The entry dropped to make room.
        evicted: ScoreEntry<A>,
        /// Zero-based rank the candidate landed at.
        rank: usize,
    },
    /// The score was too low to rank on a full leaderboard.
    Rejected,
}

impl<A> InsertOutcome<A> {
    /// Whether the candidate now holds the top rank.
    ///
    /// This is the new-high-score trigger: the only condition under which
    /// the prize vault is settled.
    pub fn is_new_top(&self) -> bool {
        matches!(
            self,
            Self::Inserted { rank: 0 } | Self::Replaced { rank: 0, .. }
        )
    }

    /// Whether the candidate was ranked at all.
    pub fn is_ranked(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// An ordered, fixed-capacity collection of [`ScoreEntry`].
///
/// Entries are kept strictly descending by score. On a full board a new
/// entry must beat the current lowest score to rank, evicting that lowest
/// entry; the board never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "solana",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
pub struct Leaderboard<A> {
    capacity: u8,
    entries: Vec<ScoreEntry<A>>,
}

impl<A> Leaderboard<A> {
    /// Create an empty leaderboard holding at most `capacity` entries.
    pub fn new(capacity: u8) -> crate::Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            entries: Vec::new(),
        })
    }

    /// Build a leaderboard from raw parts, skipping the invariant checks.
    ///
    /// Test support for exercising recovery paths; [`validate`](Self::validate)
    /// reports whether the parts actually satisfy the invariants.
    #[cfg(feature = "test")]
    pub fn from_parts(capacity: u8, entries: Vec<ScoreEntry<A>>) -> Self {
        Self { capacity, entries }
    }

    /// Fixed capacity set at creation.
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has ranked yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked entries, best first.
    pub fn entries(&self) -> &[ScoreEntry<A>] {
        &self.entries
    }

    /// Current top entry, if any.
    pub fn top(&self) -> Option<&ScoreEntry<A>> {
        self.entries.first()
    }

    /// Rank `candidate` against the current entries.
    ///
    /// Ties go to the earlier holder: a candidate matching an existing
    /// score lands below every equal entry, so the first to achieve a
    /// score keeps the better rank.
    pub fn insert(&mut self, candidate: ScoreEntry<A>) -> InsertOutcome<A> {
        let rank = self
            .entries
            .partition_point(|entry| entry.score >= candidate.score);
        if self.entries.len() < usize::from(self.capacity) {
            self.entries.insert(rank, candidate);
            return InsertOutcome::Inserted { rank };
        }
        let qualifies = self
            .entries
            .last()
            .is_some_and(|last| candidate.score > last.score);
        if !qualifies {
            return InsertOutcome::Rejected;
        }
        let Some(evicted) = self.entries.pop() else {
            return InsertOutcome::Rejected;
        };
        self.entries.insert(rank, candidate);
        InsertOutcome::Replaced { evicted, rank }
    }

    /// Check the capacity and ordering invariants.
    pub fn validate(&self) -> crate::Result<()> {
        let sorted = self
            .entries
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score);
        if !sorted || self.entries.len() > usize::from(self.capacity) {
            return Err(Error::CapacityInvariantViolation);
        }
        Ok(())
    }
}
