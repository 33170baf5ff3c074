use crate::{
    AccessControl, Error, InsertOutcome, Leaderboard, Ledger, PrizeVault, ScoreEntry,
};

/// Maximum arcade name length in bytes.
pub const MAX_ARCADE_NAME_LEN: usize = 64;

/// One arcade instance: admins, pricing, leaderboard and prize counters.
///
/// Each operation is a finite, synchronous state transition executed under
/// the ledger's single-writer discipline; a failing operation leaves the
/// state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeState<A> {
    address: A,
    admins: AccessControl<A>,
    name: String,
    price_per_game: u64,
    game_counter: u64,
    total_distributed: u64,
    leaderboard: Leaderboard<A>,
}

impl<A> ArcadeState<A> {
    /// Create an active arcade with `admin` as its sole admin.
    ///
    /// `address` is the ledger address holding the arcade's prize vault;
    /// deriving it (and refusing to create a second arcade there) is the
    /// surrounding ledger's job.
    pub fn initialize(
        address: A,
        admin: A,
        name: impl Into<String>,
        max_top_scores: u8,
        price_per_game: u64,
    ) -> crate::Result<Self> {
        let name = name.into();
        if name.len() > MAX_ARCADE_NAME_LEN {
            return Err(Error::ArcadeNameTooLong);
        }
        if price_per_game == 0 {
            return Err(Error::InvalidPrice);
        }
        Ok(Self {
            address,
            admins: AccessControl::new(admin),
            name,
            price_per_game,
            game_counter: 0,
            total_distributed: 0,
            leaderboard: Leaderboard::new(max_top_scores)?,
        })
    }

    /// The arcade's ledger address.
    pub fn address(&self) -> &A {
        &self.address
    }

    /// Admin set.
    pub fn admins(&self) -> &AccessControl<A> {
        &self.admins
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price per play.
    pub fn price_per_game(&self) -> u64 {
        self.price_per_game
    }

    /// Completed plays.
    pub fn game_counter(&self) -> u64 {
        self.game_counter
    }

    /// Lifetime total paid out to high-score winners.
    pub fn total_distributed(&self) -> u64 {
        self.total_distributed
    }

    /// Ranked entries, best first.
    pub fn top_scores(&self) -> &[ScoreEntry<A>] {
        self.leaderboard.entries()
    }

    /// The leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard<A> {
        &self.leaderboard
    }

    /// Replace the leaderboard wholesale.
    ///
    /// Test support for exercising recovery paths.
    #[cfg(feature = "test")]
    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard<A>) {
        self.leaderboard = leaderboard;
    }
}

impl<A: Clone + PartialEq> ArcadeState<A> {
    /// Pay for one game.
    ///
    /// Debits `payer` by the current price, accrues it to the vault and
    /// bumps the play counter. Fails with [`Error::InsufficientFunds`]
    /// before any transfer when the payer cannot cover the price.
    pub fn play<L>(&mut self, ledger: &mut L, payer: &A) -> crate::Result<()>
    where
        L: Ledger<Address = A>,
    {
        if ledger.balance(payer) < self.price_per_game {
            return Err(Error::InsufficientFunds);
        }
        ledger.transfer(payer, &self.address, self.price_per_game)?;
        self.game_counter = self.game_counter.saturating_add(1);
        Ok(())
    }

    /// Rank a finished game's score. Admin only.
    ///
    /// When the entry lands at the top rank, the vault's entire
    /// distributable balance is swept to the entry's player within the same
    /// transition: if that transfer fails, the insertion is rolled back and
    /// the prior state is returned unchanged.
    pub fn submit_score<L>(
        &mut self,
        ledger: &mut L,
        caller: &A,
        entry: ScoreEntry<A>,
    ) -> crate::Result<InsertOutcome<A>>
    where
        L: Ledger<Address = A>,
    {
        self.admins.authorize(caller)?;
        let winner = entry.player.clone();
        let saved = self.leaderboard.clone();
        let outcome = self.leaderboard.insert(entry);
        if let Err(err) = self.leaderboard.validate() {
            self.leaderboard = saved;
            return Err(err);
        }
        if outcome.is_new_top() {
            let mut vault = PrizeVault::new(
                ledger.minimum_reserve(&self.address),
                ledger.balance(&self.address),
            );
            if let Some(amount) = vault.settle() {
                if let Err(err) = ledger.transfer(&self.address, &winner, amount) {
                    self.leaderboard = saved;
                    return Err(err);
                }
                self.total_distributed = self.total_distributed.saturating_add(amount);
            }
        }
        Ok(outcome)
    }

    /// Change the price per play. Admin only.
    pub fn update_price(&mut self, caller: &A, new_price: u64) -> crate::Result<()> {
        self.admins.authorize(caller)?;
        if new_price == 0 {
            return Err(Error::InvalidPrice);
        }
        self.price_per_game = new_price;
        Ok(())
    }

    /// Register another admin. Admin only; idempotent.
    pub fn add_admin(&mut self, caller: &A, new_admin: A) -> crate::Result<()> {
        self.admins.authorize(caller)?;
        self.admins.add(new_admin)
    }

    /// Remove the caller from the admin set.
    pub fn remove_admin(&mut self, caller: &A) -> crate::Result<()> {
        self.admins.remove(caller)
    }
}
