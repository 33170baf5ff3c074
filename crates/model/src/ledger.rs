/// External ledger collaborator.
///
/// The state machine never owns balances; account creation, value movement
/// and the survival reserve all belong to the surrounding ledger and are
/// injected through this trait. On Solana the runtime plays this role; in
/// tests a [`MemoryLedger`](crate::testing::MemoryLedger) does.
pub trait Ledger {
    /// Opaque account address.
    type Address;

    /// Current balance of `address`.
    fn balance(&self, address: &Self::Address) -> u64;

    /// Move `amount` from `from` to `to`.
    ///
    /// A failed transfer must leave both balances unchanged; the caller
    /// relies on that to keep its own rollback all-or-nothing.
    fn transfer(
        &mut self,
        from: &Self::Address,
        to: &Self::Address,
        amount: u64,
    ) -> crate::Result<()>;

    /// Minimum balance the account at `address` must retain to stay alive.
    ///
    /// Implementations derive this from the account's stored size (the
    /// rent-exemption computation on Solana).
    fn minimum_reserve(&self, address: &Self::Address) -> u64;
}
