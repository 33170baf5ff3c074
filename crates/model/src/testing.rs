use std::collections::BTreeMap;

use crate::{Error, Ledger};

/// In-memory ledger for exercising the state machine in tests.
///
/// Addresses are plain string labels. Every account shares one configured
/// reserve floor, standing in for the rent-exemption computation.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    balances: BTreeMap<&'static str, u64>,
    reserve_floor: u64,
}

impl MemoryLedger {
    /// Create a ledger whose accounts must retain `reserve_floor`.
    pub fn new(reserve_floor: u64) -> Self {
        Self {
            balances: BTreeMap::new(),
            reserve_floor,
        }
    }

    /// Credit `address` with `amount`, creating the account if needed.
    pub fn credit(&mut self, address: &'static str, amount: u64) {
        *self.balances.entry(address).or_default() += amount;
    }

    /// Balance of `address`, zero when unknown.
    pub fn balance_of(&self, address: &'static str) -> u64 {
        self.balances.get(address).copied().unwrap_or(0)
    }
}

impl Ledger for MemoryLedger {
    type Address = &'static str;

    fn balance(&self, address: &Self::Address) -> u64 {
        self.balance_of(address)
    }

    fn transfer(
        &mut self,
        from: &Self::Address,
        to: &Self::Address,
        amount: u64,
    ) -> crate::Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(Error::InsufficientFunds);
        }
        self.balances.insert(from, available - amount);
        self.credit(to, amount);
        Ok(())
    }

    fn minimum_reserve(&self, _address: &Self::Address) -> u64 {
        self.reserve_floor
    }
}

/// Ledger whose transfers always fail, for exercising rollback paths.
#[derive(Debug, Clone)]
pub struct RejectingLedger {
    /// The wrapped ledger answering balance and reserve queries.
    pub inner: MemoryLedger,
}

impl Ledger for RejectingLedger {
    type Address = &'static str;

    fn balance(&self, address: &Self::Address) -> u64 {
        self.inner.balance_of(address)
    }

    fn transfer(
        &mut self,
        _from: &Self::Address,
        _to: &Self::Address,
        _amount: u64,
    ) -> crate::Result<()> {
        Err(Error::InsufficientFunds)
    }

    fn minimum_reserve(&self, address: &Self::Address) -> u64 {
        self.inner.minimum_reserve(address)
    }
}
