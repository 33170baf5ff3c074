/// Prize vault accounting: a balance with a protected reserve floor.
///
/// The reserve floor is the minimum balance the vault's account must retain
/// to stay alive on the ledger (the rent-exemption analog). Everything above
/// it is distributable and is swept in full on settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeVault {
    reserve_floor: u64,
    balance: u64,
}

impl PrizeVault {
    /// Create a vault view over `balance` with the given reserve floor.
    pub fn new(reserve_floor: u64, balance: u64) -> Self {
        Self {
            reserve_floor,
            balance,
        }
    }

    /// The minimum balance the vault never spends below.
    pub fn reserve_floor(&self) -> u64 {
        self.reserve_floor
    }

    /// Current balance, reserve included.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Balance above the reserve floor.
    pub fn distributable(&self) -> u64 {
        self.balance.saturating_sub(self.reserve_floor)
    }

    /// Credit one game's payment.
    pub fn accrue(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Sweep everything above the reserve floor.
    ///
    /// Returns the swept amount, leaving the balance exactly at the floor.
    /// Returns `None` when nothing is distributable, so an empty pool never
    /// produces a spurious payout.
    pub fn settle(&mut self) -> Option<u64> {
        let amount = self.distributable();
        if amount == 0 {
            return None;
        }
        self.balance = self.reserve_floor;
        Some(amount)
    }
}
