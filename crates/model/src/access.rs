use crate::Error;

/// Maximum number of admins an arcade can hold.
pub const MAX_ADMINS: usize = 16;

/// Admin set gating the privileged arcade operations.
///
/// Insertion is idempotent and the set keeps insertion order. Removal is
/// self-removal only and never empties the set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "solana",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
pub struct AccessControl<A> {
    admins: Vec<A>,
}

impl<A> AccessControl<A> {
    /// Create the set with its founding admin.
    pub fn new(admin: A) -> Self {
        Self {
            admins: vec![admin],
        }
    }

    /// Current admins, in insertion order.
    pub fn admins(&self) -> &[A] {
        &self.admins
    }

    /// Number of admins.
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Whether the set is empty. Unreachable through the public operations.
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

impl<A: PartialEq> AccessControl<A> {
    /// Whether `who` is an admin.
    pub fn contains(&self, who: &A) -> bool {
        self.admins.contains(who)
    }

    /// Gate for admin-only operations.
    pub fn authorize(&self, caller: &A) -> crate::Result<()> {
        if self.contains(caller) {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    /// Add `admin`. Adding an existing admin is a no-op.
    pub fn add(&mut self, admin: A) -> crate::Result<()> {
        if self.contains(&admin) {
            return Ok(());
        }
        if self.admins.len() >= MAX_ADMINS {
            return Err(Error::TooManyAdmins);
        }
        self.admins.push(admin);
        Ok(())
    }

    /// Remove `caller` from the set.
    ///
    /// Fails with [`Error::CannotRemoveLastAdmin`] when the removal would
    /// leave the arcade without any admin.
    pub fn remove(&mut self, caller: &A) -> crate::Result<()> {
        self.authorize(caller)?;
        if self.admins.len() == 1 {
            return Err(Error::CannotRemoveLastAdmin);
        }
        self.admins.retain(|admin| admin != caller);
        Ok(())
    }
}
