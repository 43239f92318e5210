//! Stake Records
//!
//! One account per (user, prediction, option). Repeated stakes on the same
//! option accumulate here; the `claimed` flag makes the payout one-shot.

use anchor_lang::prelude::*;

/// A user's cumulative stake on one option of one prediction
///
/// Seeds: ["user-option", user, prediction, [option_index]]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct UserOption {
    pub user: Pubkey,
    pub prediction: Pubkey,
    pub option_index: u8,
    /// Total lamports staked on the option
    pub amount: u64,
    /// Set once the stake has been claimed or withdrawn
    pub claimed: bool,
    pub bump: u8,
}

impl UserOption {
    pub const SEED: &'static [u8] = b"user-option";

    /// Fill in the identity of a freshly created record. No-op for an
    /// existing one.
    pub fn bind(&mut self, user: Pubkey, prediction: Pubkey, option_index: u8, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.prediction = prediction;
            self.option_index = option_index;
            self.bump = bump;
        }
    }

    /// Read the record stored at `info`, or `None` when nothing has been
    /// staked at that address yet.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        Ok(Some(Self::try_deserialize(&mut &data[..])?))
    }

    /// Write the record back to `info`
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_only_once() {
        let user = Pubkey::new_unique();
        let prediction = Pubkey::new_unique();
        let mut record = UserOption::default();

        record.bind(user, prediction, 2, 254);
        record.amount = 10;
        record.bind(Pubkey::new_unique(), Pubkey::new_unique(), 0, 1);

        assert_eq!(record.user, user);
        assert_eq!(record.prediction, prediction);
        assert_eq!(record.option_index, 2);
        assert_eq!(record.bump, 254);
        assert_eq!(record.amount, 10);
    }

    #[test]
    fn test_load_and_store() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 8 + UserOption::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let record = UserOption {
            user: Pubkey::new_unique(),
            prediction: Pubkey::new_unique(),
            option_index: 1,
            amount: 300,
            claimed: true,
            bump: 7,
        };
        record.store(&info).unwrap();

        let loaded = UserOption::load(&info).unwrap().unwrap();
        assert_eq!(loaded.user, record.user);
        assert_eq!(loaded.amount, 300);
        assert!(loaded.claimed);
    }

    #[test]
    fn test_load_missing_record() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::default();
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(UserOption::load(&info).unwrap().is_none());
    }
}
