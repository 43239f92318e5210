//! Lamport movement in and out of a prediction's escrow

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::PredictionError;

/// Move `amount` lamports from a signer into the escrow account
pub fn deposit<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    escrow: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(system_program, Transfer { from, to: escrow }),
        amount,
    )
}

/// Pay `amount` lamports out of a program-owned escrow.
///
/// The escrow never drops below its rent-exempt minimum.
pub fn pay_out(escrow: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    let floor = Rent::get()?.minimum_balance(escrow.data_len());
    pay_out_above(escrow, recipient, amount, floor)
}

/// Pay `amount` lamports out of `escrow` without taking it below `floor`
pub fn pay_out_above(
    escrow: &AccountInfo,
    recipient: &AccountInfo,
    amount: u64,
    floor: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let available = escrow.lamports().saturating_sub(floor);
    require!(amount <= available, PredictionError::InsufficientFunds);

    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(PredictionError::MathOverflow)?;
    **escrow.try_borrow_mut_lamports()? -= amount;
    **recipient.try_borrow_mut_lamports()? = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;
    use crate::state::{Config, OptionData, Prediction, PredictionParams, UserOption};

    const FLOOR: u64 = 2_000_000;

    #[test]
    fn test_pay_out_down_to_floor() {
        let (escrow_key, user_key, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), crate::ID);
        let mut escrow_lamports = FLOOR + 500;
        let mut user_lamports = 10;
        let mut escrow_data = vec![0u8; 16];
        let mut user_data: Vec<u8> = Vec::new();
        let system = Pubkey::default();
        let escrow = AccountInfo::new(&escrow_key, false, true, &mut escrow_lamports, &mut escrow_data, &owner, false, 0);
        let user = AccountInfo::new(&user_key, true, true, &mut user_lamports, &mut user_data, &system, false, 0);

        assert_error(
            pay_out_above(&escrow, &user, 501, FLOOR),
            PredictionError::InsufficientFunds,
        );
        assert_eq!(escrow.lamports(), FLOOR + 500);
        assert_eq!(user.lamports(), 10);

        pay_out_above(&escrow, &user, 0, FLOOR).unwrap();
        assert_eq!(escrow.lamports(), FLOOR + 500);

        pay_out_above(&escrow, &user, 500, FLOOR).unwrap();
        assert_eq!(escrow.lamports(), FLOOR);
        assert_eq!(user.lamports(), 510);

        assert_error(
            pay_out_above(&escrow, &user, 1, FLOOR),
            PredictionError::InsufficientFunds,
        );
    }

    #[test]
    fn test_refund_restores_pre_stake_balance() {
        const START: i64 = 1_700_000_000;
        const STAKE: u64 = 100_000_000;

        let creator = Pubkey::new_unique();
        let params = PredictionParams {
            title: "Test Prediction2".to_string(),
            ended_time: START + 4,
            reveal_deadline: START + 8,
            creator_fee: 1,
            options: vec![
                OptionData { label: "Option 1".to_string(), amount: 0 },
                OptionData { label: "Option 2".to_string(), amount: 0 },
            ],
            ..PredictionParams::default()
        };
        let mut prediction = Prediction::new(9, 255, creator, params, START).unwrap();
        let mut config = Config::default();
        config.update(Pubkey::new_unique(), 1, Pubkey::new_unique(), false).unwrap();

        let (escrow_key, user_key, record_key) =
            (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let (owner, system) = (crate::ID, Pubkey::default());
        let before = 1_000_000_000;
        let mut escrow_lamports = FLOOR;
        let mut user_lamports = before;
        let mut record_lamports = 1_000_000;
        let mut escrow_data = vec![0u8; 16];
        let mut user_data: Vec<u8> = Vec::new();
        let mut record_data = vec![0u8; 8 + UserOption::INIT_SPACE];
        let escrow = AccountInfo::new(&escrow_key, false, true, &mut escrow_lamports, &mut escrow_data, &owner, false, 0);
        let user = AccountInfo::new(&user_key, true, true, &mut user_lamports, &mut user_data, &system, false, 0);
        let record_info = AccountInfo::new(&record_key, false, true, &mut record_lamports, &mut record_data, &owner, false, 0);

        // stake: the record is created and the lamports land in escrow
        let mut record = UserOption::default();
        record.bind(user_key, escrow_key, 1, 255);
        prediction.record_stake(START, 1, STAKE, &mut record).unwrap();
        record.store(&record_info).unwrap();
        pay_out_above(&user, &escrow, STAKE, 0).unwrap();
        assert_eq!(user.lamports(), before - STAKE);

        // the creator never reveals
        assert_error(
            prediction.reveal(START + 9, creator, 1, &config, config.fee_receiver),
            PredictionError::RevealDeadlinePassed,
        );

        // withdraw: load, settle, store, pay
        let mut loaded = UserOption::load(&record_info).unwrap();
        let amount = prediction.withdraw(START + 9, loaded.as_mut()).unwrap();
        loaded.as_ref().unwrap().store(&record_info).unwrap();
        pay_out_above(&escrow, &user, amount, FLOOR).unwrap();

        assert_eq!(user.lamports(), before);
        assert_eq!(escrow.lamports(), FLOOR);

        let mut reloaded = UserOption::load(&record_info).unwrap();
        assert!(reloaded.as_ref().unwrap().claimed);
        assert_error(
            prediction.withdraw(START + 10, reloaded.as_mut()),
            PredictionError::AlreadyClaimed,
        );
    }
}
