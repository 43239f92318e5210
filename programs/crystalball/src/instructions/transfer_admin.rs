//! Admin Handover
//!
//! The current admin names a successor, which may not be the default
//! address.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Emitted when the admin role changes hands
#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Accounts for [`TransferAdmin::transfer_admin`]
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    /// Current admin
    pub admin: Signer<'info>,

    /// Protocol config; its admin is checked against the signer
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> TransferAdmin<'info> {
    pub fn transfer_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        let old_admin = self.config.admin;
        self.config.transfer_admin(self.admin.key(), new_admin)?;

        msg!("Admin transferred to {}", new_admin);
        emit!(AdminTransferred {
            old_admin,
            new_admin,
        });

        Ok(())
    }
}
