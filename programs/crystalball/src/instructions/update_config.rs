//! Protocol Configuration
//!
//! Creates the global config on first use and lets the admin change the
//! protocol fee, the fee receiver and the pause switch afterwards.
//! The deploy script makes the first call, which makes the deployer admin.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Event emitted whenever the policy changes
#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub protocol_fee: u8,
    pub fee_receiver: Pubkey,
    pub is_paused: bool,
}

/// Accounts required for a config update
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Current admin, or the first caller of a fresh config
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created on first call)
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(
        &mut self,
        protocol_fee: u8,
        fee_receiver: Pubkey,
        is_paused: bool,
        bumps: &UpdateConfigBumps,
    ) -> Result<()> {
        let first_update = !self.config.is_initialized();

        self.config
            .update(self.admin.key(), protocol_fee, fee_receiver, is_paused)?;
        self.config.bump = bumps.config;

        if first_update {
            msg!("Admin: {}", self.config.admin);
        }
        msg!("Fee: {}% to {}", protocol_fee, fee_receiver);
        msg!("Paused: {}", is_paused);

        emit!(ConfigUpdated {
            admin: self.config.admin,
            protocol_fee,
            fee_receiver,
            is_paused,
        });

        Ok(())
    }
}
