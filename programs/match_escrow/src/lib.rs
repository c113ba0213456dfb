use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;


pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;
pub use utils::payout::PrizeDistribution;

declare_id!("Bzo6k3DCKck3633dNWobzZ3eSgZCt8RQBTX49ynjNMES");

#[program]
pub mod match_escrow {
    use super::*;

    pub fn initialize_match(
        ctx: Context<InitializeMatch>,
        match_id: String,
        registration_end_time: i64,
    ) -> Result<()> {
        process_initialize_match(ctx, match_id, registration_end_time)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    pub fn end_match(ctx: Context<EndMatch>) -> Result<()> {
        process_end_match(ctx)
    }

    pub fn distribute_prizes<'a, 'b, 'c, 'info>(
        ctx: Context<'a, 'b, 'c, 'info, DistributePrizes<'info>>,
        prize_distributions: Vec<PrizeDistribution>,
    ) -> Result<()> {
        process_distribute_prizes(ctx, prize_distributions)
    }

    pub fn emit_match_snapshot(ctx: Context<EmitMatchSnapshot>) -> Result<()> {
        process_emit_match_snapshot(ctx)
    }
}
