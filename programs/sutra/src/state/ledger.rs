use anchor_lang::prelude::*;
use crate::constants::{INITIAL_SUPPLY, TOTAL_SUPPLY, YEAR_LENGTH};
use crate::emission::{calculate_emission, year_index};
use crate::errors::SutraError;
use crate::guard;
use super::holder::Holder;
use super::pool::Pool;

// =============================================================================
// LEDGER CORE
// =============================================================================
//
// Value only enters circulation through genesis, emission and pool
// allocation, so at every point:
//
//   sum(holder balances) == INITIAL_SUPPLY + total_emitted + total_allocated
//                        <= TOTAL_SUPPLY
// =============================================================================

/// Global ledger record.
/// Seeds: [b"ledger"]
#[account]
#[derive(Default, Debug)]
pub struct LedgerState {
    /// Administrator allowed to run privileged instructions
    pub authority: Pubkey,
    /// Genesis timestamp, the origin of the emission year index
    pub genesis_time: i64,
    /// Start of the most recently paid emission year
    pub last_emission: i64,
    /// Cumulative tokens minted by emission
    pub total_emitted: u64,
    /// Cumulative tokens handed out from pools
    pub total_allocated: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl LedgerState {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        8 +                      // genesis_time
        8 +                      // last_emission
        8 +                      // total_emitted
        8 +                      // total_allocated
        1;                       // bump

    /// Record genesis and credit the initial supply to the administrator
    pub fn genesis(
        &mut self,
        authority: Pubkey,
        authority_holder: &mut Holder,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        authority_holder.credit(INITIAL_SUPPLY)?;

        self.authority = authority;
        self.genesis_time = now;
        self.last_emission = now;
        self.total_emitted = 0;
        self.total_allocated = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn owner(&self) -> Pubkey {
        self.authority
    }

    /// The single capability check behind every privileged instruction
    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority != Pubkey::default() && self.authority == *key
    }

    pub fn set_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        require!(new_authority != Pubkey::default(), SutraError::ValidationError);
        self.authority = new_authority;
        Ok(())
    }

    /// Tokens currently held across all holders
    pub fn circulating_supply(&self) -> Result<u64> {
        INITIAL_SUPPLY
            .checked_add(self.total_emitted)
            .and_then(|v| v.checked_add(self.total_allocated))
            .ok_or_else(|| SutraError::ArithmeticOverflow.into())
    }

    fn ensure_within_cap(&self, amount: u64) -> Result<()> {
        let after = self
            .circulating_supply()?
            .checked_add(amount)
            .ok_or(SutraError::ArithmeticOverflow)?;
        require!(after <= TOTAL_SUPPLY, SutraError::SupplyCapExceeded);
        Ok(())
    }

    /// Emission-only issuance
    pub(crate) fn mint(&mut self, to: &mut Holder, amount: u64) -> Result<()> {
        self.ensure_within_cap(amount)?;
        to.credit(amount)?;
        self.total_emitted += amount;
        Ok(())
    }

    /// Move `amount` out of a pool's remaining capacity into `recipient`
    pub fn allocate_from_pool(
        &mut self,
        pool: &mut Pool,
        recipient: &mut Holder,
        amount: u64,
    ) -> Result<()> {
        require!(amount <= pool.remaining(), SutraError::PoolCapacityExceeded);
        self.ensure_within_cap(amount)?;
        require!(
            recipient.balance.checked_add(amount).is_some(),
            SutraError::ArithmeticOverflow
        );

        pool.reserve(amount)?;
        recipient.credit(amount)?;
        self.total_allocated += amount;
        Ok(())
    }

    pub fn current_year_index(&self, now: i64) -> u64 {
        year_index(self.genesis_time, now)
    }

    /// Pay out one emission year to the administrator's holder record.
    /// Returns the minted amount.
    pub fn emit_tokens(&mut self, authority_holder: &mut Holder, now: i64) -> Result<u64> {
        let next_emission = self
            .last_emission
            .checked_add(YEAR_LENGTH)
            .ok_or(SutraError::ArithmeticOverflow)?;
        require!(now >= next_emission, SutraError::TemporalGuard);

        let amount = calculate_emission(self.current_year_index(now));
        self.mint(authority_holder, amount)?;
        self.last_emission = next_emission;
        Ok(amount)
    }
}

/// Guarded holder-to-holder transfer
pub fn transfer(from: &mut Holder, to: &mut Holder, amount: u64) -> Result<()> {
    guard::authorize_transfer(from, amount)?;
    require!(from.balance >= amount, SutraError::InsufficientFunds);
    require!(to.balance.checked_add(amount).is_some(), SutraError::ArithmeticOverflow);

    from.debit(amount)?;
    to.credit(amount)?;
    Ok(())
}

/// Administrator override: move everything `from` holds to `to` without
/// consulting the transfer guard. Returns the amount moved.
pub fn emergency_sweep(from: &mut Holder, to: &mut Holder) -> Result<u64> {
    let amount = from.balance;
    to.credit(amount)?;
    from.balance = 0;
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::state::{AlignmentMetrics, PoolKind};

    const GENESIS: i64 = 1_700_000_000;

    fn holder() -> Holder {
        let mut h = Holder::default();
        h.open(Pubkey::new_unique(), 255);
        h
    }

    fn ledger() -> (LedgerState, Holder) {
        let mut admin = holder();
        let mut ledger = LedgerState::default();
        ledger.genesis(admin.wallet, &mut admin, GENESIS, 254).unwrap();
        (ledger, admin)
    }

    fn pool(kind: PoolKind) -> Pool {
        let mut p = Pool::default();
        p.open(kind, 253);
        p
    }

    #[test]
    fn test_genesis_mints_initial_supply() {
        let (ledger, admin) = ledger();
        assert_eq!(admin.balance(), 21_000_000 * ONE_TOKEN);
        assert_eq!(ledger.owner(), admin.wallet);
        assert_eq!(ledger.circulating_supply().unwrap(), INITIAL_SUPPLY);
        assert_eq!(ledger.last_emission, GENESIS);
    }

    #[test]
    fn test_is_authority() {
        let (ledger, admin) = ledger();
        assert!(ledger.is_authority(&admin.wallet));
        assert!(!ledger.is_authority(&Pubkey::new_unique()));
        assert!(!LedgerState::default().is_authority(&Pubkey::default()));
    }

    #[test]
    fn test_set_authority_rejects_default_key() {
        let (mut ledger, admin) = ledger();
        assert_eq!(
            ledger.set_authority(Pubkey::default()).unwrap_err(),
            SutraError::ValidationError.into()
        );
        assert!(ledger.is_authority(&admin.wallet));

        let next = Pubkey::new_unique();
        ledger.set_authority(next).unwrap();
        assert!(ledger.is_authority(&next));
        assert!(!ledger.is_authority(&admin.wallet));
    }

    #[test]
    fn test_transfer_insufficient_funds_is_atomic() {
        let mut a = holder();
        let mut b = holder();
        a.balance = 10;
        assert_eq!(transfer(&mut a, &mut b, 11).unwrap_err(), SutraError::InsufficientFunds.into());
        assert_eq!((a.balance, b.balance), (10, 0));

        transfer(&mut a, &mut b, 10).unwrap();
        assert_eq!((a.balance, b.balance), (0, 10));
    }

    #[test]
    fn test_large_transfer_from_unregistered_sender() {
        let mut a = holder();
        let mut b = holder();
        a.balance = 5_000 * ONE_TOKEN;
        assert_eq!(
            transfer(&mut a, &mut b, 1_000 * ONE_TOKEN).unwrap_err(),
            SutraError::PolicyViolation.into()
        );
        assert_eq!(a.balance, 5_000 * ONE_TOKEN);
        assert_eq!(b.balance, 0);

        // Below the threshold nothing about alignment is checked
        transfer(&mut a, &mut b, 999 * ONE_TOKEN).unwrap();
        assert_eq!(a.balance + b.balance, 5_000 * ONE_TOKEN);
    }

    #[test]
    fn test_large_transfer_with_alignment_preserves_sum() {
        let mut a = holder();
        let mut b = holder();
        a.balance = 1_000 * ONE_TOKEN;
        a.update_alignment(AlignmentMetrics::uniform(85), 0).unwrap();

        transfer(&mut a, &mut b, 1_000 * ONE_TOKEN).unwrap();
        assert_eq!(a.balance, 0);
        assert_eq!(b.balance, 1_000 * ONE_TOKEN);
    }

    #[test]
    fn test_policy_checked_before_funds() {
        let mut a = holder();
        let mut b = holder();
        assert_eq!(
            transfer(&mut a, &mut b, LARGE_TRANSFER_THRESHOLD).unwrap_err(),
            SutraError::PolicyViolation.into()
        );
    }

    #[test]
    fn test_allocate_from_pool() {
        let (mut ledger, _) = ledger();
        let mut preservation = pool(PoolKind::Preservation);
        let mut recipient = holder();

        ledger
            .allocate_from_pool(&mut preservation, &mut recipient, 500 * ONE_TOKEN)
            .unwrap();
        assert_eq!(recipient.balance, 500 * ONE_TOKEN);
        assert_eq!(preservation.allocated, 500 * ONE_TOKEN);
        assert_eq!(ledger.total_allocated, 500 * ONE_TOKEN);
        assert_eq!(
            ledger.circulating_supply().unwrap(),
            INITIAL_SUPPLY + 500 * ONE_TOKEN
        );
    }

    #[test]
    fn test_allocate_beyond_pool_capacity() {
        let (mut ledger, _) = ledger();
        let mut reserve = pool(PoolKind::EmergencyReserve);
        let mut recipient = holder();

        assert_eq!(
            ledger
                .allocate_from_pool(&mut reserve, &mut recipient, EMERGENCY_RESERVE + 1)
                .unwrap_err(),
            SutraError::PoolCapacityExceeded.into()
        );
        assert_eq!(reserve.allocated, 0);
        assert_eq!(recipient.balance, 0);
        assert_eq!(ledger.total_allocated, 0);
    }

    #[test]
    fn test_allocations_respect_supply_cap() {
        let (mut ledger, _) = ledger();
        let mut recipient = holder();
        let mut pools: Vec<Pool> = PoolKind::ALL.iter().map(|k| pool(*k)).collect();

        // Room left under the cap after genesis
        let mut headroom = TOTAL_SUPPLY - INITIAL_SUPPLY;
        for p in pools.iter_mut() {
            let amount = p.remaining().min(headroom);
            ledger.allocate_from_pool(p, &mut recipient, amount).unwrap();
            headroom -= amount;
        }
        assert_eq!(ledger.circulating_supply().unwrap(), TOTAL_SUPPLY);

        let last = pools.last_mut().unwrap();
        assert!(last.remaining() > 0);
        assert_eq!(
            ledger.allocate_from_pool(last, &mut recipient, 1).unwrap_err(),
            SutraError::SupplyCapExceeded.into()
        );
        for p in &pools {
            assert!(p.allocated <= p.capacity);
        }
    }

    #[test]
    fn test_emission_too_early() {
        let (mut ledger, mut admin) = ledger();
        let before = admin.balance;
        assert_eq!(
            ledger.emit_tokens(&mut admin, GENESIS + YEAR_LENGTH - 1).unwrap_err(),
            SutraError::TemporalGuard.into()
        );
        assert_eq!(admin.balance, before);
        assert_eq!(ledger.total_emitted, 0);
        assert_eq!(ledger.last_emission, GENESIS);
    }

    #[test]
    fn test_emission_after_one_year() {
        let (mut ledger, mut admin) = ledger();
        let before = admin.balance;
        let now = GENESIS + YEAR_LENGTH;

        let minted = ledger.emit_tokens(&mut admin, now).unwrap();
        assert_eq!(minted, calculate_emission(ledger.current_year_index(now)));
        assert_eq!(minted, calculate_emission(0));
        assert_eq!(admin.balance - before, minted);
        assert_eq!(ledger.last_emission, GENESIS + YEAR_LENGTH);

        // Second call in the same year is rejected, not queued
        assert_eq!(
            ledger.emit_tokens(&mut admin, now + 10).unwrap_err(),
            SutraError::TemporalGuard.into()
        );
    }

    #[test]
    fn test_emission_stops_at_supply_cap() {
        let (mut ledger, mut admin) = ledger();
        let mut now = GENESIS;
        let mut paid = 0;
        loop {
            now += YEAR_LENGTH;
            match ledger.emit_tokens(&mut admin, now) {
                Ok(amount) => paid += amount,
                Err(err) => {
                    assert_eq!(err, SutraError::SupplyCapExceeded.into());
                    break;
                }
            }
        }
        assert_eq!(ledger.total_emitted, paid);
        assert!(ledger.circulating_supply().unwrap() <= TOTAL_SUPPLY);
        assert_eq!(admin.balance, ledger.circulating_supply().unwrap());
    }

    #[test]
    fn test_emergency_sweep_ignores_alignment() {
        let mut from = holder();
        let mut to = holder();
        from.balance = 1_000 * ONE_TOKEN;
        from.update_alignment(AlignmentMetrics::uniform(60), 0).unwrap();

        let moved = emergency_sweep(&mut from, &mut to).unwrap();
        assert_eq!(moved, 1_000 * ONE_TOKEN);
        assert_eq!(from.balance, 0);
        assert_eq!(to.balance, 1_000 * ONE_TOKEN);
    }

    #[test]
    fn test_emergency_sweep_overflow_leaves_source() {
        let mut from = holder();
        let mut to = holder();
        from.balance = 2;
        to.balance = u64::MAX - 1;
        assert!(emergency_sweep(&mut from, &mut to).is_err());
        assert_eq!(from.balance, 2);
    }
}
