//! Vote-credit accounting and staking yield arithmetic.

use serde::Serialize;

use crate::domain::models::PerformanceRecord;
use crate::infrastructure::rpc::{EpochCredits, EpochInfo, InflationRate, Supply, VoteAccount, VoteAccounts};

/// Credits earned by one vote account over one epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CreditWindow {
    pub epoch: u64,
    pub credits_start: u64,
    pub credits_end: u64,
}

impl CreditWindow {
    pub fn earned(&self) -> u64 {
        self.credits_end.saturating_sub(self.credits_start)
    }
}

/// Pick the `[epoch, credits, prev_credits]` entry of `epoch`, else the latest entry
pub fn credit_window(epoch_credits: &[EpochCredits], epoch: u64) -> Option<CreditWindow> {
    epoch_credits
        .iter()
        .find(|(entry_epoch, _, _)| *entry_epoch == epoch)
        .or_else(|| epoch_credits.iter().max_by_key(|(entry_epoch, _, _)| *entry_epoch))
        .map(|&(entry_epoch, credits, prev_credits)| CreditWindow {
            epoch: entry_epoch,
            credits_start: prev_credits,
            credits_end: credits,
        })
}

/// Fraction of `slots` without a credited vote, within `[0, 1]`
pub fn skip_rate(slots: u64, credits: u64) -> f64 {
    if slots == 0 {
        return 0.0;
    }
    let missed = slots.saturating_sub(credits) as f64;
    (missed / slots as f64).clamp(0.0, 1.0)
}

/// One performance record per vote account for the current epoch
pub fn performance_records(vote_accounts: &VoteAccounts, epoch: &EpochInfo) -> Vec<PerformanceRecord> {
    let mut records: Vec<PerformanceRecord> = Vec::new();

    for (account, _) in vote_accounts.iter_all() {
        let record = performance_record(account, epoch);
        // A vote key listed twice keeps its later entry
        match records.iter_mut().find(|r| r.vote_pubkey == record.vote_pubkey) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    records
}

fn performance_record(account: &VoteAccount, epoch: &EpochInfo) -> PerformanceRecord {
    let window = credit_window(&account.epoch_credits, epoch.epoch).unwrap_or_default();
    let credits = window.earned();

    PerformanceRecord {
        vote_pubkey: account.vote_pubkey.clone(),
        epoch: epoch.epoch,
        credits,
        credits_start: window.credits_start,
        credits_end: window.credits_end,
        skip_rate: skip_rate(epoch.slots_in_epoch, credits),
    }
}

/// Sum of the activated stake of current vote accounts
pub fn total_active_stake(vote_accounts: &VoteAccounts) -> u64 {
    vote_accounts
        .current
        .iter()
        .map(|account| account.activated_stake)
        .fold(0u64, u64::saturating_add)
}

/// Estimated staking yield
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StakingYield {
    pub total_active_stake: u64,
    pub apy: f64,
    pub apy_adjusted: f64,
}

impl StakingYield {
    /// `apy = inflation * supply / active stake`, zero without active stake
    pub fn estimate(inflation: &InflationRate, supply: &Supply, total_active_stake: u64) -> Self {
        if total_active_stake == 0 {
            return Self::default();
        }

        let apy = inflation.total * supply.total as f64 / total_active_stake as f64;
        Self {
            total_active_stake,
            apy,
            apy_adjusted: apy - inflation.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(vote: &str, stake: u64, credits: Vec<EpochCredits>) -> VoteAccount {
        VoteAccount {
            node_pubkey: format!("node-{vote}"),
            vote_pubkey: vote.to_string(),
            activated_stake: stake,
            epoch_credits: credits,
            ..Default::default()
        }
    }

    #[test]
    fn test_credit_window_prefers_current_epoch() {
        let credits = vec![(9, 400, 100), (10, 700, 400), (11, 720, 700)];

        let window = credit_window(&credits, 10).unwrap();
        assert_eq!((window.credits_start, window.credits_end), (400, 700));
        assert_eq!(window.earned(), 300);

        let latest = credit_window(&credits, 42).unwrap();
        assert_eq!(latest.epoch, 11);
        assert!(credit_window(&[], 10).is_none());
    }

    #[test]
    fn test_skip_rate_bounds() {
        assert_eq!(skip_rate(0, 10), 0.0);
        assert_eq!(skip_rate(100, 75), 0.25);
        assert_eq!(skip_rate(100, 150), 0.0);
        assert_eq!(skip_rate(100, 0), 1.0);
    }

    #[test]
    fn test_performance_records_cover_delinquent_accounts() {
        let accounts = VoteAccounts {
            current: vec![account("vote1", 10, vec![(5, 800, 200)])],
            delinquent: vec![account("vote2", 0, vec![])],
        };
        let epoch = EpochInfo {
            epoch: 5,
            slots_in_epoch: 1_000,
            ..Default::default()
        };

        let records = performance_records(&accounts, &epoch);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].credits, 600);
        assert_eq!(records[0].skip_rate, 0.4);
        assert_eq!(records[1].vote_pubkey, "vote2");
        assert_eq!(records[1].credits, 0);
        assert_eq!(records[1].skip_rate, 1.0);
    }

    #[test]
    fn test_yield_is_zero_without_active_stake() {
        let inflation = InflationRate {
            total: 0.08,
            ..Default::default()
        };
        let supply = Supply {
            total: 1_000_000,
            ..Default::default()
        };

        let estimate = StakingYield::estimate(&inflation, &supply, 0);

        assert_eq!(estimate.apy, 0.0);
        assert_eq!(estimate.apy_adjusted, 0.0);
        assert!(estimate.apy.is_finite());
    }

    #[test]
    fn test_yield_from_inflation_and_supply() {
        let inflation = InflationRate {
            total: 0.05,
            ..Default::default()
        };
        let supply = Supply {
            total: 1_000,
            ..Default::default()
        };
        let accounts = VoteAccounts {
            current: vec![account("a", 300, vec![]), account("b", 200, vec![])],
            delinquent: vec![account("c", 900, vec![])],
        };

        let stake = total_active_stake(&accounts);
        let estimate = StakingYield::estimate(&inflation, &supply, stake);

        assert_eq!(stake, 500);
        assert!((estimate.apy - 0.1).abs() < 1e-12);
        assert!((estimate.apy_adjusted - 0.05).abs() < 1e-12);
    }
}
