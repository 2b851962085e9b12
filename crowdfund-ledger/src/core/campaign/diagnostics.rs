use std::collections::HashSet;
use std::fmt;

use super::model::Campaign;

/// Tolerance when comparing the running total with the donation sum.
const TOTAL_EPSILON: f64 = 1e-9;

/// An invariant violation found in a stored ledger.
///
/// Issues are reported, never repaired: the ledger loads the data as stored.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerIssue {
    DuplicateId(u64),
    NonPositiveTarget { id: u64, target: f64 },
    NegativeTotal { id: u64, amount_collected: f64 },
    /// `amountCollected` is below what the donators alone account for.
    TotalBelowDonations { id: u64, amount_collected: f64, donated: f64 },
    NonPositiveDonation { id: u64, index: usize, amount: f64 },
}

impl fmt::Display for LedgerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerIssue::DuplicateId(id) => write!(f, "campaign id {} appears more than once", id),
            LedgerIssue::NonPositiveTarget { id, target } => {
                write!(f, "campaign {} has non-positive target {}", id, target)
            }
            LedgerIssue::NegativeTotal { id, amount_collected } => {
                write!(f, "campaign {} has negative total {}", id, amount_collected)
            }
            LedgerIssue::TotalBelowDonations { id, amount_collected, donated } => write!(
                f,
                "campaign {} total {} is below its donations {}",
                id, amount_collected, donated
            ),
            LedgerIssue::NonPositiveDonation { id, index, amount } => write!(
                f,
                "campaign {} donation #{} has non-positive amount {}",
                id, index, amount
            ),
        }
    }
}

/// Checks a loaded ledger against the campaign invariants.
pub fn diagnose(campaigns: &[Campaign]) -> Vec<LedgerIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for campaign in campaigns {
        let id = campaign.id;
        if !seen.insert(id) {
            issues.push(LedgerIssue::DuplicateId(id));
        }

        if !(campaign.target > 0.0) {
            issues.push(LedgerIssue::NonPositiveTarget { id, target: campaign.target });
        }

        if !(campaign.amount_collected >= 0.0) {
            issues.push(LedgerIssue::NegativeTotal {
                id,
                amount_collected: campaign.amount_collected,
            });
        }

        for (index, donation) in campaign.donators.iter().enumerate() {
            if !(donation.amount > 0.0) {
                issues.push(LedgerIssue::NonPositiveDonation { id, index, amount: donation.amount });
            }
        }

        let donated = campaign.donated_total();
        if campaign.amount_collected + TOTAL_EPSILON < donated {
            issues.push(LedgerIssue::TotalBelowDonations {
                id,
                amount_collected: campaign.amount_collected,
                donated,
            });
        }
    }

    issues
}
