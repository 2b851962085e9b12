use serde::{Deserialize, Deserializer, Serialize};

use crowdfund_common::utils::DAY_MS;

/// One contribution recorded on a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub address: String,
    #[serde(deserialize_with = "number_or_nan")]
    pub amount: f64,
}

/// Reads a JSON number, taking `null` as NaN.
///
/// The page scripts store whatever `parseFloat` returned, and
/// `JSON.stringify` writes NaN as `null`. Serializing NaN writes `null` back.
fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A funding request as stored in the ledger blob.
///
/// Field names follow the blob format written by the page scripts
/// (`amountCollected`), so existing browser data loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u64,
    pub owner: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "number_or_nan")]
    pub target: f64,
    /// Milliseconds since the UNIX epoch. The built-in seed campaigns have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<i64>,
    #[serde(deserialize_with = "number_or_nan")]
    pub amount_collected: f64,
    pub image: String,
    #[serde(default)]
    pub donators: Vec<Donation>,
}

/// User input for a new campaign, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    /// Goal as typed by the user; must parse to a positive number.
    pub target: String,
    pub deadline: i64,
    pub image: String,
}

impl Campaign {
    /// Share of the target raised so far, in percent, clamped to `[0, 100]`.
    pub fn percent_funded(&self) -> f64 {
        if self.target <= 0.0 || !self.target.is_finite() {
            return 0.0;
        }
        let percent = self.amount_collected / self.target * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }

    /// Whole days left until the deadline, rounded up; zero once it has passed.
    pub fn days_remaining(&self, now_ms: i64) -> Option<u64> {
        let deadline = self.deadline?;
        let left = deadline.saturating_sub(now_ms);
        if left <= 0 {
            return Some(0);
        }
        Some(((left - 1) / DAY_MS + 1) as u64)
    }

    pub fn is_owned_by(&self, account: &str) -> bool {
        self.owner.eq_ignore_ascii_case(account)
    }

    pub fn is_backed_by(&self, account: &str) -> bool {
        self.donators
            .iter()
            .any(|d| d.address.eq_ignore_ascii_case(account))
    }

    /// Total given by `account` across all of its donations to this campaign.
    pub fn contribution_of(&self, account: &str) -> f64 {
        self.donators
            .iter()
            .filter(|d| d.address.eq_ignore_ascii_case(account))
            .map(|d| d.amount)
            .sum()
    }

    pub fn donated_total(&self) -> f64 {
        self.donators.iter().map(|d| d.amount).sum()
    }

    /// First `max_chars` characters of the description, for cards.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut out: String = self.description.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }

    pub(crate) fn record_donation(&mut self, address: &str, amount: f64) {
        self.donators.push(Donation {
            address: address.to_string(),
            amount,
        });
        self.amount_collected += amount;
    }
}

/// Image used when a campaign is created without one.
pub fn placeholder_image(title: &str) -> String {
    let text: String = title
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect();
    format!("https://placehold.co/600x400/1a202c/ffffff?text={}", text)
}
