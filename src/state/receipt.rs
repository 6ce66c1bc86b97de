//! Cosmetic waitlist receipt shown after sign-up
//!
//! The position and referral code are generated locally and carry no
//! server-side meaning. Nothing checks them for uniqueness.

use chrono::{DateTime, Utc};
use reqwest::Url;
use uuid::Uuid;

const REFERRAL_PREFIX: &str = "MODELSHIP";
const REFERRAL_SUFFIX_LEN: usize = 6;
const REFERRAL_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_POSITION: u128 = 100;

/// What the user sees once they are on the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistReceipt {
    /// Displayed as "#position", in `1..=100`
    pub position: u32,
    pub referral_code: String,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistReceipt {
    /// Roll a new position and referral code
    pub fn generate() -> Self {
        Self::from_seed(Uuid::new_v4().as_u128(), Utc::now())
    }

    fn from_seed(mut seed: u128, joined_at: DateTime<Utc>) -> Self {
        let mut referral_code = String::with_capacity(REFERRAL_PREFIX.len() + REFERRAL_SUFFIX_LEN);
        referral_code.push_str(REFERRAL_PREFIX);
        for _ in 0..REFERRAL_SUFFIX_LEN {
            referral_code.push(REFERRAL_ALPHABET[(seed % 36) as usize] as char);
            seed /= 36;
        }

        Self {
            position: (seed % MAX_POSITION) as u32 + 1,
            referral_code,
            joined_at,
        }
    }

    /// Text for the share-on-Twitter intent
    pub fn share_message(&self) -> String {
        format!(
            "Just joined the @ModelShipAI waitlist! Can't wait to try their AI-powered data labeling platform. Join me using my referral code: {}",
            self.referral_code
        )
    }

    /// Tweet intent URL carrying the share message
    pub fn share_url(&self) -> Option<Url> {
        Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[("text", self.share_message())],
        )
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_referral_code_format() {
        for _ in 0..50 {
            let receipt = WaitlistReceipt::generate();
            let suffix = receipt.referral_code.strip_prefix("MODELSHIP").unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_position_range() {
        for _ in 0..200 {
            let receipt = WaitlistReceipt::generate();
            assert!((1..=100).contains(&receipt.position));
        }
    }

    #[test]
    fn test_zero_seed() {
        let receipt = WaitlistReceipt::from_seed(0, fixed_time());
        assert_eq!(receipt.referral_code, "MODELSHIP000000");
        assert_eq!(receipt.position, 1);
    }

    #[test]
    fn test_seed_digits_are_little_endian_base36() {
        // 35 -> 'Z' in the first slot, then zeros
        let receipt = WaitlistReceipt::from_seed(35, fixed_time());
        assert_eq!(receipt.referral_code, "MODELSHIPZ00000");
    }

    #[test]
    fn test_share_message_contains_code() {
        let receipt = WaitlistReceipt::from_seed(0, fixed_time());
        assert!(receipt.share_message().ends_with("MODELSHIP000000"));
    }

    #[test]
    fn test_share_url_is_encoded() {
        let receipt = WaitlistReceipt::from_seed(0, fixed_time());
        let url = receipt.share_url().unwrap();
        assert_eq!(url.host_str(), Some("twitter.com"));
        assert_eq!(url.path(), "/intent/tweet");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, receipt.share_message());
        assert!(!url.as_str().contains(' '));
    }
}
