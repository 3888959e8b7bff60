//! Pricing engine: base price lookup and customer discount cards
//!
//! Base prices come from a per-publication price table; discounts come
//! from named customer cards matched against the order's funeral-agency
//! free text. The engine never rounds; display-time rounding is a
//! presentation concern.

use crate::ads::AdKind;
use serde::{Deserialize, Serialize};

/// Base amounts for one advertisement kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KindPrices {
    pub print: f64,
    pub digital: f64,
    pub production: f64,
}

impl KindPrices {
    /// Sum of print, digital and production amounts
    pub fn total(&self) -> f64 {
        self.print + self.digital + self.production
    }
}

/// One price table row per publication venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListRow {
    pub id: String,
    pub region: String,
    pub product_code: String,
    pub media_id: String,
    pub publication: String,
    pub death: KindPrices,
    pub thanks: KindPrices,
}

/// How a customer discount card modifies the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Percentage off the base price (source: "percent")
    PercentOff,
    /// Fixed amount subtracted from the base price (source: "fixed")
    FixedAmountOff,
    /// Agreed fixed price, ignores the base price (source: "price")
    FixedPrice,
}

/// A named pricing override for a funeral agency.
///
/// The card name is matched case-insensitively as a substring of the
/// order's agency free-text field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCard {
    pub id: String,
    pub name: String,
    pub region: String,
    pub kind: DiscountKind,
    pub value: f64,
}

/// Result of applying (or not applying) a discount card
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub total: f64,
    /// The discount kind that applied, if any card matched
    pub applied: Option<DiscountKind>,
}

impl Quote {
    /// Display label for the applied discount; empty when no card matched
    pub fn label(&self) -> &'static str {
        match self.applied {
            Some(DiscountKind::FixedPrice) => "Avtalepris",
            Some(_) => "Avtalerabatt",
            None => "",
        }
    }
}

/// Look up the base price for a publication and advertisement kind.
///
/// The venue name is matched case-insensitively and exactly against the
/// row's publication. Returns None when no row matches.
pub fn compute_base_price(
    rows: &[PriceListRow],
    publication: &str,
    kind: AdKind,
) -> Option<f64> {
    let normalized = publication.trim().to_lowercase();
    let row = rows
        .iter()
        .find(|row| row.publication.to_lowercase() == normalized)?;

    let prices = match kind {
        AdKind::Death => &row.death,
        AdKind::Thanks => &row.thanks,
    };
    Some(prices.total())
}

/// Apply the first matching customer card to a base price.
///
/// A card matches when its name appears case-insensitively within the
/// agency text. With no match the base price passes through unchanged.
/// Discounted totals never go below zero.
pub fn apply_discount(base_price: f64, agency_text: &str, cards: &[CustomerCard]) -> Quote {
    let haystack = agency_text.to_lowercase();
    let matched = cards
        .iter()
        .find(|card| !card.name.trim().is_empty() && haystack.contains(&card.name.to_lowercase()));

    let Some(card) = matched else {
        return Quote {
            total: base_price,
            applied: None,
        };
    };

    let total = match card.kind {
        DiscountKind::PercentOff => (base_price * (1.0 - card.value / 100.0)).max(0.0),
        DiscountKind::FixedAmountOff => (base_price - card.value).max(0.0),
        DiscountKind::FixedPrice => card.value,
    };

    Quote {
        total,
        applied: Some(card.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkflowConfig;

    fn cards() -> Vec<CustomerCard> {
        vec![
            CustomerCard {
                id: "card-1".to_string(),
                name: "Byes Begravelsesbyrå".to_string(),
                region: "Midt".to_string(),
                kind: DiscountKind::PercentOff,
                value: 10.0,
            },
            CustomerCard {
                id: "card-2".to_string(),
                name: "Fredrikstad Begravelse".to_string(),
                region: "Øst".to_string(),
                kind: DiscountKind::FixedAmountOff,
                value: 300.0,
            },
            CustomerCard {
                id: "card-3".to_string(),
                name: "Havglimt Begravelsesbyrå".to_string(),
                region: "Vest".to_string(),
                kind: DiscountKind::FixedPrice,
                value: 1800.0,
            },
        ]
    }

    #[test]
    fn test_base_price_for_adresseavisen_death() {
        let rows = WorkflowConfig::default_config().price_list;
        let price = compute_base_price(&rows, "Adresseavisen", AdKind::Death);
        assert_eq!(price, Some(2148.0));
    }

    #[test]
    fn test_base_price_match_is_case_insensitive() {
        let rows = WorkflowConfig::default_config().price_list;
        assert_eq!(
            compute_base_price(&rows, "adresseavisen", AdKind::Thanks),
            Some(1998.0)
        );
        assert_eq!(compute_base_price(&rows, "Ukjent Avis", AdKind::Death), None);
    }

    #[test]
    fn test_percent_discount_on_substring_match() {
        let quote = apply_discount(2148.0, "Byes Begravelsesbyrå avd Trondheim", &cards());
        assert!((quote.total - 1933.2).abs() < 1e-9);
        assert_eq!(quote.applied, Some(DiscountKind::PercentOff));
        assert_eq!(quote.label(), "Avtalerabatt");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let quote = apply_discount(1000.0, "FREDRIKSTAD BEGRAVELSE AS", &cards());
        assert_eq!(quote.total, 700.0);
        assert_eq!(quote.applied, Some(DiscountKind::FixedAmountOff));
    }

    #[test]
    fn test_fixed_price_ignores_base() {
        let quote = apply_discount(999.0, "Havglimt Begravelsesbyrå", &cards());
        assert_eq!(quote.total, 1800.0);
        assert_eq!(quote.label(), "Avtalepris");
    }

    #[test]
    fn test_no_cards_passes_base_through() {
        let quote = apply_discount(2148.0, "Byes Begravelsesbyrå", &[]);
        assert_eq!(quote.total, 2148.0);
        assert_eq!(quote.applied, None);
        assert_eq!(quote.label(), "");
    }

    #[test]
    fn test_discount_never_goes_below_zero() {
        let quote = apply_discount(100.0, "Fredrikstad Begravelse", &cards());
        assert_eq!(quote.total, 0.0);
    }
}
