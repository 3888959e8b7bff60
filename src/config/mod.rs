//! Configuration loading and management
//!
//! The price table and customer cards are administered outside the core
//! and handed in as configuration, either from a YAML document or from
//! the built-in defaults.

use crate::core::error::ConfigError;
use crate::pricing::{CustomerCard, DiscountKind, KindPrices, PriceListRow};
use serde::{Deserialize, Serialize};

/// Pricing configuration for the workflow engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// One row per publication venue
    pub price_list: Vec<PriceListRow>,

    /// Named discount cards for funeral agencies
    #[serde(default)]
    pub customer_cards: Vec<CustomerCard>,
}

impl WorkflowConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            file: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// The built-in seed configuration
    pub fn default_config() -> Self {
        Self {
            price_list: vec![
                price_row("price-1", "Midt", "AA", "617", "Adresseavisen", (1540.0, 300.0, 308.0), (1540.0, 150.0, 308.0)),
                price_row("price-2", "Nord", "HT", "599", "Harstad Tidende", (1040.0, 200.0, 180.0), (1040.0, 120.0, 180.0)),
                price_row("price-3", "Vest", "SMP", "475", "Sunnmørsposten", (1320.0, 240.0, 220.0), (1320.0, 140.0, 220.0)),
                price_row("price-4", "Sør", "FVN", "352", "Fædrelandsvennen", (980.0, 190.0, 170.0), (980.0, 110.0, 170.0)),
                price_row("price-5", "Nord", "NOP", "398", "Nordlys", (860.0, 170.0, 160.0), (860.0, 100.0, 160.0)),
            ],
            customer_cards: vec![
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
            ],
        }
    }
}

fn price_row(
    id: &str,
    region: &str,
    product_code: &str,
    media_id: &str,
    publication: &str,
    death: (f64, f64, f64),
    thanks: (f64, f64, f64),
) -> PriceListRow {
    PriceListRow {
        id: id.to_string(),
        region: region.to_string(),
        product_code: product_code.to_string(),
        media_id: media_id.to_string(),
        publication: publication.to_string(),
        death: KindPrices {
            print: death.0,
            digital: death.1,
            production: death.2,
        },
        thanks: KindPrices {
            print: thanks.0,
            digital: thanks.1,
            production: thanks.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkflowConfig::default_config();

        assert_eq!(config.price_list.len(), 5);
        assert_eq!(config.customer_cards.len(), 3);
        assert_eq!(config.price_list[0].publication, "Adresseavisen");
        assert_eq!(config.price_list[0].death.total(), 2148.0);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = WorkflowConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = WorkflowConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.price_list.len(), config.price_list.len());
        assert_eq!(parsed.customer_cards.len(), config.customer_cards.len());
    }

    #[test]
    fn test_customer_cards_default_to_empty() {
        let yaml = r#"
price_list:
  - id: price-9
    region: Midt
    product_code: XX
    media_id: "001"
    publication: Testavisen
    death: { print: 100.0, digital: 10.0, production: 5.0 }
    thanks: { print: 100.0, digital: 5.0, production: 5.0 }
"#;
        let parsed = WorkflowConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(parsed.price_list.len(), 1);
        assert!(parsed.customer_cards.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = WorkflowConfig::from_yaml_str("price_list: [not a row]").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }
}
