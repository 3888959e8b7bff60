//! Tests for loading workflow configuration from YAML files

use obitflow::prelude::*;
use std::io::Write;

#[test]
fn default_config_round_trips_through_a_file() {
    let config = WorkflowConfig::default_config();
    let yaml = serde_yaml::to_string(&config).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = WorkflowConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(loaded.price_list.len(), 5);
    assert_eq!(loaded.customer_cards.len(), 3);

    // the loaded table prices the same as the built-in one
    assert_eq!(
        compute_base_price(&loaded.price_list, "Adresseavisen", AdKind::Death),
        Some(2148.0)
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = WorkflowConfig::from_yaml_file("/nonexistent/obitflow.yaml").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}

#[test]
fn loaded_cards_drive_the_pricing_engine() {
    let yaml = r#"
price_list:
  - id: price-1
    region: Midt
    product_code: AA
    media_id: "617"
    publication: Adresseavisen
    death: { print: 1540.0, digital: 300.0, production: 308.0 }
    thanks: { print: 1540.0, digital: 150.0, production: 308.0 }
customer_cards:
  - id: card-1
    name: Byes Begravelsesbyrå
    region: Midt
    kind: PercentOff
    value: 10.0
"#;
    let config = WorkflowConfig::from_yaml_str(yaml).unwrap();

    let base =
        compute_base_price(&config.price_list, "Adresseavisen", AdKind::Death).unwrap();
    let quote = apply_discount(
        base,
        "Byes Begravelsesbyrå avd Trondheim",
        &config.customer_cards,
    );

    assert!((quote.total - 1933.2).abs() < 1e-9);
    assert_eq!(quote.label(), "Avtalerabatt");
}
