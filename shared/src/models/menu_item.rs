//! Menu item model and per-portion pricing

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Named serving size of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Full,
    Half,
    Quarter,
}

impl Portion {
    pub fn as_str(self) -> &'static str {
        match self {
            Portion::Full => "full",
            Portion::Half => "half",
            Portion::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-portion price map: `full` is mandatory, `half`/`quarter` are only
/// offerable when present. Amounts are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPrices {
    pub full: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u32>,
}

/// Invalid portion price map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricesError {
    #[error("price for portion '{0}' must be greater than zero")]
    ZeroPrice(Portion),
}

impl ItemPrices {
    /// Price map offering only a full portion
    pub fn full_only(full: u32) -> Self {
        Self {
            full,
            half: None,
            quarter: None,
        }
    }

    /// Price for a portion, if that portion is offered
    pub fn price_of(&self, portion: Portion) -> Option<u32> {
        match portion {
            Portion::Full => Some(self.full),
            Portion::Half => self.half,
            Portion::Quarter => self.quarter,
        }
    }

    /// Whether the item is offered at the given portion
    pub fn offers(&self, portion: Portion) -> bool {
        self.price_of(portion).is_some()
    }

    /// Shape check applied on every write and on reads that assume the
    /// structure: every present portion price must be positive.
    pub fn validate(&self) -> Result<(), PricesError> {
        if self.full == 0 {
            return Err(PricesError::ZeroPrice(Portion::Full));
        }
        if self.half == Some(0) {
            return Err(PricesError::ZeroPrice(Portion::Half));
        }
        if self.quarter == Some(0) {
            return Err(PricesError::ZeroPrice(Portion::Quarter));
        }
        Ok(())
    }
}

/// Menu item as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_vegetarian: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub prices: ItemPrices,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload (operator only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    pub prices: ItemPrices,
}

/// Update menu item payload (operator only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<ItemPrices>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_portions_are_not_offerable() {
        let prices = ItemPrices {
            full: 280,
            half: Some(160),
            quarter: None,
        };
        assert_eq!(prices.price_of(Portion::Full), Some(280));
        assert_eq!(prices.price_of(Portion::Half), Some(160));
        assert_eq!(prices.price_of(Portion::Quarter), None);
        assert!(!prices.offers(Portion::Quarter));
    }

    #[test]
    fn zero_prices_fail_validation() {
        assert_eq!(
            ItemPrices::full_only(0).validate(),
            Err(PricesError::ZeroPrice(Portion::Full))
        );
        let prices = ItemPrices {
            full: 280,
            half: Some(0),
            quarter: None,
        };
        assert_eq!(
            prices.validate(),
            Err(PricesError::ZeroPrice(Portion::Half))
        );
        assert!(ItemPrices::full_only(280).validate().is_ok());
    }

    #[test]
    fn prices_wire_shape_omits_absent_portions() {
        let json = serde_json::to_value(ItemPrices::full_only(280)).unwrap();
        assert_eq!(json, serde_json::json!({ "full": 280 }));

        let parsed: ItemPrices = serde_json::from_value(
            serde_json::json!({ "full": 280, "half": 160 }),
        )
        .unwrap();
        assert_eq!(parsed.half, Some(160));
        assert_eq!(parsed.quarter, None);
    }
}
