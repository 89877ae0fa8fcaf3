//! Catalog keyword-search API types
//!
//! Field names mirror the DigiKey v4 search response; only the fields
//! the pricing pass reads are modeled.

use serde::Deserialize;

/// Keyword search response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordResponse {
    #[serde(default, rename = "ExactMatches")]
    pub exact_matches: Vec<Product>,

    #[serde(default, rename = "Products")]
    pub products: Vec<Product>,
}

/// One catalog product
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "ManufacturerProductNumber")]
    pub manufacturer_product_number: String,

    #[serde(rename = "Description")]
    pub description: ProductDescription,

    #[serde(rename = "Manufacturer")]
    pub manufacturer: ManufacturerRef,

    #[serde(default, rename = "Parameters")]
    pub parameters: Vec<Parameter>,

    #[serde(default, rename = "ProductVariations")]
    pub variations: Vec<ProductVariation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDescription {
    #[serde(rename = "ProductDescription")]
    pub product_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerRef {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Free-form product parameter (text/value pair)
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(rename = "ParameterText")]
    pub text: String,

    #[serde(rename = "ValueText")]
    pub value: String,
}

/// A purchasable packaging variant of a product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductVariation {
    #[serde(rename = "DigiKeyProductNumber")]
    pub digikey_product_number: String,

    #[serde(rename = "QuantityAvailableforPackageType")]
    pub quantity_available: u32,

    #[serde(rename = "MinimumOrderQuantity")]
    pub minimum_order_quantity: u32,

    #[serde(default, rename = "StandardPricing")]
    pub standard_pricing: Vec<PriceBreak>,
}

/// Quantity-based price break
#[derive(Debug, Clone, Deserialize)]
pub struct PriceBreak {
    #[serde(rename = "BreakQuantity")]
    pub break_quantity: u32,

    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
}

impl Product {
    /// The `Supplier Device Package` parameter, when present
    pub fn supplier_device_package(&self) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.text == "Supplier Device Package")
            .map(|p| p.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = serde_json::json!({
            "ExactMatches": [],
            "Products": [{
                "ManufacturerProductNumber": "W25Q128JVSIQ",
                "Description": {"ProductDescription": "FLASH 128MBIT SPI 8SOIC"},
                "Manufacturer": {"Name": "Winbond Electronics"},
                "Parameters": [
                    {"ParameterText": "Supplier Device Package", "ValueText": "8-SOIC"}
                ],
                "ProductVariations": [{
                    "DigiKeyProductNumber": "W25Q128JVSIQ-ND",
                    "QuantityAvailableforPackageType": 5000,
                    "MinimumOrderQuantity": 1,
                    "StandardPricing": [
                        {"BreakQuantity": 1, "UnitPrice": 2.16}
                    ]
                }]
            }]
        });

        let response: KeywordResponse = serde_json::from_value(json).unwrap();
        assert!(response.exact_matches.is_empty());
        assert_eq!(response.products.len(), 1);

        let product = &response.products[0];
        assert_eq!(product.manufacturer_product_number, "W25Q128JVSIQ");
        assert_eq!(product.supplier_device_package(), Some("8-SOIC"));
        assert_eq!(product.variations[0].standard_pricing[0].unit_price, 2.16);
    }

    #[test]
    fn test_missing_optional_sections() {
        let json = serde_json::json!({
            "Products": [{
                "ManufacturerProductNumber": "X",
                "Description": {"ProductDescription": "desc"},
                "Manufacturer": {"Name": "M"}
            }]
        });

        let response: KeywordResponse = serde_json::from_value(json).unwrap();
        let product = &response.products[0];
        assert!(product.parameters.is_empty());
        assert!(product.variations.is_empty());
        assert_eq!(product.supplier_device_package(), None);
    }
}
