// 🧾 Receipt Model - Two-phase parse
// Raw payload (strings only) → validated Receipt with typed date/time/amounts

use crate::error::ReceiptError;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

// ============================================================================
// RAW PAYLOAD (phase one)
// ============================================================================

/// RawItem - item exactly as it arrives on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub short_description: String,
    pub price: String,
}

/// RawReceipt - receipt exactly as it arrives on the wire
///
/// Every scalar is still text here; nothing has been validated beyond
/// the JSON shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    #[serde(default)]
    pub items: Option<Vec<RawItem>>,
    pub total: String,
}

// ============================================================================
// VALIDATED MODEL (phase two)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Decimal,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }
}

/// Receipt - a parsed submission, never mutated after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    /// Absent on the wire is stored as empty
    pub items: Vec<Item>,
    pub total: Decimal,
}

impl Receipt {
    /// Decode a JSON body and validate it in one call
    pub fn from_json(body: &[u8]) -> Result<Self, ReceiptError> {
        let raw: RawReceipt = serde_json::from_slice(body)
            .map_err(|e| ReceiptError::InvalidPayload(e.to_string()))?;
        Receipt::try_from(raw)
    }
}

impl TryFrom<RawItem> for Item {
    type Error = ReceiptError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let price = parse_amount("price", &raw.price)?;
        Ok(Item {
            short_description: raw.short_description,
            price,
        })
    }
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = ReceiptError;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        let purchase_date = parse_purchase_date(&raw.purchase_date)?;
        let purchase_time = parse_purchase_time(&raw.purchase_time)?;
        let total = parse_amount("total", &raw.total)?;

        let items = raw
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt {
            retailer: raw.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

/// Parse a strict `YYYY-MM-DD` literal
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked byte by byte before handing off for calendar validation.
pub fn parse_purchase_date(value: &str) -> Result<NaiveDate, ReceiptError> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ReceiptError::MalformedDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ReceiptError::MalformedDate(value.to_string()))
}

/// Parse a strict 24-hour `HH:MM` literal
pub fn parse_purchase_time(value: &str) -> Result<NaiveTime, ReceiptError> {
    let well_formed = value.len() == 5
        && value.bytes().enumerate().all(|(i, b)| match i {
            2 => b == b':',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ReceiptError::MalformedTime(value.to_string()));
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ReceiptError::MalformedTime(value.to_string()))
}

/// Parse a non-negative decimal literal such as `"35.35"` or `"15"`
pub fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, ReceiptError> {
    let malformed = || ReceiptError::MalformedAmount {
        field,
        value: value.to_string(),
    };

    // Digits and at most one dot; rules out signs, exponents and separators
    let has_digit = value.bytes().any(|b| b.is_ascii_digit());
    let dots = value.bytes().filter(|b| *b == b'.').count();
    let charset_ok = value.bytes().all(|b| b.is_ascii_digit() || b == b'.');

    if !has_digit || dots > 1 || !charset_ok {
        return Err(malformed());
    }

    Decimal::from_str(value).map_err(|_| malformed())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RECEIPT: &str = r#"{
        "retailer": "ABC",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "17:52",
        "items": [
            { "shortDescription": "Testing data", "price": "11.11" }
        ],
        "total": "35.35"
    }"#;

    #[test]
    fn test_parse_valid_receipt() {
        let receipt = Receipt::from_json(VALID_RECEIPT.as_bytes()).unwrap();

        assert_eq!(receipt.retailer, "ABC");
        assert_eq!(receipt.purchase_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(receipt.purchase_time, NaiveTime::from_hms_opt(17, 52, 0).unwrap());
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Testing data");
        assert_eq!(receipt.items[0].price, Decimal::new(1111, 2));
        assert_eq!(receipt.total, Decimal::new(3535, 2));
    }

    #[test]
    fn test_absent_and_null_items_are_empty() {
        let absent = r#"{"retailer":"X","purchaseDate":"2022-01-01","purchaseTime":"10:00","total":"1.00"}"#;
        let null = r#"{"retailer":"X","purchaseDate":"2022-01-01","purchaseTime":"10:00","items":null,"total":"1.00"}"#;

        assert!(Receipt::from_json(absent.as_bytes()).unwrap().items.is_empty());
        assert!(Receipt::from_json(null.as_bytes()).unwrap().items.is_empty());
    }

    #[test]
    fn test_malformed_date_rejects_receipt() {
        let body = VALID_RECEIPT.replace("2022-01-01", "2022-01-0");
        let err = Receipt::from_json(body.as_bytes()).unwrap_err();
        assert_eq!(err, ReceiptError::MalformedDate("2022-01-0".to_string()));
    }

    #[test]
    fn test_date_must_be_strict() {
        assert!(parse_purchase_date("2023-01-10").is_ok());
        assert!(parse_purchase_date("2024-02-29").is_ok());

        for bad in ["2022-01-0", "2022-1-05", "2022/01/05", "2022-02-30", "2023-02-29", "20220105", "", " 2022-01-05"] {
            assert!(
                matches!(parse_purchase_date(bad), Err(ReceiptError::MalformedDate(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_time_must_be_strict() {
        assert_eq!(parse_purchase_time("00:00").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_purchase_time("23:59").unwrap(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());

        for bad in ["9:05", "24:00", "12:60", "14:00:00", "2pm", "", "14-00"] {
            assert!(
                matches!(parse_purchase_time(bad), Err(ReceiptError::MalformedTime(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_amounts() {
        assert_eq!(parse_amount("total", "15").unwrap(), Decimal::from(15));
        assert_eq!(parse_amount("total", "12.25").unwrap(), Decimal::new(1225, 2));
        assert_eq!(parse_amount("total", "0.00").unwrap(), Decimal::ZERO);

        for bad in ["35.35s", "", ".", "-1.00", "1e3", "1.2.3", "+5", "1,000.00"] {
            assert!(
                matches!(parse_amount("total", bad), Err(ReceiptError::MalformedAmount { field: "total", .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_bad_item_price_rejects_whole_receipt() {
        let body = VALID_RECEIPT.replace("11.11", "eleven");
        let err = Receipt::from_json(body.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::MalformedAmount {
                field: "price",
                value: "eleven".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_field_or_wrong_type_is_invalid_payload() {
        let missing_total = r#"{"retailer":"X","purchaseDate":"2022-01-01","purchaseTime":"10:00"}"#;
        let numeric_total = r#"{"retailer":"X","purchaseDate":"2022-01-01","purchaseTime":"10:00","total":35.35}"#;

        assert!(matches!(
            Receipt::from_json(missing_total.as_bytes()),
            Err(ReceiptError::InvalidPayload(_))
        ));
        assert!(matches!(
            Receipt::from_json(numeric_total.as_bytes()),
            Err(ReceiptError::InvalidPayload(_))
        ));
        assert!(matches!(
            Receipt::from_json(b"not json"),
            Err(ReceiptError::InvalidPayload(_))
        ));
    }
}
