//! Domain models of a parsed guest list.
//!
//! - [`GuestRecord`] - One guest-list row in structured form
//! - [`Guest`] / [`Address`] - Personal data, if the guest provided it
//! - [`Event`] / [`Ticket`] / [`Price`] - What the guest participates with
//! - [`Order`] / [`Invoice`] - Purchase data, if the ticket was ordered
//!
//! Optional values serialize as `null`, so every key is always present in
//! the JSON output.

use serde::{Deserialize, Serialize};

// =============================================================================
// Guest
// =============================================================================

/// Postal address of a guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub zip: u32,
    pub city: String,
    pub country: String,
}

/// Personal data of a guest.
///
/// Only available if the guest registered with a name. Guests registering
/// via a guest-list code may not have provided an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub salutation: String,
    pub name: String,
    pub surname: String,
    pub company: Option<String>,
    pub year_of_birth: Option<i32>,
    pub address: Option<Address>,
}

// =============================================================================
// Event & Ticket
// =============================================================================

/// The event a guest participates in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub begin: String,
    pub end: String,
}

/// Ticket price, as exported (no currency parsing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub incl_fee: String,
    pub excl_fee: String,
}

/// The individual ticket a guest uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub code: String,
    pub category: String,
    pub price: Price,
    pub download: String,
    pub created: String,
    pub used: bool,
}

// =============================================================================
// Order
// =============================================================================

/// Invoice generated by Eventjet for an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub id: u64,
    pub download: String,
}

/// Order, payment and invoice data of a purchased ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    #[serde(rename = "payment-id")]
    pub payment_id: Option<u64>,
    pub invoice: Option<Invoice>,
}

// =============================================================================
// Guest Record
// =============================================================================

/// One row of the guest list in structured form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestRecord {
    pub guest: Option<Guest>,
    /// Mobile number without the compatibility quote prefix.
    pub mobile: Option<String>,
    pub email: String,
    /// The guest agreed to receive newsletters via mail.
    pub newsletter: bool,
    pub event: Event,
    pub ticket: Ticket,
    pub order: Option<Order>,
    /// Guest-list code used for registration.
    pub code: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> GuestRecord {
        GuestRecord {
            guest: None,
            mobile: None,
            email: "anna@example.org".into(),
            newsletter: false,
            event: Event {
                id: 5,
                name: "Sommerfest".into(),
                begin: "01.07.2017 18:00".into(),
                end: "02.07.2017 02:00".into(),
            },
            ticket: Ticket {
                id: 42,
                code: "ABC123".into(),
                category: "Stehplatz".into(),
                price: Price {
                    incl_fee: "12,50".into(),
                    excl_fee: "11,00".into(),
                },
                download: "https://example.org/t/42".into(),
                created: "20.06.2017 10:11".into(),
                used: true,
            },
            order: Some(Order {
                id: 7,
                payment_id: None,
                invoice: None,
            }),
            code: None,
        }
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["guest"], json!(null));
        assert_eq!(value["mobile"], json!(null));
        assert_eq!(value["code"], json!(null));
        assert_eq!(value["order"]["invoice"], json!(null));
    }

    #[test]
    fn test_payment_id_key() {
        let value = serde_json::to_value(sample()).unwrap();
        let order = value["order"].as_object().unwrap();
        assert!(order.contains_key("payment-id"));
        assert!(!order.contains_key("payment_id"));
    }

    #[test]
    fn test_nested_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["event"]["id"], json!(5));
        assert_eq!(value["ticket"]["price"]["incl_fee"], json!("12,50"));
        assert_eq!(value["ticket"]["used"], json!(true));
    }
}
