//! Itemized purchase data attached to a payment.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement method for a purchased item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemPaymentMethod {
    FullPayment,
    FullPrepayment,
    Prepayment,
    Advance,
    PartialPayment,
    Credit,
    CreditPayment,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl ItemPaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            ItemPaymentMethod::FullPayment => "FULL_PAYMENT",
            ItemPaymentMethod::FullPrepayment => "FULL_PREPAYMENT",
            ItemPaymentMethod::Prepayment => "PREPAYMENT",
            ItemPaymentMethod::Advance => "ADVANCE",
            ItemPaymentMethod::PartialPayment => "PARTIAL_PAYMENT",
            ItemPaymentMethod::Credit => "CREDIT",
            ItemPaymentMethod::CreditPayment => "CREDIT_PAYMENT",
            ItemPaymentMethod::Unknown(value) => value,
        }
    }
}

impl From<String> for ItemPaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FULL_PAYMENT" => ItemPaymentMethod::FullPayment,
            "FULL_PREPAYMENT" => ItemPaymentMethod::FullPrepayment,
            "PREPAYMENT" => ItemPaymentMethod::Prepayment,
            "ADVANCE" => ItemPaymentMethod::Advance,
            "PARTIAL_PAYMENT" => ItemPaymentMethod::PartialPayment,
            "CREDIT" => ItemPaymentMethod::Credit,
            "CREDIT_PAYMENT" => ItemPaymentMethod::CreditPayment,
            _ => ItemPaymentMethod::Unknown(value),
        }
    }
}

impl From<ItemPaymentMethod> for String {
    fn from(value: ItemPaymentMethod) -> Self {
        match value {
            ItemPaymentMethod::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

/// Fiscal category of a purchased item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemPaymentObject {
    Commodity,
    Excise,
    Job,
    Service,
    GamblingBet,
    GamblingPrize,
    Lottery,
    LotteryPrize,
    IntellectualActivity,
    Payment,
    AgentCommission,
    Composite,
    Another,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl ItemPaymentObject {
    pub fn as_str(&self) -> &str {
        match self {
            ItemPaymentObject::Commodity => "COMMODITY",
            ItemPaymentObject::Excise => "EXCISE",
            ItemPaymentObject::Job => "JOB",
            ItemPaymentObject::Service => "SERVICE",
            ItemPaymentObject::GamblingBet => "GAMBLING_BET",
            ItemPaymentObject::GamblingPrize => "GAMBLING_PRIZE",
            ItemPaymentObject::Lottery => "LOTTERY",
            ItemPaymentObject::LotteryPrize => "LOTTERY_PRIZE",
            ItemPaymentObject::IntellectualActivity => "INTELLECTUAL_ACTIVITY",
            ItemPaymentObject::Payment => "PAYMENT",
            ItemPaymentObject::AgentCommission => "AGENT_COMMISSION",
            ItemPaymentObject::Composite => "COMPOSITE",
            ItemPaymentObject::Another => "ANOTHER",
            ItemPaymentObject::Unknown(value) => value,
        }
    }
}

impl From<String> for ItemPaymentObject {
    fn from(value: String) -> Self {
        match value.as_str() {
            "COMMODITY" => ItemPaymentObject::Commodity,
            "EXCISE" => ItemPaymentObject::Excise,
            "JOB" => ItemPaymentObject::Job,
            "SERVICE" => ItemPaymentObject::Service,
            "GAMBLING_BET" => ItemPaymentObject::GamblingBet,
            "GAMBLING_PRIZE" => ItemPaymentObject::GamblingPrize,
            "LOTTERY" => ItemPaymentObject::Lottery,
            "LOTTERY_PRIZE" => ItemPaymentObject::LotteryPrize,
            "INTELLECTUAL_ACTIVITY" => ItemPaymentObject::IntellectualActivity,
            "PAYMENT" => ItemPaymentObject::Payment,
            "AGENT_COMMISSION" => ItemPaymentObject::AgentCommission,
            "COMPOSITE" => ItemPaymentObject::Composite,
            "ANOTHER" => ItemPaymentObject::Another,
            _ => ItemPaymentObject::Unknown(value),
        }
    }
}

impl From<ItemPaymentObject> for String {
    fn from(value: ItemPaymentObject) -> Self {
        match value {
            ItemPaymentObject::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

/// VAT rate applied to a purchased item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemTax {
    None,
    Vat0,
    Vat10,
    Vat20,
    Vat110,
    Vat120,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl ItemTax {
    pub fn as_str(&self) -> &str {
        match self {
            ItemTax::None => "NONE",
            ItemTax::Vat0 => "VAT0",
            ItemTax::Vat10 => "VAT10",
            ItemTax::Vat20 => "VAT20",
            ItemTax::Vat110 => "VAT110",
            ItemTax::Vat120 => "VAT120",
            ItemTax::Unknown(value) => value,
        }
    }
}

impl From<String> for ItemTax {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NONE" => ItemTax::None,
            "VAT0" => ItemTax::Vat0,
            "VAT10" => ItemTax::Vat10,
            "VAT20" => ItemTax::Vat20,
            "VAT110" => ItemTax::Vat110,
            "VAT120" => ItemTax::Vat120,
            _ => ItemTax::Unknown(value),
        }
    }
}

impl From<ItemTax> for String {
    fn from(value: ItemTax) -> Self {
        match value {
            ItemTax::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ItemTax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase description attached to a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PaymentItem>,
}

/// A single purchased item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<ItemPaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_object: Option<ItemPaymentObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<ItemTax>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn item_round_trips_with_enumerated_fields() {
        let item: PaymentItem = serde_json::from_value(json!({
            "name": "subscription",
            "price": 10.0,
            "quantity": 2.0,
            "amount": 20.0,
            "paymentMethod": "FULL_PAYMENT",
            "paymentObject": "SERVICE",
            "tax": "VAT20"
        }))
        .unwrap();
        assert_eq!(item.payment_method, Some(ItemPaymentMethod::FullPayment));
        assert_eq!(item.tax, Some(ItemTax::Vat20));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["paymentObject"], "SERVICE");
    }

    #[test]
    fn unknown_tax_code_survives() {
        let item: PaymentItem = serde_json::from_value(json!({"tax": "VAT25"})).unwrap();
        assert_eq!(item.tax, Some(ItemTax::Unknown("VAT25".into())));
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["tax"], "VAT25");
    }
}
