//! Checkout
//!
//! Validates the structured checkout form submitted to place an order.
//! Validation is total: malformed input becomes a field error in the
//! report, never a panic or a hard failure. The delivery option and
//! payment method arrive as raw text so an out-of-range selection is
//! reported like any other field violation.

use std::{fmt, str::FromStr, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `12345` or `12345-6789`.
#[expect(clippy::expect_used, reason = "hard-coded pattern, exercised by tests")]
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("postal code pattern"));

/// E.164-style phone number, optional leading `+`.
#[expect(clippy::expect_used, reason = "hard-coded pattern, exercised by tests")]
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern"));

/// How the order should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryOption {
    /// Standard delivery, 3-5 days.
    Standard,

    /// Express delivery, 1-2 days.
    Express,
}

impl FromStr for DeliveryOption {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(DeliveryOption::Standard),
            "express" => Ok(DeliveryOption::Express),
            _ => Err(UnknownVariant),
        }
    }
}

/// How the order will be paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Credit card; requires card number, expiry date and CVV.
    CreditCard,

    /// PayPal.
    Paypal,

    /// Apple Pay.
    ApplePay,
}

impl FromStr for PaymentMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditCard" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::Paypal),
            "applePay" => Ok(PaymentMethod::ApplePay),
            _ => Err(UnknownVariant),
        }
    }
}

/// The submitted text did not name a known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

/// The checkout form as submitted, all fields raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Recipient name.
    pub full_name: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Postal code, `12345` or `12345-6789`.
    pub postal_code: String,

    /// Contact phone number.
    pub phone: String,

    /// Selected delivery option, `standard` or `express`.
    pub delivery_option: String,

    /// Selected payment method, `creditCard`, `paypal` or `applePay`.
    pub payment_method: String,

    /// Card number; required when paying by credit card.
    pub card_number: Option<String>,

    /// Card expiry date; required when paying by credit card.
    pub expiry_date: Option<String>,

    /// Card CVV; required when paying by credit card.
    pub cvv: Option<String>,

    /// Free-text delivery notes.
    pub notes: Option<String>,
}

/// Identifies the form field an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Recipient name.
    FullName,

    /// Street address.
    Address,

    /// City.
    City,

    /// Postal code.
    PostalCode,

    /// Phone number.
    Phone,

    /// Delivery option.
    DeliveryOption,

    /// Payment method.
    PaymentMethod,

    /// Card number.
    CardNumber,

    /// Card expiry date.
    ExpiryDate,

    /// Card CVV.
    Cvv,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::FullName => "fullName",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::PostalCode => "postalCode",
            FormField::Phone => "phone",
            FormField::DeliveryOption => "deliveryOption",
            FormField::PaymentMethod => "paymentMethod",
            FormField::CardNumber => "cardNumber",
            FormField::ExpiryDate => "expiryDate",
            FormField::Cvv => "cvv",
        };

        f.write_str(name)
    }
}

/// Result of validating a checkout form: either clean, or a message
/// per violated field.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: IndexMap<FormField, String>,
}

impl ValidationReport {
    /// Whether the form passed every rule.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, if it was violated.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterate over violations in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Number of violated fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field was violated.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn reject(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }
}

/// Validate a checkout form against every field rule.
///
/// Always returns a complete report; no input can make this fail.
/// Card number, expiry date and CVV are only required when the payment
/// method is `creditCard`.
pub fn validate(form: &CheckoutForm) -> ValidationReport {
    let mut report = ValidationReport::default();

    if form.full_name.chars().count() < 2 {
        report.reject(
            FormField::FullName,
            "Full name must be at least 2 characters",
        );
    }

    if form.address.chars().count() < 5 {
        report.reject(FormField::Address, "Address is required");
    }

    if form.city.chars().count() < 2 {
        report.reject(FormField::City, "City is required");
    }

    if !POSTAL_CODE.is_match(&form.postal_code) {
        report.reject(FormField::PostalCode, "Invalid postal code");
    }

    if !PHONE.is_match(&form.phone) {
        report.reject(FormField::Phone, "Invalid phone number");
    }

    if DeliveryOption::from_str(&form.delivery_option).is_err() {
        report.reject(FormField::DeliveryOption, "Invalid delivery option");
    }

    match PaymentMethod::from_str(&form.payment_method) {
        Ok(PaymentMethod::CreditCard) => {
            require_card_field(&mut report, FormField::CardNumber, form.card_number.as_deref());
            require_card_field(&mut report, FormField::ExpiryDate, form.expiry_date.as_deref());
            require_card_field(&mut report, FormField::Cvv, form.cvv.as_deref());
        }
        Ok(PaymentMethod::Paypal | PaymentMethod::ApplePay) => {}
        Err(UnknownVariant) => {
            report.reject(FormField::PaymentMethod, "Invalid payment method");
        }
    }

    report
}

/// Card fields must be present and non-empty for credit-card payments.
fn require_card_field(report: &mut ValidationReport, field: FormField, value: Option<&str>) {
    if value.is_none_or(|value| value.trim().is_empty()) {
        report.reject(field, format!("{field} is required for credit card payment"));
    }
}
