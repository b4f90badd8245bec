//! Checkout flow: compose the cart and the customer's form input into an
//! order submission
//!
//! Validation is required-field only. The payment fields are collected for
//! the form's sake but are neither checksummed nor sent anywhere; they are
//! discarded when the submission payload is assembled.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::Cart;
use crate::orders::order::{Address, CustomerInfo, OrderItem, OrderSubmission};

/// Flat 8% tax applied on top of the cart subtotal
fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Cart subtotal plus tax, the amount submitted as `totalAmount`
pub fn order_total(cart: &Cart) -> Decimal {
    let subtotal = cart.total_price();
    subtotal + subtotal * tax_rate()
}

/// Why a checkout attempt could not produce a submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required form field was left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Checkout with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,
}

/// The checkout form's shipping and payment fields
///
/// Mirrors the storefront page: every field is required, nothing beyond
/// presence is checked. No Luhn, no expiry parsing, no gateway.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Check that every field was filled in
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields: [(&'static str, &str); 11] = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("cardNumber", &self.card_number),
            ("expiryDate", &self.expiry_date),
            ("cvv", &self.cvv),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Compose the cart and form into an order submission
    ///
    /// The total is the cart subtotal plus tax. The card number, expiry, and
    /// CVV do not appear in the result. On a successful POST the caller is
    /// expected to clear the cart.
    pub fn into_submission(self, cart: &Cart) -> Result<OrderSubmission, CheckoutError> {
        self.validate()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items = cart
            .lines()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                price: line.price,
                quantity: line.quantity,
            })
            .collect();

        Ok(OrderSubmission {
            items,
            total_amount: order_total(cart),
            customer_info: CustomerInfo {
                name: Some(format!("{} {}", self.first_name, self.last_name)),
                email: Some(self.email),
                phone: Some(self.phone),
                address: Some(Address {
                    street: Some(self.address),
                    city: Some(self.city),
                    state: Some(self.state),
                    zip_code: Some(self.zip_code),
                }),
            },
        })
    }
}
