//! Walkthrough of the client-side cart and checkout flow
//!
//! Builds a cart from the seed catalog, adjusts quantities, fills in the
//! checkout form, and prints the order submission that would be POSTed to
//! /api/orders.

use storefront::cart::{Cart, CheckoutForm};
use storefront::catalog::seed;

fn main() -> anyhow::Result<()> {
    println!("🛒 Storefront cart walkthrough\n");

    let catalog = seed::demo_products();
    let mut cart = Cart::new();

    // Two pairs of headphones and a coffee maker
    cart.add(&catalog[0]);
    cart.add(&catalog[0]);
    cart.add(&catalog[2]);

    for line in cart.lines() {
        println!(
            "  {} × {} @ ${} = ${}",
            line.quantity,
            line.name,
            line.price,
            line.line_total()
        );
    }
    println!(
        "\nSubtotal: ${} ({} items)",
        cart.total_price(),
        cart.total_items()
    );

    // Second thoughts about the coffee maker
    cart.remove(&catalog[2].id);
    println!("Dropped the coffee maker, subtotal now ${}", cart.total_price());

    let form = CheckoutForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        card_number: "4242424242424242".to_string(),
        expiry_date: "12/30".to_string(),
        cvv: "123".to_string(),
    };

    let submission = form.into_submission(&cart)?;
    println!("\n📦 Order payload (note: no payment fields):");
    println!("{}", serde_json::to_string_pretty(&submission)?);

    Ok(())
}
