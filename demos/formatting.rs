//! Card number formatting example.
//!
//! Run with: `cargo run --example formatting`

use card_field::{format, mask_pan, network, PaymentNetwork};

fn main() {
    println!("=== Card Number Formatting ===\n");

    // -------------------------------------------------------------------------
    // Network display masks
    // -------------------------------------------------------------------------
    println!("--- Network masks ---\n");

    let cards = [
        ("4111111111111111", PaymentNetwork::Visa),
        ("5500000000000004", PaymentNetwork::Mastercard),
        ("378282246310005", PaymentNetwork::AmericanExpress),
        ("6291570000000000007", PaymentNetwork::Mir),
        ("36700102000000", PaymentNetwork::DinersClub),
    ];

    for (number, net) in cards {
        let profile = network::profile_for(Some(net));
        println!("  {}", net);
        println!("    Mask:    {}", profile.display_mask);
        println!("    Lengths: {:?}", profile.accepted_lengths);
        println!("    Output:  {}", format::format_for_network(number, Some(net)));
        println!();
    }

    // -------------------------------------------------------------------------
    // Live typing
    // -------------------------------------------------------------------------
    println!("--- As the user types ---\n");

    let typed = "378282246310005";
    for len in [1, 2, 4, 5, 10, 11, 15] {
        let p = format::preview(&typed[..len]);
        let net = p.network.map_or("?", |n| n.name());
        println!("  {:<18} {:<17} max {}", p.formatted, net, p.max_length);
    }
    println!();

    // -------------------------------------------------------------------------
    // Custom masks
    // -------------------------------------------------------------------------
    println!("--- Custom masks ---\n");

    let number = "4111111111111111";
    for (mask, placeholder) in [("0000-0000-0000-0000", '0'), ("#### #### #### ####", '#'), ("0000 00** **** 0000", '0')] {
        println!("  {:<22} -> {}", mask, format::format_pan(number, mask, placeholder));
    }
    println!();

    // -------------------------------------------------------------------------
    // Stripping and masking
    // -------------------------------------------------------------------------
    println!("--- Stripping and masking ---\n");

    for input in ["4111 1111 1111 1111", "4111-1111-1111-1111", "411111******1111"] {
        let digits = format::strip_formatting(input);
        println!("  {:<22} strip -> {:<17} mask -> {:?}", input, digits, mask_pan(input));
    }
}
