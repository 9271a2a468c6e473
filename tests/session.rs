use std::io::Cursor;

use cta::prompt::Console;
use cta::{VoucherFormat, run_session};

fn session(input: &str, format: VoucherFormat) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run_session(&mut console, format).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn single_adult_central_to_central() {
    let out = session("1\n1\n1\n0\n0\n0\nN\n", VoucherFormat::Receipt);

    assert!(out.contains("ZONE            | STATIONS"));
    assert!(out.contains("Route: Central to Central\n"));
    assert!(out.contains("Zones Travelled: 1\n"));
    assert!(out.contains("Adult    x1  | Fare: 2105c | Subtotal: 2105c\n"));
    assert!(out.contains("TOTAL TRAVELLERS: 1\n"));
    assert!(out.contains("GRAND TOTAL: 2105 CENTS\n"));
    assert!(out.contains("Issue another voucher? (Y/N): "));
    assert!(out.ends_with("Thank you for using CTA. Goodbye!\n"));
}

#[test]
fn students_central_to_downtown() {
    let out = session("1\n3\n0\n0\n0\n2\nn\n", VoucherFormat::Receipt);

    assert!(out.contains("Zones Travelled: 3\n"));
    assert!(out.contains("Student  x2  | Fare: 5250c | Subtotal: 10500c\n"));
    assert!(out.contains("GRAND TOTAL: 10500 CENTS\n"));
}

#[test]
fn invalid_answers_are_reprompted() {
    let input = "zero\n9\n2\n1\n0\n1\n-4\nx\n1\n0\nno\n";
    let out = session(input, VoucherFormat::Receipt);

    assert!(out.contains("Invalid input. Please enter a number.\n"));
    assert!(out.contains("Invalid choice. Please select a number from the menu.\n"));
    assert!(out.contains("Number cannot be negative.\n"));
    assert!(out.contains("Invalid input. Please enter a whole number.\n"));
    assert!(out.contains("Route: Midtown to Central\n"));
    assert!(out.contains("Child    x1  | Fare: 2820c | Subtotal: 2820c\n"));
    assert!(out.contains("Senior   x1  | Fare: 2050c | Subtotal: 2050c\n"));
    assert!(out.contains("GRAND TOTAL: 4870 CENTS\n"));
    assert!(!out.contains("Adult    x"));
}

#[test]
fn zero_passengers_cancels_and_asks_again() {
    let out = session("1\n2\n0\n0\n0\n0\ny\n2\n2\n0\n1\n0\n0\nN\n", VoucherFormat::Receipt);

    assert!(out.contains("No passengers selected. Voucher cancelled.\n"));
    assert_eq!(out.matches("Issue another voucher? (Y/N): ").count(), 2);
    assert_eq!(out.matches("GRAND TOTAL:").count(), 1);
    assert!(out.contains("Child    x1  | Fare: 1410c | Subtotal: 1410c\n"));
}

#[test]
fn cancelled_only_session_prints_no_total() {
    let out = session("3\n1\n0\n0\n0\n0\nq\n", VoucherFormat::Receipt);

    assert!(out.contains("No passengers selected. Voucher cancelled.\n"));
    assert!(!out.contains("GRAND TOTAL"));
    assert!(!out.contains("CENTRALA TRANSPORT AUTHORITY"));
}

#[test]
fn closed_input_ends_session_politely() {
    let out = session("1\n", VoucherFormat::Receipt);

    assert!(out.contains("Select DESTINATION zone:"));
    assert!(out.ends_with("Thank you for using CTA. Goodbye!\n"));
}

#[test]
fn json_format_prints_voucher_object() {
    let out = session("2\n3\n0\n0\n2\n0\nN\n", VoucherFormat::Json);

    assert!(!out.contains("CENTRALA TRANSPORT AUTHORITY"));
    assert!(out.contains("\"zones_travelled\": 2"));
    assert!(out.contains("\"grand_total\": 4100"));
    assert!(out.contains("\"category\": \"Senior\""));
}
