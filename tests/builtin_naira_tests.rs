mod fixtures;

use fixtures::*;

#[test]
fn five_naira_note() {
    let engine = builtin_engine();
    let result = engine
        .process_texts(
            "NGN",
            "",
            &["FIVE NAIRA\nALHAJI ABUBAKAR TAFAWA BALEWA", "CENTRAL BANK OF NIGERIA", "AB1234567"],
            &money_labels(),
        )
        .unwrap();
    assert_eq!(result.denomination, "5");
    assert_eq!(result.serial, "AB1234567");
}

#[test]
fn uppercase_garbled_words_are_recovered_by_fuzzy_suggestions() {
    let engine = builtin_engine();
    let result = engine
        .process_texts("NGN", "", &["FVE NAIRA TAFAWA", "AB1234567"], &money_labels())
        .unwrap();
    assert_eq!(result.denomination, "5");
    assert_eq!(result.serial, "AB1234567");
}

#[test]
fn twenty_naira_serial_is_read_from_the_right() {
    let engine = builtin_engine();
    let result = engine
        .process_texts(
            "NGN",
            "",
            &["TWENTY NAIRA CENTRAL BANK OF NIGERIA", "AB123456", "GENERAL MURTALA", "CD1234567"],
            &money_labels(),
        )
        .unwrap();
    assert_eq!(result.denomination, "20");
    assert_eq!(result.serial, "CD1234567");
}

#[test]
fn hundred_naira_drops_years_before_matching() {
    let engine = builtin_engine();
    let result = engine
        .process_texts(
            "NGN",
            "",
            &["CENTRAL BANK OF NIGERIA", "ONE HUNDRED NAIRA", "CHIEF OBAFEMI AWOLOWO 1909 1987", "BC12345678"],
            &money_labels(),
        )
        .unwrap();
    assert_eq!(result.denomination, "100");
    assert_eq!(result.serial, "123456");
}

#[test]
fn ten_naira_reference_uses_fifty_directive() {
    let engine = builtin_engine();
    let result = engine
        .process_texts("NGN", "10", &["TEN NAIRA", "AB-123.4567"], &money_labels())
        .unwrap();
    assert_eq!(result.denomination, "10");
    assert_eq!(result.serial, "AB1234567");
}

#[test]
fn unrecognized_note_yields_empty_fields() {
    let engine = builtin_engine();
    let result = engine
        .process_texts("NGN", "", &["GREETINGS"], &money_labels())
        .unwrap();
    assert_eq!(result.denomination, "");
    assert_eq!(result.serial, "");
}

#[test]
fn known_but_unconfigured_currency_is_rejected() {
    let engine = builtin_engine();
    let err = engine
        .process_texts("EUR", "", &["EURO"], &money_labels())
        .unwrap_err();
    assert!(matches!(err, mint_core::MintError::CurrencyNotConfigured(code) if code == "EUR"));
}
