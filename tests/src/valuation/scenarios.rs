#![cfg(test)]
use domval_core::valuation::{Confidence, Engine, ValuationResult};

fn value(domain: &str) -> ValuationResult {
    Engine::new().evaluate(domain)
}

#[test]
fn short_dictionary_com_is_premium() {
    let result: ValuationResult = value("app.com");

    assert_eq!(result.factors.length, 3);
    assert_eq!(result.factors.length_score, 10.0);
    assert_eq!(result.factors.character_score, 6.0);
    assert_eq!(result.factors.suffix_score, 5.0);
    assert!(result.factors.brandable);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.estimated_value, 522);
    assert_eq!(result.currency, "USD");
}

#[test]
fn digits_are_penalised() {
    let result: ValuationResult = value("test123.com");

    assert_eq!(result.factors.character_score, 3.0);
    assert!(result.factors.has_digits);
    assert!(!result.factors.brandable);
    assert_eq!(result.estimated_value, 60);
    assert!(result.reasoning.contains("Contains numbers"));
}

#[test]
fn long_names_score_lowest_length_tier() {
    let result: ValuationResult = value("verylongdomainnamethatishard.com");

    assert_eq!(result.factors.length_score, 1.0);
    assert!(!result.factors.brandable);
    assert_eq!(result.estimated_value, 64);
}

#[test]
fn hyphenated_name() {
    let result: ValuationResult = value("test-domain.com");

    assert!(result.factors.has_hyphen);
    assert_eq!(result.estimated_value, 41);
    assert!(result.reasoning.contains("Contains hyphens"));
}

#[test]
fn blockchain_and_alternative_suffixes() {
    let eth: ValuationResult = value("myname.eth");
    assert!(eth.factors.brandable);
    assert_eq!(eth.estimated_value, 251);
    assert_eq!(eth.confidence, Confidence::High);

    let io: ValuationResult = value("webhub.io");
    assert_eq!(io.estimated_value, 279);

    let unknown: ValuationResult = value("xkcd.zzz");
    assert!(!unknown.factors.brandable);
    assert_eq!(unknown.estimated_value, 38);
    assert_eq!(unknown.confidence, Confidence::Medium);
}

#[test]
fn only_the_last_label_is_the_suffix() {
    let result: ValuationResult = value("www.example.com");

    assert_eq!(result.factors.suffix_score, 5.0);
    assert_eq!(result.estimated_value, 72);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn name_without_suffix_gets_floor_value() {
    let result: ValuationResult = value("localhost");

    assert_eq!(result.estimated_value, 10);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.reasoning, "Invalid domain format");
}

#[test]
fn mixed_case_input_is_valued_like_lower_case_minus_casing_signal() {
    assert_eq!(value("Web.COM").estimated_value, 486);
    assert_eq!(value("cloudpay.net").estimated_value, 228);
    assert_eq!(value("a-1.com").estimated_value, 25);
    assert_eq!(value("qqqqqq.com").estimated_value, 144);
}
