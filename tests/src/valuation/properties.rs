#![cfg(test)]
use domval_core::valuation::scoring::length_score;
use domval_core::valuation::{Engine, MAX_VALUE, MIN_VALUE, TokenizationContext, ValuationResult};

const SUFFIXES: &[&str] = &[".com", ".net", ".org", ".io", ".ai", ".eth", ".crypto", ".zzz", ""];
const STEMS: &[&str] = &[
    "a", "go", "app", "shop", "cloud", "crypto", "x9", "my-site", "bbbbbbbb", "qwrtplkj",
    "superlongnamewithoutanymeaning", "web3", "ai-labs", "Aa", "домен", "pay123", "-", "",
];

/// Every stem on every suffix, plus a few longer combinations.
fn corpus() -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for stem in STEMS {
        for suffix in SUFFIXES {
            domains.push(format!("{stem}{suffix}"));
            domains.push(format!("{stem}{stem}{suffix}"));
            domains.push(format!("www.{stem}{suffix}"));
        }
    }
    domains
}

#[test]
fn evaluation_is_deterministic() {
    let engine = Engine::new();
    for domain in corpus() {
        assert_eq!(engine.evaluate(&domain), engine.evaluate(&domain), "{domain}");
    }
}

#[test]
fn estimates_stay_within_bounds() {
    let engine = Engine::new();
    for domain in corpus() {
        let result: ValuationResult = engine.evaluate(&domain);
        assert!(
            (MIN_VALUE..=MAX_VALUE).contains(&result.estimated_value),
            "{domain} valued at {}",
            result.estimated_value
        );
    }
}

#[test]
fn length_tiers_never_increase() {
    let scores: Vec<f64> = [3, 5, 7, 10, 15].into_iter().map(length_score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]), "{scores:?}");
}

#[test]
fn brandable_implies_clean_pronounceable_mid_length() {
    let engine = Engine::new();
    for domain in corpus() {
        let factors = engine.evaluate(&domain).factors;
        if factors.brandable {
            assert!((3..=12).contains(&factors.length), "{domain}");
            assert!(!factors.has_digits, "{domain}");
            assert!(!factors.has_hyphen, "{domain}");
            assert!(factors.pronounceable, "{domain}");
        }
    }
}

#[test]
fn batch_matches_sequential_evaluation() {
    let engine = Engine::new();
    let domains: Vec<String> = corpus();
    let sequential: Vec<ValuationResult> = domains.iter().map(|domain| engine.evaluate(domain)).collect();
    assert_eq!(engine.evaluate_batch(&domains), sequential);
}

#[test]
fn tokenization_context_only_touches_reasoning() {
    let engine = Engine::new();
    let context = TokenizationContext {
        tokenized: true,
        chain: Some("ethereum".to_string()),
        lending_platform: Some("DOMA Lending".to_string()),
        collateral_value: Some(50_000.0),
        borrowed_amount: Some(30_000.0),
    };

    for domain in corpus() {
        let plain: ValuationResult = engine.evaluate(&domain);
        let noted: ValuationResult = engine.evaluate_with_context(&domain, Some(&context));

        assert_eq!(plain.estimated_value, noted.estimated_value, "{domain}");
        assert_eq!(plain.confidence, noted.confidence, "{domain}");
        assert_eq!(plain.factors, noted.factors, "{domain}");
    }
}
