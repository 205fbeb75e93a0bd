use pricer_lib::{analytic_price, PricingError, PricingInputs};

// Helper to build PricingInputs more concisely
fn inputs(spot: f64, strike: f64, vol: f64, maturity: f64, rate: f64) -> PricingInputs {
    PricingInputs {
        spot,
        strike,
        volatility: vol,
        maturity,
        risk_free_rate: rate,
    }
}

/// At-the-money reference scenario: spot=strike=100, vol=30%, 1y, r=4%.
/// Values checked against the standard Black-Scholes formula.
#[test]
fn test_reference_scenario() {
    let result = analytic_price(&inputs(100.0, 100.0, 0.3, 1.0, 0.04)).expect("pricing failed");

    assert!(
        (result.call - 13.7533).abs() < 1e-3,
        "call should be ~13.7533, got {}",
        result.call
    );
    assert!(
        (result.put - 9.8322).abs() < 1e-3,
        "put should be ~9.8322, got {}",
        result.put
    );
}

/// Put-call parity must hold across a grid of valid inputs:
/// call - put == spot - strike * e^(-r*T) within 1e-6.
#[test]
fn test_put_call_parity() {
    for spot in [50.0, 100.0, 140.0] {
        for strike in [80.0, 100.0, 120.0] {
            for vol in [0.1, 0.3, 0.8] {
                for maturity in [0.05, 1.0, 5.0] {
                    for rate in [-0.01, 0.0, 0.04, 0.1] {
                        let i = inputs(spot, strike, vol, maturity, rate);
                        let result = analytic_price(&i).expect("pricing failed");
                        let parity = spot - strike * (-rate * maturity).exp();
                        assert!(
                            (result.call - result.put - parity).abs() < 1e-6,
                            "parity violated for {:?}: call={} put={} parity={}",
                            i,
                            result.call,
                            result.put,
                            parity
                        );
                    }
                }
            }
        }
    }
}

/// As maturity shrinks toward zero the option collapses onto its intrinsic
/// value: call -> max(spot - strike, 0), put -> max(strike - spot, 0).
#[test]
fn test_short_maturity_limit() {
    let tiny = 1e-9;

    // In-the-money call
    let itm = analytic_price(&inputs(105.0, 100.0, 0.3, tiny, 0.04)).expect("pricing failed");
    assert!(
        (itm.call - 5.0).abs() < 1e-3,
        "ITM call should approach 5.0, got {}",
        itm.call
    );
    assert!(itm.put.abs() < 1e-3, "OTM put should approach 0, got {}", itm.put);

    // In-the-money put
    let otm = analytic_price(&inputs(95.0, 100.0, 0.3, tiny, 0.04)).expect("pricing failed");
    assert!(otm.call.abs() < 1e-3, "OTM call should approach 0, got {}", otm.call);
    assert!(
        (otm.put - 5.0).abs() < 1e-3,
        "ITM put should approach 5.0, got {}",
        otm.put
    );
}

/// Identical inputs must produce bit-identical outputs.
#[test]
fn test_determinism() {
    let i = inputs(123.4, 110.0, 0.25, 0.7, 0.03);
    let a = analytic_price(&i).expect("pricing failed");
    let b = analytic_price(&i).expect("pricing failed");
    assert_eq!(a.call.to_bits(), b.call.to_bits());
    assert_eq!(a.put.to_bits(), b.put.to_bits());
}

/// Negative rates are valid inputs; everything else must be positive.
#[test]
fn test_negative_rate_is_accepted() {
    let result = analytic_price(&inputs(100.0, 100.0, 0.2, 1.0, -0.005));
    assert!(result.is_ok(), "negative rate should price: {:?}", result);
}

/// Non-positive market parameters must fail fast with a typed error,
/// never return a value.
#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        ("strike", inputs(100.0, 0.0, 0.3, 1.0, 0.04)),
        ("spot", inputs(-1.0, 100.0, 0.3, 1.0, 0.04)),
        ("volatility", inputs(100.0, 100.0, 0.0, 1.0, 0.04)),
        ("maturity", inputs(100.0, 100.0, 0.3, -2.0, 0.04)),
    ];

    for (parameter, i) in cases {
        match analytic_price(&i) {
            Err(PricingError::InvalidInput { parameter: p, .. }) => {
                assert_eq!(p, parameter, "wrong parameter reported");
            }
            other => panic!("{} should be rejected, got {:?}", parameter, other),
        }
    }
}
