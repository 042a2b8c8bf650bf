//! 물 계산(농도/비율) 회귀 테스트.
use soap_lye_calculator::soap::water::{
    water_for_mode, water_from_concentration, water_from_ratio, WaterCalcError, WaterMode,
};

#[test]
fn concentration_33_percent() {
    // 63.65 x (1 - 0.33) / 0.33 ≈ 129.23 g
    let water = water_from_concentration(63.65, 33.0).expect("water calc");
    assert!((water - 63.65 * (1.0 - 0.33) / 0.33).abs() < 1e-9);
    assert!((water - 129.2288).abs() < 1e-3);
}

#[test]
fn concentration_50_percent_equals_lye() {
    let water = water_from_concentration(94.0, 50.0).expect("water calc");
    assert!((water - 94.0).abs() < 1e-12);
}

#[test]
fn concentration_of_zero_lye_is_zero() {
    let water = water_from_concentration(0.0, 33.0).expect("water calc");
    assert!(water.abs() < 1e-12);
}

#[test]
fn concentration_out_of_range_is_rejected() {
    for pct in [0.0, 100.0, -5.0, 120.0] {
        let res = water_from_concentration(63.65, pct);
        assert!(
            matches!(res, Err(WaterCalcError::ConcentrationOutOfRange(_))),
            "pct={pct} res={res:?}"
        );
    }
}

#[test]
fn ratio_two_to_one() {
    let water = water_from_ratio(94.001, 2.0).expect("water calc");
    assert!((water - 188.002).abs() < 1e-9);
}

#[test]
fn ratio_not_positive_is_rejected() {
    for ratio in [0.0, -1.0] {
        let res = water_from_ratio(63.65, ratio);
        assert!(
            matches!(res, Err(WaterCalcError::RatioNotPositive(_))),
            "ratio={ratio} res={res:?}"
        );
    }
}

#[test]
fn equivalent_concentration_and_ratio_agree() {
    // 농도 25% == 비율 3:1
    let by_conc = water_from_concentration(63.65, 25.0).expect("water calc");
    let by_ratio = water_from_ratio(63.65, 3.0).expect("water calc");
    assert!((by_conc - by_ratio).abs() < 1e-9);
}

#[test]
fn mode_dispatch_matches_direct_calls() {
    let lye = 74.05;
    let conc = water_for_mode(lye, WaterMode::LyeConcentration(33.0)).expect("water calc");
    assert!((conc - water_from_concentration(lye, 33.0).expect("water calc")).abs() < 1e-12);
    let ratio = water_for_mode(lye, WaterMode::WaterToLyeRatio(2.0)).expect("water calc");
    assert!((ratio - water_from_ratio(lye, 2.0).expect("water calc")).abs() < 1e-12);
}

#[test]
fn mode_dispatch_propagates_errors() {
    assert!(water_for_mode(63.65, WaterMode::LyeConcentration(100.0)).is_err());
    assert!(water_for_mode(63.65, WaterMode::WaterToLyeRatio(0.0)).is_err());
}
