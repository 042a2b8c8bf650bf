//! 알칼리 소요량 계산 회귀 테스트.
use soap_lye_calculator::soap::lye::{
    lye_requirement, AlkaliKind, LyeRequirementInput, RecipeOil, KOH_SAP_FACTOR,
};

fn olive(weight_g: f64) -> RecipeOil {
    RecipeOil {
        name: "Olive Oil".to_string(),
        weight_g,
        sap_naoh: 0.134,
    }
}

fn trio() -> Vec<RecipeOil> {
    vec![
        olive(300.0),
        RecipeOil {
            name: "Coconut Oil 76°".to_string(),
            weight_g: 150.0,
            sap_naoh: 0.183,
        },
        RecipeOil {
            name: "Castor Oil".to_string(),
            weight_g: 50.0,
            sap_naoh: 0.128,
        },
    ]
}

#[test]
fn naoh_single_oil_with_superfat() {
    // 500 g x 0.134 = 67.0 g @0%SF, x0.95 = 63.65 g @5%SF
    let res = lye_requirement(LyeRequirementInput {
        oils: vec![olive(500.0)],
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
    });
    assert!((res.total_lye_0sf_g - 67.0).abs() < 1e-9);
    assert!((res.total_lye_g - 63.65).abs() < 1e-9);
    assert_eq!(res.rows.len(), 1);
    assert!((res.rows[0].lye_0sf_g - 67.0).abs() < 1e-9);
    assert!((res.rows[0].lye_g - 63.65).abs() < 1e-9);
}

#[test]
fn koh_uses_molar_mass_factor() {
    // 500 g x 0.134 x 1.403 = 94.001 g
    let res = lye_requirement(LyeRequirementInput {
        oils: vec![olive(500.0)],
        alkali: AlkaliKind::PotassiumHydroxide,
        superfat_pct: 0.0,
    });
    assert!((res.rows[0].sap - 0.134 * KOH_SAP_FACTOR).abs() < 1e-12);
    assert!((res.total_lye_g - 94.001).abs() < 1e-9);
}

#[test]
fn koh_total_is_naoh_total_times_factor() {
    let naoh = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 0.0,
    });
    let koh = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::PotassiumHydroxide,
        superfat_pct: 0.0,
    });
    assert!((koh.total_lye_g - naoh.total_lye_g * KOH_SAP_FACTOR).abs() < 1e-9);
}

#[test]
fn multi_oil_totals_and_row_order() {
    // 40.2 + 27.45 + 6.4 = 74.05 g @0%SF
    let res = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
    });
    assert!((res.total_lye_0sf_g - 74.05).abs() < 1e-9);
    assert!((res.total_lye_g - 74.05 * 0.95).abs() < 1e-9);
    let names: Vec<&str> = res.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Olive Oil", "Coconut Oil 76°", "Castor Oil"]);
}

#[test]
fn rows_sum_matches_total() {
    let res = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 7.5,
    });
    let row_sum: f64 = res.rows.iter().map(|r| r.lye_g).sum();
    assert!((row_sum - res.total_lye_g).abs() < 1e-9);
    let row_sum_0sf: f64 = res.rows.iter().map(|r| r.lye_0sf_g).sum();
    assert!((row_sum_0sf - res.total_lye_0sf_g).abs() < 1e-9);
}

#[test]
fn zero_superfat_equals_undiscounted() {
    let res = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 0.0,
    });
    assert!((res.total_lye_g - res.total_lye_0sf_g).abs() < 1e-12);
}

#[test]
fn full_superfat_discounts_to_zero() {
    let res = lye_requirement(LyeRequirementInput {
        oils: vec![olive(500.0)],
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 100.0,
    });
    assert!(res.total_lye_g.abs() < 1e-12);
    assert!(res.rows[0].lye_g.abs() < 1e-12);
    assert!((res.total_lye_0sf_g - 67.0).abs() < 1e-9);
}

#[test]
fn superfat_over_100_is_not_clamped() {
    // 엔진은 범위를 강제하지 않으므로 음수 결과를 그대로 돌려준다.
    let res = lye_requirement(LyeRequirementInput {
        oils: vec![olive(500.0)],
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 150.0,
    });
    assert!(res.total_lye_g < 0.0);
    assert!((res.total_lye_g + 33.5).abs() < 1e-9);
}

#[test]
fn empty_oils_yield_zero_totals() {
    let res = lye_requirement(LyeRequirementInput {
        oils: Vec::new(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
    });
    assert_eq!(res.rows.len(), 0);
    assert!(res.total_lye_0sf_g.abs() < 1e-12);
    assert!(res.total_lye_g.abs() < 1e-12);
}

#[test]
fn zero_weight_oil_contributes_nothing() {
    let mut oils = trio();
    oils.push(RecipeOil {
        name: "Shea Butter".to_string(),
        weight_g: 0.0,
        sap_naoh: 0.128,
    });
    let with_zero = lye_requirement(LyeRequirementInput {
        oils,
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
    });
    let without = lye_requirement(LyeRequirementInput {
        oils: trio(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
    });
    assert!((with_zero.total_lye_g - without.total_lye_g).abs() < 1e-12);
    assert_eq!(with_zero.rows.len(), 4);
    assert!(with_zero.rows[3].lye_g.abs() < 1e-12);
}
