//! 배치 레시피 파이프라인 회귀 테스트.
use soap_lye_calculator::sap_db::SapTable;
use soap_lye_calculator::soap::batch::{
    batch_recipe, batch_totals, total_oil_mass, BatchRecipeInput,
};
use soap_lye_calculator::soap::lye::{AlkaliKind, RecipeOil};
use soap_lye_calculator::soap::water::{WaterCalcError, WaterMode};

fn olive_500g() -> Vec<RecipeOil> {
    vec![RecipeOil {
        name: "Olive Oil".to_string(),
        weight_g: 500.0,
        sap_naoh: 0.134,
    }]
}

#[test]
fn naoh_batch_with_concentration_water() {
    // 오일 500 g, NaOH, 슈퍼팻 5%, 농도 33%
    let res = batch_recipe(BatchRecipeInput {
        oils: olive_500g(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
        water_mode: WaterMode::LyeConcentration(33.0),
    })
    .expect("batch calc");
    assert!((res.totals.total_oil_g - 500.0).abs() < 1e-9);
    assert!((res.totals.total_lye_g - 63.65).abs() < 1e-9);
    assert!((res.water_g - res.totals.total_lye_g * (1.0 - 0.33) / 0.33).abs() < 1e-12);
    assert!((res.water_g - 129.23).abs() < 0.01);
    assert!((res.totals.total_batch_g - 692.88).abs() < 0.01);
}

#[test]
fn koh_batch_with_ratio_water() {
    // 오일 500 g, KOH, 슈퍼팻 0%, 물:알칼리 2:1
    let res = batch_recipe(BatchRecipeInput {
        oils: olive_500g(),
        alkali: AlkaliKind::PotassiumHydroxide,
        superfat_pct: 0.0,
        water_mode: WaterMode::WaterToLyeRatio(2.0),
    })
    .expect("batch calc");
    assert!((res.totals.total_lye_g - 94.001).abs() < 1e-9);
    assert!((res.water_g - 188.002).abs() < 1e-9);
    assert!((res.totals.total_batch_g - 782.003).abs() < 1e-9);
}

#[test]
fn batch_total_is_sum_of_components() {
    let res = batch_recipe(BatchRecipeInput {
        oils: olive_500g(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
        water_mode: WaterMode::LyeConcentration(30.0),
    })
    .expect("batch calc");
    let sum = res.totals.total_oil_g + res.totals.total_lye_g + res.totals.total_water_g;
    assert!((res.totals.total_batch_g - sum).abs() < 1e-12);
    assert!((res.totals.total_water_g - res.water_g).abs() < 1e-12);
}

#[test]
fn empty_recipe_yields_zero_batch() {
    let res = batch_recipe(BatchRecipeInput {
        oils: Vec::new(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
        water_mode: WaterMode::LyeConcentration(33.0),
    })
    .expect("batch calc");
    assert!(res.totals.total_oil_g.abs() < 1e-12);
    assert!(res.totals.total_lye_g.abs() < 1e-12);
    assert!(res.water_g.abs() < 1e-12);
    assert!(res.totals.total_batch_g.abs() < 1e-12);
}

#[test]
fn invalid_water_mode_fails_whole_batch() {
    let res = batch_recipe(BatchRecipeInput {
        oils: olive_500g(),
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 5.0,
        water_mode: WaterMode::WaterToLyeRatio(0.0),
    });
    assert!(matches!(res, Err(WaterCalcError::RatioNotPositive(_))));
}

#[test]
fn total_oil_mass_sums_weights() {
    assert!(total_oil_mass(&[]).abs() < 1e-12);
    let oils = vec![
        RecipeOil {
            name: "Olive Oil".to_string(),
            weight_g: 300.0,
            sap_naoh: 0.134,
        },
        RecipeOil {
            name: "Palm Oil".to_string(),
            weight_g: 200.0,
            sap_naoh: 0.142,
        },
    ];
    assert!((total_oil_mass(&oils) - 500.0).abs() < 1e-12);
}

#[test]
fn batch_totals_helper() {
    let t = batch_totals(500.0, 63.65, 129.23);
    assert!((t.total_batch_g - 692.88).abs() < 1e-9);
}

#[test]
fn pipeline_from_sap_table() {
    // 테이블 해석 → 배치 계산까지 한 번에.
    let table = SapTable::built_in();
    let oils = table
        .resolve_recipe(&[("olive oil".to_string(), 300.0), ("Castor Oil".to_string(), 50.0)])
        .expect("resolve");
    let res = batch_recipe(BatchRecipeInput {
        oils,
        alkali: AlkaliKind::SodiumHydroxide,
        superfat_pct: 0.0,
        water_mode: WaterMode::WaterToLyeRatio(2.0),
    })
    .expect("batch calc");
    // 300x0.134 + 50x0.128 = 46.6 g
    assert!((res.totals.total_lye_g - 46.6).abs() < 1e-9);
    assert!((res.water_g - 93.2).abs() < 1e-9);
    assert!((res.totals.total_batch_g - (350.0 + 46.6 + 93.2)).abs() < 1e-9);
}
