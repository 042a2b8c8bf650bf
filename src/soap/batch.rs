use super::lye::{lye_requirement, AlkaliKind, LyeRequirementInput, LyeRequirementResult, RecipeOil};
use super::water::{water_for_mode, WaterCalcError, WaterMode};

/// 배치 전체 질량 요약.
#[derive(Debug, Clone, Copy)]
pub struct BatchTotals {
    /// 오일 합계 [g]
    pub total_oil_g: f64,
    /// 알칼리 합계 [g]
    pub total_lye_g: f64,
    /// 물 합계 [g]
    pub total_water_g: f64,
    /// 배치 총량 (오일 + 알칼리 + 물) [g]
    pub total_batch_g: f64,
}

/// 오일 목록의 총 중량을 구한다.
pub fn total_oil_mass(oils: &[RecipeOil]) -> f64 {
    oils.iter().map(|o| o.weight_g).sum()
}

/// 오일/알칼리/물 합계로 배치 총량 요약을 만든다.
pub fn batch_totals(total_oil_g: f64, total_lye_g: f64, total_water_g: f64) -> BatchTotals {
    BatchTotals {
        total_oil_g,
        total_lye_g,
        total_water_g,
        total_batch_g: total_oil_g + total_lye_g + total_water_g,
    }
}

/// 배치 레시피 계산 입력.
#[derive(Debug, Clone)]
pub struct BatchRecipeInput {
    /// 오일 목록
    pub oils: Vec<RecipeOil>,
    /// 사용 알칼리
    pub alkali: AlkaliKind,
    /// 슈퍼팻 [%]
    pub superfat_pct: f64,
    /// 물 계산 방식
    pub water_mode: WaterMode,
}

/// 배치 레시피 계산 결과.
#[derive(Debug, Clone)]
pub struct BatchRecipeResult {
    /// 알칼리 소요량과 오일별 내역
    pub lye: LyeRequirementResult,
    /// 적용한 물 계산 방식
    pub water_mode: WaterMode,
    /// 필요한 물 [g]
    pub water_g: f64,
    /// 질량 요약
    pub totals: BatchTotals,
}

/// 오일 목록 → 알칼리 → 물 → 합계 순서로 배치 레시피 전체를 계산한다.
///
/// 물 계산 파라미터가 유효 범위를 벗어나면 해당 오류를 그대로 반환하며
/// 부분 결과는 만들지 않는다.
pub fn batch_recipe(input: BatchRecipeInput) -> Result<BatchRecipeResult, WaterCalcError> {
    let BatchRecipeInput { oils, alkali, superfat_pct, water_mode } = input;
    let total_oil_g = total_oil_mass(&oils);
    let lye = lye_requirement(LyeRequirementInput { oils, alkali, superfat_pct });
    let water_g = water_for_mode(lye.total_lye_g, water_mode)?;
    Ok(BatchRecipeResult {
        totals: batch_totals(total_oil_g, lye.total_lye_g, water_g),
        lye,
        water_mode,
        water_g,
    })
}
