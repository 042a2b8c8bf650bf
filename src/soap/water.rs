/// 물 계산 방식. 가성소다 농도(%)와 물:알칼리 비율 중 하나를 사용한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterMode {
    /// 가성소다 농도 [%] = 알칼리 / (알칼리 + 물) × 100
    LyeConcentration(f64),
    /// 물:알칼리 중량 비율 (예: 2.0 = 물 2 : 알칼리 1)
    WaterToLyeRatio(f64),
}

/// 물 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum WaterCalcError {
    /// 농도가 0% 초과 100% 미만 구간을 벗어남
    ConcentrationOutOfRange(f64),
    /// 비율이 0 이하
    RatioNotPositive(f64),
}

impl std::fmt::Display for WaterCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterCalcError::ConcentrationOutOfRange(v) => {
                write!(f, "가성소다 농도 {v}% 는 사용할 수 없습니다. 0% 초과 100% 미만이어야 합니다.")
            }
            WaterCalcError::RatioNotPositive(v) => {
                write!(f, "물:알칼리 비율 {v} 는 사용할 수 없습니다. 0보다 커야 합니다.")
            }
        }
    }
}

impl std::error::Error for WaterCalcError {}

/// 목표 가성소다 농도로 필요한 물의 양을 계산한다.
///
/// 농도 = 알칼리 / (알칼리 + 물) 이므로 물 = 알칼리 × (1 - c) / c 가 된다.
pub fn water_from_concentration(lye_g: f64, concentration_pct: f64) -> Result<f64, WaterCalcError> {
    let c = concentration_pct / 100.0;
    if c <= 0.0 || c >= 1.0 {
        return Err(WaterCalcError::ConcentrationOutOfRange(concentration_pct));
    }
    Ok(lye_g * (1.0 - c) / c)
}

/// 물:알칼리 중량 비율로 필요한 물의 양을 계산한다.
pub fn water_from_ratio(lye_g: f64, water_to_lye_ratio: f64) -> Result<f64, WaterCalcError> {
    if water_to_lye_ratio <= 0.0 {
        return Err(WaterCalcError::RatioNotPositive(water_to_lye_ratio));
    }
    Ok(lye_g * water_to_lye_ratio)
}

/// 선택한 물 계산 방식에 따라 필요한 물의 양을 계산한다.
pub fn water_for_mode(lye_g: f64, mode: WaterMode) -> Result<f64, WaterCalcError> {
    match mode {
        WaterMode::LyeConcentration(pct) => water_from_concentration(lye_g, pct),
        WaterMode::WaterToLyeRatio(ratio) => water_from_ratio(lye_g, ratio),
    }
}
