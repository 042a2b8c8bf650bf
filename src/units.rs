use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 g(그램)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

/// 1 oz = 28.349523125 g (국제 야드파운드 협정 기준).
pub const G_PER_OUNCE: f64 = 28.349523125;
/// 1 lb = 453.59237 g (= 16 oz).
pub const G_PER_POUND: f64 = 453.59237;

impl MassUnit {
    /// 출력용 단위 기호를 반환한다.
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }
}

fn to_g(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value * 1000.0,
        MassUnit::Ounce => value * G_PER_OUNCE,
        MassUnit::Pound => value * G_PER_POUND,
    }
}

fn from_g(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value / 1000.0,
        MassUnit::Ounce => value / G_PER_OUNCE,
        MassUnit::Pound => value / G_PER_POUND,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_g(value, from);
    from_g(base, to)
}

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 질량 단위명을 enum으로 변환한다.
///
/// 단위 문자열 예시는 `g`, `kg`, `oz`, `lb` 등을 사용할 수 있다.
pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "g" | "gram" | "grams" => Ok(MassUnit::Gram),
        "kg" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
        "oz" | "ounce" | "ounces" => Ok(MassUnit::Ounce),
        "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 문자열 단위명을 받아 질량을 변환한다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from = parse_mass_unit(from_unit_str)?;
    let to = parse_mass_unit(to_unit_str)?;
    Ok(convert_mass(value, from, to))
}
