use serde::{Deserialize, Serialize};

/// KOH SAP ≈ NaOH SAP × 1.403 (두 수산화물의 몰질량 비).
pub const KOH_SAP_FACTOR: f64 = 1.403;

/// 비누화에 사용하는 알칼리 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlkaliKind {
    /// 수산화나트륨(NaOH). 고형 비누용.
    SodiumHydroxide,
    /// 수산화칼륨(KOH). 액상 비누용.
    PotassiumHydroxide,
}

impl AlkaliKind {
    /// 화학식 표기를 반환한다.
    pub fn symbol(&self) -> &'static str {
        match self {
            AlkaliKind::SodiumHydroxide => "NaOH",
            AlkaliKind::PotassiumHydroxide => "KOH",
        }
    }

    /// NaOH 기준 SAP에 곱하는 환산 계수를 반환한다.
    pub fn sap_factor(&self) -> f64 {
        match self {
            AlkaliKind::SodiumHydroxide => 1.0,
            AlkaliKind::PotassiumHydroxide => KOH_SAP_FACTOR,
        }
    }
}

/// 레시피에 들어가는 오일 한 항목. 엔진 내부 계산은 모두 g 기준이다.
#[derive(Debug, Clone)]
pub struct RecipeOil {
    /// 오일 이름 (표시용)
    pub name: String,
    /// 오일 중량 [g]
    pub weight_g: f64,
    /// NaOH 기준 SAP [g NaOH / g 오일]
    pub sap_naoh: f64,
}

/// 필요 알칼리량 계산 입력.
#[derive(Debug, Clone)]
pub struct LyeRequirementInput {
    /// 오일 목록. 입력 순서가 결과 행 순서로 유지된다.
    pub oils: Vec<RecipeOil>,
    /// 사용 알칼리
    pub alkali: AlkaliKind,
    /// 슈퍼팻 [%] (예: 5.0 = 5%)
    pub superfat_pct: f64,
}

/// 오일 한 항목의 알칼리 소요량.
#[derive(Debug, Clone)]
pub struct OilLyeRow {
    /// 오일 이름
    pub name: String,
    /// 오일 중량 [g]
    pub weight_g: f64,
    /// 선택한 알칼리 기준으로 환산된 SAP [g 알칼리 / g 오일]
    pub sap: f64,
    /// 슈퍼팻 0% 기준 알칼리량 [g]
    pub lye_0sf_g: f64,
    /// 요청한 슈퍼팻 기준 알칼리량 [g]
    pub lye_g: f64,
}

/// 필요 알칼리량 계산 결과.
#[derive(Debug, Clone)]
pub struct LyeRequirementResult {
    /// 사용 알칼리
    pub alkali: AlkaliKind,
    /// 적용한 슈퍼팻 [%]
    pub superfat_pct: f64,
    /// 슈퍼팻 0% 기준 총 알칼리량 [g]
    pub total_lye_0sf_g: f64,
    /// 요청한 슈퍼팻 기준 총 알칼리량 [g]
    pub total_lye_g: f64,
    /// 오일별 소요량. 입력 순서를 유지한다.
    pub rows: Vec<OilLyeRow>,
}

/// 오일 목록과 슈퍼팻으로 필요 알칼리량을 계산한다.
///
/// 할인 계수 (1 - 슈퍼팻/100) 는 한 번만 계산하여 총량과 각 행에 동일하게
/// 적용하므로 행 합계와 총량이 항상 일치한다. 빈 오일 목록은 0을 반환한다.
/// 슈퍼팻 값 자체는 제한하지 않으며 입력 범위 검증은 호출자 몫이다.
pub fn lye_requirement(input: LyeRequirementInput) -> LyeRequirementResult {
    let LyeRequirementInput { oils, alkali, superfat_pct } = input;
    let factor = alkali.sap_factor();
    let discount = 1.0 - superfat_pct / 100.0;

    let mut rows = Vec::with_capacity(oils.len());
    let mut total_lye_0sf_g = 0.0;
    for oil in oils {
        let sap = oil.sap_naoh * factor;
        let lye_0sf_g = oil.weight_g * sap;
        total_lye_0sf_g += lye_0sf_g;
        rows.push(OilLyeRow {
            name: oil.name,
            weight_g: oil.weight_g,
            sap,
            lye_0sf_g,
            lye_g: lye_0sf_g * discount,
        });
    }

    LyeRequirementResult {
        alkali,
        superfat_pct,
        total_lye_0sf_g,
        total_lye_g: total_lye_0sf_g * discount,
        rows,
    }
}
