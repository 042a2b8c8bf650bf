use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::soap::lye::RecipeOil;

/// 오일별 NaOH 기준 비누화값(SAP) 테이블과 조회를 제공한다.
/// 값은 전형적인 참고치이며 실제 제조 전 신뢰하는 SAP 표로 검증해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct OilSapData {
    pub name: &'static str,
    /// NaOH 기준 SAP [g NaOH / g 오일]
    pub sap_naoh: f64,
}

impl OilSapData {
    pub const fn new(name: &'static str, sap_naoh: f64) -> Self {
        Self { name, sap_naoh }
    }
}

/// 빌트인 레퍼런스 테이블을 반환한다.
pub fn oils() -> &'static [OilSapData] {
    OILS
}

/// SAP 테이블의 한 항목. 빌트인 항목과 사용자 재정의 항목 모두 이 형태를 쓴다.
#[derive(Debug, Clone)]
pub struct SapEntry {
    pub name: String,
    /// NaOH 기준 SAP [g NaOH / g 오일]
    pub sap_naoh: f64,
}

/// SAP 테이블 로드/조회 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum SapTableError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 0 이하이거나 유한하지 않은 SAP 값
    InvalidValue { name: String, sap_naoh: f64 },
    /// SAP 값을 찾을 수 없는 오일 이름
    UnknownOil(String),
}

impl std::fmt::Display for SapTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SapTableError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            SapTableError::Parse(e) => write!(f, "SAP 테이블 파싱 오류: {e}"),
            SapTableError::InvalidValue { name, sap_naoh } => {
                write!(f, "{name} 의 SAP 값 {sap_naoh} 은 사용할 수 없습니다. 0보다 큰 값이어야 합니다.")
            }
            SapTableError::UnknownOil(name) => write!(f, "SAP 값을 찾을 수 없는 오일: {name}"),
        }
    }
}

impl std::error::Error for SapTableError {}

impl From<std::io::Error> for SapTableError {
    fn from(value: std::io::Error) -> Self {
        SapTableError::Io(value)
    }
}

impl From<toml::de::Error> for SapTableError {
    fn from(value: toml::de::Error) -> Self {
        SapTableError::Parse(value)
    }
}

/// SAP 재정의 파일 형식. `[oils]` 테이블에 이름 = SAP(NaOH) 쌍을 나열한다.
#[derive(Debug, Deserialize)]
struct SapOverrideFile {
    #[serde(default)]
    oils: BTreeMap<String, f64>,
}

/// 빌트인 테이블과 사용자 재정의를 합친 SAP 조회 테이블.
#[derive(Debug, Clone)]
pub struct SapTable {
    entries: Vec<SapEntry>,
}

impl SapTable {
    /// 빌트인 레퍼런스 테이블만으로 초기화한다.
    pub fn built_in() -> Self {
        let entries = oils()
            .iter()
            .map(|o| SapEntry { name: o.name.to_string(), sap_naoh: o.sap_naoh })
            .collect();
        Self { entries }
    }

    /// TOML 문자열의 `[oils]` 맵을 빌트인 테이블 위에 병합한다.
    ///
    /// 같은 이름(대소문자 무시)은 값을 교체하고 새 이름은 목록 끝에 추가한다.
    pub fn from_toml_str(src: &str) -> Result<Self, SapTableError> {
        let file: SapOverrideFile = toml::from_str(src)?;
        let mut table = Self::built_in();
        for (name, sap_naoh) in file.oils {
            if !(sap_naoh.is_finite() && sap_naoh > 0.0) {
                return Err(SapTableError::InvalidValue { name, sap_naoh });
            }
            table.upsert(name, sap_naoh);
        }
        Ok(table)
    }

    /// 재정의 파일을 읽어 빌트인 테이블과 병합한 테이블을 만든다.
    pub fn load(path: &Path) -> Result<Self, SapTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 전체 항목을 반환한다.
    pub fn entries(&self) -> &[SapEntry] {
        &self.entries
    }

    /// 이름이 정확히 일치하는 항목을 찾는다(대소문자 무시).
    pub fn resolve(&self, name: &str) -> Option<&SapEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// 검색어를 포함하는 항목 목록을 반환한다(대소문자 무시).
    pub fn search(&self, query: &str) -> Vec<&SapEntry> {
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&q))
            .collect()
    }

    /// (이름, 중량 [g]) 목록을 SAP 테이블로 해석해 레시피 오일 목록을 만든다.
    ///
    /// 해석할 수 없는 이름이 하나라도 있으면 즉시 오류를 반환하며 부분
    /// 목록은 만들지 않는다.
    pub fn resolve_recipe(&self, entries: &[(String, f64)]) -> Result<Vec<RecipeOil>, SapTableError> {
        let mut oils = Vec::with_capacity(entries.len());
        for (name, weight_g) in entries {
            let entry = self
                .resolve(name)
                .ok_or_else(|| SapTableError::UnknownOil(name.clone()))?;
            oils.push(RecipeOil {
                name: entry.name.clone(),
                weight_g: *weight_g,
                sap_naoh: entry.sap_naoh,
            });
        }
        Ok(oils)
    }

    fn upsert(&mut self, name: String, sap_naoh: f64) {
        match self.entries.iter().position(|e| e.name.eq_ignore_ascii_case(&name)) {
            Some(i) => self.entries[i].sap_naoh = sap_naoh,
            None => self.entries.push(SapEntry { name, sap_naoh }),
        }
    }
}

const OILS: &[OilSapData] = &[
    oil("Olive Oil", 0.134),
    oil("Coconut Oil 76°", 0.183),
    oil("Palm Oil", 0.142),
    oil("Castor Oil", 0.128),
    oil("Shea Butter", 0.128),
    oil("Cocoa Butter", 0.137),
    oil("Avocado Oil", 0.133),
    oil("Sunflower Oil (high linoleic)", 0.135),
    oil("Sweet Almond Oil", 0.136),
    oil("Grapeseed Oil", 0.135),
    oil("Rice Bran Oil", 0.128),
    oil("Canola Oil", 0.133),
    oil("Lard", 0.138),
    oil("Tallow", 0.141),
];

const fn oil(name: &'static str, sap_naoh: f64) -> OilSapData {
    OilSapData::new(name, sap_naoh)
}

// NOTE:
// - SAP values are typical references; published tables vary by a few percent between sources and crops.
// - Always verify against the supplier's certificate or a trusted SAP table before making a real batch.
// - KOH demand is derived from these NaOH-referenced values via the molar mass factor in soap::lye.
