use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RECIPE: &str = "main_menu.recipe";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SAP_TABLE: &str = "main_menu.sap_table";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_SELECT_DEFAULT: &str = "prompt.select_default";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RECIPE_HEADING: &str = "recipe.heading";
    pub const CAUTION_LYE: &str = "recipe.caution_lye";
    pub const ALKALI_OPTIONS: &str = "recipe.alkali_options";
    pub const PROMPT_SUPERFAT: &str = "recipe.prompt_superfat";
    pub const SUPERFAT_RANGE_RETRY: &str = "recipe.superfat_range_retry";
    pub const WATER_MODE_OPTIONS: &str = "recipe.water_mode_options";
    pub const PROMPT_LYE_CONCENTRATION: &str = "recipe.prompt_lye_concentration";
    pub const CONCENTRATION_RANGE_RETRY: &str = "recipe.concentration_range_retry";
    pub const PROMPT_WATER_RATIO: &str = "recipe.prompt_water_ratio";
    pub const RATIO_RANGE_RETRY: &str = "recipe.ratio_range_retry";
    pub const OILS_HEADING: &str = "recipe.oils_heading";
    pub const PROMPT_OIL_SEARCH: &str = "recipe.prompt_oil_search";
    pub const NO_OIL_MATCH: &str = "recipe.no_oil_match";
    pub const PROMPT_OIL_SELECT: &str = "recipe.prompt_oil_select";
    pub const PROMPT_OIL_WEIGHT: &str = "recipe.prompt_oil_weight";
    pub const WEIGHT_NEGATIVE_RETRY: &str = "recipe.weight_negative_retry";
    pub const NO_OILS_WARNING: &str = "recipe.no_oils_warning";

    pub const RESULTS_HEADING: &str = "result.heading";
    pub const BREAKDOWN_HEADING: &str = "result.breakdown_heading";
    pub const COL_OIL: &str = "result.col_oil";
    pub const COL_WEIGHT: &str = "result.col_weight";
    pub const COL_LYE_0SF: &str = "result.col_lye_0sf";
    pub const TOTAL_OILS_LABEL: &str = "result.total_oils";
    pub const TOTAL_LYE_LABEL: &str = "result.total_lye";
    pub const WATER_LABEL: &str = "result.water";
    pub const TOTAL_BATCH_LABEL: &str = "result.total_batch";
    pub const OUNCES_HEADING: &str = "result.ounces_heading";

    pub const INSTRUCTIONS_HEADING: &str = "instructions.heading";
    pub const STEP1_HEADING: &str = "instructions.step1_heading";
    pub const STEP2_HEADING: &str = "instructions.step2_heading";
    pub const STEP2_LYE_LABEL: &str = "instructions.step2_lye";
    pub const STEP2_NOTE: &str = "instructions.step2_note";
    pub const STEP3_HEADING: &str = "instructions.step3_heading";
    pub const STEP3_BODY: &str = "instructions.step3_body";

    pub const NOTES_HEADING: &str = "notes.heading";
    pub const NOTE_SUPERFAT: &str = "notes.superfat";
    pub const NOTE_WATER_CONCENTRATION: &str = "notes.water_concentration";
    pub const NOTE_WATER_RATIO: &str = "notes.water_ratio";
    pub const NOTE_BATCH: &str = "notes.batch";

    pub const ALKALI_NAOH_NAME: &str = "alkali.naoh_name";
    pub const ALKALI_KOH_NAME: &str = "alkali.koh_name";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const MASS_UNIT_OPTIONS: &str = "unit_conversion.mass_unit_options";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const SAP_TABLE_HEADING: &str = "sap_table.heading";
    pub const SAP_TABLE_NOTE: &str = "sap_table.note";
    pub const PROMPT_SEARCH_OPTIONAL: &str = "sap_table.prompt_search_optional";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT: &str = "settings.current_unit";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_RECIPE: &str = "help.recipe";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_SAP_TABLE: &str = "help.sap_table";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Soap Lye Calculator ===",
        MAIN_MENU_RECIPE => "1) 레시피 계산",
        MAIN_MENU_UNIT_CONVERSION => "2) 질량 단위 변환",
        MAIN_MENU_SAP_TABLE => "3) SAP 테이블",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SELECT_DEFAULT => "선택(엔터=기본값): ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        RECIPE_HEADING => "\n-- 레시피 계산 --",
        CAUTION_LYE => {
            "주의: 가성소다는 반드시 물에 부어 넣으세요(반대 금지). 보호장갑과 보안경을 착용하고 환기되는 곳에서 작업하세요."
        }
        ALKALI_OPTIONS => "알칼리: 1) 수산화나트륨(NaOH)  2) 수산화칼륨(KOH)",
        PROMPT_SUPERFAT => "슈퍼팻 % (엔터=기본값)",
        SUPERFAT_RANGE_RETRY => "슈퍼팻은 0 이상 100 미만이어야 합니다.",
        WATER_MODE_OPTIONS => "물 계산: 1) 가성소다 농도(%)  2) 물:알칼리 비율",
        PROMPT_LYE_CONCENTRATION => "가성소다 농도 % (엔터=기본값)",
        CONCENTRATION_RANGE_RETRY => "농도는 0 초과 100 미만이어야 합니다.",
        PROMPT_WATER_RATIO => "물:알칼리 비율 (엔터=기본값)",
        RATIO_RANGE_RETRY => "비율은 0보다 커야 합니다.",
        OILS_HEADING => "\n-- 오일 입력 (검색어 없이 엔터 = 입력 종료) --",
        PROMPT_OIL_SEARCH => "오일 검색: ",
        NO_OIL_MATCH => "일치하는 오일이 없습니다.",
        PROMPT_OIL_SELECT => "번호 선택(엔터=취소): ",
        PROMPT_OIL_WEIGHT => "중량",
        WEIGHT_NEGATIVE_RETRY => "중량은 0 이상이어야 합니다.",
        NO_OILS_WARNING => "오일이 입력되지 않아 계산을 건너뜁니다.",
        RESULTS_HEADING => "\n=== 결과 ===",
        BREAKDOWN_HEADING => "\n-- 오일별 알칼리 소요량 --",
        COL_OIL => "오일",
        COL_WEIGHT => "중량(g)",
        COL_LYE_0SF => "0%SF(g)",
        TOTAL_OILS_LABEL => "오일 합계:",
        TOTAL_LYE_LABEL => "알칼리 합계:",
        WATER_LABEL => "물:",
        TOTAL_BATCH_LABEL => "배치 총량:",
        OUNCES_HEADING => "\n-- 온스 환산 --",
        INSTRUCTIONS_HEADING => "\n=== 배치 순서 ===",
        STEP1_HEADING => "1. 오일 계량",
        STEP2_HEADING => "2. 가성소다 용액 준비",
        STEP2_LYE_LABEL => "알칼리:",
        STEP2_NOTE => "가성소다를 물에 천천히 넣고(반대 금지) 완전히 녹을 때까지 저어준 뒤 식혀 두세요.",
        STEP3_HEADING => "3. 혼합",
        STEP3_BODY => "오일을 작업 온도까지 녹이거나 데운 뒤 가성소다 용액과 합쳐 트레이스가 날 때까지 블렌딩하세요.",
        NOTES_HEADING => "\n=== 참고 ===",
        NOTE_SUPERFAT => "0% 기준 알칼리량에 적용한 슈퍼팻 할인:",
        NOTE_WATER_CONCENTRATION => "물 계산 기준: 가성소다 농도",
        NOTE_WATER_RATIO => "물 계산 기준: 물:알칼리 비율",
        NOTE_BATCH => "배치 총량 = 오일 + 알칼리 + 물. 향료/첨가물과 큐어링 중 수분 증발은 포함하지 않습니다.",
        ALKALI_NAOH_NAME => "수산화나트륨(NaOH)",
        ALKALI_KOH_NAME => "수산화칼륨(KOH)",
        UNIT_CONVERSION_HEADING => "\n-- 질량 단위 변환 --",
        MASS_UNIT_OPTIONS => "질량 단위: g, kg, oz, lb",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: g, oz): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: oz, lb): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        SAP_TABLE_HEADING => "\n-- SAP 테이블 --",
        SAP_TABLE_NOTE => "참고: SAP 값은 전형적인 참고치입니다. 실제 제조 전 신뢰하는 표로 검증하세요.",
        PROMPT_SEARCH_OPTIONAL => "검색어(엔터=전체 보기): ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT => "현재 중량 단위:",
        SETTINGS_UNIT_OPTIONS => "1) g  2) kg  3) oz  4) lb",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "중량 단위가 변경되었습니다:",
        HELP_RECIPE => "도움말: 알칼리 → 슈퍼팻 → 물 계산 방식 → 오일 순서로 입력합니다. 중량 입력 단위는 설정에서 변경할 수 있습니다.",
        HELP_UNIT_CONVERSION => "도움말: 값 → 입력 단위 → 변환 단위 순으로 입력 (g/kg/oz/lb).",
        HELP_SAP_TABLE => "도움말: 검색어 없이 엔터를 누르면 전체 목록을 표시합니다.",
        HELP_SETTINGS => "도움말: 중량 입력/표시 단위를 바꿉니다. 내부 계산은 항상 g 기준입니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Soap Lye Calculator ===",
        MAIN_MENU_RECIPE => "1) Recipe Calculator",
        MAIN_MENU_UNIT_CONVERSION => "2) Mass Unit Converter",
        MAIN_MENU_SAP_TABLE => "3) SAP Table",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_SELECT_DEFAULT => "Select (enter = default): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        RECIPE_HEADING => "\n-- Recipe Calculator --",
        CAUTION_LYE => {
            "Caution: always add lye to water, never water to lye. Wear gloves and goggles and work in a ventilated area."
        }
        ALKALI_OPTIONS => "Alkali: 1) Sodium hydroxide (NaOH)  2) Potassium hydroxide (KOH)",
        PROMPT_SUPERFAT => "Superfat % (enter = default)",
        SUPERFAT_RANGE_RETRY => "Superfat must be at least 0 and below 100.",
        WATER_MODE_OPTIONS => "Water basis: 1) Lye concentration (%)  2) Water:lye ratio",
        PROMPT_LYE_CONCENTRATION => "Lye concentration % (enter = default)",
        CONCENTRATION_RANGE_RETRY => "Concentration must be above 0 and below 100.",
        PROMPT_WATER_RATIO => "Water:lye ratio (enter = default)",
        RATIO_RANGE_RETRY => "Ratio must be greater than 0.",
        OILS_HEADING => "\n-- Oils (empty search = done) --",
        PROMPT_OIL_SEARCH => "Search oil: ",
        NO_OIL_MATCH => "No matching oil.",
        PROMPT_OIL_SELECT => "Select number (enter = cancel): ",
        PROMPT_OIL_WEIGHT => "Weight",
        WEIGHT_NEGATIVE_RETRY => "Weight must be 0 or greater.",
        NO_OILS_WARNING => "No oils entered; skipping calculation.",
        RESULTS_HEADING => "\n=== Results ===",
        BREAKDOWN_HEADING => "\n-- Lye per oil --",
        COL_OIL => "Oil",
        COL_WEIGHT => "Weight(g)",
        COL_LYE_0SF => "0%SF(g)",
        TOTAL_OILS_LABEL => "Total oils:",
        TOTAL_LYE_LABEL => "Total lye:",
        WATER_LABEL => "Water:",
        TOTAL_BATCH_LABEL => "Batch total:",
        OUNCES_HEADING => "\n-- In ounces --",
        INSTRUCTIONS_HEADING => "\n=== Batch instructions ===",
        STEP1_HEADING => "1. Weigh the oils",
        STEP2_HEADING => "2. Prepare the lye solution",
        STEP2_LYE_LABEL => "Lye:",
        STEP2_NOTE => "Slowly add the lye to the water (never the reverse), stir until dissolved, then let it cool.",
        STEP3_HEADING => "3. Combine",
        STEP3_BODY => "Melt or warm the oils to working temperature, combine with the lye solution, and blend to trace.",
        NOTES_HEADING => "\n=== Notes ===",
        NOTE_SUPERFAT => "Superfat discount applied to the 0% SF lye amount:",
        NOTE_WATER_CONCENTRATION => "Water basis: lye concentration",
        NOTE_WATER_RATIO => "Water basis: water-to-lye ratio",
        NOTE_BATCH => "Batch total = oils + lye + water. Fragrance/additives and water loss during cure are not included.",
        ALKALI_NAOH_NAME => "sodium hydroxide (NaOH)",
        ALKALI_KOH_NAME => "potassium hydroxide (KOH)",
        UNIT_CONVERSION_HEADING => "\n-- Mass Unit Conversion --",
        MASS_UNIT_OPTIONS => "Mass units: g, kg, oz, lb",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: g, oz): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: oz, lb): ",
        UNIT_CONVERSION_RESULT => "Result:",
        SAP_TABLE_HEADING => "\n-- SAP Table --",
        SAP_TABLE_NOTE => "Note: SAP values are typical references. Verify against a trusted table before a real batch.",
        PROMPT_SEARCH_OPTIONAL => "Search (enter = list all): ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT => "Current weight unit:",
        SETTINGS_UNIT_OPTIONS => "1) g  2) kg  3) oz  4) lb",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit unchanged.",
        SETTINGS_SAVED => "Weight unit changed to:",
        HELP_RECIPE => "Help: alkali, then superfat, then water basis, then oils. The weight-entry unit can be changed in Settings.",
        HELP_UNIT_CONVERSION => "Help: enter value, then from/to units (g/kg/oz/lb).",
        HELP_SAP_TABLE => "Help: press enter without a query to list every oil.",
        HELP_SETTINGS => "Help: changes the weight entry/display unit. Internal math is always in grams.",
        _ => return None,
    })
}
