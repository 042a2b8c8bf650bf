use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::sap_db::SapTable;
use crate::soap::batch::{batch_recipe, total_oil_mass, BatchRecipeInput, BatchRecipeResult};
use crate::soap::lye::{AlkaliKind, LyeRequirementResult};
use crate::soap::water::WaterMode;
use crate::units::{convert, convert_mass, MassUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Recipe,
    UnitConversion,
    SapTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RECIPE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SAP_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Recipe),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::SapTable),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 레시피 계산 메뉴를 처리한다.
pub fn handle_recipe(tr: &Translator, cfg: &Config, sap: &SapTable) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RECIPE_HEADING));
    println!("{}", tr.t(keys::HELP_RECIPE));
    println!("{}", tr.t(keys::CAUTION_LYE));

    let alkali = read_alkali(tr, cfg.default_alkali)?;
    let superfat_pct = read_superfat(tr, cfg.default_superfat_pct)?;
    let water_mode = read_water_mode(tr, cfg)?;
    let picks = read_oil_picks(tr, cfg, sap)?;

    let oils = sap.resolve_recipe(&picks)?;
    if total_oil_mass(&oils) <= 0.0 {
        println!("{}", tr.t(keys::NO_OILS_WARNING));
        return Ok(());
    }

    let result = batch_recipe(BatchRecipeInput {
        oils,
        alkali,
        superfat_pct,
        water_mode,
    })?;
    print_breakdown(tr, &result.lye);
    print_totals(tr, &result);
    print_instructions(tr, &result);
    print_notes(tr, &result);
    Ok(())
}

fn read_alkali(tr: &Translator, default: AlkaliKind) -> Result<AlkaliKind, AppError> {
    println!("{}", tr.t(keys::ALKALI_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT_DEFAULT))?;
    let alkali = match sel.trim() {
        "1" => AlkaliKind::SodiumHydroxide,
        "2" => AlkaliKind::PotassiumHydroxide,
        _ => default,
    };
    Ok(alkali)
}

fn read_superfat(tr: &Translator, default_pct: f64) -> Result<f64, AppError> {
    loop {
        let prompt = format!("{} [{}]: ", tr.t(keys::PROMPT_SUPERFAT), default_pct);
        let pct = read_f64_or(tr, &prompt, default_pct)?;
        if (0.0..100.0).contains(&pct) {
            return Ok(pct);
        }
        println!("{}", tr.t(keys::SUPERFAT_RANGE_RETRY));
    }
}

fn read_water_mode(tr: &Translator, cfg: &Config) -> Result<WaterMode, AppError> {
    println!("{}", tr.t(keys::WATER_MODE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT_DEFAULT))?;
    if sel.trim() == "2" {
        loop {
            let prompt = format!(
                "{} [{}]: ",
                tr.t(keys::PROMPT_WATER_RATIO),
                cfg.default_water_to_lye_ratio
            );
            let ratio = read_f64_or(tr, &prompt, cfg.default_water_to_lye_ratio)?;
            if ratio > 0.0 {
                return Ok(WaterMode::WaterToLyeRatio(ratio));
            }
            println!("{}", tr.t(keys::RATIO_RANGE_RETRY));
        }
    }
    loop {
        let prompt = format!(
            "{} [{}]: ",
            tr.t(keys::PROMPT_LYE_CONCENTRATION),
            cfg.default_lye_concentration_pct
        );
        let pct = read_f64_or(tr, &prompt, cfg.default_lye_concentration_pct)?;
        if pct > 0.0 && pct < 100.0 {
            return Ok(WaterMode::LyeConcentration(pct));
        }
        println!("{}", tr.t(keys::CONCENTRATION_RANGE_RETRY));
    }
}

/// 오일을 검색/선택해 (이름, 중량 [g]) 목록을 만든다.
fn read_oil_picks(
    tr: &Translator,
    cfg: &Config,
    sap: &SapTable,
) -> Result<Vec<(String, f64)>, AppError> {
    println!("{}", tr.t(keys::OILS_HEADING));
    let mut picks = Vec::new();
    loop {
        let query = read_line(tr.t(keys::PROMPT_OIL_SEARCH))?;
        let query = query.trim().to_string();
        if query.is_empty() {
            break;
        }
        let matches = sap.search(&query);
        if matches.is_empty() {
            println!("{}", tr.t(keys::NO_OIL_MATCH));
            continue;
        }
        for (i, entry) in matches.iter().enumerate() {
            println!("{}) {} (SAP {:.3})", i + 1, entry.name, entry.sap_naoh);
        }
        let sel = read_line(tr.t(keys::PROMPT_OIL_SELECT))?;
        let entry = match sel.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= matches.len() => matches[n - 1],
            _ => continue,
        };
        let weight_g = read_weight_g(tr, cfg.display_unit)?;
        picks.push((entry.name.clone(), weight_g));
    }
    Ok(picks)
}

fn read_weight_g(tr: &Translator, unit: MassUnit) -> Result<f64, AppError> {
    loop {
        let prompt = format!("{} [{}]: ", tr.t(keys::PROMPT_OIL_WEIGHT), unit.symbol());
        let value = read_f64(tr, &prompt)?;
        if value >= 0.0 {
            return Ok(convert_mass(value, unit, MassUnit::Gram));
        }
        println!("{}", tr.t(keys::WEIGHT_NEGATIVE_RETRY));
    }
}

fn print_breakdown(tr: &Translator, lye: &LyeRequirementResult) {
    println!("{}", tr.t(keys::BREAKDOWN_HEADING));
    println!(
        "{:<32} {:>10} {:>10} {:>10} {:>10}",
        tr.t(keys::COL_OIL),
        tr.t(keys::COL_WEIGHT),
        format!("SAP({})", lye.alkali.symbol()),
        tr.t(keys::COL_LYE_0SF),
        format!("{:.1}%SF(g)", lye.superfat_pct),
    );
    for row in &lye.rows {
        println!(
            "{:<32} {:>10.1} {:>10.4} {:>10.2} {:>10.2}",
            row.name, row.weight_g, row.sap, row.lye_0sf_g, row.lye_g
        );
    }
}

fn print_totals(tr: &Translator, result: &BatchRecipeResult) {
    let t = &result.totals;
    println!("{}", tr.t(keys::RESULTS_HEADING));
    println!("{} {:.1} g", tr.t(keys::TOTAL_OILS_LABEL), t.total_oil_g);
    println!(
        "{} {:.2} g ({})",
        tr.t(keys::TOTAL_LYE_LABEL),
        t.total_lye_g,
        result.lye.alkali.symbol()
    );
    println!("{} {:.1} g", tr.t(keys::WATER_LABEL), t.total_water_g);
    println!("{} {:.1} g", tr.t(keys::TOTAL_BATCH_LABEL), t.total_batch_g);

    println!("{}", tr.t(keys::OUNCES_HEADING));
    println!(
        "{} {:.2} oz",
        tr.t(keys::TOTAL_OILS_LABEL),
        convert_mass(t.total_oil_g, MassUnit::Gram, MassUnit::Ounce)
    );
    println!(
        "{} {:.2} oz",
        tr.t(keys::TOTAL_LYE_LABEL),
        convert_mass(t.total_lye_g, MassUnit::Gram, MassUnit::Ounce)
    );
    println!(
        "{} {:.2} oz",
        tr.t(keys::WATER_LABEL),
        convert_mass(t.total_water_g, MassUnit::Gram, MassUnit::Ounce)
    );
    println!(
        "{} {:.2} oz",
        tr.t(keys::TOTAL_BATCH_LABEL),
        convert_mass(t.total_batch_g, MassUnit::Gram, MassUnit::Ounce)
    );
}

fn print_instructions(tr: &Translator, result: &BatchRecipeResult) {
    println!("{}", tr.t(keys::INSTRUCTIONS_HEADING));
    println!("{}", tr.t(keys::STEP1_HEADING));
    for row in &result.lye.rows {
        println!("  - {:.1} g {}", row.weight_g, row.name);
    }
    println!(
        "  {} {:.1} g",
        tr.t(keys::TOTAL_OILS_LABEL),
        result.totals.total_oil_g
    );
    println!("{}", tr.t(keys::STEP2_HEADING));
    println!(
        "  {} {:.1} g {}",
        tr.t(keys::STEP2_LYE_LABEL),
        result.totals.total_lye_g,
        alkali_name(tr, result.lye.alkali)
    );
    println!(
        "  {} {:.1} g",
        tr.t(keys::WATER_LABEL),
        result.totals.total_water_g
    );
    println!("  {}", tr.t(keys::STEP2_NOTE));
    println!("{}", tr.t(keys::STEP3_HEADING));
    println!("  {}", tr.t(keys::STEP3_BODY));
}

fn print_notes(tr: &Translator, result: &BatchRecipeResult) {
    println!("{}", tr.t(keys::NOTES_HEADING));
    println!(
        "- {} {:.1}%",
        tr.t(keys::NOTE_SUPERFAT),
        result.lye.superfat_pct
    );
    match result.water_mode {
        WaterMode::LyeConcentration(pct) => {
            println!("- {} {:.0}%", tr.t(keys::NOTE_WATER_CONCENTRATION), pct)
        }
        WaterMode::WaterToLyeRatio(ratio) => {
            println!("- {} {:.1}:1", tr.t(keys::NOTE_WATER_RATIO), ratio)
        }
    }
    println!("- {}", tr.t(keys::NOTE_BATCH));
}

fn alkali_name(tr: &Translator, kind: AlkaliKind) -> &'static str {
    match kind {
        AlkaliKind::SodiumHydroxide => tr.t(keys::ALKALI_NAOH_NAME),
        AlkaliKind::PotassiumHydroxide => tr.t(keys::ALKALI_KOH_NAME),
    }
}

/// 질량 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MASS_UNIT_OPTIONS));
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = convert(value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// SAP 테이블 조회 메뉴를 처리한다.
pub fn handle_sap_table(tr: &Translator, sap: &SapTable) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAP_TABLE_HEADING));
    println!("{}", tr.t(keys::HELP_SAP_TABLE));
    println!("{}", tr.t(keys::SAP_TABLE_NOTE));
    let query = read_line(tr.t(keys::PROMPT_SEARCH_OPTIONAL))?;
    let query = query.trim();
    let entries = if query.is_empty() {
        sap.entries().iter().collect::<Vec<_>>()
    } else {
        sap.search(query)
    };
    if entries.is_empty() {
        println!("{}", tr.t(keys::NO_OIL_MATCH));
        return Ok(());
    }
    for entry in entries {
        println!("{:<32} {:>8.3}", entry.name, entry.sap_naoh);
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_UNIT),
        cfg.display_unit.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.display_unit = match sel.trim() {
        "1" => MassUnit::Gram,
        "2" => MassUnit::Kilogram,
        "3" => MassUnit::Ounce,
        "4" => MassUnit::Pound,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.display_unit
        }
    };
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_SAVED),
        cfg.display_unit.symbol()
    );
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 돌려주는 read_f64 변형.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let t = s.trim();
        if t.is_empty() {
            return Ok(default);
        }
        match t.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
