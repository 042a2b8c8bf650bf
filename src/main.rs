use std::path::{Path, PathBuf};

use clap::Parser;

use soap_lye_calculator::sap_db::SapTable;
use soap_lye_calculator::{app, config, i18n};

#[derive(Parser)]
#[command(name = "soap-lye-calculator")]
#[command(about = "Cold-process soap lye & water calculator")]
struct Cli {
    /// Language code (auto/ko/en)
    #[arg(short, long, default_value = "auto")]
    lang: String,

    /// Path to a SAP override TOML file (takes precedence over config)
    #[arg(long)]
    sap_table: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    let sap = match cli
        .sap_table
        .as_deref()
        .or(cfg.sap_table_path.as_deref().map(Path::new))
    {
        Some(path) => SapTable::load(path)?,
        None => SapTable::built_in(),
    };
    app::run(&mut cfg, &sap, &tr)?;
    Ok(())
}
