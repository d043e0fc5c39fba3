use clap::Parser;
use pu_foam_heat_rise::{app, config, i18n};

/// 1K PU 폼 단열 발열 추정 CLI.
#[derive(Debug, Parser)]
#[command(name = "pu_foam_heat_rise", about = "1K PU foam adiabatic heat-rise estimator")]
struct Cli {
    /// 언어 코드(ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 배합 TOML 파일을 읽어 한 번 계산하고 종료한다.
    #[arg(long)]
    formulation: Option<std::path::PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    if let Some(path) = cli.formulation {
        app::run_once(&path, &cfg, &tr)?;
        return Ok(());
    }
    app::run(&mut cfg, &tr)?;
    Ok(())
}
