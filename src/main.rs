use clap::Parser;
use smart_vehicle_common::{catalog, form, Corrections, NormalizedPayload, ValidationSession, VehicleForm};
use smart_vehicle_rust::{cli, config, error, report, review, selector};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// データセットを読み込んでシノニムを学習
fn load_dataset(session: &mut ValidationSession, path: &Path) -> Result<()> {
    let dataset = selector::resolve_dataset(path)?;
    let count = session.load_dataset(&dataset)?;
    let synonyms = session.synonyms();
    println!(
        "✔ {}行を読み込み（ブランド {}件 / モデル {}件のシノニムを学習）: {}",
        count,
        synonyms.make.len(),
        synonyms.model_entries(),
        dataset.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Check { plate, brand, model, year, trim, dataset, auto_accept, interactive, output } => {
            println!("🚗 smart-vehicle - 入力検証\n");

            let mut session = ValidationSession::new();
            let policy = config.policy();

            // 1. シノニム学習
            if let Some(path) = dataset.or_else(|| config.default_dataset.clone()) {
                println!("[1/3] データセットを読み込み中...");
                load_dataset(&mut session, &path)?;
                println!();
            }

            // 2. 検証
            println!("[2/3] 検証中...");
            let form = VehicleForm::new(&plate, &brand, &model, &year, &trim);
            let evaluation = session.evaluate_form(&form);
            for line in report::format_evaluation(&evaluation, &policy) {
                println!("  {}", line);
            }

            let issues = policy.issues(&evaluation);
            if !issues.is_empty() {
                println!("\n修正候補:");
                for issue in &issues {
                    println!("  - {}", report::format_issue(issue));
                }
            }
            println!();

            // 3. 修正候補の採用
            let reviewed = if auto_accept {
                println!("[3/3] 修正候補をすべて採用...");
                review::accept_all(&session, &policy, &form)?
            } else if interactive {
                println!("[3/3] 修正候補を確認...");
                review::review_interactive(&session, &policy, &form)?
            } else {
                review::Reviewed {
                    form: form.clone(),
                    evaluation,
                    corrections: Corrections::default(),
                }
            };

            if reviewed.corrections != Corrections::default() {
                for line in report::format_evaluation(&reviewed.evaluation, &policy) {
                    println!("  {}", line);
                }
                println!();
            }

            let payload = NormalizedPayload::build(&reviewed.form, &reviewed.evaluation, &reviewed.corrections);
            let json = serde_json::to_string_pretty(&payload)?;
            println!("{}", json);

            if let Some(output) = output {
                std::fs::write(&output, &json)?;
                println!("\n✔ ペイロードを保存: {}", output.display());
            }

            if policy.is_valid(&reviewed.evaluation) {
                println!("\n✅ 検証OK");
            } else {
                println!("\n⚠ 未解決の項目があります");
            }
        }

        Commands::Evaluate { dataset, preview, output } => {
            println!("📊 smart-vehicle - データセット評価\n");

            let mut session = ValidationSession::new();

            println!("[1/2] データセットを読み込み中...");
            load_dataset(&mut session, &dataset)?;

            if preview > 0 {
                println!("\nプレビュー:");
                for row in session.preview(preview) {
                    println!("  {}", report::format_row(row));
                }
            }
            println!();

            println!("[2/2] 照合精度を評価中...");
            match session.evaluate() {
                Some(metrics) => {
                    for line in report::format_metrics(&metrics) {
                        println!("  {}", line);
                    }

                    if let Some(output) = output {
                        let json = serde_json::to_string_pretty(&metrics)?;
                        std::fs::write(&output, json)?;
                        println!("\n✔ 評価結果を保存: {}", output.display());
                    }
                }
                None => println!("  データ行がありません"),
            }

            println!("\n✅ 評価完了");
        }

        Commands::Demo => {
            let session = ValidationSession::new();
            let policy = config.policy();

            for (i, example) in form::example_forms().iter().enumerate() {
                println!(
                    "[{}] {} / {} / {} / {} / {}",
                    i + 1,
                    example.plate,
                    example.brand,
                    example.model,
                    example.year,
                    example.trim
                );
                let evaluation = session.evaluate_form(example);
                for line in report::format_evaluation(&evaluation, &policy) {
                    println!("  {}", line);
                }
                for issue in policy.issues(&evaluation) {
                    println!("  - {}", report::format_issue(&issue));
                }

                let payload = NormalizedPayload::build(example, &evaluation, &Corrections::default());
                println!("{}\n", serde_json::to_string_pretty(&payload)?);
            }
        }

        Commands::Catalog { brand } => match brand {
            Some(brand) => {
                let matched = form::match_brand(&brand, &Default::default());
                let models = catalog::models_for(&matched.matched);
                if models.is_empty() {
                    println!("ブランドが見つかりません: {}", brand);
                } else {
                    println!("{}:", matched.matched);
                    for model in models {
                        println!("  - {}", model);
                    }
                }
            }
            None => {
                for brand in catalog::brands() {
                    println!("{} ({}モデル)", brand, catalog::models_for(brand).len());
                }
            }
        },

        Commands::Config { brand_threshold, model_threshold, default_dataset, clear_dataset, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(value) = brand_threshold {
                config.brand_threshold = value;
                changed = true;
            }
            if let Some(value) = model_threshold {
                config.model_threshold = value;
                changed = true;
            }
            if let Some(path) = default_dataset {
                config.default_dataset = Some(path);
                changed = true;
            }
            if clear_dataset {
                config.default_dataset = None;
                changed = true;
            }

            if changed {
                config.validate()?;
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ブランド閾値: {}", config.brand_threshold);
                println!("  モデル閾値: {}", config.model_threshold);
                println!(
                    "  既定のデータセット: {}",
                    config
                        .default_dataset
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}
