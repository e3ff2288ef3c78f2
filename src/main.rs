mod api;
mod logging;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use retention_os::config::{default_config_path, AppConfig};
use retention_os::{analyze, AnalysisReport};

#[derive(Parser)]
#[command(name = "retention-os", about = "Content quality analyzer for tweets and threads")]
struct Cli {
    /// Path to a TOML config file (defaults to RETENTION_CONFIG_PATH or config/retention.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one post or thread and print the report
    Analyze(AnalyzeArgs),
    /// Serve the analysis API and the web front-end
    Serve(ServeArgs),
    /// Write the default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Wait the configured pacing delay before printing
    #[arg(long)]
    paced: bool,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    web_root: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long)]
    path: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = AppConfig::load(cli.config)?;
    logging::init_logging(&config.logging);
    if let Some(path) = config_path.as_ref() {
        tracing::debug!(path = %path.display(), found = path.exists(), "config resolved");
    }

    let command = cli.command.unwrap_or(Command::Analyze(AnalyzeArgs::default()));
    match command {
        Command::Analyze(args) => run_analyze(args, &config).await,
        Command::Serve(args) => {
            let mut server_config = config.server.clone();
            if let Some(host) = args.host {
                server_config.host = host;
            }
            if let Some(port) = args.port {
                server_config.port = port;
            }
            if let Some(web_root) = args.web_root {
                server_config.web_root = web_root;
            }
            server::serve(server_config, config.pacing.clone()).await
        }
        Command::InitConfig(args) => run_init_config(args),
    }
}

async fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<(), String> {
    let text = read_text(args.text)?;

    if args.paced && config.pacing.delay_ms > 0 {
        eprintln!("Analyzing...");
        tokio::time::sleep(Duration::from_millis(config.pacing.delay_ms)).await;
    }

    let report = analyze(&text);

    if args.json {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {}", err))?;
        println!("{}", payload);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!(
        "Retention score: {}/100 | AI detection: {} | Viral potential: {} ({}/100)",
        report.retention_score,
        report.ai_detection.confidence.label(),
        report.viral_potential.potential.label(),
        report.viral_potential.score
    );
    println!(
        "Content: {} words | {} sentences | {} paragraphs | {} characters",
        report.metrics.word_count,
        report.metrics.sentence_count,
        report.metrics.paragraph_count,
        report.metrics.char_count
    );

    println!("\nHook analysis:");
    println!("  Current hook type: {}", report.hook_analysis.current_hook.label());
    println!("  Your hook: \"{}\"", report.hook_analysis.first_line);
    println!("  Recommendation: {}", report.hook_analysis.recommendation);

    println!("\nAI detection:");
    println!("  Confidence: {}", report.ai_detection.confidence.label());
    if report.ai_detection.detected_phrases.is_empty() {
        println!("  No AI phrases detected!");
    } else {
        println!(
            "  Detected phrases: {}",
            report.ai_detection.detected_phrases.join(", ")
        );
    }

    println!("\nHuman rewrite:");
    for line in report.human_rewrite.lines() {
        println!("  {}", line);
    }

    println!("\nFormat: {}", report.format_recommendation.format.label());
    println!("  {}", report.format_recommendation.reason);

    let audiences: Vec<&str> = report
        .audience_targeting
        .iter()
        .map(|audience| audience.label())
        .collect();
    println!("\nBest audience segments: {}", audiences.join(", "));

    println!("\nMissing elements:");
    for missing in &report.missing_elements {
        println!("- {}: {}", missing.element, missing.suggestion);
    }

    println!("\nViral potential: {}", report.viral_potential.explanation);

    println!("\nPosting strategy:");
    println!("  Best time: {}", report.posting_strategy.best_time);
    println!("  Best day: {}", report.posting_strategy.best_day);
    println!("  Post type: {}", report.posting_strategy.post_type);

    if !report.improvements.is_empty() {
        println!("\nImprovements:");
        for (index, improvement) in report.improvements.iter().enumerate() {
            println!("{}. {}: {}", index + 1, improvement.title, improvement.description);
        }
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    let path = args
        .path
        .or_else(default_config_path)
        .ok_or_else(|| "no config path available".to_string())?;
    if path.exists() && !args.force {
        return Err(format!(
            "config already exists at {} (pass --force to overwrite)",
            path.display()
        ));
    }
    AppConfig::default().write(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing content: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let _ = dotenvy::from_path(Path::new(manifest_dir).join(".env"));
}
