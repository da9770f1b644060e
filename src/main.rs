use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_enhancer::{DocumentInput, EnhancerSession, InputState, ServiceConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Submit a resume to the Intelligent Resume Enhancer service")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Service base URL; overrides RESUME_SERVICE_URL
    #[arg(long)]
    service_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Request a structured critique of the resume
    Analyze {
        /// Resume file (pdf, docx, png, jpg)
        file: PathBuf,
        /// Free-text job description to match against
        #[arg(long, default_value = "")]
        job_description: String,
        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,
    },
    /// Request a regenerated resume document and save it
    Enhance {
        /// Resume file (pdf, docx, png, jpg)
        file: PathBuf,
        #[arg(long, default_value = "")]
        job_description: String,
        #[arg(long, default_value = "")]
        keywords: String,
        /// Where to write the enhanced document; defaults to a timestamped
        /// name in the current directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.service_url {
        Some(url) => ServiceConfig::with_base_url(url.clone()),
        None => ServiceConfig::from_env(),
    };

    let mut session = EnhancerSession::new(&config)?;

    match cli.command {
        Command::Analyze {
            file,
            job_description,
            keywords,
        } => {
            let input = load_input(&file, job_description, keywords).await?;
            session.analyze(&input).await?;

            let report = session
                .store()
                .analysis()
                .context("Analysis finished without a report")?;

            println!("✓ Analysis complete");
            println!();
            println!("Overview:");
            println!("{}", report.overview);
            println!();
            println!("Detailed changes:");
            if report.detailed_changes.is_empty() {
                println!("  (no suggestions)");
            }
            for (idx, entry) in report.detailed_changes.iter().enumerate() {
                println!("{:>3}. {}", idx + 1, entry.change);
                if let Some(reason) = &entry.reason {
                    println!("     Reason: {}", reason);
                }
                if let Some(impact) = &entry.ats_impact {
                    println!("     ATS impact: {}", impact);
                }
            }
            println!();
            println!("Enhanced preview:");
            println!("{}", report.enhanced_text_preview);
        }

        Command::Enhance {
            file,
            job_description,
            keywords,
            output,
        } => {
            let input = load_input(&file, job_description, keywords).await?;
            session.enhance(&input).await?;

            let artifact = session
                .store()
                .artifact()
                .context("Enhancement finished without an artifact")?;
            let output_path =
                output.unwrap_or_else(|| PathBuf::from(timestamped_name(&artifact.file_name)));

            let bytes = session
                .artifact_bytes()
                .context("Enhanced document was already released")?;
            tokio::fs::write(&output_path, bytes)
                .await
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            println!("📄 Saved enhanced resume to {}", output_path.display());
            session.clear_artifact();
        }
    }

    Ok(())
}

async fn load_input(file: &PathBuf, job_description: String, keywords: String) -> Result<InputState> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("File path has no valid file name")?
        .to_string();

    let mut input = InputState::new();
    input.set_document(DocumentInput::new(file_name, bytes));
    input.set_job_description(job_description);
    input.set_keywords(keywords);
    Ok(input)
}

/// `enhanced_resume.pdf` -> `enhanced_resume_20260830_121314.pdf`, so
/// repeated runs never clobber an earlier download.
fn timestamped_name(file_name: &str) -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, stamp, ext),
        None => format!("{}_{}", file_name, stamp),
    }
}
