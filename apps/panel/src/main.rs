mod analysis_client;
mod config;
mod errors;
mod models;
mod panel;
mod skills;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis_client::AnalysisClient;
use crate::config::Config;
use crate::models::{Profile, ResumeFile};
use crate::panel::results::RecordedResults;
use crate::panel::ResumeSkillPanel;

#[derive(Debug, Parser)]
#[command(
    name = "panel",
    version,
    about = "Extract skills from resumes and generate skill assessments"
)]
struct Cli {
    /// Resume files to analyze (.pdf or .txt), uploaded in the given order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Attach placeholder chart scores to every profile
    #[arg(long)]
    chart: bool,

    /// Generate assessments for every extracted skill
    #[arg(long, conflicts_with = "assess")]
    assess_all: bool,

    /// Generate an assessment for a single skill
    #[arg(long, value_name = "SKILL")]
    assess: Option<String>,

    /// JSON array of recorded assessment results, replayed for the opened assessment
    #[arg(long, value_name = "FILE")]
    results: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!("Starting resume skill panel v{}", env!("CARGO_PKG_VERSION"));

    let client = AnalysisClient::new(&config)?;
    info!(
        "Analysis backend: {} (difficulty: {})",
        client.base_url(),
        config.difficulty
    );

    let mut panel = ResumeSkillPanel::new(Arc::new(client), config.difficulty.clone());

    let recorded = match &cli.results {
        Some(path) => Some(RecordedResults::load(path).await?),
        None => None,
    };

    let mut files = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        files.push(ResumeFile::from_path(path).await?);
    }
    panel.select_files(files);

    panel.upload().await?;

    if cli.chart {
        for index in 0..panel.profiles().len() {
            panel.generate_skill_scores(index)?;
        }
    }

    if cli.assess_all {
        panel.generate_assessment_for_all_skills().await?;
    } else if let Some(skill) = &cli.assess {
        panel.generate_individual_skill_assessment(skill).await?;
    }

    if let Some(recorded) = &recorded {
        panel.run_open_assessment(recorded).await;
    }

    for profile in panel.profiles() {
        print_profile(&panel, profile);
    }
    if let Some(skill) = panel.view().selected_skill() {
        println!("Assessment ready: {skill}");
    }

    let summary = panel.summary();
    if !summary.is_empty() {
        println!("Assessment results");
        for entry in summary {
            println!(
                "  {:<24} {:>3}% {:?} ({})",
                entry.skill, entry.score, entry.band, entry.note
            );
        }
    }

    Ok(())
}

fn print_profile(panel: &ResumeSkillPanel, profile: &Profile) {
    println!("{}", profile.filename);
    println!(
        "  Extracted {} skills from {} characters at {}",
        profile.skills_count,
        profile.text_length,
        profile.processing_time.format("%H:%M:%S")
    );

    if profile.skills.is_empty() {
        println!("  No skills found in resume");
        return;
    }
    let badges: Vec<String> = profile
        .skills
        .iter()
        .map(|skill| match panel.assessed_score(skill) {
            Some(score) => format!("{skill} ({score}%)"),
            None => skill.clone(),
        })
        .collect();
    println!("  {}", badges.join(", "));

    if let Some(scores) = &profile.skill_scores {
        for entry in scores {
            println!(
                "    {:<24} {}",
                entry.name,
                "#".repeat(usize::from(entry.score))
            );
        }
    }
}
