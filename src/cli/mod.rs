//! Terminal rendition of the decision form
//!
//! The original surface is a form of sliders; here each slider is a flag
//! with the same default, or an interactive prompt in `--interactive` mode.
//! Output is the likelihood metric, the colored verdict, and a ranked bar
//! chart of per-trait counterfactual likelihoods with a marker at the
//! current base probability.

use clap::Parser;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

use crate::engine::DecisionEngine;
use crate::features::{FormConfig, UserInputs};
use crate::scoring::Verdict;

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}
fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}
fn accent(s: &str) -> ColoredString {
    s.truecolor(120, 170, 255)
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "datecast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Will you say yes? Rate the date, get the odds")]
pub struct Cli {
    /// Trained classifier artifact (JSON)
    #[arg(long, default_value = "dating_model.json")]
    pub model: PathBuf,

    /// Baseline averages file (one-row CSV)
    #[arg(long, default_value = "baseline.csv")]
    pub baseline: PathBuf,

    /// Hold the shared-interests rating at the dataset average instead of
    /// asking for it
    #[arg(long)]
    pub frozen_shared_interests: bool,

    /// Prompt for every rating instead of reading the flags below
    #[arg(short, long)]
    pub interactive: bool,

    // Partner ratings (1-10)
    /// How attractive you find them
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub attractive: u8,
    /// How sincere you find them
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub sincere: u8,
    /// How intelligent you find them
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub intelligent: u8,
    /// How funny you find them
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub funny: u8,
    /// How ambitious you find them
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub ambitious: u8,
    /// How much you seem to share interests
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub shared_interests: u8,

    // Importance weightings (1-10)
    /// How much looks matter to you
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_looks: u8,
    /// How much sincerity matters to you
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_sincerity: u8,
    /// How much intelligence matters to you
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_intelligence: u8,
    /// How much humor matters to you
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_humor: u8,
    /// How much ambition matters to you
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_ambition: u8,
    /// How much shared interests matter to you
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub importance_shared_interests: u8,

    /// Interest correlation, -1.0 (opposites) to 1.0 (match)
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    pub correlation: f64,
}

impl Cli {
    fn inputs(&self) -> UserInputs {
        UserInputs {
            attractive: self.attractive as f64,
            sincere: self.sincere as f64,
            intelligent: self.intelligent as f64,
            funny: self.funny as f64,
            ambitious: self.ambitious as f64,
            shared_interests: self.shared_interests as f64,
            attractive_importance: self.importance_looks as f64,
            sincere_importance: self.importance_sincerity as f64,
            intelligence_importance: self.importance_intelligence as f64,
            funny_importance: self.importance_humor as f64,
            ambition_importance: self.importance_ambition as f64,
            shared_interests_importance: self.importance_shared_interests as f64,
            interest_correlation: self.correlation,
        }
    }
}

// ─── Interactive form ──────────────────────────────────────────────────────────

fn prompt_rating(theme: &ColorfulTheme, prompt: &str, default: u8) -> anyhow::Result<f64> {
    let value: u8 = Input::with_theme(theme)
        .with_prompt(format!("{} (1-10)", prompt))
        .default(default)
        .validate_with(|v: &u8| {
            if (1..=10).contains(v) {
                Ok(())
            } else {
                Err("rate between 1 and 10")
            }
        })
        .interact_text()?;
    Ok(value as f64)
}

fn prompt_correlation(theme: &ColorfulTheme, default: f64) -> anyhow::Result<f64> {
    let value: f64 = Input::with_theme(theme)
        .with_prompt("Interest correlation (-1.0 to 1.0)")
        .default(default)
        .validate_with(|v: &f64| {
            if (-1.0..=1.0).contains(v) {
                Ok(())
            } else {
                Err("must be between -1.0 and 1.0")
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_inputs(config: &FormConfig) -> anyhow::Result<UserInputs> {
    let theme = ColorfulTheme::default();
    let defaults = UserInputs::default();

    section("1. Rate the Partner");
    println!("  {}", muted("How do you perceive them?"));
    let attractive = prompt_rating(&theme, "Attractive", 6)?;
    let sincere = prompt_rating(&theme, "Sincere", 7)?;
    let intelligent = prompt_rating(&theme, "Intelligent", 7)?;
    let funny = prompt_rating(&theme, "Funny", 7)?;
    let ambitious = prompt_rating(&theme, "Ambitious", 6)?;
    let shared_interests = if config.shared_interests_editable {
        prompt_rating(&theme, "Shared interests", 5)?
    } else {
        println!("  {}", dim("Shared interests held at the dataset average"));
        defaults.shared_interests
    };

    section("2. Your Preferences");
    println!("  {}", muted("How important is each attribute to you?"));
    let attractive_importance = prompt_rating(&theme, "Looks", 6)?;
    let sincere_importance = prompt_rating(&theme, "Sincerity", 7)?;
    let intelligence_importance = prompt_rating(&theme, "Intelligence", 7)?;
    let funny_importance = prompt_rating(&theme, "Humor", 7)?;
    let ambition_importance = prompt_rating(&theme, "Ambition", 6)?;
    let shared_interests_importance = prompt_rating(&theme, "Shared interests", 6)?;

    section("3. Context");
    let interest_correlation = prompt_correlation(&theme, 0.5)?;

    Ok(UserInputs {
        attractive,
        sincere,
        intelligent,
        funny,
        ambitious,
        shared_interests,
        attractive_importance,
        sincere_importance,
        intelligence_importance,
        funny_importance,
        ambition_importance,
        shared_interests_importance,
        interest_correlation,
    })
}

// ─── Rendering ─────────────────────────────────────────────────────────────────

const BAR_WIDTH: usize = 32;

/// One chart bar: filled to `probability`, with a marker at the base
/// probability's position
fn bar(probability: f64, base: f64) -> String {
    let filled = ((probability * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let marker = ((base * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH - 1);

    let mut cells: Vec<&str> = Vec::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        cells.push(if i < filled { "█" } else { "·" });
    }

    let before: String = cells[..marker].concat();
    let after: String = cells[marker + 1..].concat();
    format!("{}{}{}", accent(&before), "┊".red(), dim(&after))
}

fn render(evaluation: &crate::engine::Evaluation) {
    section("The Verdict");
    println!(
        "  {:<24} {}",
        muted("Likelihood to accept"),
        percent(evaluation.probability).white().bold()
    );
    match evaluation.verdict {
        Verdict::Yes => {
            println!(
                "  {:<24} {}  {}",
                muted("Verdict"),
                "YES".green().bold(),
                dim("you would likely want to see this person again")
            );
        }
        Verdict::No => {
            println!(
                "  {:<24} {}  {}",
                muted("Verdict"),
                "NO".red().bold(),
                dim("you would likely reject this person")
            );
        }
    }

    section("Sensitivity Analysis");
    println!(
        "  {}",
        muted("New likelihood if you rated the partner +1 point higher on:")
    );
    println!();

    for entry in evaluation.ranked_counterfactuals() {
        println!(
            "  {:<26} {} {:>6}  {}",
            entry.label,
            bar(entry.probability, evaluation.probability),
            percent(entry.probability),
            dim(&format!("{:+.1}", entry.delta * 100.0))
        );
    }

    println!();
    println!(
        "  {} {}",
        "┊".red(),
        dim(&format!(
            "current likelihood {}; bars show the likelihood after each +1",
            percent(evaluation.probability)
        ))
    );
    println!();
}

// ─── Entry ─────────────────────────────────────────────────────────────────────

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if !(-1.0..=1.0).contains(&cli.correlation) {
        anyhow::bail!("--correlation must be between -1.0 and 1.0");
    }

    let config =
        FormConfig::default().with_shared_interests_editable(!cli.frozen_shared_interests);

    let engine = DecisionEngine::load(&cli.model, &cli.baseline, config.clone())?;

    let inputs = if cli.interactive {
        prompt_inputs(&config)?
    } else {
        cli.inputs()
    };

    let evaluation = engine.evaluate(&inputs)?;
    render(&evaluation);

    Ok(())
}
