use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::{StoredConfig, config_file_path};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Configuring devtool.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    apply_prompt(&mut input, &mut stdout, "Username", &mut cfg.username)?;
    apply_prompt(
        &mut input,
        &mut stdout,
        "Issue tracker base URL",
        &mut cfg.tracker_base_url,
    )?;
    apply_prompt(
        &mut input,
        &mut stdout,
        "Android emulator name",
        &mut cfg.settings.android_emulator_name,
    )?;
    apply_prompt(
        &mut input,
        &mut stdout,
        "Branch date separator",
        &mut cfg.settings.date_separator,
    )?;
    apply_prompt(
        &mut input,
        &mut stdout,
        "Default Android URL",
        &mut cfg.settings.default_android_url,
    )?;
    apply_flag(
        &mut input,
        &mut stdout,
        "Show ticket status reminders",
        &mut cfg.features.enable_reminder_popup,
    )?;
    apply_flag(
        &mut input,
        &mut stdout,
        "Include PR checklist",
        &mut cfg.features.include_checklist,
    )?;

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Username: {}", display_value(&cfg.username));
    println!("Issue tracker base URL: {}", display_value(&cfg.tracker_base_url));
    println!(
        "Android emulator name: {}",
        display_value(&cfg.settings.android_emulator_name)
    );
    println!(
        "Branch date separator: {}",
        display_value(&cfg.settings.date_separator)
    );
    println!(
        "Default Android URL: {}",
        display_value(&cfg.settings.default_android_url)
    );
    println!(
        "Ticket status reminders: {}",
        display_flag(cfg.features.enable_reminder_popup)
    );
    println!(
        "PR checklist: {}",
        display_flag(cfg.features.include_checklist)
    );
    println!("Backend commands: {}", cfg.backend_commands.len());

    Ok(())
}

fn apply_prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    target: &mut String,
) -> AppResult<()> {
    let current = Some(target.as_str()).filter(|v| !v.is_empty());
    match prompt(input, output, field, current)? {
        PromptAction::Keep => {}
        PromptAction::Clear => target.clear(),
        PromptAction::Set(value) => *target = value,
    }
    Ok(())
}

fn apply_flag(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    target: &mut bool,
) -> AppResult<()> {
    let current = if *target { "y" } else { "n" };
    let field = format!("{field} (y/n)");
    if let PromptAction::Set(value) = prompt(input, output, &field, Some(current))? {
        match value.to_lowercase().as_str() {
            "y" | "yes" | "true" => *target = true,
            "n" | "no" | "false" => *target = false,
            _ => writeln!(output, "Unrecognized answer '{value}', keeping {current}.")?,
        }
    }
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    current: Option<&str>,
) -> AppResult<PromptAction> {
    match current {
        Some(value) => write!(output, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(output, "{field} (Enter to skip): ")?,
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}

fn display_flag(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}

enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
