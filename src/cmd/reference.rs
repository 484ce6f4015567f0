use clap::{Args, ValueEnum};

use crate::cmd::copy_to_clipboard;
use crate::context::AppContext;
use crate::domain::emulator::{IOS_SIMULATOR_COMMAND, android_emulator_command};
use crate::domain::reference::{ReferenceSection, ReferenceTables, StaticReferenceTable};
use crate::error::{AppError, AppResult};

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Only print one section.
    #[arg(short, long, value_enum)]
    pub section: Option<SectionArg>,
    /// Print only the value stored under this label.
    #[arg(long, value_name = "LABEL")]
    pub get: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionArg {
    Android,
    Ports,
    Commands,
    Backend,
    Github,
}

impl From<SectionArg> for ReferenceSection {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Android => ReferenceSection::Android,
            SectionArg::Ports => ReferenceSection::Ports,
            SectionArg::Commands => ReferenceSection::Commands,
            SectionArg::Backend => ReferenceSection::Backend,
            SectionArg::Github => ReferenceSection::GitHub,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SimulatorArgs {
    #[arg(value_enum)]
    pub platform: Platform,
    /// Copy the command to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

#[derive(Args, Debug, Clone)]
pub struct AndroidUrlArgs {
    /// URL to rewrite; defaults to the configured default Android URL.
    pub url: Option<String>,
    /// Copy the rewritten URL to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

pub fn run_info(ctx: &AppContext, args: InfoArgs) -> AppResult<()> {
    let tables = ReferenceTables::new(
        &ctx.config.settings.android_emulator_name,
        ctx.config.backend_command_pairs(),
    );

    let selected: Vec<&StaticReferenceTable> = match args.section {
        Some(section) => tables.get(section.into()).into_iter().collect(),
        None => tables.all().iter().collect(),
    };

    if let Some(label) = args.get.as_deref() {
        let value = selected
            .iter()
            .find_map(|table| table.lookup(label))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("no reference entry labelled '{label}'"))
            })?;
        println!("{value}");
        return Ok(());
    }

    for (index, table) in selected.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", render_table(table));
    }
    Ok(())
}

pub async fn run_simulator(ctx: &AppContext, args: SimulatorArgs) -> AppResult<()> {
    let command = match args.platform {
        Platform::Ios => IOS_SIMULATOR_COMMAND.to_string(),
        Platform::Android => android_emulator_command(&ctx.config.username),
    };

    println!("{command}");
    if args.copy {
        copy_to_clipboard(ctx, "simulator command", &command).await?;
    }
    Ok(())
}

pub async fn run_android_url(ctx: &AppContext, args: AndroidUrlArgs) -> AppResult<()> {
    let url = args
        .url
        .unwrap_or_else(|| ctx.config.settings.default_android_url.clone());
    let rewritten = ctx.generator.rewrite_host_for_emulator(&url);

    println!("{rewritten}");
    if args.copy {
        copy_to_clipboard(ctx, "android url", &rewritten).await?;
    }
    Ok(())
}

fn render_table(table: &StaticReferenceTable) -> String {
    let mut out = format!("{}\n", table.section().heading());
    if table.entries().is_empty() {
        out.push_str("  <none configured>\n");
        return out;
    }

    let width = table
        .entries()
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in table.entries() {
        out.push_str(&format!("  {:<width$}  {}\n", entry.label, entry.value));
    }
    out
}
