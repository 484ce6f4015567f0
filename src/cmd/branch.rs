use clap::Args;
use tracing::warn;

use crate::cmd::{copy_to_clipboard, show_reminder};
use crate::context::AppContext;
use crate::domain::branch::BranchCategory;
use crate::domain::ticket::TicketRequest;
use crate::error::{AppError, AppResult};

#[derive(Args, Debug, Clone)]
pub struct BranchArgs {
    /// Ticket identifier, e.g. ABC-123.
    pub ticket_id: String,
    /// Ticket title; spaces become underscores.
    pub title: String,
    /// Category name (features, bugs, refactor, qa).
    #[arg(short, long, conflicts_with = "category_index")]
    pub category: Option<String>,
    /// Category by position in the list, starting at 0.
    #[arg(long)]
    pub category_index: Option<usize>,
    /// Copy the branch name to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

pub async fn run(ctx: &AppContext, args: BranchArgs) -> AppResult<()> {
    let category = resolve_category(args.category.as_deref(), args.category_index)?;
    let request = TicketRequest::new(category, args.ticket_id, args.title);

    let Some(generated) = ctx
        .generator
        .generate_branch_name(&request, ctx.clock.today())
    else {
        warn!("ticket id and title are required; no branch name generated");
        return Ok(());
    };

    println!("{}", generated.value.as_str());
    if args.copy {
        copy_to_clipboard(ctx, "branch name", generated.value.as_str()).await?;
    }
    show_reminder(generated.reminder.as_ref());
    Ok(())
}

fn resolve_category(name: Option<&str>, index: Option<usize>) -> AppResult<BranchCategory> {
    match (name, index) {
        (Some(name), _) => BranchCategory::from_str(name).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "unknown category '{name}' (expected one of: {})",
                category_names()
            ))
        }),
        (None, Some(index)) => BranchCategory::from_index(index).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "category index {index} out of range (0..{})",
                BranchCategory::ALL.len()
            ))
        }),
        (None, None) => Ok(BranchCategory::default()),
    }
}

fn category_names() -> String {
    BranchCategory::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
