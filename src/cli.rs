use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sheetboard", about = "Task dashboard over a published spreadsheet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flat task table, optionally filtered by team
    Table {
        /// Main team to keep (empty/omitted keeps all)
        #[arg(long)]
        main_team: Option<String>,
        /// Work team to keep (empty/omitted keeps all)
        #[arg(long)]
        work_team: Option<String>,
    },
    /// Tasks grouped into one card per main team
    Board {
        #[arg(long)]
        main_team: Option<String>,
        #[arg(long)]
        work_team: Option<String>,
    },
    /// Completion rate and problem/on-hold listing
    Overview,
    /// Weekly schedule grid
    Schedule,
    /// Distinct main-team and work-team filter options
    Teams,
    /// Cycle the status badge of a row and push the update to the sheet
    CycleStatus {
        /// 1-based sheet line of the row (header is line 1)
        row: u32,
    },
    /// Set the memo of a row and push the update to the sheet
    AddMemo {
        row: u32,
        text: String,
    },
}
