use anyhow::Result;
use clap::Parser;

use sheetboard::app::{EditEvent, handle_edit};
use sheetboard::cli::{Cli, Command};
use sheetboard::domain::filter::{TeamFilter, distinct_values, filter_rows};
use sheetboard::domain::row::{MAIN_TEAM, WORK_TEAM};
use sheetboard::services::{SheetClient, UpdateDispatcher};
use sheetboard::views;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    // One fetch per invocation; the store is never refreshed in place.
    let mut store = SheetClient::new().fetch_rows().await?;

    match cli.command {
        Command::Table {
            main_team,
            work_team,
        } => {
            let filter = TeamFilter::new(main_team, work_team);
            let rows = filter_rows(store.rows(), &filter);
            print!("{}", views::table::render(&rows));
        }
        Command::Board {
            main_team,
            work_team,
        } => {
            let filter = TeamFilter::new(main_team, work_team);
            let rows = filter_rows(store.rows(), &filter);
            print!("{}", views::board::render(rows.into_iter()));
        }
        Command::Overview => {
            print!("{}", views::overview::render(store.rows()));
        }
        Command::Schedule => {
            print!("{}", views::schedule::render(store.rows()));
        }
        Command::Teams => {
            println!("메인팀: {}", distinct_values(store.rows(), MAIN_TEAM).join(", "));
            println!("작업팀: {}", distinct_values(store.rows(), WORK_TEAM).join(", "));
        }
        Command::CycleStatus { row } => {
            let dispatcher = UpdateDispatcher::new();
            let outcome = handle_edit(
                &mut store,
                &dispatcher,
                EditEvent::CycleStatus { source_row: row },
            )
            .await?;
            if let Some(outcome) = outcome {
                println!("{}행 상태 → {}", outcome.source_row, outcome.value);
            }
        }
        Command::AddMemo { row, text } => {
            let dispatcher = UpdateDispatcher::new();
            let outcome = handle_edit(
                &mut store,
                &dispatcher,
                EditEvent::SetMemo {
                    source_row: row,
                    text,
                },
            )
            .await?;
            if let Some(outcome) = outcome {
                println!("{}행 메모 → {}", outcome.source_row, outcome.value);
            }
        }
    }

    Ok(())
}
