use std::sync::Arc;

use clap::Parser;
use facility_finder_web::{
    AppState,
    cli::{Cli, Command, load_searcher, search_output, select_output},
    create_app, serve,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    facility_finder::init_logging(cli.log_level)?;

    let searcher = Arc::new(load_searcher(cli.data.as_deref())?);
    info!(summary = %searcher.summary(), "Facility data loaded");

    match cli.command() {
        Command::Serve => {
            let state = AppState::with_case_folding(searcher, cli.case_folding);
            serve(create_app(state), &cli.host, cli.port).await
        }
        Command::Search { keyword } => {
            println!("{}", search_output(searcher, &keyword, cli.case_folding));
            Ok(())
        }
        Command::Select { id } => {
            println!("{}", select_output(&searcher, &id)?);
            Ok(())
        }
    }
}
