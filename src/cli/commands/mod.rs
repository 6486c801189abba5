//! Command implementations for the bike-share CLI
//!
//! Every command loads the station file named by `--stations`, runs one
//! query or operation against the in-memory network and prints the result.
//! - `stations`: read-only queries
//! - `operations`: rentals, returns and rebalancing

pub mod operations;
pub mod shared;
pub mod stations;

use crate::{Error, Result};
use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner
///
/// Returns the rendered output of the command.
pub async fn run(args: Args) -> Result<String> {
    shared::setup_logging(&args)?;
    args.validate()?;

    let config = shared::load_configuration(&args)?;
    debug!("Effective configuration: {:?}", config);

    let Some(command) = args.get_command() else {
        return Err(Error::configuration("No command given".to_string()));
    };

    let (mut repository, _stats) = shared::load_network(&args, &config).await?;
    let format = args.output_format;

    match command {
        Commands::List => stations::run_list(&repository, format),
        Commands::Info(station_args) => stations::run_info(&repository, station_args, format),
        Commands::Totals(totals_args) => stations::run_totals(&repository, totals_args, format),
        Commands::MaxBikes => stations::run_max_bikes(&repository, format),
        Commands::Docks(docks_args) => stations::run_docks(&repository, docks_args, format),
        Commands::Direction(direction_args) => stations::run_direction(
            &repository,
            direction_args,
            config.longitude_epsilon,
            format,
        ),
        Commands::Rent(rental_args) => operations::run_rent(&mut repository, rental_args, format),
        Commands::Return(rental_args) => {
            operations::run_return(&mut repository, rental_args, format)
        }
        Commands::Rebalance => operations::run_rebalance(&mut repository, format),
    }
}
