use bikeshare::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(bikeshare::Error::processing_interrupted(
                    "Interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(output) => {
            println!("{}", output);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("bikeshare - Bike-Share Station Network Tool");
    println!("===========================================");
    println!();
    println!("Load a bike-share station file and query, rent from, return to or");
    println!("rebalance the network it describes.");
    println!();
    println!("USAGE:");
    println!("    bikeshare --stations <FILE> <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    list        List every station with its occupancy");
    println!("    info        Show name, bikes and docks of one station");
    println!("    totals      Sum station columns across the network");
    println!("    max-bikes   Show the station with the most bikes available");
    println!("    docks       List stations with at least N docks available");
    println!("    direction   Show the compass direction between two stations");
    println!("    rent        Rent bikes from a station");
    println!("    return      Return bikes to a station");
    println!("    rebalance   Rebalance bikes across the network");
    println!();
    println!("EXAMPLES:");
    println!("    bikeshare -s stations.csv info 7000");
    println!("    bikeshare -s stations.csv totals --column bikes,docks --format csv");
    println!("    bikeshare -s stations.csv direction 7000 7001");
    println!("    bikeshare -s stations.csv rent 7001 --count 3");
    println!("    bikeshare -s stations.csv rebalance --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bikeshare <COMMAND> --help");
}
