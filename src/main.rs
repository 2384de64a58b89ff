//! ifpeek: query network interfaces
//!
//! Entry point for the ifpeek binary.

use std::process::ExitCode;

use ifpeek::cache::{self, InterfaceCache};

mod app;
mod cli;

use app::{AppError, exit_code, setup_tracing};
use cli::{Cli, Command, family_from_flags};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match run(&cli.command, cache::shared()) {
        Ok(true) => exit_code::SUCCESS,
        Ok(false) => {
            eprintln!("no matching interface");
            exit_code::NOT_FOUND
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::enumeration_error()
        }
    }
}

/// Executes one subcommand against the shared cache.
///
/// Returns `Ok(true)` if something was printed, `Ok(false)` if the query
/// matched no interface.
fn run(command: &Command, cache: &InterfaceCache) -> Result<bool, AppError> {
    match command {
        Command::List { json } => {
            let snapshot = cache.snapshot(true)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&*snapshot)?);
            } else {
                for record in snapshot.iter() {
                    println!("{record}");
                }
            }
            Ok(true)
        }
        Command::Hwaddr { iface } => {
            match cache.hardware_address(iface.as_deref(), false)? {
                Some(hwaddr) => {
                    println!("{hwaddr}");
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        Command::Ip { iface, ipv4, ipv6 } => {
            let family = family_from_flags(*ipv4, *ipv6);
            match cache.ip_address(iface.as_deref(), family, false)? {
                Some(ip) => {
                    println!("{ip}");
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
