//! wf - watchface companion harness
//!
//! Drives the phone-side companion for the watchface against a host
//! bridge on stdin/stdout or a scripted in-process host.

use clap::{Parser, Subcommand};

use wf_cli::commands::parse::{ParseArgs, handle_parse};
use wf_cli::commands::run::{RunArgs, handle_run};
use wf_cli::messages;

#[derive(Parser)]
#[command(name = "wf", version, about = "Watchface companion harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the companion against a host bridge
    Run {
        /// Host to run against: "stdio" (default) or "sim"
        #[arg(long)]
        host: Option<String>,
        /// Override the configuration page URL
        #[arg(long)]
        settings_url: Option<String>,
        /// Minute hand color the sim host returns
        #[arg(long, default_value = "0xFFFFFF")]
        minute_color: String,
        /// Hour hand color the sim host returns
        #[arg(long, default_value = "0x000000")]
        hour_color: String,
        /// Make the sim host reject the app message
        #[arg(long)]
        fail_send: bool,
        /// Make the sim host really open the settings URL
        #[arg(long)]
        open_browser: bool,
    },
    /// Decode a webview response and print the payload it would send
    Parse {
        /// Raw URL-encoded response string
        response: String,
        /// Print the payload as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run {
            host,
            settings_url,
            minute_color,
            hour_color,
            fail_send,
            open_browser,
        } => handle_run(RunArgs {
            host,
            settings_url,
            minute_color,
            hour_color,
            fail_send,
            open_browser,
        }),
        Command::Parse { response, json } => handle_parse(ParseArgs { response, json }),
    };

    if let Err(e) = result {
        messages::print_error(&format!("{:#}", e), &[]);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
