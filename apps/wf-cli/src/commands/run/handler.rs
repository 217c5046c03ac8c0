//! Run command handler
//!
//! Builds a companion and pumps host events over the selected bridge
//! until the host closes it.

use anyhow::Result;

use super::args::RunArgs;
use crate::messages;
use crate::transport::{HostSpecifier, SimBridge, SimOptions, StdioBridge};
use wf_companion::{Companion, CompanionConfig};
use wf_host::BridgeTransport;

/// Handle the run command
pub fn handle_run(args: RunArgs) -> Result<()> {
    let host_spec = HostSpecifier::parse_optional(args.host.as_deref())
        .map_err(|e| anyhow::anyhow!("Invalid host specifier: {}", e))?;

    let mut config = CompanionConfig::default();
    if let Some(url) = &args.settings_url {
        config.settings_url = url.clone();
    }
    let mut companion = Companion::new(config);

    match host_spec {
        HostSpecifier::Stdio => {
            let mut bridge = StdioBridge::from_stdio();
            run_session(&mut companion, &mut bridge)
        }
        HostSpecifier::Sim => {
            let mut bridge = SimBridge::new(SimOptions {
                minute_color: args.minute_color,
                hour_color: args.hour_color,
                fail_send: args.fail_send,
                open_browser: args.open_browser,
            });
            run_session(&mut companion, &mut bridge)
        }
    }
}

/// Pump events until the bridge closes.
///
/// Handler errors are logged and the loop continues; transport errors
/// end the run.
pub fn run_session<T: BridgeTransport>(companion: &mut Companion, bridge: &mut T) -> Result<()> {
    while let Some(event) = bridge
        .receive()
        .map_err(|e| anyhow::anyhow!("Bridge receive failed: {}", e))?
    {
        log::debug!("Event: {:?}", event);
        match companion.handle(event) {
            Ok(commands) => {
                for command in commands {
                    bridge
                        .send(command)
                        .map_err(|e| anyhow::anyhow!("Bridge send failed: {}", e))?;
                }
            }
            Err(e) => {
                log::error!("Handler error: {}", e);
            }
        }
    }

    let stats = companion.stats();
    messages::print_success(
        "Session complete",
        &[&format!(
            "Sends: {} ({} delivered, {} failed)",
            stats.sends, stats.delivered, stats.failed
        )],
    );
    Ok(())
}
