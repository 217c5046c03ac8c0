//! Parse command
//!
//! One-shot debugging aid: decode a raw webview response from the
//! command line and print the payload it would send.

use anyhow::Result;

use wf_model::{ConfigDocument, ConfigPayload, HandColors};

/// Arguments for the parse command
pub struct ParseArgs {
    /// Raw URL-encoded webview response
    pub response: String,
    /// Print the payload as JSON instead of one key per line
    pub json: bool,
}

/// Handle the parse command
pub fn handle_parse(args: ParseArgs) -> Result<()> {
    let document = ConfigDocument::from_webview_response(&args.response)
        .map_err(|e| anyhow::anyhow!("Invalid webview response: {}", e))?;
    let colors = HandColors::try_from(&document)
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    let payload = ConfigPayload::from(&colors);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for (key, value) in payload.entries() {
            println!("{} = {}", key.wire_name(), value);
        }
    }
    Ok(())
}
