//! Params command implementation
//!
//! Prints the default `GreebleParams` as JSON, a starting point for
//! `greebler generate --params`.

use anyhow::Result;
use std::process::ExitCode;

use greebler::GreebleParams;

/// Render the default parameters.
pub fn render(pretty: bool) -> Result<String> {
    let params = GreebleParams::default();
    let json = if pretty {
        serde_json::to_string_pretty(&params)?
    } else {
        serde_json::to_string(&params)?
    };
    Ok(json)
}

/// Run the params command
pub fn run(pretty: bool) -> Result<ExitCode> {
    println!("{}", render(pretty)?);
    Ok(ExitCode::SUCCESS)
}
