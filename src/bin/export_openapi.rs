//! Dump the OpenAPI document without starting the gateway.
//!
//! Prints to stdout by default; `--output <path>` writes a file instead.
//! CI uses this to diff the published contract against the running code.

use anyhow::Context;
use cardvault::gateway::openapi::ApiDoc;
use utoipa::OpenApi;

fn output_path() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--output")
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() -> anyhow::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("OpenAPI document did not serialize")?;

    match output_path() {
        Some(path) => {
            std::fs::write(&path, &json).with_context(|| format!("writing {path}"))?;
            eprintln!("✅ OpenAPI document written to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}
