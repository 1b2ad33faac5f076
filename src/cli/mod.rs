// CLI module for cupola

use clap::Parser;

/// cupola - relay a portrait into an ISS Cupola scene via the Gemini image API
#[derive(Parser, Debug)]
#[command(name = "cupola", version, about, long_about = None)]
pub struct Args {
    /// Validate deployment configuration (credential presence, model, upstream URL) and exit
    #[arg(long)]
    pub check: bool,
}
