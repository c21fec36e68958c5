use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "overmassive.toml")]
    pub config: String,

    /// Directory for the generated figures
    #[arg(long, default_value = "figures")]
    pub out_dir: String,

    /// Skip figure rendering (console report only)
    #[arg(long, default_value_t = false)]
    pub no_figures: bool,

    /// Write the structured results to a JSON file
    #[arg(long)]
    pub json: Option<String>,
}
