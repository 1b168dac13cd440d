//! Sandwich order CLI.
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
#[command(about = "Print a sandwich order")]
struct Cli {
    /// The sandwich filling.
    protein: String,
    /// The bread.
    bread: String,
    /// The condiment.
    condiment: String,
}

impl Cli {
    fn order(&self) -> String {
        format!(
            "your order: A {} sandwich on {} with {}",
            self.protein, self.bread, self.condiment
        )
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    debug!("{cli:?}");
    println!("{}", cli.order());
}
