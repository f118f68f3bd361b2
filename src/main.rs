use clap::Parser;

use mtg_cardlist::{Cardlist, Mode, Result};

/// Create or update MTG card inventories.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Set to update, by its short identifier (e.g. KTK)
    #[arg(short, long)]
    set: String,

    /// What to update: cards, prices or both
    #[arg(short, long, default_value = "prices")]
    update: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mode = Mode::parse(&cli.update)?;
    let cardlist = Cardlist::builder().build()?;
    let path = cardlist.export(&cli.set, mode)?;
    println!("wrote {}", path.display());
    Ok(())
}
