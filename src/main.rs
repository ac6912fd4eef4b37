use clap::Parser;

fn main() {
    let cli = roi::api::Cli::parse();
    if let Err(e) = roi::api::run_cli(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
