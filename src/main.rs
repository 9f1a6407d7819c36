use clap::Parser;

fn main() {
    let cli = kit::cli::Cli::parse();

    if let Err(err) = kit::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
