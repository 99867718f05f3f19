use clap::Parser;
use gconv::cli::Cli;
use gconv::Error;

fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = Cli::parse();
    let text = cli.read_input()?;
    for line in cli.outputs(&text)? {
        println!("{line}");
    }

    Ok(())
}
