use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mdstamp")]
#[command(author, version, long_about = None)]
#[command(about = "Rename Markdown notes to dated, sequentially numbered slugs")]
pub struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
