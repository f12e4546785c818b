use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Query {
    #[command(about = "Find the recorded action for a holding", alias = "get")]
    Lookup {
        #[arg(required = true)]
        cards: String,
        #[arg(default_value = "")]
        board: String,
    },
    #[command(
        about = "Show the full digested record for a holding",
        alias = "rec"
    )]
    Record {
        #[arg(required = true)]
        cards: String,
        #[arg(default_value = "")]
        board: String,
    },
    #[command(about = "Count the loaded decisions")]
    Stats,
    #[command(about = "Write the normalized table to stdout")]
    Dump,
}
