use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dealformat")]
#[command(about = "Validate a bridge hand and render it as text or HTML")]
pub struct Args {
    /// Spade holding, e.g. AJT8 (omit for a void)
    #[arg(default_value = "")]
    pub spades: String,

    /// Heart holding
    #[arg(default_value = "")]
    pub hearts: String,

    /// Diamond holding
    #[arg(default_value = "")]
    pub diamonds: String,

    /// Club holding
    #[arg(default_value = "")]
    pub clubs: String,

    /// Format directive: `h` for HTML, anything else for plain text
    #[arg(short, long)]
    pub format: Option<char>,

    /// Print the hand as JSON instead of rendering it
    #[arg(long, conflicts_with = "debug_repr")]
    pub json: bool,

    /// Print the diagnostic representation instead of rendering it
    #[arg(long)]
    pub debug_repr: bool,
}
