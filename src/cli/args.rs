use super::parse::parse_limit;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RelatedArgs {
    /// Note path or link text
    pub note: String,

    /// Note the link text appears in, used to resolve ambiguous names
    #[arg(long)]
    pub from: Option<String>,

    /// Exclude notes whose path starts with this prefix (repeatable)
    #[arg(long, short = 'x', action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Do not add backlinks as zero-score results
    #[arg(long)]
    pub no_backlinks: bool,

    /// Do not add outgoing links as zero-score results
    #[arg(long)]
    pub no_outgoing: bool,

    /// Maximum number of results to show
    #[arg(long, short = 'n', value_parser = parse_limit, conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Show every result
    #[arg(long)]
    pub all: bool,

    /// Show full paths instead of note names
    #[arg(long)]
    pub show_folders: bool,
}
