use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct Download {
    /// Comic slug (to download one particular comic)
    #[clap(short = 'g', long)]
    pub slug: Option<String>,
    /// Comic id (to download one particular comic)
    #[clap(short, long)]
    pub id: Option<u64>,
    /// Number of comics to download (latest first)
    #[clap(short, long)]
    pub number: Option<u32>,
    /// Directory in which to store the comics, defaults to the current directory
    #[clap(short, long)]
    pub directory: Option<Utf8PathBuf>,
}

#[derive(Parser, Debug)]
pub struct Search {
    /// Search query
    #[clap(short, long)]
    pub query: String,
}

#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// Download an ordered set of comics (latest first)
    #[clap(alias = "d")]
    Download(Download),
    /// Search for a comic
    #[clap(alias = "s")]
    Search(Search),
}

#[derive(Parser, Debug)]
#[clap(about, author, version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Subcommands,
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn download_short_flags() {
        let args = Args::try_parse_from([
            "commitstrip",
            "download",
            "-g",
            "the-mug",
            "-i",
            "12",
            "-n",
            "3",
            "-d",
            "strips",
        ])
        .unwrap();
        let Subcommands::Download(download) = args.command else {
            panic!("expected the download subcommand");
        };
        assert_eq!(download.slug.as_deref(), Some("the-mug"));
        assert_eq!(download.id, Some(12));
        assert_eq!(download.number, Some(3));
        assert_eq!(download.directory.as_deref(), Some(Utf8Path::new("strips")));
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Args::try_parse_from(["commitstrip", "search"]).is_err());
    }
}
