use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Sort lines of text files (or stdin) by tag name
    Sort {
        /// Files or directories to read; none or "-" reads stdin
        sources: Vec<PathBuf>,
        /// Reverse the order
        #[clap(short, long)]
        reverse: bool,
        /// Drop lines that compare equal to the previous one
        #[clap(short, long)]
        unique: bool,
        /// Drop blank lines
        #[clap(short = 'b', long)]
        skip_blank: bool,
        /// Trim surrounding whitespace from each line
        #[clap(short, long)]
        trim: bool,
        /// Keep only lines matching this regular expression
        #[clap(short, long)]
        filter: Option<String>,
        /// Output path (defaults to stdout)
        #[clap(short = 'o', long = "output")]
        output_path: Option<PathBuf>,
        /// Emit JSON instead of plain lines
        #[clap(long)]
        json: bool,
    },

    /// Compare two names and print -1, 0 or 1
    Compare {
        a: String,
        b: String,
    },

    /// Show how a name is split into segments
    Segments {
        name: String,
        /// Emit JSON instead of one segment per line
        #[clap(long)]
        json: bool,
    },
}

/// tagsort Command
#[derive(Parser, Debug)]
#[command(about = None)]
pub struct Cli {
    /// Also write debug logs to this file
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_flags() {
        let cli = Cli::try_parse_from([
            "tagsort", "sort", "-r", "-u", "-b", "--filter", "^loss", "-o", "out.txt", "a.txt",
            "b.txt",
        ])
        .unwrap();

        match cli.cmd {
            Commands::Sort {
                sources,
                reverse,
                unique,
                skip_blank,
                trim,
                filter,
                output_path,
                json,
            } => {
                assert_eq!(sources, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(reverse && unique && skip_blank);
                assert!(!trim && !json);
                assert_eq!(filter.as_deref(), Some("^loss"));
                assert_eq!(output_path, Some(PathBuf::from("out.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sort_without_sources() {
        let cli = Cli::try_parse_from(["tagsort", "sort"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Sort { ref sources, .. } if sources.is_empty()));
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from(["tagsort", "compare", "a2", "a10"]).unwrap();
        match cli.cmd {
            Commands::Compare { a, b } => {
                assert_eq!(a, "a2");
                assert_eq!(b, "a10");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_log_file_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tagsort", "segments", "v1.5", "--log-file", "t.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("t.log")));
        assert!(matches!(cli.cmd, Commands::Segments { json: false, .. }));
    }

    #[test]
    fn test_compare_requires_two_names() {
        assert!(Cli::try_parse_from(["tagsort", "compare", "a"]).is_err());
    }
}
