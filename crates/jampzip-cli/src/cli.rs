//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jampzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a zip archive of a directory
    Zip(ZipArgs),
    /// Extract a .tar.gz, .tar.bz2, .gz or .zip archive next to itself
    Unzip(UnzipArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Subcommand name, used as the `operation` of JSON output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Zip(_) => "zip",
            Self::Unzip(_) => "unzip",
            Self::Completion { .. } => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// Name of the archive to create (".zip" is appended if missing)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Encrypt every file with a password (prompted for)
    #[arg(short, long)]
    pub password: bool,

    /// Directory to archive (default: current directory)
    #[arg(short = 'C', long = "source", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Compression level (1-9, or 0 to store without compression)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,
}

#[derive(clap::Args)]
pub struct UnzipArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Prompt for the password of an encrypted zip archive
    #[arg(short, long)]
    pub password: bool,

    /// Delete the archive after a fully successful extraction
    #[arg(short, long)]
    pub delete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_zip_flags() {
        let cli = Cli::try_parse_from(["jampzip", "zip", "-p", "-C", "src", "-l", "9", "out"])
            .unwrap_or_else(|e| panic!("{e}"));
        let Commands::Zip(args) = cli.command else {
            panic!("expected zip command");
        };
        assert!(args.password);
        assert_eq!(args.source, Some(PathBuf::from("src")));
        assert_eq!(args.compression_level, Some(9));
        assert_eq!(args.output, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_unzip_flags() {
        let cli = Cli::try_parse_from(["jampzip", "unzip", "-d", "a.zip"])
            .unwrap_or_else(|e| panic!("{e}"));
        let Commands::Unzip(args) = cli.command else {
            panic!("expected unzip command");
        };
        assert!(args.delete);
        assert!(!args.password);
    }

    #[test]
    fn test_compression_level_range() {
        assert!(Cli::try_parse_from(["jampzip", "zip", "-l", "0", "out"]).is_ok());
        assert!(Cli::try_parse_from(["jampzip", "zip", "-l", "10", "out"]).is_err());
    }
}
