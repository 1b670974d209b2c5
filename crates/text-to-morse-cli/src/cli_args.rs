//! CLI argument definitions for the text-to-morse command-line interface.

use clap::{ArgAction, Parser};

/// text-to-morse - converts text into a morse code audio file
#[derive(Parser, Debug)]
#[command(name = "text-to-morse")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Examples:
  # convert text file 'hello.txt' into a morse code audio file 'hello.wav'
  text-to-morse hello.txt hello.wav

  # 760 Hz tone, 20 WPM characters, 12 WPM Farnsworth spacing
  text-to-morse -w 20 -f 12 -t 760 hello.txt hello.wav")]
pub struct Cli {
    /// Words per minute, 1-100 (out of range falls back to 18)
    #[arg(short, long, default_value_t = 18, allow_negative_numbers = true)]
    pub wpm: i64,

    /// Farnsworth spacing words per minute, 1-100 (default: same as --wpm)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub fwpm: i64,

    /// Frequency of the generated tone in Hertz, 100-1000 (out of range falls back to 600)
    #[arg(short, long, default_value_t = 600, allow_negative_numbers = true)]
    pub tone: i64,

    /// Verbose output; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output a machine-readable JSON report
    #[arg(long)]
    pub json: bool,

    /// Input text file, or '-' for stdin
    pub input: String,

    /// Output WAV file
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["text-to-morse", "in.txt", "out.wav"]).unwrap();
        assert_eq!(cli.wpm, 18);
        assert_eq!(cli.fwpm, 0);
        assert_eq!(cli.tone, 600);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.json);
        assert_eq!(cli.input, "in.txt");
        assert_eq!(cli.output, "out.wav");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from([
            "text-to-morse",
            "-w",
            "20",
            "-f",
            "12",
            "-t",
            "760",
            "hello.txt",
            "hello.wav",
        ])
        .unwrap();
        assert_eq!(cli.wpm, 20);
        assert_eq!(cli.fwpm, 12);
        assert_eq!(cli.tone, 760);
    }

    #[test]
    fn test_cli_long_flags_with_equals() {
        let cli = Cli::try_parse_from([
            "text-to-morse",
            "--wpm=25",
            "--fwpm=10",
            "--tone=500",
            "--json",
            "in.txt",
            "out.wav",
        ])
        .unwrap();
        assert_eq!(cli.wpm, 25);
        assert_eq!(cli.fwpm, 10);
        assert_eq!(cli.tone, 500);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_counts() {
        let cli = Cli::try_parse_from(["text-to-morse", "-vvv", "in.txt", "out.wav"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_accepts_negative_values() {
        let cli = Cli::try_parse_from(["text-to-morse", "-w", "-5", "in.txt", "out.wav"]).unwrap();
        assert_eq!(cli.wpm, -5);
    }

    #[test]
    fn test_cli_stdin_input() {
        let cli = Cli::try_parse_from(["text-to-morse", "-", "out.wav"]).unwrap();
        assert_eq!(cli.input, "-");
    }

    #[test]
    fn test_cli_requires_input_and_output() {
        assert!(Cli::try_parse_from(["text-to-morse"]).is_err());
        assert!(Cli::try_parse_from(["text-to-morse", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["text-to-morse", "a", "b", "c"]).is_err());
    }
}
