use clap::{Parser, ValueEnum};
use legacy_text::RecursionPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "legacy-text")]
#[command(version)]
#[command(about = "Parse enhanced legacy text markup and print the styled tree")]
#[command(after_help = "\
EXAMPLES:

    # Print the tree for one message
    legacy-text '&6Gold &lbold [click:run_command:/spawn]spawn'

    # Substitute placeholders before parsing
    legacy-text --replace '%player%=&bSteve' 'Welcome, %player%!'

    # Parse every line of standard input, printing only the text
    cat messages.txt | legacy-text --plain")]
pub struct Cli {
    /// Markup to parse. Arguments are joined with spaces; without any,
    /// each line of standard input is parsed on its own.
    pub input: Vec<String>,

    /// Character introducing legacy codes
    #[arg(long, default_value_t = '&')]
    pub color_char: char,

    /// Let each color change end every open style
    #[arg(long)]
    pub color_resets: bool,

    /// Ignore legacy codes
    #[arg(long)]
    pub no_legacy: bool,

    /// Ignore `&#rrggbb` hex codes
    #[arg(long)]
    pub no_hex: bool,

    /// Replace KEY with VALUE (parsed as markup); repeatable, first match wins
    #[arg(long = "replace", value_name = "KEY=VALUE", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,

    /// Which rules may match inside a replacement's own text
    #[arg(long, value_enum, default_value_t = Recursion::Following)]
    pub recursion: Recursion,

    /// Print only the text, without styling
    #[arg(long)]
    pub plain: bool,

    /// Append debug logs to this file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Recursion {
    None,
    Following,
    All,
}

impl From<Recursion> for RecursionPolicy {
    fn from(recursion: Recursion) -> Self {
        match recursion {
            Recursion::None => RecursionPolicy::None,
            Recursion::Following => RecursionPolicy::FollowingOnly,
            Recursion::All => RecursionPolicy::All,
        }
    }
}

fn parse_replacement(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, _)) if key.is_empty() => Err("placeholder key must not be empty".to_string()),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got `{}`", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_pairs() {
        assert_eq!(
            parse_replacement("%p%=&aSteve").unwrap(),
            ("%p%".to_string(), "&aSteve".to_string())
        );
        assert_eq!(
            parse_replacement("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_replacement("novalue").is_err());
        assert!(parse_replacement("=x").is_err());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "legacy-text",
            "--color-char",
            "!",
            "--no-hex",
            "--replace",
            "a=b",
            "--replace",
            "c=d",
            "--recursion",
            "all",
            "!chi",
        ]);
        assert_eq!(cli.color_char, '!');
        assert!(cli.no_hex);
        assert!(!cli.no_legacy);
        assert_eq!(cli.replacements.len(), 2);
        assert_eq!(cli.recursion, Recursion::All);
        assert_eq!(cli.input, vec!["!chi".to_string()]);
    }
}
