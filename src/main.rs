mod cli;
mod log_init;

use std::io::{self, BufRead};

use clap::Parser;
use cli::Cli;
use legacy_text::{LegacyText, ParseError, ReplacementRule, TextNode};

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        if let Err(e) = log_init::init_logger(path) {
            eprintln!("Error: {}", e);
        }
    }

    let parser = match build_parser(&cli) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let rules = match build_rules(&cli) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if !cli.input.is_empty() {
        let input = cli.input.join(" ");
        return render(&cli, &parser, &rules, &input);
    }

    log::debug!("reading markup from stdin");
    for line in io::stdin().lock().lines() {
        render(&cli, &parser, &rules, &line?)?;
    }
    Ok(())
}

fn build_parser(cli: &Cli) -> Result<LegacyText, ParseError> {
    LegacyText::builder()
        .color_character(cli.color_char)
        .color_resets(cli.color_resets)
        .use_legacy(!cli.no_legacy)
        .adventure_hex(!cli.no_hex)
        .build()
}

fn build_rules(cli: &Cli) -> Result<Vec<ReplacementRule>, ParseError> {
    cli.replacements
        .iter()
        .map(|(key, value)| ReplacementRule::literal(key, value.as_str()))
        .collect()
}

fn render(cli: &Cli, parser: &LegacyText, rules: &[ReplacementRule], input: &str) -> io::Result<()> {
    let node: TextNode = match parser.parse_with(input, rules, cli.recursion.into()) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.plain {
        println!("{}", node.plain_text());
    } else {
        println!("{}", node);
    }
    Ok(())
}
