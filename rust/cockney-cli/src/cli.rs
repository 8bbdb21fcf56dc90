use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use cockney::{
    DATAMUSE_ENDPOINT, DatamuseConfig, ReplacementStyle, RhymerOptions, SelectionPolicy,
};

#[derive(Debug, Parser)]
#[command(name = "cockney")]
#[command(bin_name = "cockney")]
#[command(about = "Rewrites text as Cockney rhyming slang", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
#[command(group(ArgGroup::new("policy").args(["best", "random"])))]
pub struct CockneyCli {
    /// Use the most idiomatic rhyme for every noun (default)
    #[arg(short, long)]
    pub best: bool,

    /// Pick any idiomatic rhyme at random
    #[arg(short, long)]
    pub random: bool,

    /// Text to rewrite
    pub text: Option<String>,

    /// Read the text to rewrite from a file
    #[arg(short, long, value_name = "INPUT")]
    pub file: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Seed for --random, to make runs repeatable
    #[arg(long)]
    pub seed: Option<u64>,

    /// Datamuse-compatible words endpoint used to look up rhymes
    #[arg(long, env = "COCKNEY_RHYME_ENDPOINT", default_value = DATAMUSE_ENDPOINT)]
    pub endpoint: String,

    /// Rhyme lookup timeout
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Ask for at most this many rhymes per noun
    #[arg(long, value_name = "N")]
    pub max_rhymes: Option<usize>,

    /// Tab-separated bigram corpus to use instead of the bundled one
    #[arg(long, env = "COCKNEY_CORPUS", value_name = "TSV")]
    pub corpus: Option<PathBuf>,

    /// Look rhymes up in a JSON word → rhymes map instead of online
    #[arg(long, value_name = "JSON")]
    pub rhymes: Option<PathBuf>,

    /// Insert the whole two-word phrase rather than just its rhyming word
    #[arg(long)]
    pub phrase: bool,

    /// Print what happened to every noun on stderr
    #[arg(long)]
    pub report: bool,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CockneyCli {
    pub fn policy(&self) -> SelectionPolicy {
        if self.random {
            SelectionPolicy::Random
        } else {
            SelectionPolicy::Best
        }
    }

    pub fn style(&self) -> ReplacementStyle {
        if self.phrase {
            ReplacementStyle::Phrase
        } else {
            ReplacementStyle::Head
        }
    }

    pub fn options(&self) -> RhymerOptions {
        let options = RhymerOptions::new()
            .with_policy(self.policy())
            .with_style(self.style());

        match self.seed {
            Some(seed) => options.with_seed(seed),
            None => options,
        }
    }

    pub fn datamuse_config(&self) -> DatamuseConfig {
        let config = DatamuseConfig::new(self.endpoint.clone()).with_timeout(self.timeout);

        match self.max_rhymes {
            Some(max) => config.with_max_results(max),
            None => config,
        }
    }

    /// The default log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<CockneyCli, clap::Error> {
        CockneyCli::try_parse_from(std::iter::once("cockney").chain(args.iter().copied()))
    }

    #[test]
    fn best_is_the_default_policy() -> anyhow::Result<()> {
        let cli = parse(&["mind the stairs"])?;

        assert_eq!(cli.text.as_deref(), Some("mind the stairs"));
        assert_eq!(cli.policy(), SelectionPolicy::Best);
        assert_eq!(cli.style(), ReplacementStyle::Head);
        assert_eq!(cli.log_level(), "warn");
        Ok(())
    }

    #[test]
    fn random_and_seed_flow_into_the_options() -> anyhow::Result<()> {
        let cli = parse(&["-r", "--seed", "12", "--phrase", "mind the stairs"])?;

        assert_eq!(
            cli.options(),
            RhymerOptions::new()
                .with_policy(SelectionPolicy::Random)
                .with_style(ReplacementStyle::Phrase)
                .with_seed(12)
        );
        Ok(())
    }

    #[test]
    fn best_and_random_are_exclusive() {
        assert!(parse(&["-b", "-r", "mind the stairs"]).is_err());
    }

    #[test]
    fn input_is_required_once() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-f", "in.txt", "mind the stairs"]).is_err());
        assert!(parse(&["-f", "in.txt"]).is_ok());
    }

    #[test]
    fn lookup_settings_build_a_datamuse_config() -> anyhow::Result<()> {
        let cli = parse(&[
            "--endpoint",
            "http://localhost:9000/words",
            "--timeout",
            "3",
            "--max-rhymes",
            "40",
            "-vv",
            "stairs",
        ])?;
        let config = cli.datamuse_config();

        assert_eq!(config.endpoint, "http://localhost:9000/words");
        assert_eq!(config.timeout_seconds, Some(3));
        assert_eq!(config.max_results, Some(40));
        assert_eq!(cli.log_level(), "debug");
        Ok(())
    }
}
