use clap::Parser;

/// Console lottery: lucky dip or pick your own numbers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for a reproducible session, random by default
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Don't clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            clear_screen: true,
        }
    }
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            seed: args.seed,
            clear_screen: !args.no_clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lottery"]).unwrap();
        assert_eq!(GameConfig::from(args), GameConfig::default());
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from(["lottery", "--seed", "17", "--no-clear"]).unwrap();
        assert_eq!(
            GameConfig::from(args),
            GameConfig {
                seed: Some(17),
                clear_screen: false,
            }
        );
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::try_parse_from(["lottery", "--seed", "abc"]).is_err());
    }
}
