use std::str::FromStr;

use classic_sort::Algorithm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub algorithms: Vec<Algorithm>,
    pub initial_len: usize,
    pub runs: usize,
    pub seed: u64,
    /// Exclusive upper bound of the generated values.
    pub max_value: i32,
    pub print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            initial_len: 1000,
            runs: 16,
            seed: 42,
            max_value: 1_000_000,
            print: false,
        }
    }
}

impl Config {
    /// Parses the command line, without the program name. Panics on anything it does not
    /// understand.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = Config::default();
        let mut algorithms = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--len" => config.initial_len = parse_value(&arg, args.next()),
                "--runs" => config.runs = parse_value(&arg, args.next()),
                "--seed" => config.seed = parse_value(&arg, args.next()),
                "--max" => config.max_value = parse_value(&arg, args.next()),
                "--print" => config.print = true,
                name => {
                    let algorithm = Algorithm::from_str(name).unwrap_or_else(|err| panic!("{err}"));
                    if !algorithms.contains(&algorithm) {
                        algorithms.push(algorithm);
                    }
                }
            }
        }

        if !algorithms.is_empty() {
            config.algorithms = algorithms;
        }

        if config.max_value <= 0 {
            panic!("--max must be positive, got {}", config.max_value);
        }

        config
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> T {
    let value = value.unwrap_or_else(|| panic!("Missing value for {flag}"));

    T::from_str(&value).unwrap_or_else(|_| panic!("Invalid value for {flag}: {value}"))
}
