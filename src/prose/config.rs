// Configuration for the prose checker
//
// Defaults cover the technical vocabulary of a blockchain/Move book plus the
// handful of misspellings that have actually shown up in it. A TOML file can
// extend both lists and override the passive-voice threshold.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of passive constructions tolerated per file
pub const DEFAULT_PASSIVE_THRESHOLD: usize = 20;

const DEFAULT_ALLOWED_WORDS: &[&str] = &[
    // Technical terms
    "aptos", "blockchain", "cryptocurrency", "crypto", "dapp", "dapps", "sdk", "api", "cli",
    "json", "yaml", "toml", "typescript", "javascript", "webassembly", "wasm", "bcs", "move",
    "sui", "diem", "solana", "ethereum", "testnet", "mainnet", "devnet", "fungible", "nft",
    "nfts", "validator", "validators", "bytecode", "merkle", "parallelization",
    "serialization", "deserialization", "struct", "structs", "enum", "enums", "async",
    "await", "impl", "mut", "bool", "u8", "u16", "u32", "u64", "u128", "u256", "addr",
    "signer", "vec", "repo", "config", "todo", "hashmap", "stdlib", "framework", "cmdline",
    "github", "git", "npm", "yarn", "cargo", "rust", "linux", "macos", "ubuntu", "homebrew",
    "gui", "url", "urls", "http", "https", "www", "localhost", "dev", "src", "bin", "etc",
    "usr", "var", "tmp", "md", "txt", "py", "js", "ts", "rs", "go", "cpp", "hpp", "html",
    "css", "scss", "yml", "blockstm", "rocksdb", "movestdlib", "aptosstdlib", "aptosstd",
    "tablewithlength", "mystruct",
    // Common words that naive checkers flag
    "reference", "references", "dependencies", "directly", "friendly", "llms", "syntax",
    "anything", "mostly", "constraints", "constraint", "apply", "accordingly", "assembly",
    "instructions", "entry", "correctly", "smoothly", "cryptographic", "represented",
    "exactly", "length", "lengths", "simply", "empty", "demonstrates", "demonstrated",
    "experience", "thoroughly", "system", "systems", "currently", "quickly", "python",
    "style", "algorithms", "constructs", "efficiently", "methods", "slightly", "frequently",
    "highly",
];

const DEFAULT_MISSPELLINGS: &[(&str, &str)] = &[
    ("alot", "a lot"),
    ("occurence", "occurrence"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("beleive", "believe"),
    ("concensus", "consensus"),
    ("publically", "publicly"),
    ("neccessary", "necessary"),
    ("priviledge", "privilege"),
    ("occured", "occurred"),
    ("begining", "beginning"),
    ("commited", "committed"),
    ("especiallly", "especially"),
];

/// Errors loading a checker configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Prose checker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Lowercase words that are never reported as misspelled
    pub allowed_words: BTreeSet<String>,

    /// Lowercase misspelling → suggested replacement
    pub misspellings: BTreeMap<String, String>,

    /// Passive constructions tolerated before a file is flagged
    pub passive_threshold: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            allowed_words: DEFAULT_ALLOWED_WORDS.iter().map(|w| w.to_string()).collect(),
            misspellings: DEFAULT_MISSPELLINGS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            passive_threshold: DEFAULT_PASSIVE_THRESHOLD,
        }
    }
}

/// On-disk overrides; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    allowed_words: Vec<String>,
    misspellings: BTreeMap<String, String>,
    passive_threshold: Option<usize>,
}

impl CheckerConfig {
    /// Load defaults extended by the TOML file at `path`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse overrides from TOML text on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Self::default();
        config
            .allowed_words
            .extend(file.allowed_words.into_iter().map(|w| w.to_lowercase()));
        config.misspellings.extend(
            file.misspellings
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v)),
        );
        if let Some(threshold) = file.passive_threshold {
            config.passive_threshold = threshold;
        }
        Ok(config)
    }

    /// Suggested replacement for `word`, if it is a known misspelling
    pub fn suggestion_for(&self, word: &str) -> Option<&str> {
        if self.allowed_words.contains(word) {
            return None;
        }
        self.misspellings.get(word).map(String::as_str)
    }
}
