use std::fs;
use std::net::IpAddr;
use std::path::Path;

use btrie::{BitString, BitTrie};
use ipnet::IpNet;
use thiserror::Error;
use tracing::debug;

/// Tag stored with each prefix. Opaque to the table; the reference use
/// maps prefixes to AS numbers.
pub type Tag = i64;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid prefix {token:?}: {source}")]
    Prefix {
        token: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("invalid tag {token:?}: {source}")]
    Tag {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("prefix {token:?} has no tag")]
    MissingTag { token: String },
}

/// Longest-prefix-match table: one trie per address family, queried
/// with full-width address keys.
#[derive(Default, Debug)]
pub struct LpmTable {
    v4: BitTrie<BitString<4>, Tag>,
    v6: BitTrie<BitString<16>, Tag>,
}

impl LpmTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_path(path: &Path) -> Result<Self, LoadError> {
        let input = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_str(&input)
    }

    /// Parse alternating `<addr>/<len> <tag>` pairs. Tokens are split on
    /// any whitespace; line structure carries no meaning, so blank lines
    /// and trailing whitespace cost nothing.
    pub fn load_str(input: &str) -> Result<Self, LoadError> {
        let mut table = Self::new();
        let mut tokens = input.split_whitespace();
        while let Some(prefix) = tokens.next() {
            let Some(tag) = tokens.next() else {
                return Err(LoadError::MissingTag {
                    token: prefix.to_string(),
                });
            };
            let net: IpNet = prefix.parse().map_err(|source| LoadError::Prefix {
                token: prefix.to_string(),
                source,
            })?;
            let tag: Tag = tag.parse().map_err(|source| LoadError::Tag {
                token: tag.to_string(),
                source,
            })?;
            table.insert(net, tag);
        }
        Ok(table)
    }

    /// Insert with assignment semantics: a later entry for the same
    /// prefix wins.
    pub fn insert(&mut self, net: IpNet, tag: Tag) {
        debug!("prefix {} tagged {}", net, tag);
        match net {
            IpNet::V4(net) => *self.v4.entry(net.into()).or_default() = tag,
            IpNet::V6(net) => *self.v6.entry(net.into()).or_default() = tag,
        }
    }

    /// Tag of the most specific prefix covering `addr`, if any covers it.
    pub fn lookup(&self, addr: IpAddr) -> Option<Tag> {
        match addr {
            IpAddr::V4(addr) => self.v4.get_lpm(&addr.into()).map(|(_, tag)| *tag),
            IpAddr::V6(addr) => self.v6.get_lpm(&addr.into()).map(|(_, tag)| *tag),
        }
    }

    pub fn len_v4(&self) -> usize {
        self.v4.len()
    }

    pub fn len_v6(&self) -> usize {
        self.v6.len()
    }
}
