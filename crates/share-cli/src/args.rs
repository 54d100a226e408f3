//! Command-line arguments and request loading.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use share_core::{JobParams, ShareParams, ShareRequest};

/// Reconstruct a mining share's merkle root and block hash.
#[derive(Parser, Debug)]
#[command(name = "share-check")]
#[command(about = "Verify a mining share by rebuilding its merkle root and block hash")]
pub struct Args {
    /// JSON share request file ("-" reads stdin). Replaces the field flags.
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Previous block hash (32 bytes hex)
    #[arg(long)]
    pub prevhash: Option<String>,

    /// Coinbase prefix (hex)
    #[arg(long)]
    pub coinb1: Option<String>,

    /// Coinbase suffix (hex)
    #[arg(long)]
    pub coinb2: Option<String>,

    /// Session extranonce (hex)
    #[arg(long)]
    pub extranonce1: Option<String>,

    /// Miner extranonce (hex)
    #[arg(long)]
    pub extranonce2: Option<String>,

    /// Advertised extranonce2 width in bytes
    #[arg(long)]
    pub extranonce2_size: Option<usize>,

    /// Merkle branch hashes, comma separated, coinbase sibling first
    #[arg(long = "branch", value_delimiter = ',')]
    pub merkle_branch: Vec<String>,

    /// Header timestamp (8 bytes hex)
    #[arg(long)]
    pub ntime: Option<String>,

    /// Header nonce (8 bytes hex)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Block hash the miner claims. Overrides `block_hash` in a request file.
    #[arg(long)]
    pub expect_hash: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Build the share request from the request file or the field flags.
    pub fn load_request(&self) -> Result<ShareRequest> {
        let mut request = match &self.request {
            Some(path) => {
                let text = if path.as_os_str() == "-" {
                    io::read_to_string(io::stdin()).context("failed to read request from stdin")?
                } else {
                    fs::read_to_string(path)
                        .with_context(|| format!("failed to read {}", path.display()))?
                };
                parse_request_json(&text)?
            }
            None => self.request_from_flags()?,
        };

        if let Some(hash) = &self.expect_hash {
            request.block_hash = Some(hash.clone());
        }
        Ok(request)
    }

    fn request_from_flags(&self) -> Result<ShareRequest> {
        Ok(ShareRequest {
            job: JobParams {
                prevhash: required(&self.prevhash, "prevhash")?,
                coinb1: required(&self.coinb1, "coinb1")?,
                coinb2: required(&self.coinb2, "coinb2")?,
                extranonce1: required(&self.extranonce1, "extranonce1")?,
                extranonce2_size: self.extranonce2_size,
                merkle_branch: self.merkle_branch.clone(),
            },
            share: ShareParams {
                extranonce2: required(&self.extranonce2, "extranonce2")?,
                ntime: required(&self.ntime, "ntime")?,
                nonce: required(&self.nonce, "nonce")?,
            },
            block_hash: None,
        })
    }
}

fn required(value: &Option<String>, flag: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| anyhow!("missing --{} (or pass --request <file>)", flag))
}

/// Parse a JSON share request.
pub fn parse_request_json(text: &str) -> Result<ShareRequest> {
    serde_json::from_str(text).context("invalid share request JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREVHASH: &str = "0000000000000079039da6f4d7790d54d774812f92e459387846524f4024afe3";

    fn flag_args() -> Vec<&'static str> {
        vec![
            "share-check",
            "--prevhash", PREVHASH,
            "--coinb1", "00",
            "--coinb2", "0000000000000000",
            "--extranonce1", "99cfbade",
            "--extranonce2", "ef7488b3",
            "--branch", "25cc1c464ed8f0a13da6c14098c2cd47526dcd64d3594a2ace794b9bc0ab704d,2c162ebd012c0044cd34808a0dc9e5790f428cba73ce7b848a6f63ddd845c80e",
            "--ntime", "2ed1705800000000",
            "--nonce", "40371d049700e893",
        ]
    }

    #[test]
    fn test_request_from_flags() {
        let args = Args::try_parse_from(flag_args()).unwrap();
        let request = args.load_request().unwrap();

        assert_eq!(request.job.prevhash, PREVHASH);
        assert_eq!(request.job.merkle_branch.len(), 2);
        assert!(request.job.merkle_branch[1].starts_with("2c162ebd"));
        assert_eq!(request.share.nonce, "40371d049700e893");
        assert_eq!(request.block_hash, None);
    }

    #[test]
    fn test_missing_flag_is_reported() {
        let mut argv = flag_args();
        argv.truncate(argv.len() - 2); // drop --nonce
        let args = Args::try_parse_from(argv).unwrap();
        let err = args.load_request().unwrap_err();
        assert!(err.to_string().contains("--nonce"));
    }

    #[test]
    fn test_expect_hash_overrides() {
        let mut argv = flag_args();
        argv.extend(["--expect-hash", "ab"]);
        let args = Args::try_parse_from(argv).unwrap();
        let request = args.load_request().unwrap();
        assert_eq!(request.block_hash.as_deref(), Some("ab"));
    }

    #[test]
    fn test_parse_request_json() {
        let json = r#"{
            "prevhash": "0000000000000079039da6f4d7790d54d774812f92e459387846524f4024afe3",
            "coinb1": "00",
            "coinb2": "",
            "extranonce1": "99cfbade",
            "extranonce2": "ef7488b3",
            "merkle_branch": [],
            "ntime": "2ed1705800000000",
            "nonce": "40371d049700e893",
            "block_hash": "00"
        }"#;
        let request = parse_request_json(json).unwrap();
        assert_eq!(request.job.coinb1, "00");
        assert_eq!(request.job.extranonce2_size, None);
        assert!(request.job.merkle_branch.is_empty());
        assert_eq!(request.share.extranonce2, "ef7488b3");
        assert_eq!(request.block_hash.as_deref(), Some("00"));
    }

    #[test]
    fn test_parse_request_json_missing_field() {
        let err = parse_request_json(r#"{ "prevhash": "00" }"#).unwrap_err();
        assert!(err.to_string().contains("invalid share request JSON"));
    }
}
