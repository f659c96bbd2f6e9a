// CLASSIFICATION: COMMUNITY
// Filename: cmdline.rs v0.3
// Date Modified: 2027-09-02
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// bootcfg · Kernel Cmdline Tokenizer
//
// Splits the kernel command line (as exposed by /proc/cmdline,
// trailing newline already removed) into ordered key=value
// pairs.  Double quotes protect spaces from being treated as
// separators and are then dropped from the token entirely.
//
// Example cmdline:
//
//   console=ttyS0,115200 androidboot.serialno="abc 123" quiet
//
// # Public API
// * [`CmdlineTokens`] – lazy iterator over the pairs
// * [`parse_cmdline`] – collect every pair, in cmdline order
// * [`get_boot_config_from_kernel`] – first `androidboot.<key>` match
// ─────────────────────────────────────────────────────────────

#![forbid(unsafe_code)]

use super::{trim_key, ConfigPair, ANDROIDBOOT_PREFIX};

const QUOTE: u8 = b'"';
const SPACE: u8 = b' ';

/// Iterator over the `key[=value]` tokens of a kernel command line.
///
/// Unbalanced quotes are tolerated: everything from the opening quote to the
/// end of the string becomes part of the last token.  Empty tokens (leading,
/// trailing or repeated spaces) are skipped.
#[derive(Debug, Clone)]
pub struct CmdlineTokens<'a> {
    cmdline: &'a str,
    base: usize,
    done: bool,
}

impl<'a> CmdlineTokens<'a> {
    pub fn new(cmdline: &'a str) -> Self {
        Self {
            cmdline,
            base: 0,
            done: false,
        }
    }

    /// Offset of the space terminating the token that starts at `start`, or
    /// the end of the string.  Quoted spans are stepped over as a whole.
    fn token_end(&self, start: usize) -> usize {
        let bytes = self.cmdline.as_bytes();
        let mut pos = start;
        while let Some(off) = bytes[pos..].iter().position(|&b| b == SPACE || b == QUOTE) {
            let found = pos + off;
            if bytes[found] == SPACE {
                return found;
            }
            match bytes[found + 1..].iter().position(|&b| b == QUOTE) {
                Some(close) => pos = found + 1 + close + 1,
                None => return bytes.len(),
            }
        }
        bytes.len()
    }
}

impl Iterator for CmdlineTokens<'_> {
    type Item = ConfigPair;

    fn next(&mut self) -> Option<ConfigPair> {
        while !self.done {
            let end = self.token_end(self.base);
            let piece: String = self.cmdline[self.base..end]
                .chars()
                .filter(|&c| c != QUOTE as char)
                .collect();
            if end >= self.cmdline.len() {
                self.done = true;
            } else {
                self.base = end + 1;
            }
            if let Some(pair) = split_token(&piece) {
                return Some(pair);
            }
        }
        None
    }
}

/// `key` and `key=` are the same thing: a present key with an empty value.
fn split_token(piece: &str) -> Option<ConfigPair> {
    let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
    let key = trim_key(key)?;
    Some(ConfigPair::new(key, value))
}

/// Parse a kernel command line into its ordered `key[=value]` pairs.
///
/// Duplicate keys are all kept; callers wanting "the" value take the first.
///
/// # Examples
///
/// ```
/// use bootcfg::parser::{parse_cmdline, ConfigPair};
///
/// let pairs = parse_cmdline(r#"a=1 b="x y" quiet"#);
/// assert_eq!(
///     pairs,
///     vec![
///         ConfigPair::new("a", "1"),
///         ConfigPair::new("b", "x y"),
///         ConfigPair::new("quiet", ""),
///     ]
/// );
/// ```
pub fn parse_cmdline(cmdline: &str) -> Vec<ConfigPair> {
    CmdlineTokens::new(cmdline).collect()
}

/// Look up `androidboot.<android_key>` in an in-memory kernel command line.
///
/// Returns the value of the first matching token.
pub fn get_boot_config_from_kernel(cmdline: &str, android_key: &str) -> Option<String> {
    let cmdline_key = format!("{ANDROIDBOOT_PREFIX}{android_key}");
    CmdlineTokens::new(cmdline)
        .find(|pair| pair.key == cmdline_key)
        .map(|pair| pair.value)
}
