//! Deployed-address extraction from forge's textual report

use crate::error::{Error, Result};

/// Index of the deployed-contract address among the `0x`-prefixed tokens of
/// forge's report: the deployer address is printed first, the deployed
/// address second. Positional and brittle: if forge's report format changes
/// but still contains two or more `0x` tokens, this picks a wrong address
/// instead of failing.
const DEPLOYED_ADDRESS_INDEX: usize = 1;

/// Extract the deployed contract address from the raw text captured on a
/// `forge create` invocation's standard output.
///
/// Tokens are split on the space character; a token qualifies if it starts
/// with `0x`. Qualifying tokens are truncated at the first newline, whether
/// it appears as an actual newline or as the two-character `\n` escape left
/// by a bytes-style capture. The second qualifying token is the address.
pub fn extract_address(raw: &str) -> Result<String> {
    let info: Vec<&str> = raw
        .split(' ')
        .filter(|token| token.starts_with("0x"))
        .map(trim_at_newline)
        .collect();

    info.get(DEPLOYED_ADDRESS_INDEX)
        .map(|address| address.to_string())
        .ok_or(Error::Parse { found: info.len() })
}

fn trim_at_newline(token: &str) -> &str {
    let token = token.split('\n').next().unwrap_or(token);
    token.split("\\n").next().unwrap_or(token)
}
