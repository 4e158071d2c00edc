use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use color_eyre::eyre::{Result, WrapErr};

/// Preflight an RPC endpoint before deploying, returning its chain ID.
///
/// Catches a dead or mistyped endpoint before any contract is created; the
/// deployment itself still goes through forge.
pub async fn preflight_chain_id(rpc_url: &str) -> Result<u64> {
    let url: Url = rpc_url
        .parse()
        .wrap_err_with(|| format!("Invalid RPC URL: {}", rpc_url))?;
    let provider = ProviderBuilder::new().connect_http(url);
    let chain_id = provider
        .get_chain_id()
        .await
        .wrap_err_with(|| format!("Could not reach RPC endpoint at {}", rpc_url))?;
    Ok(chain_id)
}
