//!

use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::LocalWallet;

/// Provider handle handed to the deploy tool: HTTP transport with the profile's signer.
pub type EthRpcClient = SignerMiddleware<Provider<Http>, LocalWallet>;
