use commons::ContractTokenId;
use concordium_cis2::StandardIdentifierOwned;
use concordium_std::*;

#[derive(Debug, Serialize, SchemaType)]
pub struct CreateTokenParams {
    /// Location of the token metadata, e.g. an IPFS gateway URL.
    pub metadata_url: String,
    /// Asking price of the new market item.
    pub price: Amount,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct ResellTokenParams {
    pub token_id: ContractTokenId,
    /// New asking price.
    pub price: Amount,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct MarketStats {
    pub listing_price: Amount,
    /// Number of tokens created so far, which is also the highest token ID.
    pub token_count: u32,
    /// Number of market items currently sold and not relisted.
    pub items_sold: u32,
}

/// The parameter type for the contract function `setImplementors`.
/// Takes a standard identifier and list of contract addresses providing
/// implementations of this standard.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetImplementorsParams {
    /// The identifier for the standard.
    pub id: StandardIdentifierOwned,
    /// The addresses of the implementors of the standard.
    pub implementors: Vec<ContractAddress>,
}
