use commons::{
    ContractError, ContractResult, ContractTokenAmount, ContractTokenId, CustomContractError,
    DEFAULT_LISTING_PRICE,
};
use concordium_cis2::{StandardIdentifierOwned, SupportResult, TokenIdU32};
use concordium_std::*;
use core::ops::DerefMut;

/// Ownership and metadata of a single token.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub owner: Address,
    pub metadata_url: String,
}

/// Marketplace record of a token. The field order is part of the public
/// interface of `fetchMarketItems` and friends.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct MarketItem {
    pub token_id: ContractTokenId,
    /// Account that listed the token most recently.
    pub seller: AccountAddress,
    /// Current token owner, the contract itself while the item is listed.
    pub owner: Address,
    /// Asking price.
    pub price: Amount,
    pub sold: bool,
    /// Listing fee held by the contract until the item is sold.
    pub listing_fee: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Marketplace owner. Sets the listing price and receives listing fees.
    pub owner: AccountAddress,
    /// Fee required to list an item.
    pub listing_price: Amount,
    /// Number of created tokens. IDs are assigned from 1 up to this value.
    pub token_count: u32,
    /// Number of sold items that were not relisted.
    pub items_sold: u32,
    /// Owner and metadata of every token.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Market record of every token.
    pub market_items: StateMap<ContractTokenId, MarketItem, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Implementors.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens and the default listing price.
    pub fn new(state_builder: &mut StateBuilder<S>, owner: AccountAddress) -> Self {
        Self {
            owner,
            listing_price: DEFAULT_LISTING_PRICE,
            token_count: 0,
            items_sold: 0,
            tokens: state_builder.new_map(),
            market_items: state_builder.new_map(),
            operators: state_builder.new_map(),
            implementors: state_builder.new_map(),
        }
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        *address == Address::Account(self.owner)
    }

    /// Mint the next token with `owner` as its owner.
    pub fn mint(
        &mut self,
        owner: AccountAddress,
        metadata_url: String,
    ) -> ContractResult<ContractTokenId> {
        self.token_count = self
            .token_count
            .checked_add(1)
            .ok_or(CustomContractError::TokenLimitReached)?;

        let token_id = TokenIdU32(self.token_count);
        self.tokens.insert(
            token_id,
            TokenData {
                owner: Address::Account(owner),
                metadata_url,
            },
        );

        Ok(token_id)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let token = self.tokens.get(token_id).ok_or(ContractError::InvalidTokenId)?;
        Ok(ContractTokenAmount::from(u8::from(token.owner == *address)))
    }

    pub fn metadata_url(&self, token_id: &ContractTokenId) -> Option<String> {
        self.tokens.get(token_id).map(|token| token.metadata_url.clone())
    }

    /// Move a token between addresses, keeping the owner of its market item
    /// in sync. A zero amount only checks that the token exists.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: Address,
    ) -> ContractResult<()> {
        let mut token = self
            .tokens
            .get(token_id)
            .map(|token| token.clone())
            .ok_or(ContractError::InvalidTokenId)?;

        if amount == ContractTokenAmount::from(0) {
            return Ok(());
        }

        ensure!(
            amount == ContractTokenAmount::from(1) && token.owner == *from,
            ContractError::InsufficientFunds
        );

        token.owner = to;
        self.tokens.insert(*token_id, token);

        if let Some(mut item) = self.market_item(token_id) {
            item.owner = to;
            self.market_items.insert(*token_id, item);
        }

        Ok(())
    }

    pub fn market_item(&self, token_id: &ContractTokenId) -> Option<MarketItem> {
        self.market_items.get(token_id).map(|item| item.clone())
    }

    /// Put a token on the market. The token must already be owned by `market`.
    /// Overwrites the previous record of a relisted token.
    pub fn list(
        &mut self,
        token_id: ContractTokenId,
        seller: AccountAddress,
        price: Amount,
        listing_fee: Amount,
        market: ContractAddress,
    ) {
        if self.market_item(&token_id).map_or(false, |item| item.sold) {
            self.items_sold = self.items_sold.saturating_sub(1);
        }

        self.market_items.insert(
            token_id,
            MarketItem {
                token_id,
                seller,
                owner: Address::Contract(market),
                price,
                sold: false,
                listing_fee,
            },
        );
    }

    /// Record the sale of a listed item to `buyer` and hand over the token.
    /// Returns the item as it was listed.
    pub fn sell(
        &mut self,
        token_id: &ContractTokenId,
        buyer: AccountAddress,
        market: ContractAddress,
    ) -> ContractResult<MarketItem> {
        let market = Address::Contract(market);
        let listed = self
            .market_item(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure!(
            !listed.sold && listed.owner == market,
            CustomContractError::TokenNotListedForSale.into()
        );

        self.transfer(
            token_id,
            ContractTokenAmount::from(1),
            &market,
            Address::Account(buyer),
        )?;

        let mut item = listed.clone();
        item.owner = Address::Account(buyer);
        item.sold = true;
        self.market_items.insert(*token_id, item);
        self.items_sold += 1;

        Ok(listed)
    }

    /// Market items matching `predicate`, in ascending token ID order.
    pub fn market_items_where(
        &self,
        predicate: impl Fn(&MarketItem) -> bool,
    ) -> Vec<MarketItem> {
        (1..=self.token_count)
            .filter_map(|id| self.market_item(&TokenIdU32(id)))
            .filter(|item| predicate(item))
            .collect()
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        contracts: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, contracts);
    }

    /// Get the list of contracts implementing the specified standard.
    pub fn get_implementors(&self, id: &StandardIdentifierOwned) -> SupportResult {
        if let Some(addresses) = self.implementors.get(id) {
            SupportResult::SupportBy(addresses.to_vec())
        } else {
            SupportResult::NoSupport
        }
    }
}
