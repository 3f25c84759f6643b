use commons::*;
use concordium_cis2::*;
use concordium_std::*;

use crate::events::MarketplaceEvent;
use crate::external::*;
use crate::state::{MarketItem, State};

/// List of supported standards by this contract address.
const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];

/// Initialize the marketplace with the given owner, no tokens and the default
/// listing price.
#[init(contract = "NftMarketplace", parameter = "AccountAddress")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let owner = AccountAddress::deserial(&mut ctx.parameter_cursor())?;

    // Construct the initial contract state.
    let state = State::new(state_builder, owner);
    Ok(state)
}

/// Function to set the fee required to list an item.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the marketplace owner;
/// - Fails to log `ListingPrice` event.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "updateListingPrice",
    parameter = "Amount",
    enable_logger
)]
fn update_listing_price<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let listing_price = Amount::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);

    // Event for updated listing price.
    logger.log(&MarketplaceEvent::listing_price(
        state.listing_price,
        listing_price,
    ))?;

    state.listing_price = listing_price;

    Ok(())
}

#[receive(
    contract = "NftMarketplace",
    name = "getListingPrice",
    return_value = "Amount"
)]
fn get_listing_price<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    Ok(host.state().listing_price)
}

/// Mint a new token owned by the sender and put it on the market for the given
/// price. The attached amount must be exactly the current listing price, it is
/// held by the contract until the item is sold.
/// Logs `Mint`, `TokenMetadata`, `Transfer` and `MarketItemListed` events.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is a contract;
/// - Asking price is zero;
/// - Attached amount differs from the listing price;
/// - All token IDs are used up;
/// - Fails to log any of the events.
#[receive(
    mutable,
    payable,
    contract = "NftMarketplace",
    name = "createToken",
    parameter = "CreateTokenParams",
    return_value = "ContractTokenId",
    enable_logger
)]
fn create_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params = CreateTokenParams::deserial(&mut ctx.parameter_cursor())?;
    let seller = sender_account(ctx)?;
    let market = ctx.self_address();
    let state = host.state_mut();

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );
    ensure_eq!(
        amount,
        state.listing_price,
        CustomContractError::InvalidListingFee.into()
    );

    let token_id = state.mint(seller, params.metadata_url.clone())?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: Address::Account(seller),
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, params.metadata_url))?;

    list_token(state, logger, token_id, seller, params.price, amount, market)?;

    Ok(token_id)
}

/// Buy a listed item. The attached amount must be exactly the asking price.
/// The token goes to the buyer, the asking price to the seller and the listing
/// fee held for the item to the marketplace owner.
/// Logs `Transfer` and `MarketSale` events.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is a contract;
/// - The token does not exist;
/// - The item is already sold;
/// - Attached amount differs from the asking price;
/// - Any of the CCD transfers fails;
/// - Fails to log any of the events.
#[receive(
    mutable,
    payable,
    contract = "NftMarketplace",
    name = "createMarketSale",
    parameter = "ContractTokenId",
    enable_logger
)]
fn create_market_sale<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    let buyer = sender_account(ctx)?;
    let market = ctx.self_address();
    let state = host.state_mut();

    let item = state
        .market_item(&token_id)
        .ok_or(ContractError::InvalidTokenId)?;
    ensure!(
        !item.sold,
        CustomContractError::TokenNotListedForSale.into()
    );
    ensure_eq!(
        amount,
        item.price,
        CustomContractError::InvalidAskingPrice.into()
    );

    let item = state.sell(&token_id, buyer, market)?;
    let owner = state.owner;

    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        from: Address::Contract(market),
        to: Address::Account(buyer),
    }))?;

    // Log NFT sale event
    logger.log(&MarketplaceEvent::sale(
        token_id,
        item.seller,
        buyer,
        item.price,
    ))?;

    if item.listing_fee > Amount::zero() {
        host.invoke_transfer(&owner, item.listing_fee)
            .map_err(CustomContractError::from)?;
    }
    host.invoke_transfer(&item.seller, amount)
        .map_err(CustomContractError::from)?;

    Ok(())
}

/// Put a bought token back on the market for a new price. The attached amount
/// must be exactly the current listing price.
/// Logs `Transfer` and `MarketItemListed` events.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is a contract;
/// - The token does not exist;
/// - Sender does not own the token;
/// - Asking price is zero;
/// - Attached amount differs from the listing price;
/// - Fails to log any of the events.
#[receive(
    mutable,
    payable,
    contract = "NftMarketplace",
    name = "resellToken",
    parameter = "ResellTokenParams",
    enable_logger
)]
fn resell_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = ResellTokenParams::deserial(&mut ctx.parameter_cursor())?;
    let seller = sender_account(ctx)?;
    let market = ctx.self_address();
    let state = host.state_mut();

    let item = state
        .market_item(&params.token_id)
        .ok_or(ContractError::InvalidTokenId)?;
    ensure_eq!(
        item.owner,
        Address::Account(seller),
        ContractError::Unauthorized
    );
    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );
    ensure_eq!(
        amount,
        state.listing_price,
        CustomContractError::InvalidListingFee.into()
    );

    list_token(
        state,
        logger,
        params.token_id,
        seller,
        params.price,
        amount,
        market,
    )
}

/// View the items currently listed on the market.
#[receive(
    contract = "NftMarketplace",
    name = "fetchMarketItems",
    return_value = "Vec<MarketItem>"
)]
fn fetch_market_items<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let market = Address::Contract(ctx.self_address());
    Ok(host
        .state()
        .market_items_where(|item| item.owner == market))
}

/// View the items owned by the sender.
#[receive(
    contract = "NftMarketplace",
    name = "fetchMyNFTs",
    return_value = "Vec<MarketItem>"
)]
fn fetch_my_nfts<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let sender = ctx.sender();
    Ok(host
        .state()
        .market_items_where(|item| item.owner == sender))
}

/// View the items the sender has listed and which are not sold yet.
#[receive(
    contract = "NftMarketplace",
    name = "fetchItemsListed",
    return_value = "Vec<MarketItem>"
)]
fn fetch_items_listed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let sender = ctx.sender();
    Ok(host.state().market_items_where(|item| {
        !item.sold && Address::Account(item.seller) == sender
    }))
}

#[receive(
    contract = "NftMarketplace",
    name = "viewMarketStats",
    return_value = "MarketStats"
)]
fn view_market_stats<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<MarketStats> {
    let state = host.state();
    Ok(MarketStats {
        listing_price: state.listing_price,
        token_count: state.token_count,
        items_sold: state.items_sold,
    })
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of every contract receiving a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `token_id` and `from` address.
///     - The token is not owned by the `from`.
///     - The receiver is this contract.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "transfer",
    parameter = "TransferParameter",
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let market = Address::Contract(ctx.self_address());

    for transfer in transfers {
        let state = host.state_mut();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&transfer.from, &sender),
            ContractError::Unauthorized
        );

        // Tokens only enter the market through a listing.
        let to_address = transfer.to.address();
        ensure!(to_address != market, ContractError::Unauthorized);

        state.transfer(
            &transfer.token_id,
            transfer.amount,
            &transfer.from,
            to_address,
        )?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "NftMarketplace",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();

    let response = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect::<Vec<_>>();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "NftMarketplace",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();

    for query in params.queries {
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the token metadata URLs given at creation of the tokens.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "NftMarketplace",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();

    for token_id in params.queries {
        let url = state
            .metadata_url(&token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        response.push(MetadataUrl { url, hash: None });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the supported standards or addresses for a implementation given list of
/// standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "NftMarketplace",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());

    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(host.state().get_implementors(&std_id));
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Set the addresses for an implementation given a standard identifier and a
/// list of contract addresses.
///
/// It rejects if:
/// - Sender is not the marketplace owner.
/// - It fails to parse the parameter.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "setImplementors",
    parameter = "SetImplementorsParams"
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        host.state().is_owner(&ctx.sender()),
        ContractError::Unauthorized
    );

    let params: SetImplementorsParams = ctx.parameter_cursor().get()?;
    host.state_mut()
        .set_implementors(params.id, params.implementors);

    Ok(())
}

fn sender_account(ctx: &impl HasReceiveContext) -> ContractResult<AccountAddress> {
    match ctx.sender() {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => Err(CustomContractError::OnlyAccountAddress.into()),
    }
}

fn token_metadata_event(
    token_id: ContractTokenId,
    url: String,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}

// Move the token from the seller to the market and record the listing.
fn list_token<S: HasStateApi>(
    state: &mut State<S>,
    logger: &mut impl HasLogger,
    token_id: ContractTokenId,
    seller: AccountAddress,
    price: Amount,
    listing_fee: Amount,
    market: ContractAddress,
) -> ContractResult<()> {
    let from = Address::Account(seller);
    let to = Address::Contract(market);
    let amount = ContractTokenAmount::from(1);

    state.transfer(&token_id, amount, &from, to)?;
    state.list(token_id, seller, price, listing_fee, market);

    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id,
        amount,
        from,
        to,
    }))?;

    // Log NFT list event.
    logger.log(&MarketplaceEvent::listed(
        token_id,
        seller,
        price,
        listing_fee,
    ))?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    type Host = TestHost<State<TestStateApi>>;

    const OWNER: AccountAddress = AccountAddress([0; 32]);
    const ALICE: AccountAddress = AccountAddress([1; 32]);
    const BOB: AccountAddress = AccountAddress([2; 32]);
    const CAROL: AccountAddress = AccountAddress([3; 32]);

    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 42,
        subindex: 0,
    };

    const RECEIVER: ContractAddress = ContractAddress {
        index: 43,
        subindex: 0,
    };

    const TOKEN_URI: &str = "https://gateway.pinata.cloud/ipfs/";

    /// Actors and a freshly deployed marketplace owned by `owner`.
    struct Fixture {
        owner: AccountAddress,
        alice: AccountAddress,
        bob: AccountAddress,
        carol: AccountAddress,
        host: Host,
    }

    fn deploy_contract_fixture() -> Fixture {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&OWNER);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_NftMarketplace");

        Fixture {
            owner: OWNER,
            alice: ALICE,
            bob: BOB,
            carol: CAROL,
            host: TestHost::new(state, state_builder),
        }
    }

    fn ccd(amount: &str) -> Amount {
        parse_ccd(amount).expect_report("Invalid CCD amount")
    }

    fn receive_ctx(sender: Address, parameter: &[u8]) -> TestReceiveContext<'_> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender)
            .set_self_address(MARKETPLACE)
            .set_parameter(parameter);
        ctx
    }

    // The host does not credit the amount attached to a payable call.
    fn attach(host: &mut Host, amount: Amount) {
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);
    }

    fn create_token_with(
        host: &mut Host,
        seller: AccountAddress,
        price: Amount,
        fee: Amount,
    ) -> ContractResult<ContractTokenId> {
        let bytes = to_bytes(&CreateTokenParams {
            metadata_url: TOKEN_URI.into(),
            price,
        });
        let ctx = receive_ctx(Address::Account(seller), &bytes);
        let mut logger = TestLogger::init();
        attach(host, fee);

        create_token(&ctx, host, fee, &mut logger)
    }

    fn list_new_token(host: &mut Host, seller: AccountAddress, price: Amount) -> ContractTokenId {
        let fee = host.state().listing_price;
        create_token_with(host, seller, price, fee).expect_report("Failed to create token")
    }

    fn buy(
        host: &mut Host,
        buyer: AccountAddress,
        token_id: ContractTokenId,
        amount: Amount,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&token_id);
        let ctx = receive_ctx(Address::Account(buyer), &bytes);
        let mut logger = TestLogger::init();
        attach(host, amount);

        create_market_sale(&ctx, host, amount, &mut logger)
    }

    fn resell(
        host: &mut Host,
        seller: AccountAddress,
        token_id: ContractTokenId,
        price: Amount,
        fee: Amount,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&ResellTokenParams { token_id, price });
        let ctx = receive_ctx(Address::Account(seller), &bytes);
        let mut logger = TestLogger::init();
        attach(host, fee);

        resell_token(&ctx, host, fee, &mut logger)
    }

    fn transfer_one(
        host: &mut Host,
        sender: AccountAddress,
        token_id: ContractTokenId,
        from: Address,
        to: Receiver,
    ) -> ContractResult<()> {
        let params: TransferParameter = TransferParams(vec![Transfer {
            token_id,
            amount: ContractTokenAmount::from(1),
            from,
            to,
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let ctx = receive_ctx(Address::Account(sender), &bytes);
        let mut logger = TestLogger::init();

        transfer(&ctx, host, &mut logger)
    }

    fn balance(host: &Host, token_id: ContractTokenId, address: Address) -> ContractResult<u8> {
        let bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery { token_id, address }],
        });
        let ctx = receive_ctx(address, &bytes);
        let response = balance_of(&ctx, host)?;

        Ok(response.0[0].0)
    }

    fn hook() -> OwnedEntrypointName {
        OwnedEntrypointName::new_unchecked("onReceivingCIS2".into())
    }

    fn standard(id: &str) -> StandardIdentifierOwned {
        StandardIdentifierOwned::new_unchecked(id.into())
    }

    fn token_ids(items: &[MarketItem]) -> Vec<ContractTokenId> {
        items.iter().map(|item| item.token_id).collect()
    }

    #[concordium_test]
    fn test_init() {
        let fixture = deploy_contract_fixture();
        let state = fixture.host.state();

        claim_eq!(state.owner, fixture.owner);
        claim_eq!(state.listing_price, ccd("0.025"));
        claim_eq!(state.token_count, 0);
        claim_eq!(state.items_sold, 0);

        let ctx = receive_ctx(Address::Account(fixture.alice), &[]);
        claim_eq!(fetch_market_items(&ctx, &fixture.host), Ok(Vec::new()));
    }

    #[concordium_test]
    fn test_update_listing_price() {
        let mut fixture = deploy_contract_fixture();
        let listing_price = ccd("0.1");

        let bytes = to_bytes(&listing_price);
        let ctx = receive_ctx(Address::Account(fixture.owner), &bytes);
        let mut logger = TestLogger::init();

        let result = update_listing_price(&ctx, &mut fixture.host, &mut logger);
        claim_eq!(result, Ok(()));

        let ctx = receive_ctx(Address::Account(fixture.alice), &[]);
        claim_eq!(get_listing_price(&ctx, &fixture.host), Ok(listing_price));

        claim_eq!(
            logger.logs,
            vec![to_bytes(&MarketplaceEvent::listing_price(
                ccd("0.025"),
                listing_price
            ))]
        );
    }

    #[concordium_test]
    fn test_update_listing_price_not_owner() {
        let mut fixture = deploy_contract_fixture();

        let bytes = to_bytes(&ccd("0.1"));
        let ctx = receive_ctx(Address::Account(fixture.alice), &bytes);
        let mut logger = TestLogger::init();

        let result = update_listing_price(&ctx, &mut fixture.host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(fixture.host.state().listing_price, ccd("0.025"));
        claim!(logger.logs.is_empty(), "No event should be logged");
    }

    #[concordium_test]
    fn test_create_token() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");

        let ctx = receive_ctx(Address::Account(fixture.alice), &[]);
        let listing_price =
            get_listing_price(&ctx, &fixture.host).expect_report("Failed to get listing price");

        let result = create_token_with(&mut fixture.host, fixture.alice, price, listing_price);
        claim_eq!(result, Ok(TokenIdU32(1)));

        let items = fetch_market_items(&ctx, &fixture.host)
            .expect_report("Failed to fetch market items");
        claim_eq!(items.len(), 1);
        claim_eq!(items[0].token_id, TokenIdU32(1));
        claim_eq!(items[0].seller, fixture.alice);
        claim_eq!(items[0].owner, Address::Contract(MARKETPLACE));
        claim_eq!(items[0].price, price);
        claim!(!items[0].sold);
        claim_eq!(items[0].listing_fee, listing_price);

        // Listed tokens are held by the marketplace.
        claim_eq!(
            balance(&fixture.host, TokenIdU32(1), Address::Contract(MARKETPLACE)),
            Ok(1)
        );
        claim_eq!(
            balance(&fixture.host, TokenIdU32(1), Address::Account(fixture.alice)),
            Ok(0)
        );
    }

    #[concordium_test]
    fn test_create_token_logs() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let fee = ccd("0.025");

        let bytes = to_bytes(&CreateTokenParams {
            metadata_url: TOKEN_URI.into(),
            price,
        });
        let ctx = receive_ctx(Address::Account(fixture.alice), &bytes);
        let mut logger = TestLogger::init();
        attach(&mut fixture.host, fee);

        let token_id = create_token(&ctx, &mut fixture.host, fee, &mut logger)
            .expect_report("Failed to create token");

        claim_eq!(logger.logs.len(), 4, "Four events should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Mint(MintEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                owner: Address::Account(fixture.alice),
            }))
        );
        claim_eq!(
            logger.logs[1],
            to_bytes(&token_metadata_event(token_id, TOKEN_URI.into()))
        );
        claim_eq!(
            logger.logs[2],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                from: Address::Account(fixture.alice),
                to: Address::Contract(MARKETPLACE),
            }))
        );
        claim_eq!(
            from_bytes::<MarketplaceEvent>(&logger.logs[3]),
            Ok(MarketplaceEvent::listed(token_id, fixture.alice, price, fee))
        );
    }

    #[concordium_test]
    fn test_create_token_wrong_fee() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");

        for fee in [ccd("0.024999"), ccd("0.025001"), Amount::zero()] {
            let result = create_token_with(&mut fixture.host, fixture.alice, price, fee);
            claim_eq!(
                result,
                Err(CustomContractError::InvalidListingFee.into())
            );
        }

        claim_eq!(fixture.host.state().token_count, 0);
    }

    #[concordium_test]
    fn test_create_token_zero_price() {
        let mut fixture = deploy_contract_fixture();

        let result = create_token_with(
            &mut fixture.host,
            fixture.alice,
            Amount::zero(),
            ccd("0.025"),
        );
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));
        claim_eq!(fixture.host.state().token_count, 0);
    }

    #[concordium_test]
    fn test_create_token_from_contract() {
        let mut fixture = deploy_contract_fixture();
        let fee = ccd("0.025");

        let bytes = to_bytes(&CreateTokenParams {
            metadata_url: TOKEN_URI.into(),
            price: ccd("0.1"),
        });
        let ctx = receive_ctx(Address::Contract(RECEIVER), &bytes);
        let mut logger = TestLogger::init();

        let result = create_token(&ctx, &mut fixture.host, fee, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::OnlyAccountAddress.into())
        );
    }

    #[concordium_test]
    fn test_sell_token() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let fee = fixture.host.state().listing_price;
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);

        let result = buy(&mut fixture.host, fixture.bob, token_id, price);
        claim_eq!(result, Ok(()));

        let item = fixture
            .host
            .state()
            .market_item(&token_id)
            .expect_report("Market item should exist");
        claim!(item.sold);
        claim_eq!(item.owner, Address::Account(fixture.bob));
        claim_eq!(item.seller, fixture.alice);

        // Listing fee goes to the marketplace owner, the price to the seller.
        claim!(fixture.host.transfer_occurred(&fixture.owner, fee));
        claim!(fixture.host.transfer_occurred(&fixture.alice, price));

        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.bob)),
            Ok(1)
        );

        let ctx = receive_ctx(Address::Account(fixture.bob), &[]);
        claim_eq!(fetch_market_items(&ctx, &fixture.host), Ok(Vec::new()));
        claim_eq!(fetch_my_nfts(&ctx, &fixture.host), Ok(vec![item]));
    }

    #[concordium_test]
    fn test_sell_token_logs() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);

        let bytes = to_bytes(&token_id);
        let ctx = receive_ctx(Address::Account(fixture.bob), &bytes);
        let mut logger = TestLogger::init();
        attach(&mut fixture.host, price);

        let result = create_market_sale(&ctx, &mut fixture.host, price, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(logger.logs.len(), 2, "Two events should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                from: Address::Contract(MARKETPLACE),
                to: Address::Account(fixture.bob),
            }))
        );
        claim_eq!(
            from_bytes::<MarketplaceEvent>(&logger.logs[1]),
            Ok(MarketplaceEvent::sale(
                token_id,
                fixture.alice,
                fixture.bob,
                price
            ))
        );
    }

    #[concordium_test]
    fn test_sell_token_wrong_price() {
        let mut fixture = deploy_contract_fixture();
        let token_id = list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));

        for amount in [ccd("0.099999"), ccd("0.100001")] {
            let result = buy(&mut fixture.host, fixture.bob, token_id, amount);
            claim_eq!(
                result,
                Err(CustomContractError::InvalidAskingPrice.into())
            );
        }

        let item = fixture
            .host
            .state()
            .market_item(&token_id)
            .expect_report("Market item should exist");
        claim!(!item.sold);
        claim_eq!(item.owner, Address::Contract(MARKETPLACE));
    }

    #[concordium_test]
    fn test_sell_token_twice() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);

        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        let result = buy(&mut fixture.host, fixture.carol, token_id, price);
        claim_eq!(
            result,
            Err(CustomContractError::TokenNotListedForSale.into())
        );

        let item = fixture
            .host
            .state()
            .market_item(&token_id)
            .expect_report("Market item should exist");
        claim_eq!(item.owner, Address::Account(fixture.bob));
        claim_eq!(fixture.host.state().items_sold, 1);
    }

    #[concordium_test]
    fn test_sell_unknown_token() {
        let mut fixture = deploy_contract_fixture();

        let result = buy(&mut fixture.host, fixture.bob, TokenIdU32(7), ccd("0.1"));
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_create_token_limit_reached() {
        let mut fixture = deploy_contract_fixture();
        fixture.host.state_mut().token_count = u32::MAX;

        let result = create_token_with(
            &mut fixture.host,
            fixture.alice,
            ccd("0.1"),
            ccd("0.025"),
        );
        claim_eq!(
            result,
            Err(CustomContractError::TokenLimitReached.into())
        );
        claim_eq!(fixture.host.state().token_count, u32::MAX);
    }

    #[concordium_test]
    fn test_sell_token_payout_fails() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);

        // Nothing is left to pay out.
        fixture.host.set_self_balance(Amount::zero());

        let bytes = to_bytes(&token_id);
        let ctx = receive_ctx(Address::Account(fixture.bob), &bytes);
        let mut logger = TestLogger::init();

        let result = create_market_sale(&ctx, &mut fixture.host, price, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::InvokeTransferError.into())
        );
    }

    #[concordium_test]
    fn test_trade_from_contract() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let fee = fixture.host.state().listing_price;
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);

        let bytes = to_bytes(&token_id);
        let ctx = receive_ctx(Address::Contract(RECEIVER), &bytes);
        let mut logger = TestLogger::init();
        let result = create_market_sale(&ctx, &mut fixture.host, price, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::OnlyAccountAddress.into())
        );

        let bytes = to_bytes(&ResellTokenParams { token_id, price });
        let ctx = receive_ctx(Address::Contract(RECEIVER), &bytes);
        let mut logger = TestLogger::init();
        let result = resell_token(&ctx, &mut fixture.host, fee, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::OnlyAccountAddress.into())
        );

        let item = fixture
            .host
            .state()
            .market_item(&token_id)
            .expect_report("Market item should exist");
        claim!(!item.sold);
    }

    #[concordium_test]
    fn test_resell_token() {
        let mut fixture = deploy_contract_fixture();
        let fee = fixture.host.state().listing_price;
        let token_id = list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));
        claim_eq!(
            buy(&mut fixture.host, fixture.bob, token_id, ccd("0.1")),
            Ok(())
        );

        let new_price = ccd("0.2");
        let result = resell(&mut fixture.host, fixture.bob, token_id, new_price, fee);
        claim_eq!(result, Ok(()));

        let ctx = receive_ctx(Address::Account(fixture.carol), &[]);
        let items = fetch_market_items(&ctx, &fixture.host)
            .expect_report("Failed to fetch market items");
        claim_eq!(items.len(), 1);
        claim_eq!(items[0].seller, fixture.bob);
        claim_eq!(items[0].price, new_price);
        claim!(!items[0].sold);
        claim_eq!(fixture.host.state().items_sold, 0);

        claim_eq!(
            buy(&mut fixture.host, fixture.carol, token_id, new_price),
            Ok(())
        );
        claim!(fixture.host.transfer_occurred(&fixture.bob, new_price));
        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.carol)),
            Ok(1)
        );
    }

    #[concordium_test]
    fn test_resell_token_rejects() {
        let mut fixture = deploy_contract_fixture();
        let fee = fixture.host.state().listing_price;
        let token_id = list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));

        // Listed tokens belong to the marketplace, not the seller.
        let result = resell(&mut fixture.host, fixture.alice, token_id, ccd("0.2"), fee);
        claim_eq!(result, Err(ContractError::Unauthorized));

        claim_eq!(
            buy(&mut fixture.host, fixture.bob, token_id, ccd("0.1")),
            Ok(())
        );

        let result = resell(&mut fixture.host, fixture.carol, token_id, ccd("0.2"), fee);
        claim_eq!(result, Err(ContractError::Unauthorized));

        let result = resell(&mut fixture.host, fixture.bob, token_id, Amount::zero(), fee);
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));

        let result = resell(
            &mut fixture.host,
            fixture.bob,
            token_id,
            ccd("0.2"),
            ccd("0.01"),
        );
        claim_eq!(
            result,
            Err(CustomContractError::InvalidListingFee.into())
        );

        let result = resell(&mut fixture.host, fixture.bob, TokenIdU32(9), ccd("0.2"), fee);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_fetch_views() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let first = list_new_token(&mut fixture.host, fixture.alice, price);
        let second = list_new_token(&mut fixture.host, fixture.alice, price);
        let third = list_new_token(&mut fixture.host, fixture.bob, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, first, price), Ok(()));

        let alice_ctx = receive_ctx(Address::Account(fixture.alice), &[]);
        let bob_ctx = receive_ctx(Address::Account(fixture.bob), &[]);

        let market = fetch_market_items(&alice_ctx, &fixture.host)
            .expect_report("Failed to fetch market items");
        claim_eq!(token_ids(&market), vec![second, third]);

        let listed = fetch_items_listed(&alice_ctx, &fixture.host)
            .expect_report("Failed to fetch listed items");
        claim_eq!(token_ids(&listed), vec![second]);

        let listed = fetch_items_listed(&bob_ctx, &fixture.host)
            .expect_report("Failed to fetch listed items");
        claim_eq!(token_ids(&listed), vec![third]);

        let owned = fetch_my_nfts(&bob_ctx, &fixture.host).expect_report("Failed to fetch NFTs");
        claim_eq!(token_ids(&owned), vec![first]);

        let owned = fetch_my_nfts(&alice_ctx, &fixture.host).expect_report("Failed to fetch NFTs");
        claim!(owned.is_empty());
    }

    #[concordium_test]
    fn test_market_stats() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        let ctx = receive_ctx(Address::Account(fixture.carol), &[]);
        claim_eq!(
            view_market_stats(&ctx, &fixture.host),
            Ok(MarketStats {
                listing_price: ccd("0.025"),
                token_count: 2,
                items_sold: 1,
            })
        );
    }

    #[concordium_test]
    fn test_fixtures_are_isolated() {
        let mut fixture = deploy_contract_fixture();
        list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));

        let fresh = deploy_contract_fixture();
        let ctx = receive_ctx(Address::Account(fresh.alice), &[]);
        claim_eq!(fetch_market_items(&ctx, &fresh.host), Ok(Vec::new()));
        claim_eq!(fresh.host.state().token_count, 0);
        claim_eq!(fresh.host.state().listing_price, ccd("0.025"));
    }

    #[concordium_test]
    fn test_transfer_bought_token() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        let result = transfer_one(
            &mut fixture.host,
            fixture.bob,
            token_id,
            Address::Account(fixture.bob),
            Receiver::from_account(fixture.carol),
        );
        claim_eq!(result, Ok(()));

        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.carol)),
            Ok(1)
        );
        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.bob)),
            Ok(0)
        );

        // The market item follows the token.
        let ctx = receive_ctx(Address::Account(fixture.carol), &[]);
        let owned = fetch_my_nfts(&ctx, &fixture.host).expect_report("Failed to fetch NFTs");
        claim_eq!(token_ids(&owned), vec![token_id]);
    }

    #[concordium_test]
    fn test_transfer_listed_token() {
        let mut fixture = deploy_contract_fixture();
        let token_id = list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));

        let result = transfer_one(
            &mut fixture.host,
            fixture.alice,
            token_id,
            Address::Account(fixture.alice),
            Receiver::from_account(fixture.bob),
        );
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let result = transfer_one(
            &mut fixture.host,
            fixture.alice,
            token_id,
            Address::Contract(MARKETPLACE),
            Receiver::from_account(fixture.alice),
        );
        claim_eq!(result, Err(ContractError::Unauthorized));

        claim_eq!(
            balance(&fixture.host, token_id, Address::Contract(MARKETPLACE)),
            Ok(1)
        );
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        // Carol is not an operator yet.
        let result = transfer_one(
            &mut fixture.host,
            fixture.carol,
            token_id,
            Address::Account(fixture.bob),
            Receiver::from_account(fixture.carol),
        );
        claim_eq!(result, Err(ContractError::Unauthorized));

        let bytes = to_bytes(&UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(fixture.carol),
        }]));
        let ctx = receive_ctx(Address::Account(fixture.bob), &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(update_operator(&ctx, &mut fixture.host, &mut logger), Ok(()));
        claim_eq!(logger.logs.len(), 1, "One event should be logged");

        let bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![OperatorOfQuery {
                owner: Address::Account(fixture.bob),
                address: Address::Account(fixture.carol),
            }],
        });
        let ctx = receive_ctx(Address::Account(fixture.carol), &bytes);
        let response =
            operator_of(&ctx, &fixture.host).expect_report("Failed to query operators");
        claim_eq!(response.0, vec![true]);

        let result = transfer_one(
            &mut fixture.host,
            fixture.carol,
            token_id,
            Address::Account(fixture.bob),
            Receiver::from_account(fixture.alice),
        );
        claim_eq!(result, Ok(()));
        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.alice)),
            Ok(1)
        );
    }

    #[concordium_test]
    fn test_transfer_to_contract() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        fixture
            .host
            .setup_mock_entrypoint(RECEIVER, hook(), MockFn::returning_ok(()));

        let result = transfer_one(
            &mut fixture.host,
            fixture.bob,
            token_id,
            Address::Account(fixture.bob),
            Receiver::Contract(RECEIVER, hook()),
        );
        claim_eq!(result, Ok(()));
        claim_eq!(
            balance(&fixture.host, token_id, Address::Contract(RECEIVER)),
            Ok(1)
        );
    }

    #[concordium_test]
    fn test_transfer_to_rejecting_contract() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        fixture.host.setup_mock_entrypoint(
            RECEIVER,
            hook(),
            MockFn::returning_err(CallContractError::<()>::Trap),
        );

        let result = transfer_one(
            &mut fixture.host,
            fixture.bob,
            token_id,
            Address::Account(fixture.bob),
            Receiver::Contract(RECEIVER, hook()),
        );
        claim_eq!(
            result,
            Err(CustomContractError::InvokeContractError.into())
        );
    }

    #[concordium_test]
    fn test_transfer_to_marketplace() {
        let mut fixture = deploy_contract_fixture();
        let price = ccd("0.1");
        let fee = fixture.host.state().listing_price;
        let token_id = list_new_token(&mut fixture.host, fixture.alice, price);
        claim_eq!(buy(&mut fixture.host, fixture.bob, token_id, price), Ok(()));

        let result = transfer_one(
            &mut fixture.host,
            fixture.bob,
            token_id,
            Address::Account(fixture.bob),
            Receiver::Contract(
                MARKETPLACE,
                OwnedEntrypointName::new_unchecked("viewMarketStats".into()),
            ),
        );
        claim_eq!(result, Err(ContractError::Unauthorized));

        // A sold item never shows up on the market.
        let ctx = receive_ctx(Address::Account(fixture.carol), &[]);
        claim_eq!(fetch_market_items(&ctx, &fixture.host), Ok(Vec::new()));
        claim_eq!(
            balance(&fixture.host, token_id, Address::Account(fixture.bob)),
            Ok(1)
        );

        // Relisting stays possible.
        claim_eq!(
            resell(&mut fixture.host, fixture.bob, token_id, price, fee),
            Ok(())
        );
    }

    #[concordium_test]
    fn test_balance_of_unknown_token() {
        let fixture = deploy_contract_fixture();

        claim_eq!(
            balance(&fixture.host, TokenIdU32(1), Address::Account(fixture.alice)),
            Err(ContractError::InvalidTokenId)
        );
    }

    #[concordium_test]
    fn test_token_metadata() {
        let mut fixture = deploy_contract_fixture();
        let token_id = list_new_token(&mut fixture.host, fixture.alice, ccd("0.1"));

        let bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![token_id],
        });
        let ctx = receive_ctx(Address::Account(fixture.bob), &bytes);
        let response =
            token_metadata(&ctx, &fixture.host).expect_report("Failed to query metadata");
        claim_eq!(response.0.len(), 1);
        claim_eq!(response.0[0].url, TOKEN_URI);
        claim_eq!(response.0[0].hash, None);

        let bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU32(2)],
        });
        let ctx = receive_ctx(Address::Account(fixture.bob), &bytes);
        claim!(matches!(
            token_metadata(&ctx, &fixture.host),
            Err(ContractError::InvalidTokenId)
        ));
    }

    #[concordium_test]
    fn test_supports() {
        let mut fixture = deploy_contract_fixture();

        let bytes = to_bytes(&SupportsQueryParams {
            queries: vec![standard("CIS-2"), standard("CIS-9")],
        });
        let ctx = receive_ctx(Address::Account(fixture.alice), &bytes);
        let response = supports(&ctx, &fixture.host).expect_report("Failed to query supports");
        claim!(matches!(response.results[0], SupportResult::Support));
        claim!(matches!(response.results[1], SupportResult::NoSupport));

        let bytes = to_bytes(&SetImplementorsParams {
            id: standard("CIS-9"),
            implementors: vec![RECEIVER],
        });

        let ctx = receive_ctx(Address::Account(fixture.alice), &bytes);
        claim_eq!(
            set_implementors(&ctx, &mut fixture.host),
            Err(ContractError::Unauthorized)
        );

        let ctx = receive_ctx(Address::Account(fixture.owner), &bytes);
        claim_eq!(set_implementors(&ctx, &mut fixture.host), Ok(()));

        let bytes = to_bytes(&SupportsQueryParams {
            queries: vec![standard("CIS-9")],
        });
        let ctx = receive_ctx(Address::Account(fixture.alice), &bytes);
        let response = supports(&ctx, &fixture.host).expect_report("Failed to query supports");
        claim!(matches!(
            &response.results[0],
            SupportResult::SupportBy(addresses) if addresses == &vec![RECEIVER]
        ));
    }
}
