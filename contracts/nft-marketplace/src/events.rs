use commons::{ContractTokenId, LISTING_PRICE_TAG, MARKET_ITEM_LISTED_TAG, MARKET_SALE_TAG};
use concordium_std::*;

/// Listing price update event data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ListingPriceEvent {
    /// Listing price before the update.
    pub from: Amount,
    /// Listing price after the update.
    pub to: Amount,
}

/// Market item list event data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MarketItemListedEvent {
    /// Token identifier.
    pub token_id: ContractTokenId,
    /// Account selling the token.
    pub seller: AccountAddress,
    /// Asking price.
    pub price: Amount,
    /// Listing fee paid by the seller.
    pub listing_fee: Amount,
}

/// Market sale event data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MarketSaleEvent {
    /// Token identifier.
    pub token_id: ContractTokenId,
    /// Previous token owner.
    pub seller: AccountAddress,
    /// New token owner.
    pub buyer: AccountAddress,
    /// Price paid to the seller.
    pub price: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketplaceEvent {
    /// Update the listing price
    ListingPrice(ListingPriceEvent),
    /// List NFT on the market
    MarketItemListed(MarketItemListedEvent),
    /// Sell NFT
    MarketSale(MarketSaleEvent),
}

impl MarketplaceEvent {
    pub fn listing_price(from: Amount, to: Amount) -> Self {
        Self::ListingPrice(ListingPriceEvent { from, to })
    }

    pub fn listed(
        token_id: ContractTokenId,
        seller: AccountAddress,
        price: Amount,
        listing_fee: Amount,
    ) -> Self {
        Self::MarketItemListed(MarketItemListedEvent {
            token_id,
            seller,
            price,
            listing_fee,
        })
    }

    pub fn sale(
        token_id: ContractTokenId,
        seller: AccountAddress,
        buyer: AccountAddress,
        price: Amount,
    ) -> Self {
        Self::MarketSale(MarketSaleEvent {
            token_id,
            seller,
            buyer,
            price,
        })
    }
}

impl Serial for MarketplaceEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketplaceEvent::ListingPrice(event) => {
                out.write_u8(LISTING_PRICE_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::MarketItemListed(event) => {
                out.write_u8(MARKET_ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::MarketSale(event) => {
                out.write_u8(MARKET_SALE_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for MarketplaceEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            LISTING_PRICE_TAG => ListingPriceEvent::deserial(source).map(Self::ListingPrice),
            MARKET_ITEM_LISTED_TAG => {
                MarketItemListedEvent::deserial(source).map(Self::MarketItemListed)
            }
            MARKET_SALE_TAG => MarketSaleEvent::deserial(source).map(Self::MarketSale),
            _ => Err(ParseError::default()),
        }
    }
}
