//! An NFT marketplace smart contract implementing the Concordium Token
//! Standard CIS2.
//!
//! # Description
//! Every token of this contract is a unique NFT, identified by a sequential
//! token ID starting from 1. A token is created and listed for sale in one
//! step through `createToken`: the creator pays the current listing price and
//! sets an asking price, and the contract holds the token until somebody buys
//! it through `createMarketSale`. On a sale, the buyer receives the token, the
//! seller receives the asking price and the marketplace owner receives the
//! listing fee. A buyer can put the token back on the market with
//! `resellToken`.
//!
//! The listing price can only be updated by the marketplace owner, which is
//! the account passed as the parameter of `init`.
//!
//! Besides the marketplace functions, the contract exposes the CIS2 functions
//! `transfer`, `updateOperator`, `balanceOf`, `operatorOf`, `tokenMetadata`
//! and the CIS0 function `supports`. Tokens listed on the market are owned by
//! the contract itself and cannot be moved by anyone else.

#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
