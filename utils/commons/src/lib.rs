//! It exposes all common types, errors and helpers shared by the marketplace
//! contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{amount::*, constants::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod amount;
mod constants;
mod errors;
mod types;
