use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Only account addresses can create, buy or resell tokens (Error code: -4).
    OnlyAccountAddress,
    /// Price of a market item must be at least 1 micro CCD (Error code: -5).
    InvalidPrice,
    /// Attached amount differs from the listing price (Error code: -6).
    InvalidListingFee,
    /// Attached amount differs from the asking price of the item (Error code: -7).
    InvalidAskingPrice,
    /// Token is not listed for sale (Error code: -8).
    TokenNotListedForSale,
    /// No token ids are left to assign (Error code: -9).
    TokenLimitReached,
    /// Failed to invoke a contract (Error code: -10).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -11).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
