use soroban_sdk::contracterror;

/// All errors surfaced by the engine.
///
/// Every state-changing entrypoint returns `Result<_, EngineError>`; an `Err`
/// aborts the invocation and discards every storage write made during it, so
/// no error here can leave the ledgers partially mutated.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EngineError {
    /// `initialize` has already been called
    AlreadyInitialized = 1,
    /// The engine has not been initialized yet
    NotInitialized = 2,
    /// Asset and oracle lists passed to `initialize` differ in length
    CountMismatch = 3,
    /// The collateral asset is not registered with the engine
    AssetNotAccepted = 4,
    /// Amount is zero or negative
    AmountNotPositive = 5,
    /// A token pull, push, mint, or burn failed
    TransferFailed = 6,
    /// Collateral balance is smaller than the requested debit
    InsufficientBalance = 7,
    /// Burn amount exceeds the debtor's outstanding debt
    DebtUnderflow = 8,
    /// The operation would leave the position below the solvency minimum
    HealthFactorBroken = 9,
    /// Liquidation target is not under-collateralized
    HealthFactorNotBroken = 10,
    /// Liquidation did not strictly improve the debtor's health factor
    HealthFactorNotImproved = 11,
    /// Health factor requested for a user with zero debt
    UndefinedHealthFactor = 12,
    /// The price feed call failed or returned a non-positive price
    PriceUnavailable = 13,
    /// The price feed's report is older than the accepted maximum age
    StalePrice = 14,
    /// Arithmetic overflow during calculation
    Overflow = 15,
    /// A guarded operation was re-entered through a collaborator callback
    Reentrancy = 16,
}
