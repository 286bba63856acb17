//! Casino configuration options.

/// Configuration options for a [`Casino`](crate::casino::Casino).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use parlor::CasinoOptions;
///
/// let options = CasinoOptions::default()
///     .with_starting_balance(500)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasinoOptions {
    /// Credits a new dice session starts with.
    pub starting_balance: u64,
    /// Minimum dice wager advertised to the player.
    pub min_bet: u64,
    /// Maximum dice wager advertised to the player.
    pub max_bet: u64,
    /// Total at which the blackjack dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for CasinoOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            min_bet: 10,
            max_bet: 100,
            dealer_stands_on: 17,
        }
    }
}

impl CasinoOptions {
    /// Sets the starting dice balance.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::CasinoOptions;
    ///
    /// let options = CasinoOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the advertised minimum wager.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the advertised maximum wager.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u64) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the dealer's standing total.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::CasinoOptions;
    ///
    /// let options = CasinoOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
