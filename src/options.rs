//! Game configuration options.

extern crate alloc;

use alloc::string::String;
use core::time::Duration;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use headsup::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_name("House")
///     .with_pause(Duration::ZERO)
///     .with_clear_screen(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name shown for the dealer's seat.
    pub dealer_name: String,
    /// Dealer hits strictly below this value and stands at or above it.
    pub dealer_stands_on: u8,
    /// Pause before each table render, for pacing.
    pub pause: Duration,
    /// Whether the screen is cleared before each table render.
    pub clear_screen: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_name: String::from("Dealer"),
            dealer_stands_on: 17,
            pause: Duration::from_secs(1),
            clear_screen: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the pause applied before each table render.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use headsup::GameOptions;
    ///
    /// let options = GameOptions::default().with_pause(Duration::from_millis(250));
    /// assert_eq!(options.pause, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Sets whether the screen is cleared before each table render.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup::GameOptions;
    ///
    /// let options = GameOptions::default().with_clear_screen(false);
    /// assert!(!options.clear_screen);
    /// ```
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
