//! Static help pages for the early game layers.

/// A help page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpTopic {
    /// Coins, buildings and upgrades.
    Coin,
    /// The diamond layer.
    Diamond,
    /// Runes and offerings.
    Rune,
    /// Transcension and mythos.
    Mythos,
    /// Challenges.
    Challenge,
}

impl HelpTopic {
    /// All topics in menu order.
    pub const ALL: [Self; 5] = [
        Self::Coin,
        Self::Diamond,
        Self::Rune,
        Self::Mythos,
        Self::Challenge,
    ];

    /// Identifier used by menus and commands.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Diamond => "diamond",
            Self::Rune => "rune",
            Self::Mythos => "mythos",
            Self::Challenge => "challenge",
        }
    }

    /// Looks a topic up by identifier, case-insensitively.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.id().eq_ignore_ascii_case(id.trim()))
    }

    /// The help text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Coin => COIN_TEXT,
            Self::Diamond => DIAMOND_TEXT,
            Self::Rune => RUNE_TEXT,
            Self::Mythos => MYTHOS_TEXT,
            Self::Challenge => CHALLENGE_TEXT,
        }
    }
}

const COIN_TEXT: &str = "\
Welcome to Synergism! Here is where you start of course. The start is very simple: use coins to buy buildings and \
upgrades that produce even more coins! Keep doing it until you can do the next feature, you will know when you can see it. :)";

const DIAMOND_TEXT: &str = "\
Congrats! You have prestiged! Prestiging for the first time unlocks the Diamond layer, which consists of Diamond buildings, \
Diamond upgrades, automation upgrades, generator upgrades, and last but not least RUNES! \
Runes are covered in their own section. \
The diamond upgrades themselves are decent, but a good amount of boost comes from the Diamond buildings! Once bought, \
the first tier makes crystals which boost coin production, and every tier after produces the tier before. \
The final item unlocked is a new \"prestige\" layer, accelerator boosts. They reset diamond upgrades and your diamonds \
(not generator upgrades, automation or diamond buildings) in exchange for a boost to your accelerators. \
Resetting more than 3-4 times is generally not necessary.";

const RUNE_TEXT: &str = "\
Prestiging for the first time also unlocks runes! You gain offerings based on how long you spend in a reset, \
boosted by upgrades and other sources. Offerings spent on a rune become rune exp, and with enough rune exp \
the rune levels up and grants powerful bonuses. Check each rune for the details of its boosts. Runes \
are unlocked mostly through achievements, so keep an eye out for new ones (they get more expensive). \
Rune recycle chance refunds offerings as a multiplier to rune exp.";

const MYTHOS_TEXT: &str = "\
Welcome to another reset tier, transcension! You reset all of your coin and diamond progress and turn it into mythos, \
which buys mythos buildings, more generator upgrades, more automation, and mythos upgrades. Transcending for the \
first time also unlocks a new tab, CHALLENGES, explained in their own section. Mythos buildings make mythos shards, \
which the next reset tier (Reincarnation) requires, and also give multiplier boosts to get you back up \
to speed. Don't spend all of your mythos though: some mythos upgrades scale with unspent mythos. Have fun!";

const CHALLENGE_TEXT: &str = "\
Welcome to the challenges section! \
Challenges make the game harder depending on which one you are in. \
Some block a feature (like no accelerators), and some reduce a feature (like reduced diamonds). \
They give rewards for the first completion and for every completion after, so do them often! \
Check each challenge's description in the challenge tab for details. \
Without challenges you generally can't get more than e6-7 mythos, so don't be afraid to do them!";
