//! Reply templating for the chat front end
//!
//! Turns matcher output into the text sent back to the user. Message
//! variants are closed enums; which variant is used is decided by a
//! [`VariantPicker`] so tests can pin the choice.

use crate::models::Deal;

/// Sent in answer to a bare greeting
pub const WELCOME_MESSAGE: &str = "Hey there! 👋 I'm your food deals finder! Just tell me what you're craving and I'll find the best deals for you.\n\nTry searching for: coffee, pizza, burgers, sushi, tacos, ice cream, or anything else you're in the mood for! 🍕☕🍔";

/// Opening line placed above a list of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    GreatChoice,
    Perfect,
    Awesome,
    Excellent,
    Nice,
}

impl Greeting {
    pub const ALL: [Greeting; 5] = [
        Greeting::GreatChoice,
        Greeting::Perfect,
        Greeting::Awesome,
        Greeting::Excellent,
        Greeting::Nice,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Greeting::GreatChoice => "Great choice! Here's what I found:",
            Greeting::Perfect => "Perfect! I've got some amazing deals for you:",
            Greeting::Awesome => "Awesome! Check out these fantastic offers:",
            Greeting::Excellent => "Excellent! Here are some deals you'll love:",
            Greeting::Nice => "Nice! I found some great options:",
        }
    }
}

/// Reply when nothing matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResults {
    Hmm,
    NoMatches,
    Oops,
    DidNotFind,
}

impl NoResults {
    pub const ALL: [NoResults; 4] = [
        NoResults::Hmm,
        NoResults::NoMatches,
        NoResults::Oops,
        NoResults::DidNotFind,
    ];

    pub fn text(self) -> &'static str {
        match self {
            NoResults::Hmm => "Hmm, I couldn't find exactly what you're looking for. How about trying some popular options like coffee, pizza, burgers, or sushi?",
            NoResults::NoMatches => "No matches found for that search! Maybe try searching for coffee, pizza, burgers, sushi, or other tasty treats?",
            NoResults::Oops => "Oops! Nothing came up for that. Why not search for something delicious like coffee, pizza, burgers, or sushi?",
            NoResults::DidNotFind => "I didn't find any deals matching that search. Try popular items like coffee, pizza, burgers, sushi, or sandwiches!",
        }
    }
}

/// Closing line inviting another search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    WhatElse,
    HungryForMore,
    Explore,
    SomethingElse,
    KeepComing,
}

impl Continuation {
    pub const ALL: [Continuation; 5] = [
        Continuation::WhatElse,
        Continuation::HungryForMore,
        Continuation::Explore,
        Continuation::SomethingElse,
        Continuation::KeepComing,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Continuation::WhatElse => "What else are you craving? Just type it in!",
            Continuation::HungryForMore => "Hungry for more deals? Send me another search!",
            Continuation::Explore => "Want to explore more? Just tell me what you're looking for!",
            Continuation::SomethingElse => "Need something else? Just let me know what you want to find!",
            Continuation::KeepComing => "Keep the searches coming! What would you like next?",
        }
    }
}

/// Chooses which of `len` variants to use
pub trait VariantPicker: Send + Sync {
    /// Returns an index in `0..len`; `len` is never zero
    fn pick(&self, len: usize) -> usize;
}

/// Uniformly random choice
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl VariantPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        fastrand::usize(..len)
    }
}

/// Always the same index, clamped to the last variant
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Builds reply messages from match results
pub struct ReplyComposer {
    picker: Box<dyn VariantPicker>,
}

impl ReplyComposer {
    pub fn new(picker: Box<dyn VariantPicker>) -> Self {
        Self { picker }
    }

    pub fn random() -> Self {
        Self::new(Box::new(RandomPicker))
    }

    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::ALL[self.picker.pick(Greeting::ALL.len())]
    }

    pub fn no_results(&self) -> NoResults {
        NoResults::ALL[self.picker.pick(NoResults::ALL.len())]
    }

    pub fn continuation(&self) -> Continuation {
        Continuation::ALL[self.picker.pick(Continuation::ALL.len())]
    }

    /// Format matched deals as a numbered chat message
    pub fn format_deals(&self, deals: &[&Deal]) -> String {
        if deals.is_empty() {
            return self.no_results().text().to_string();
        }

        let mut response = format!("{}\n\n", self.greeting().text());

        for (index, deal) in deals.iter().enumerate() {
            response.push_str(&format!(
                "{}. *{}*\n📍 {}\n🎉 {}\n{}\n\n",
                index + 1,
                deal.name,
                deal.location,
                deal.deal,
                deal.description
            ));
        }

        response.push_str(self.continuation().text());
        response
    }
}

impl Default for ReplyComposer {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Debug for ReplyComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyComposer").finish_non_exhaustive()
    }
}
