//! Static catalog of known chat models and their token prices.

use tracing::warn;

/// Pricing profile of a chat completion model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelProfile {
    pub name: &'static str,
    /// USD per million prompt tokens.
    pub input_price_per_million: f64,
    /// USD per million completion tokens.
    pub output_price_per_million: f64,
}

/// Model used when the configured name is not in [`MODEL_CATALOG`].
pub const DEFAULT_MODEL: &str = DEFAULT_PROFILE.name;

const DEFAULT_PROFILE: ModelProfile = ModelProfile {
    name: "gpt-4-0125-preview",
    input_price_per_million: 10.0,
    output_price_per_million: 30.0,
};

pub const MODEL_CATALOG: &[ModelProfile] = &[
    ModelProfile {
        name: "gpt-3.5-turbo-0125",
        input_price_per_million: 0.5,
        output_price_per_million: 1.5,
    },
    DEFAULT_PROFILE,
    ModelProfile {
        name: "gpt-4-turbo",
        input_price_per_million: 10.0,
        output_price_per_million: 30.0,
    },
    ModelProfile {
        name: "gpt-4o",
        input_price_per_million: 5.0,
        output_price_per_million: 15.0,
    },
    ModelProfile {
        name: "gpt-4o-mini",
        input_price_per_million: 0.15,
        output_price_per_million: 0.6,
    },
];

/// Estimated cost of a call, split by direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub input: f64,
    pub output: f64,
}

impl CostEstimate {
    pub fn total(&self) -> f64 {
        self.input + self.output
    }
}

impl ModelProfile {
    /// Finds a model by exact name.
    pub fn find(name: &str) -> Option<&'static Self> {
        MODEL_CATALOG.iter().find(|m| m.name == name)
    }

    /// Resolves the configured model name, falling back to [`DEFAULT_MODEL`].
    pub fn resolve(name: &str) -> &'static Self {
        Self::find(name).unwrap_or_else(|| {
            warn!(
                requested = name,
                fallback = DEFAULT_MODEL,
                "unknown model, using default"
            );
            Self::default_profile()
        })
    }

    pub const fn default_profile() -> &'static Self {
        &DEFAULT_PROFILE
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_MODEL
    }

    pub fn estimate_cost(&self, prompt_tokens: u64, completion_tokens: u64) -> CostEstimate {
        CostEstimate {
            input: prompt_tokens as f64 * (self.input_price_per_million / 1_000_000.0),
            output: completion_tokens as f64 * (self.output_price_per_million / 1_000_000.0),
        }
    }
}
