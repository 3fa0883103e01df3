//! Input-column identifiers for the trained classifier
//!
//! These names are part of the model's training-time schema and must match
//! the artifact byte-for-byte. Two of the importance columns carry
//! misspellings inherited from the source dataset; they are opaque
//! identifiers here, not words to correct.

/// Partner-trait rating columns (1-10)
pub const ATTRACTIVE_PARTNER: &str = "attractive_partner";
pub const SINCERE_PARTNER: &str = "sincere_partner";
pub const INTELLIGENCE_PARTNER: &str = "intelligence_partner";
pub const FUNNY_PARTNER: &str = "funny_partner";
pub const AMBITION_PARTNER: &str = "ambition_partner";
pub const SHARED_INTERESTS_PARTNER: &str = "shared_interests_partner";

/// Importance-weighting columns (1-10)
pub const ATTRACTIVE_IMPORTANT: &str = "attractive_important";
pub const SINCERE_IMPORTANT: &str = "sincere_important";
// Dataset misspelling, matches the trained schema verbatim
pub const INTELLIGENCE_IMPORTANT: &str = "intellicence_important";
pub const FUNNY_IMPORTANT: &str = "funny_important";
// Dataset misspelling, matches the trained schema verbatim
pub const AMBITION_IMPORTANT: &str = "ambtition_important";
pub const SHARED_INTERESTS_IMPORTANT: &str = "shared_interests_important";

/// Interest-correlation column (-1.0 to 1.0)
pub const INTERESTS_CORRELATE: &str = "interests_correlate";

/// Rating scale bounds for the partner and importance sliders
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

/// Partner-rating columns eligible for "+1" counterfactual bumps,
/// in canonical order
pub const BUMPABLE_TRAITS: [&str; 6] = [
    ATTRACTIVE_PARTNER,
    SINCERE_PARTNER,
    INTELLIGENCE_PARTNER,
    FUNNY_PARTNER,
    AMBITION_PARTNER,
    SHARED_INTERESTS_PARTNER,
];

/// Human-readable label for a trait column, used by the sensitivity chart
pub fn display_label(column: &str) -> &str {
    match column {
        ATTRACTIVE_PARTNER => "Partner's Attractiveness",
        SINCERE_PARTNER => "Partner's Sincerity",
        INTELLIGENCE_PARTNER => "Partner's Intelligence",
        FUNNY_PARTNER => "Partner's Humor",
        AMBITION_PARTNER => "Partner's Ambition",
        SHARED_INTERESTS_PARTNER => "Shared Interests",
        other => other,
    }
}
