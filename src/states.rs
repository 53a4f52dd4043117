//! Malaysian state names and address-based state/district extraction.

use alloc::string::String;
use alloc::vec::Vec;

type IndexMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;

/// Spelling variants mapped to canonical Malaysian state names.
///
/// The survey data writes states many ways ("Penang", "Pulau Pinang",
/// "Wilayah Persekutuan Labuan"). Matching walks the variants in insertion
/// order and is case-insensitive, so earlier entries win and the standard
/// table keeps plain state names ahead of their long federal-territory
/// forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMap {
    variants: IndexMap<String, String>,
}

impl Default for StateMap {
    fn default() -> Self {
        Self::malaysia()
    }
}

impl StateMap {
    /// The standard table: all 13 states and 3 federal territories, plus the
    /// variant spellings seen in the survey data.
    #[must_use]
    pub fn malaysia() -> Self {
        let mut map = Self {
            variants: IndexMap::default(),
        };
        for (variant, canonical) in [
            ("Kedah", "Kedah"),
            ("Kelantan", "Kelantan"),
            ("Kuala Lumpur", "Kuala Lumpur"),
            ("Labuan", "Labuan"),
            ("Labuan Federal Territory", "Labuan"),
            ("Wilayah Persekutuan Labuan", "Labuan"),
            ("Melaka", "Melaka"),
            ("Malacca", "Melaka"),
            ("Negeri Sembilan", "Negeri Sembilan"),
            ("Pahang", "Pahang"),
            ("Penang", "Pulau Pinang"),
            ("Pulau Pinang", "Pulau Pinang"),
            ("Perak", "Perak"),
            ("Perlis", "Perlis"),
            ("Putrajaya", "Putrajaya"),
            ("Wilayah Persekutuan Putrajaya", "Putrajaya"),
            ("Sabah", "Sabah"),
            ("Sarawak", "Sarawak"),
            ("Selangor", "Selangor"),
            ("Terengganu", "Terengganu"),
            ("Johor", "Johor"),
            ("Johor Bahru", "Johor"),
        ] {
            map = map.with_variant(variant, canonical);
        }
        map
    }

    /// Add one variant spelling, keeping insertion order for matching.
    /// A repeated variant overwrites its canonical name.
    #[must_use]
    pub fn with_variant(mut self, variant: &str, canonical: &str) -> Self {
        self.variants
            .insert(variant.trim().to_lowercase(), String::from(canonical));
        self
    }

    /// Canonical name for an exact (case-insensitive) variant spelling.
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.variants
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    /// First variant found as a substring of `text`, case-insensitively.
    ///
    /// This is how states are pulled out of free-form address tails such
    /// as `"50000 Kuala Lumpur"`.
    #[must_use]
    pub fn match_in(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.variants
            .iter()
            .find(|(variant, _)| haystack.contains(variant.as_str()))
            .map(|(_, canonical)| canonical.as_str())
    }

    /// Number of variant spellings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the table has no variants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Comma parts that start with one of these are street or suburb names, the
/// best district guess an address offers.
const DISTRICT_PREFIXES: [&str; 5] = ["Taman", "Bandar", "Kampung", "Kg.", "Jalan"];

/// Pull `(state, district)` out of a free-form address.
///
/// The address is split on commas. The state comes from matching `states`
/// against the last part. The district is searched backwards through the
/// remaining parts, skipping bare postcodes, preferring parts with a known
/// street prefix and otherwise taking the first part longer than three
/// characters; if that finds nothing, the same length rule is retried
/// forwards over all parts. Either side falls back to `"Unknown"`.
#[must_use]
pub fn extract_state_and_district(address: &str, states: &StateMap) -> (String, String) {
    let mut state = String::from("Unknown");
    let mut district = String::from("Unknown");
    if address.trim().is_empty() {
        return (state, district);
    }

    let parts: Vec<&str> = address.split(',').map(str::trim).collect();
    if let Some(found) = parts.last().and_then(|last| states.match_in(last)) {
        state = String::from(found);
    }

    if parts.len() >= 2 {
        for part in parts[..parts.len() - 1].iter().rev() {
            if is_all_digits(part) {
                continue;
            }
            if DISTRICT_PREFIXES
                .iter()
                .any(|prefix| part.starts_with(prefix))
            {
                district = String::from(*part);
                break;
            }
            if part.chars().count() > 3 {
                district = String::from(*part);
                break;
            }
        }
    }
    if district == "Unknown" {
        for part in &parts {
            if !is_all_digits(part) && part.chars().count() > 3 {
                district = String::from(*part);
                break;
            }
        }
    }

    (state, district)
}

fn is_all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_lookup_is_case_insensitive() {
        let states = StateMap::malaysia();
        assert_eq!(states.canonical("penang"), Some("Pulau Pinang"));
        assert_eq!(states.canonical(" MALACCA "), Some("Melaka"));
        assert_eq!(states.canonical("Atlantis"), None);
    }

    #[test]
    fn substring_match_finds_states_in_address_tails() {
        let states = StateMap::malaysia();
        assert_eq!(states.match_in("50000 Kuala Lumpur"), Some("Kuala Lumpur"));
        assert_eq!(states.match_in("13700 PENANG"), Some("Pulau Pinang"));
        assert_eq!(states.match_in("Wilayah Persekutuan Labuan"), Some("Labuan"));
        assert_eq!(states.match_in("nowhere"), None);
    }

    #[test]
    fn variant_spellings_share_a_canonical_name() {
        let states = StateMap::malaysia();
        assert_eq!(states.canonical("Johor Bahru"), Some("Johor"));
        assert_eq!(
            states.canonical("Wilayah Persekutuan Putrajaya"),
            Some("Putrajaya")
        );
    }

    #[test]
    fn with_variant_extends_the_table() {
        let states = StateMap::malaysia().with_variant("KL", "Kuala Lumpur");
        assert_eq!(states.canonical("kl"), Some("Kuala Lumpur"));
        assert_eq!(states.len(), 23);
    }

    #[test]
    fn extracts_state_and_district_from_a_full_address() {
        let states = StateMap::malaysia();
        let (state, district) = extract_state_and_district(
            "Jalan Perkasa 1, Taman Maluri, 55100 Kuala Lumpur",
            &states,
        );
        assert_eq!(state, "Kuala Lumpur");
        assert_eq!(district, "Taman Maluri");
    }

    #[test]
    fn postcode_only_parts_are_skipped() {
        let states = StateMap::malaysia();
        let (state, district) =
            extract_state_and_district("Lorong Kulit, 10460, Pulau Pinang", &states);
        assert_eq!(state, "Pulau Pinang");
        assert_eq!(district, "Lorong Kulit");
    }

    #[test]
    fn district_prefers_known_street_prefixes_searching_backwards() {
        let states = StateMap::malaysia();
        let (_, district) =
            extract_state_and_district("Big Hall, Kg. Baru, 50300, Kuala Lumpur", &states);
        assert_eq!(district, "Kg. Baru");
    }

    #[test]
    fn single_part_address_falls_back_to_itself() {
        let states = StateMap::malaysia();
        let (state, district) = extract_state_and_district("Pasar Payang Terengganu", &states);
        assert_eq!(state, "Terengganu");
        assert_eq!(district, "Pasar Payang Terengganu");
    }

    #[test]
    fn empty_address_is_unknown() {
        let states = StateMap::malaysia();
        assert_eq!(
            extract_state_and_district("  ", &states),
            (String::from("Unknown"), String::from("Unknown"))
        );
    }
}
