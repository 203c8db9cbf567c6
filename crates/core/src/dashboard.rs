//! Politician selection for the dashboard dropdown.
//!
//! The dropdown is refreshed on page load and whenever its search text
//! changes. A refresh rebuilds the option list from the current politicians
//! and decides which politician is selected afterwards; that decision is the
//! only state the dashboard keeps, and both charts are recomputed from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// How a refresh treats the selection the viewer already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Every refresh selects the first listed politician, discarding the
    /// current choice.
    ResetOnSearch,
    /// Keep the current choice while it still names a stored politician;
    /// otherwise fall back to the first listed one.
    #[default]
    KeepValid,
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" | "reset_on_search" => Ok(Self::ResetOnSearch),
            "keep" | "keep_valid" => Ok(Self::KeepValid),
            other => Err(format!(
                "Unknown selection policy '{other}'. Must be one of: keep, reset"
            )),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetOnSearch => f.write_str("reset"),
            Self::KeepValid => f.write_str("keep"),
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// A politician as offered by the dropdown.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: DbId,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: DbId,
}

/// The dropdown after a refresh: what is listed and what is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownState {
    pub options: Vec<DropdownOption>,
    pub value: Option<DbId>,
}

/// Case-insensitive substring match; an empty or blank search matches all.
pub fn matches_search(name: &str, search: &str) -> bool {
    let needle = search.trim();
    needle.is_empty() || name.to_lowercase().contains(&needle.to_lowercase())
}

/// Rebuild the dropdown from `candidates` (in store order).
///
/// Options are narrowed to names matching `search`. Under
/// [`SelectionPolicy::KeepValid`] a still-valid `current` selection survives
/// the refresh and stays listed even if the search would hide it.
pub fn refresh_options<'a, I>(
    candidates: I,
    search: &str,
    current: Option<DbId>,
    policy: SelectionPolicy,
) -> DropdownState
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    let candidates: Vec<Candidate<'a>> = candidates.into_iter().collect();

    let kept = match policy {
        SelectionPolicy::ResetOnSearch => None,
        SelectionPolicy::KeepValid => current.filter(|id| candidates.iter().any(|c| c.id == *id)),
    };

    let options: Vec<DropdownOption> = candidates
        .iter()
        .filter(|c| Some(c.id) == kept || matches_search(c.name, search))
        .map(|c| DropdownOption {
            label: c.name.to_string(),
            value: c.id,
        })
        .collect();

    let value = kept.or_else(|| options.first().map(|o| o.value));

    DropdownState { options, value }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PEOPLE: &[(DbId, &str)] = &[(1, "Asha Rao"), (2, "Vikram Singh"), (3, "Anil Kumar")];

    fn people() -> impl Iterator<Item = Candidate<'static>> {
        PEOPLE.iter().map(|&(id, name)| Candidate { id, name })
    }

    fn ids(state: &DropdownState) -> Vec<DbId> {
        state.options.iter().map(|o| o.value).collect()
    }

    #[test]
    fn test_initial_load_selects_first() {
        for policy in [SelectionPolicy::ResetOnSearch, SelectionPolicy::KeepValid] {
            let state = refresh_options(people(), "", None, policy);
            assert_eq!(ids(&state), vec![1, 2, 3]);
            assert_eq!(state.value, Some(1));
            assert_eq!(state.options[1].label, "Vikram Singh");
        }
    }

    #[test]
    fn test_no_politicians_means_no_selection() {
        let state = refresh_options(std::iter::empty(), "", Some(4), SelectionPolicy::KeepValid);
        assert!(state.options.is_empty());
        assert_eq!(state.value, None);
    }

    #[test]
    fn test_reset_policy_discards_current_choice() {
        let state = refresh_options(people(), "", Some(3), SelectionPolicy::ResetOnSearch);
        assert_eq!(state.value, Some(1));
    }

    #[test]
    fn test_reset_policy_picks_first_match() {
        let state = refresh_options(people(), "an", Some(2), SelectionPolicy::ResetOnSearch);
        // "Asha Rao" does not contain "an"; "Vikram Singh" does not either.
        assert_eq!(ids(&state), vec![3]);
        assert_eq!(state.value, Some(3));
    }

    #[test]
    fn test_keep_policy_preserves_valid_choice() {
        let state = refresh_options(people(), "", Some(3), SelectionPolicy::KeepValid);
        assert_eq!(state.value, Some(3));
    }

    #[test]
    fn test_keep_policy_lists_kept_choice_outside_search() {
        let state = refresh_options(people(), "asha", Some(2), SelectionPolicy::KeepValid);
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.value, Some(2));
    }

    #[test]
    fn test_keep_policy_replaces_stale_choice() {
        let state = refresh_options(people(), "", Some(99), SelectionPolicy::KeepValid);
        assert_eq!(state.value, Some(1));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("Asha Rao", "RAO"));
        assert!(matches_search("Asha Rao", "   "));
        assert!(!matches_search("Asha Rao", "singh"));
    }

    #[test]
    fn test_search_with_no_matches_has_no_selection() {
        let state = refresh_options(people(), "zzz", None, SelectionPolicy::KeepValid);
        assert!(state.options.is_empty());
        assert_eq!(state.value, None);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("reset".parse::<SelectionPolicy>(), Ok(SelectionPolicy::ResetOnSearch));
        assert_eq!(" Keep ".parse::<SelectionPolicy>(), Ok(SelectionPolicy::KeepValid));
        assert_eq!("keep_valid".parse::<SelectionPolicy>(), Ok(SelectionPolicy::KeepValid));
        assert_matches!("sticky".parse::<SelectionPolicy>(), Err(msg) if msg.contains("sticky"));
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::KeepValid);
        assert_eq!(SelectionPolicy::ResetOnSearch.to_string(), "reset");
    }
}
