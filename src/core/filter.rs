//! Explicit filter selection. The dashboard this replaces threaded the
//! widget state implicitly; here the selection is a plain value passed
//! to `filter`, nothing ambient.

use crate::errors::{AppError, AppResult};
use crate::models::event::NormalizedEvent;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn week_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-W\d{2}$").unwrap())
}

/// What the caller selected. `None` means "everything" for that axis.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Upper-cased full names ("NOMBRE APELLIDOS"), the identity the
    /// dashboard filtered on.
    pub identities: Option<BTreeSet<String>>,
    /// ISO week keys ("YYYY-Www").
    pub weeks: Option<BTreeSet<String>>,
}

impl Selection {
    /// The identity selection: filtering with it returns the input set.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selection from CLI arguments. Empty argument lists mean
    /// "no restriction"; week keys are validated up front.
    pub fn from_args(users: &[String], weeks: &[String]) -> AppResult<Self> {
        let identities = if users.is_empty() {
            None
        } else {
            Some(users.iter().map(|u| u.trim().to_uppercase()).collect())
        };

        let weeks = if weeks.is_empty() {
            None
        } else {
            let mut set = BTreeSet::new();
            for w in weeks {
                let w = w.trim().to_string();
                if !week_key_re().is_match(&w) {
                    return Err(AppError::InvalidWeek(w));
                }
                set.insert(w);
            }
            Some(set)
        };

        Ok(Selection { identities, weeks })
    }

    pub fn matches(&self, e: &NormalizedEvent) -> bool {
        if let Some(identities) = &self.identities
            && !identities.contains(&e.full_name())
        {
            return false;
        }

        if let Some(weeks) = &self.weeks {
            match &e.week_key {
                Some(w) if weeks.contains(w) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Subset of `events` matching the selection, input order preserved.
/// An empty result is a valid outcome, not an error.
pub fn filter(events: &[NormalizedEvent], selection: &Selection) -> Vec<NormalizedEvent> {
    events
        .iter()
        .filter(|e| selection.matches(e))
        .cloned()
        .collect()
}
