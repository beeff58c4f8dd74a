//! File-based profile overrides.
//!
//! A config file adjusts the options of built-in profiles without touching
//! the presets themselves:
//!
//! ```json
//! {
//!   "profiles": {
//!     "narrative": { "min_words": 80, "max_words": 300 },
//!     "world": { "check_completeness": false }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::profile::Profile;
use crate::validator::ValidationOptions;

/// Per-field overrides for one profile. Unset fields keep the preset value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverrides {
    /// Replacement lower word bound.
    pub min_words: Option<usize>,
    /// Replacement upper word bound.
    pub max_words: Option<usize>,
    /// Replacement refusal toggle.
    pub check_refusal: Option<bool>,
    /// Replacement completeness toggle.
    pub check_completeness: Option<bool>,
}

impl ProfileOverrides {
    /// Apply these overrides on top of `options`.
    pub fn apply(&self, mut options: ValidationOptions) -> ValidationOptions {
        if let Some(min) = self.min_words {
            options.min_words = min;
        }
        if let Some(max) = self.max_words {
            options.max_words = max;
        }
        if let Some(enabled) = self.check_refusal {
            options.check_refusal = enabled;
        }
        if let Some(enabled) = self.check_completeness {
            options.check_completeness = enabled;
        }
        options
    }
}

/// Overrides for the built-in profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Overrides keyed by profile.
    #[serde(default)]
    pub profiles: BTreeMap<Profile, ProfileOverrides>,
}

impl GateConfig {
    /// Load and check a JSON config file.
    pub fn load(path: &Path) -> GateResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), profiles = config.profiles.len(), "loaded gate config");
        Ok(config)
    }

    /// Parse and check a JSON config string.
    pub fn from_json(json: &str) -> GateResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Effective options for `profile`.
    pub fn options_for(&self, profile: Profile) -> ValidationOptions {
        let base = profile.options();
        match self.profiles.get(&profile) {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    /// Ensure every override takes effect and every profile ends up with
    /// ordered bounds.
    fn check(&self) -> GateResult<()> {
        for (profile, overrides) in &self.profiles {
            if *profile == Profile::Choice {
                let toggles = [
                    ("check_refusal", overrides.check_refusal),
                    ("check_completeness", overrides.check_completeness),
                ];
                if let Some((field, _)) = toggles.into_iter().find(|(_, v)| v.is_some()) {
                    return Err(GateError::UnsupportedOverride {
                        profile: profile.name().to_string(),
                        field,
                    });
                }
            }
            self.options_for(*profile).validate_bounds(profile.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_config_keeps_presets() {
        let config = GateConfig::default();
        for profile in Profile::ALL {
            assert_eq!(config.options_for(profile), profile.options());
        }
    }

    #[test]
    fn overrides_merge_over_preset() {
        let config = GateConfig::from_json(
            r#"{"profiles": {"narrative": {"min_words": 80}, "world": {"check_completeness": false}}}"#,
        )
        .unwrap();

        let narrative = config.options_for(Profile::Narrative);
        assert_eq!(narrative.min_words, 80);
        assert_eq!(narrative.max_words, 400);

        let world = config.options_for(Profile::World);
        assert!(!world.check_completeness);
        assert!(world.check_refusal);

        assert_eq!(config.options_for(Profile::Generic), Profile::Generic.options());
        // Presets are untouched.
        assert_eq!(Profile::Narrative.options().min_words, 100);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = GateConfig::from_json(r#"{"profiles": {"choice": {"min_words": 30}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::InvalidBounds {
                min_words: 30,
                max_words: 20,
                ..
            }
        ));
        assert!(err.to_string().contains("choice"));
    }

    #[test]
    fn choice_toggles_rejected() {
        let err = GateConfig::from_json(r#"{"profiles": {"choice": {"check_refusal": true}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::UnsupportedOverride {
                field: "check_refusal",
                ..
            }
        ));

        let err =
            GateConfig::from_json(r#"{"profiles": {"choice": {"check_completeness": false}}}"#)
                .unwrap_err();
        assert!(err.to_string().contains("choice"));
        assert!(err.to_string().contains("check_completeness"));
    }

    #[test]
    fn choice_bounds_still_overridable() {
        let config =
            GateConfig::from_json(r#"{"profiles": {"choice": {"min_words": 1, "max_words": 5}}}"#)
                .unwrap();
        let opts = config.options_for(Profile::Choice);
        assert_eq!((opts.min_words, opts.max_words), (1, 5));
    }

    #[test]
    fn unknown_profile_rejected() {
        let err = GateConfig::from_json(r#"{"profiles": {"epic": {}}}"#).unwrap_err();
        assert!(matches!(err, GateError::ConfigParse(_)));
    }

    #[test]
    fn unknown_field_rejected() {
        let err =
            GateConfig::from_json(r#"{"profiles": {"world": {"max_word": 9}}}"#).unwrap_err();
        assert!(matches!(err, GateError::ConfigParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gate.json");
        fs::write(&path, r#"{"profiles": {"choice": {"max_words": 30}}}"#).unwrap();

        let config = GateConfig::load(&path).unwrap();
        assert_eq!(config.options_for(Profile::Choice).max_words, 30);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let err = GateConfig::load(&path).unwrap_err();
        assert!(matches!(err, GateError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
