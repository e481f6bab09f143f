use std::env;

/// Environment variable the binary reads to override [`Config::coordinate_policy`]
pub const COORDINATE_POLICY_VAR: &str = "SPRITES_COORDINATE_POLICY";

/// How non-finite coordinates are treated when they reach a [`crate::SpriteRegistry`]
#[derive(Copy, Clone, Debug, PartialEq, Eq,
    strum_macros::EnumIter, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CoordinatePolicy {
    /// NaN and infinity flow through arithmetic untouched
    Propagate,
    /// Non-finite input, or a move that would overflow, is refused
    Reject
}

#[derive(Clone, Debug)]
pub struct Config {
    pub coordinate_policy: CoordinatePolicy
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coordinate_policy: CoordinatePolicy::Propagate
        }
    }
}

impl Config {
    /// Defaults, overridden by `SPRITES_COORDINATE_POLICY` when it is set
    pub fn from_env() -> Result<Self, strum::ParseError> {
        let mut config = Self::default();
        if let Ok(policy) = env::var(COORDINATE_POLICY_VAR) {
            config.coordinate_policy = policy.trim().parse()?;
        }

        Ok(config)
    }

    pub fn with_policy(mut self, coordinate_policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = coordinate_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn defaults_to_ieee_propagation() {
        assert_eq!(Config::default().coordinate_policy, CoordinatePolicy::Propagate);
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in CoordinatePolicy::iter() {
            let parsed: CoordinatePolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }

        assert_eq!("reject".parse::<CoordinatePolicy>().unwrap(), CoordinatePolicy::Reject);
        assert!("clamp".parse::<CoordinatePolicy>().is_err());
    }

    #[test]
    fn policy_names_ignore_case() {
        assert_eq!("Reject".parse::<CoordinatePolicy>().unwrap(), CoordinatePolicy::Reject);
        assert_eq!("PROPAGATE".parse::<CoordinatePolicy>().unwrap(), CoordinatePolicy::Propagate);
    }

    // Every case lives in one test since the variable is process-wide
    #[test]
    fn environment_overrides_defaults() {
        env::remove_var(COORDINATE_POLICY_VAR);
        assert_eq!(Config::from_env().unwrap().coordinate_policy, CoordinatePolicy::Propagate);

        env::set_var(COORDINATE_POLICY_VAR, "reject");
        assert_eq!(Config::from_env().unwrap().coordinate_policy, CoordinatePolicy::Reject);

        env::set_var(COORDINATE_POLICY_VAR, " Reject ");
        assert_eq!(Config::from_env().unwrap().coordinate_policy, CoordinatePolicy::Reject);

        env::set_var(COORDINATE_POLICY_VAR, "clamp");
        assert!(Config::from_env().is_err());

        env::remove_var(COORDINATE_POLICY_VAR);
    }
}
