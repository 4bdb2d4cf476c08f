//! # appdeploy-app
//!
//! Application use cases for deployment option handling.
//! This crate depends on `ports`, `domain`, and `shared`.

pub mod normalize_options;

/// Returns the app crate version.
#[must_use]
pub const fn app_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use normalize_options::{
    EMPTY_APP_LIST_WARNING, NormalizeOptionsDeps, NormalizeOptionsInput, NormalizedOptions,
    apply_environment_default, normalize_options,
};

#[cfg(test)]
mod tests {
    use super::*;
    use appdeploy_domain::domain_crate_version;
    use appdeploy_ports::ports_crate_version;
    use appdeploy_shared::shared_crate_version;

    #[test]
    fn app_crate_compiles() {
        let version = app_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn app_can_use_ports_domain_shared() {
        assert_eq!(app_crate_version(), ports_crate_version());
        assert_eq!(app_crate_version(), domain_crate_version());
        assert_eq!(app_crate_version(), shared_crate_version());
    }
}
