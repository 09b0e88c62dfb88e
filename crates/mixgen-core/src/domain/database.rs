//! Database adapter registry.
//!
//! Each supported adapter is described exactly once by its [`AdapterDef`].
//! Everything adapter-specific — the driver dependency, the connection
//! defaults, the CI service image, which init script to emit — is a table
//! lookup here; no `match` arms on adapter names elsewhere.
//!
//! # Adding a New Adapter
//!
//! 1. Add one [`AdapterDef`] entry to [`ADAPTER_REGISTRY`]
//! 2. Register its init-script template in the template table
//! 3. That's it — the ecto generator and CLI help derive from the registry

/// Describes everything the engine needs to know about one database adapter.
#[derive(Debug, Clone, Copy)]
pub struct AdapterDef {
    /// The key accepted on the command line (`--db <key>`).
    pub key: &'static str,

    /// Hex package providing the driver.
    pub driver: &'static str,

    /// Version requirement for the driver dependency.
    pub driver_requirement: &'static str,

    /// Fully-qualified Ecto adapter module.
    pub adapter_module: &'static str,

    /// URL scheme used in DATABASE_URL.
    pub url_scheme: &'static str,

    /// Default development credentials (matches the stock server images).
    pub dev_username: &'static str,
    pub dev_password: &'static str,

    /// Container image used as the CI database service.
    pub ci_image: &'static str,

    /// Name of the database-init script template this adapter selects.
    pub init_script: &'static str,
}

/// Single source of truth for adapter capabilities.
pub static ADAPTER_REGISTRY: &[AdapterDef] = &[
    AdapterDef {
        key: "postgres",
        driver: "postgrex",
        driver_requirement: "~> 0.17",
        adapter_module: "Ecto.Adapters.Postgres",
        url_scheme: "postgres",
        dev_username: "postgres",
        dev_password: "postgres",
        ci_image: "postgres:16-alpine",
        init_script: "ci_init_postgres",
    },
    AdapterDef {
        key: "mysql",
        driver: "myxql",
        driver_requirement: "~> 0.6",
        adapter_module: "Ecto.Adapters.MyXQL",
        url_scheme: "mysql",
        dev_username: "root",
        dev_password: "",
        ci_image: "mysql:8.4",
        init_script: "ci_init_mysql",
    },
];

/// Find the definition for an adapter key.
///
/// Returns `None` for unknown keys — the caller (the ecto generator's
/// settings pass) turns that into a validation error.
pub fn find_adapter(key: &str) -> Option<&'static AdapterDef> {
    ADAPTER_REGISTRY.iter().find(|def| def.key == key)
}

/// All registered adapter keys, for error messages and CLI help.
pub fn adapter_keys() -> Vec<&'static str> {
    ADAPTER_REGISTRY.iter().map(|def| def.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keys_are_unique() {
        let keys = adapter_keys();
        for (i, key) in keys.iter().enumerate() {
            assert!(
                !keys[i + 1..].contains(key),
                "duplicate adapter key: {key}"
            );
        }
    }

    #[test]
    fn registry_init_scripts_are_distinct() {
        // Each adapter must select its own init script; a shared one would
        // break the mutual-exclusivity property of generated pipelines.
        let postgres = find_adapter("postgres").unwrap();
        let mysql = find_adapter("mysql").unwrap();
        assert_ne!(postgres.init_script, mysql.init_script);
        assert_ne!(postgres.driver, mysql.driver);
    }

    #[test]
    fn postgres_is_registered() {
        let def = find_adapter("postgres").unwrap();
        assert_eq!(def.driver, "postgrex");
        assert_eq!(def.url_scheme, "postgres");
    }

    #[test]
    fn mysql_is_registered() {
        let def = find_adapter("mysql").unwrap();
        assert_eq!(def.driver, "myxql");
        assert_eq!(def.adapter_module, "Ecto.Adapters.MyXQL");
    }

    #[test]
    fn unknown_key_finds_nothing() {
        assert!(find_adapter("oracle").is_none());
        assert!(find_adapter("").is_none());
        assert!(find_adapter("POSTGRES").is_none(), "keys are case-sensitive");
    }
}
