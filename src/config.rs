use std::fmt;

use tracing::{debug, warn};

use crate::connection::{ConnectionStringBuilder, REDACTED};
use crate::env::{var_or, EnvSource, ProcessEnv};

pub const DB_USER_VAR: &str = "SUPERSET_DB_USER";
pub const DB_PASSWORD_VAR: &str = "SUPERSET_DB_PASSWORD";
pub const DB_HOST_VAR: &str = "SUPERSET_DB_HOST";
pub const DB_NAME_VAR: &str = "SUPERSET_DB_NAME";
pub const SECRET_KEY_VAR: &str = "SUPERSET_SECRET_KEY";

pub const DEFAULT_DB_USER: &str = "superset";
pub const DEFAULT_DB_PASSWORD: &str = "superset_password";
pub const DEFAULT_DB_HOST: &str = "superset-db";
pub const DEFAULT_DB_NAME: &str = "superset";

/// SQLAlchemy driver binding for PostgreSQL through psycopg2.
pub const DB_SCHEME: &str = "postgresql+psycopg2";
pub const DB_PORT: u16 = 5432;

fn builder() -> ConnectionStringBuilder {
    ConnectionStringBuilder::new(DB_SCHEME, DB_PORT)
}

/// Credentials and location of the metadata database.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub name: String,
}

impl DatabaseSettings {
    /// Reads the four database variables, substituting the built-in default
    /// for each one that is unset.
    pub fn resolve<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            user: var_or(env, DB_USER_VAR, DEFAULT_DB_USER),
            password: var_or(env, DB_PASSWORD_VAR, DEFAULT_DB_PASSWORD),
            host: var_or(env, DB_HOST_VAR, DEFAULT_DB_HOST),
            name: var_or(env, DB_NAME_VAR, DEFAULT_DB_NAME),
        }
    }

    pub fn connection_uri(&self) -> String {
        builder().build(&self.user, &self.password, &self.host, &self.name)
    }

    /// Connection URI with the password masked, safe to log.
    pub fn redacted_uri(&self) -> String {
        builder().build_redacted(&self.user, &self.host, &self.name)
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            host: DEFAULT_DB_HOST.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("host", &self.host)
            .field("name", &self.name)
            .finish()
    }
}

/// Opaque signing key handed to the host framework.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", REDACTED)
    }
}

/// The values exported to the host framework.
///
/// Built once at start-up and passed by reference to whatever needs it.
/// Field names follow the host's own setting names.
#[derive(Clone, PartialEq, Eq)]
pub struct SupersetConfig {
    pub database: DatabaseSettings,
    pub sqlalchemy_database_uri: String,
    pub secret_key: Option<SecretKey>,
}

impl SupersetConfig {
    pub fn from_env() -> Self {
        Self::resolve(&ProcessEnv)
    }

    /// Resolves every exported value from `env`. Never fails: unset database
    /// variables take their defaults and an unset secret key stays `None`.
    pub fn resolve<E: EnvSource + ?Sized>(env: &E) -> Self {
        let database = DatabaseSettings::resolve(env);
        let sqlalchemy_database_uri = database.connection_uri();
        debug!("Metadata database: {}", database.redacted_uri());

        let secret_key = env.get(SECRET_KEY_VAR).map(SecretKey::new);
        if secret_key.is_none() {
            warn!("{} is not set, exporting no secret key", SECRET_KEY_VAR);
        }

        Self {
            database,
            sqlalchemy_database_uri,
            secret_key,
        }
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_ref().map(SecretKey::expose)
    }
}

impl fmt::Debug for SupersetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupersetConfig")
            .field("database", &self.database)
            .field("sqlalchemy_database_uri", &self.database.redacted_uri())
            .field("secret_key", &self.secret_key)
            .finish()
    }
}
