//! Connection string assembly for the metadata database.

/// Placeholder shown instead of a password in redacted output.
pub const REDACTED: &str = "***";

/// Builds `<protocol>://<user>:<password>@<host>:<port>/<database>` strings.
///
/// Values are interpolated as-is. Nothing is escaped or validated; the
/// database driver is the one that rejects a malformed URI.
#[derive(Debug, Clone)]
pub struct ConnectionStringBuilder {
    protocol: String,
    port: u16,
}

impl ConnectionStringBuilder {
    pub fn new(protocol: &str, port: u16) -> Self {
        Self {
            protocol: protocol.to_string(),
            port,
        }
    }

    pub fn build(&self, user: &str, password: &str, host: &str, database: &str) -> String {
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.protocol, user, password, host, self.port, database
        )
    }

    /// Same as [`build`](Self::build) with the password masked.
    pub fn build_redacted(&self, user: &str, host: &str, database: &str) -> String {
        self.build(user, REDACTED, host, database)
    }
}
