//! Host specifier parsing

/// Which host bridge the run command drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSpecifier {
    /// Newline-delimited JSON over stdin/stdout
    Stdio,
    /// Scripted in-process host
    Sim,
}

impl HostSpecifier {
    /// Parse an optional host argument, defaulting to stdio
    pub fn parse_optional(host: Option<&str>) -> Result<Self, String> {
        match host {
            None => Ok(Self::Stdio),
            Some(host) => Self::parse(host),
        }
    }

    /// Parse a host argument
    pub fn parse(host: &str) -> Result<Self, String> {
        match host {
            "stdio" => Ok(Self::Stdio),
            "sim" => Ok(Self::Sim),
            other => Err(format!("unknown host '{}' (expected 'stdio' or 'sim')", other)),
        }
    }
}
