//! Domain identifier types with proper encapsulation.

use std::fmt;

/// On-chain application identifier - newtype for type safety.
///
/// Both the market program and every escrow are applications; this type
/// is the generic handle the transaction layer addresses calls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(u64);

impl AppId {
    /// Create a new AppId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw application id.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Standard asset identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u64);

impl AssetId {
    /// Create a new AssetId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw asset id.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Identifier of one resting escrow order.
///
/// An escrow is itself an application instance; the id doubles as the
/// application id the cancellation group must delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscrowId(u64);

impl EscrowId {
    /// Create a new EscrowId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw escrow application id.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EscrowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EscrowId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EscrowId> for AppId {
    fn from(escrow: EscrowId) -> Self {
        AppId::new(escrow.value())
    }
}

/// Account address in the network's string encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_roundtrip() {
        let id = AppId::new(2_726_898_516);
        assert_eq!(id.value(), 2_726_898_516);
        assert_eq!(format!("{id}"), "2726898516");
    }

    #[test]
    fn escrow_id_converts_to_app_id() {
        let escrow = EscrowId::new(42);
        let app: AppId = escrow.into();
        assert_eq!(app.value(), 42);
    }

    #[test]
    fn address_as_str() {
        let addr = Address::from("SENDER7XYZ");
        assert_eq!(addr.as_str(), "SENDER7XYZ");
    }
}
