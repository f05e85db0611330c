//! Privilege roles, ordered by capability.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role.
///
/// The declaration order *is* the privilege order: every capability
/// granted to `Client` is granted to `Admin` and `Superadmin`, and every
/// capability granted to `Admin` is granted to `Superadmin`. Authorization
/// checks compare roles instead of chaining per-role booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Role {
    #[default]
    Client,
    Admin,
    Superadmin,
}

impl Role {
    /// Whether this role carries at least the privilege of `minimum`.
    pub fn satisfies(self, minimum: Role) -> bool {
        self >= minimum
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Parse a role from its wire representation.
    ///
    /// Unknown or empty values degrade to `Client`: an identity with a
    /// role this client does not recognize must never gain privileges.
    pub fn parse(value: &str) -> Role {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "superadmin" | "super_admin" | "super-admin" => Role::Superadmin,
            _ => Role::Client,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privilege_order_is_total() {
        assert!(Role::Client < Role::Admin);
        assert!(Role::Admin < Role::Superadmin);
    }

    #[test]
    fn superadmin_satisfies_every_minimum() {
        for minimum in [Role::Client, Role::Admin, Role::Superadmin] {
            assert!(Role::Superadmin.satisfies(minimum));
        }
    }

    #[test]
    fn admin_does_not_satisfy_superadmin() {
        assert!(!Role::Admin.satisfies(Role::Superadmin));
    }

    #[test]
    fn unknown_wire_role_degrades_to_client() {
        assert_eq!(Role::parse("owner"), Role::Client);
        assert_eq!(Role::parse(""), Role::Client);
        let parsed: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(parsed, Role::Client);
    }

    #[test]
    fn wire_spellings_of_superadmin_are_accepted() {
        assert_eq!(Role::parse("superadmin"), Role::Superadmin);
        assert_eq!(Role::parse("super_admin"), Role::Superadmin);
        assert_eq!(Role::parse("SUPER-ADMIN"), Role::Superadmin);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
    }
}
