//! Hero role rotation.
//!
//! The hero line cycles through a fixed list of roles. The component drives
//! the timing; this type only decides which role comes next.

#[cfg(test)]
#[path = "rotator_test.rs"]
mod rotator_test;

/// Split a comma-separated roles attribute, dropping blank entries.
#[must_use]
pub fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|role| !role.is_empty()).map(str::to_owned).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleRotator {
    roles: Vec<String>,
    next: usize,
}

impl RoleRotator {
    #[must_use]
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles, next: 0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Role to display on this cycle, advancing circularly.
    pub fn advance(&mut self) -> Option<&str> {
        if self.roles.is_empty() {
            return None;
        }
        let index = self.next;
        self.next = (self.next + 1) % self.roles.len();
        Some(self.roles[index].as_str())
    }
}
