use std::fmt;
use std::fs::Metadata;
use std::path::Path;

use crate::core::error::FsError;

/// Read/write/execute for one class of user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Access {
    fn from_bits(bits: u32) -> Self {
        Self {
            read: bits & 0o4 != 0,
            write: bits & 0o2 != 0,
            execute: bits & 0o1 != 0,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.read, 'r'),
            flag(self.write, 'w'),
            flag(self.execute, 'x')
        )
    }
}

/// The nine POSIX permission bits as booleans.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PermissionFlags {
    pub owner: Access,
    pub group: Access,
    pub other: Access,
}

impl PermissionFlags {
    pub fn from_mode(mode: u32) -> Self {
        Self {
            owner: Access::from_bits(mode >> 6),
            group: Access::from_bits(mode >> 3),
            other: Access::from_bits(mode),
        }
    }

    /// Approximation for hosts with only a read-only bit: everyone reads,
    /// everyone writes unless read-only, nobody executes.
    pub fn from_readonly(readonly: bool) -> Self {
        let access = Access {
            read: true,
            write: !readonly,
            execute: false,
        };
        Self {
            owner: access,
            group: access,
            other: access,
        }
    }

    /// `(label, access)` rows in owner, group, other order.
    pub fn classes(&self) -> [(&'static str, Access); 3] {
        [
            ("Owner", self.owner),
            ("Group", self.group),
            ("Others", self.other),
        ]
    }
}

impl fmt::Display for PermissionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.owner, self.group, self.other)
    }
}

/// Anything that can report permission flags for an entry.
pub trait PermissionSource {
    fn permission_flags(&self) -> PermissionFlags;
}

impl PermissionSource for Metadata {
    #[cfg(unix)]
    fn permission_flags(&self) -> PermissionFlags {
        use std::os::unix::fs::PermissionsExt;
        PermissionFlags::from_mode(self.permissions().mode())
    }

    #[cfg(not(unix))]
    fn permission_flags(&self) -> PermissionFlags {
        PermissionFlags::from_readonly(self.permissions().readonly())
    }
}

pub fn permissions(path: &Path) -> Result<PermissionFlags, FsError> {
    Ok(super::stat(path)?.permission_flags())
}
