use serde::{Deserialize, Serialize};

/// A display configuration: the local identifiers merged with whatever the
/// directory service returned.
///
/// This is at once the payload of the SetConfiguration event and the record
/// persisted under the `"config"` cache key, so cached and live
/// configurations stay interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dwell time per property, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Resync period, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u64>,
}

impl Configuration {
    /// A configuration carrying only the local identifiers.
    pub fn identifiers(branch_id: Option<u64>, tv_id: Option<String>) -> Self {
        Self {
            branch_id,
            tv_id,
            ..Self::default()
        }
    }

    /// Overlay `remote` on top of `self`. Remote fields win on collision;
    /// fields the remote left out keep their local value.
    pub fn merge(mut self, remote: Self) -> Self {
        if remote.branch_id.is_some() {
            self.branch_id = remote.branch_id;
        }
        if remote.tv_id.is_some() {
            self.tv_id = remote.tv_id;
        }
        if remote.name.is_some() {
            self.name = remote.name;
        }
        if remote.duration.is_some() {
            self.duration = remote.duration;
        }
        if remote.refresh.is_some() {
            self.refresh = remote.refresh;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_prefers_remote_fields() {
        let local = Configuration::identifiers(Some(1), Some("abc".into()));
        let remote = Configuration {
            name: Some("Lobby".into()),
            duration: Some(7),
            ..Configuration::default()
        };

        let merged = local.merge(remote);

        assert_eq!(merged.branch_id, Some(1));
        assert_eq!(merged.tv_id.as_deref(), Some("abc"));
        assert_eq!(merged.name.as_deref(), Some("Lobby"));
        assert_eq!(merged.duration, Some(7));
        assert_eq!(merged.refresh, None);
    }

    #[test]
    fn merge_lets_remote_override_identifiers() {
        let local = Configuration::identifiers(Some(1), Some("abc".into()));
        let remote = Configuration {
            branch_id: Some(2),
            ..Configuration::default()
        };

        let merged = local.merge(remote);
        assert_eq!(merged.branch_id, Some(2));
        assert_eq!(merged.tv_id.as_deref(), Some("abc"));
    }
}
