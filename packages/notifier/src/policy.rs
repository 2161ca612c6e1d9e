//! When to notify, and how caller-supplied settings are cleaned.
//!
//! A CI job can ask to be notified only when a build fails or recovers.
//! Settings forms commonly submit `""`, `(Default)` or `(System Default)` for
//! "not set"; those fall back to the global default.

use clap::ValueEnum;

/// Values meaning "not set" in a settings form
const UNSET_MARKERS: [&str; 3] = ["", "(Default)", "(System Default)"];

/// Outcome of a CI build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildResult {
    Success,
    Unstable,
    Failure,
    #[value(alias = "not_built")]
    NotBuilt,
    Aborted,
}

impl BuildResult {
    /// A failed or unstable build, or a success right after a non-success.
    ///
    /// A first build (no previous result) that succeeds is not a recovery.
    pub fn is_failure_or_recovery(self, previous: Option<BuildResult>) -> bool {
        match self {
            BuildResult::Failure | BuildResult::Unstable => true,
            BuildResult::Success => previous.is_some_and(|p| p != BuildResult::Success),
            BuildResult::NotBuilt | BuildResult::Aborted => false,
        }
    }
}

/// Notification gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyPolicy {
    pub only_on_failure_or_recovery: bool,
}

impl NotifyPolicy {
    /// Use the local setting when present, the global default otherwise.
    pub fn resolve(local: Option<bool>, global_default: bool) -> Self {
        Self {
            only_on_failure_or_recovery: local.unwrap_or(global_default),
        }
    }

    /// Whether a build with `result` (after `previous`) should be announced.
    ///
    /// Without a build result there is nothing to filter on, so the message is sent.
    pub fn should_notify(&self, result: Option<BuildResult>, previous: Option<BuildResult>) -> bool {
        if !self.only_on_failure_or_recovery {
            return true;
        }
        match result {
            Some(result) => result.is_failure_or_recovery(previous),
            None => true,
        }
    }
}

/// `None` for unset markers, the value otherwise.
pub fn clean_setting(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !UNSET_MARKERS.contains(v))
}

/// Parse a boolean setting; unset markers yield `None`.
///
/// Anything other than `true` (case-insensitive) is `false`.
pub fn clean_flag(value: Option<&str>) -> Option<bool> {
    clean_setting(value).map(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_and_unstable_always_notify() {
        // テスト項目: 失敗・不安定ビルドは前回の結果に関係なく通知対象
        for previous in [None, Some(BuildResult::Success), Some(BuildResult::Failure)] {
            assert!(BuildResult::Failure.is_failure_or_recovery(previous));
            assert!(BuildResult::Unstable.is_failure_or_recovery(previous));
        }
    }

    #[test]
    fn test_success_after_failure_is_recovery() {
        // テスト項目: 成功ビルドは前回が成功以外の場合のみ通知対象（復旧）
        assert!(BuildResult::Success.is_failure_or_recovery(Some(BuildResult::Failure)));
        assert!(BuildResult::Success.is_failure_or_recovery(Some(BuildResult::Aborted)));
        assert!(!BuildResult::Success.is_failure_or_recovery(Some(BuildResult::Success)));
        assert!(!BuildResult::Success.is_failure_or_recovery(None));
    }

    #[test]
    fn test_aborted_and_not_built_are_never_notified() {
        // テスト項目: 中断・未ビルドは通知対象外
        assert!(!BuildResult::Aborted.is_failure_or_recovery(Some(BuildResult::Failure)));
        assert!(!BuildResult::NotBuilt.is_failure_or_recovery(None));
    }

    #[test]
    fn test_policy_off_notifies_everything() {
        // テスト項目: ゲート無効時は常に通知する
        // given (前提条件):
        let policy = NotifyPolicy::resolve(None, false);

        // then (期待する結果):
        assert!(policy.should_notify(Some(BuildResult::Success), Some(BuildResult::Success)));
        assert!(policy.should_notify(None, None));
    }

    #[test]
    fn test_policy_local_setting_overrides_global() {
        // テスト項目: ローカル設定がある場合はグローバル既定値より優先される
        // when (操作):
        let on = NotifyPolicy::resolve(Some(true), false);
        let off = NotifyPolicy::resolve(Some(false), true);
        let inherited = NotifyPolicy::resolve(None, true);

        // then (期待する結果):
        assert!(!on.should_notify(Some(BuildResult::Success), Some(BuildResult::Success)));
        assert!(off.should_notify(Some(BuildResult::Success), Some(BuildResult::Success)));
        assert!(inherited.only_on_failure_or_recovery);
    }

    #[test]
    fn test_clean_setting_unset_markers() {
        // テスト項目: "", "(Default)", "(System Default)" は未設定として扱われる
        assert_eq!(clean_setting(Some("")), None);
        assert_eq!(clean_setting(Some("(Default)")), None);
        assert_eq!(clean_setting(Some("(System Default)")), None);
        assert_eq!(clean_setting(None), None);
        assert_eq!(clean_setting(Some("http://chat.local")), Some("http://chat.local"));
    }

    #[test]
    fn test_clean_flag() {
        // テスト項目: 真偽値設定の解釈
        assert_eq!(clean_flag(Some("true")), Some(true));
        assert_eq!(clean_flag(Some("TRUE")), Some(true));
        assert_eq!(clean_flag(Some("false")), Some(false));
        assert_eq!(clean_flag(Some("yes")), Some(false));
        assert_eq!(clean_flag(Some("(Default)")), None);
    }
}
