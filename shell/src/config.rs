//! Session option flags toggled by `set`.

// ═══════════════════════════════════════════════════════════════════════════════
// SHELL FLAGS
// ═══════════════════════════════════════════════════════════════════════════════

bitflags::bitflags! {
    /// Desktop options read by the GUI launcher
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ShellFlags: u32 {
        /// Top bar is drawn (`topb`)
        const TOP_BAR = 1 << 0;
        /// Control bar is drawn (`ctrlb`)
        const CONTROL_BAR = 1 << 1;
    }
}

impl Default for ShellFlags {
    fn default() -> Self {
        ShellFlags::TOP_BAR | ShellFlags::CONTROL_BAR
    }
}

/// Map a `set` key to its flag.
pub fn flag_for_key(key: &str) -> Option<ShellFlags> {
    match key {
        "topb" => Some(ShellFlags::TOP_BAR),
        "ctrlb" => Some(ShellFlags::CONTROL_BAR),
        _ => None,
    }
}

/// Apply a `key=value` setting.
///
/// Returns `true` only when the setting was recognized and applied. Unknown
/// keys, missing `=`, and values other than exactly `true` or `false` leave
/// the flags untouched. Anything after a second `=` is dropped.
pub fn apply_setting(flags: &mut ShellFlags, setting: &str) -> bool {
    let mut parts = setting.split('=');
    let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
        return false;
    };
    let Some(flag) = flag_for_key(key) else {
        return false;
    };

    match value {
        "true" => flags.insert(flag),
        "false" => flags.remove(flag),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_both_bars() {
        let flags = ShellFlags::default();
        assert!(flags.contains(ShellFlags::TOP_BAR));
        assert!(flags.contains(ShellFlags::CONTROL_BAR));
    }

    #[test]
    fn test_toggle_known_keys() {
        let mut flags = ShellFlags::empty();
        assert!(apply_setting(&mut flags, "topb=true"));
        assert_eq!(flags, ShellFlags::TOP_BAR);
        assert!(apply_setting(&mut flags, "ctrlb=true"));
        assert!(apply_setting(&mut flags, "topb=false"));
        assert_eq!(flags, ShellFlags::CONTROL_BAR);
    }

    #[test]
    fn test_extra_fields_after_value_are_dropped() {
        let mut flags = ShellFlags::empty();
        assert!(apply_setting(&mut flags, "topb=true=x"));
        assert_eq!(flags, ShellFlags::TOP_BAR);
        assert!(!apply_setting(&mut flags, "ctrlb=x=true"));
        assert_eq!(flags, ShellFlags::TOP_BAR);
    }

    #[test]
    fn test_ignored_settings_leave_flags_alone() {
        for setting in [
            "topb=maybe",
            "topb=True",
            "topb=",
            "topb",
            "bogus=true",
            "=true",
            "ctrlb=FALSE",
        ] {
            let mut flags = ShellFlags::default();
            assert!(!apply_setting(&mut flags, setting), "{}", setting);
            assert_eq!(flags, ShellFlags::default(), "{}", setting);
        }
    }
}
