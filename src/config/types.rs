//! Default values for the Config struct.

/// Build-environment specific options that must never be forced: toolchain
/// versions, signing keys, and paths that only exist on the vendor's builders.
pub fn default_excluded_options() -> Vec<String> {
    [
        "BLK_DEV_DM",
        "BLK_DEV_DM_BUILTIN",
        "PAHOLE_VERSION",
        "RUSTC_LLVM_VERSION",
        "RUSTC_VERSION",
        "GCC_VERSION",
        "LD_VERSION",
        "VERSION_SIGNATURE",
        "LOCALVERSION",
        "INITRAMFS_SOURCE",
        "SYSTEM_TRUSTED_KEYS",
        "SYSTEM_REVOCATION_KEYS",
        "MODULE_SIG_KEY",
        "SYSTEM_BLACKLIST_HASH_LIST",
        "EXTRA_FIRMWARE",
        "IPE_BOOT_POLICY",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Conflicts where the distribution's value should be kept.
pub fn default_baseline_preferred() -> Vec<String> {
    vec![
        "CONFIG_SECURITY_APPARMOR_RESTRICT_USERNS".to_string(),
        "CONFIG_SECURITY_YAMA".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_canonical_prefix() -> String {
    crate::kconfig::DEFAULT_PREFIX.to_string()
}
pub(crate) fn default_force_wrapper() -> String {
    "lib.mkForce".to_string()
}
pub(crate) fn default_title() -> String {
    "Generated kernel configuration overrides".to_string()
}
