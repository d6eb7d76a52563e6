//! Test fixtures and constants.

/// Complete release quadruple in `key.properties` form.
pub const RELEASE_PROPERTIES: &str = "\
storeFile=/keys/release.jks
keyAlias=prod
keyPassword=pw1
storePassword=pw2
";

/// Complete debug quadruple in `key.properties` form.
pub const DEBUG_PROPERTIES: &str = "\
storeFileDebug=debug.jks
keyAliasDebug=androiddebugkey
keyPasswordDebug=debugpass
storePasswordDebug=debugstore
";

/// CI environment with a full release quadruple.
pub const CI_ENV: &[(&str, &str)] = &[
    ("STORE_FILE", "/ci/key.jks"),
    ("KEY_ALIAS", "ci"),
    ("KEY_PASSWORD", "p"),
    ("STORE_PASSWORD", "q"),
];

/// Stand-in keystore contents; only existence and digest are checked.
pub const KEYSTORE_BYTES: &str = "not really a jks";
