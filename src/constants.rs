//! Constants used throughout embody

/// Section banner titles, in the order they appear in generated files
pub mod sections {
    pub const INCLUDES: &str = "Includes";
    pub const DEFINES_AND_TYPES: &str = "Defines and Types";
    pub const EXPORTED_FUNCTION_DECLARATIONS: &str = "Exported Function Declarations";
    pub const STATIC_FUNCTION_DECLARATIONS: &str = "Static Function Declarations";
    pub const EXPORTED_FUNCTION_DEFINITIONS: &str = "Exported Function Definitions";
    pub const STATIC_FUNCTION_DEFINITIONS: &str = "Static Function Definitions";
    pub const TEST_GROUP_DEFINITION: &str = "Test Group Definition";
    pub const TEST_DEFINITIONS: &str = "Test Definitions";
}

/// Names under which the built-in templates are registered
pub mod templates {
    pub const PREAMBLE: &str = "preamble.c";
    pub const FAKE: &str = "fake.c";
    pub const TEST_MINIMAL: &str = "test_minimal.cpp";
    pub const TEST_FULL: &str = "test_full.cpp";
}

/// Output file naming
pub mod naming {
    pub const HEADER_EXTENSION: &str = ".h";
    pub const SOURCE_EXTENSION: &str = ".c";
    pub const TEST_EXTENSION: &str = "Test.cpp";
    pub const FAKE_PREFIX: &str = "Fake";
}

/// Storage-class prefix for static functions
pub const STATIC_KEYWORD: &str = "static";

/// Environment variable consulted for the author when `--author` is absent
pub const AUTHOR_ENV: &str = "EMBODY_AUTHOR";

/// Descriptor file extensions
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
