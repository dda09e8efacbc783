//! Declarative macros for generating CLI, execute and output tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macro generate the actual test code. Invoking modules must import
//! `rstest::rstest`, and for CLI tests also `crate::cli::Args` and
//! `clap::Parser`.

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["mytools", $cmd, $($req_arg),*]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    $(
                        assert_eq!(cmd.$def_field, $def_expected,
                            concat!("Default value mismatch for field: ", stringify!($def_field)));
                    )*
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "mytools",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "query",
///     test_name: test_query_requires_statement,
///     required_arg: "<STATEMENT>",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["mytools", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: "between",
///     test_name: test_between_rejects_day_zero,
///     args: ["0", "10"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "mytools",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a test that executes a command against a `RunContext` fixture.
///
/// # Example
/// ```ignore
/// execute_test! {
///     test_name: test_query_returns_rows,
///     fixture: scripted_ctx,
///     cmd: QueryCmd { statement: "SELECT 1".to_string(), strict: false },
///     assertions: |result| {
///         assert_eq!(result.table.row_count(), 1);
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::commands::RunContext) {
            use crate::commands::Execute;
            let $result = $cmd.execute(&$fixture).expect("Execute should succeed");
            $body
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies output matches an expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: march_to_february,
///     fixture_type: MonthResult,
///     assertions: {
///         "month": "02",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
