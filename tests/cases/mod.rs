#![allow(dead_code, unused_macros)]

use once_cell::sync::Lazy;

/// Declares an end-to-end test that compiles and runs `input`.
///
/// Successful cases give the expected `value` and optionally the expected
/// `bytecode` listing; failing cases give a pattern over `abacus::Error`.
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $(bytecode: $bytecode:expr,)?
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let input = $input;
            let evaluation = abacus::evaluate(input)
                .unwrap_or_else(|e| panic!("Failed to evaluate {:?}: {}", input, e));
            $(
                pretty_assertions::assert_eq!(
                    evaluation.program.to_string(),
                    $bytecode,
                    "bytecode for {:?}",
                    input
                );
            )?
            assert_eq!(evaluation.value, $value, "value of {:?}", input);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        error: $error:pat $(,)?
    ) => {
        #[test]
        fn $name() {
            let input = $input;
            match abacus::evaluate(input) {
                Err($error) => {}
                other => panic!(
                    "Expected {} for {:?}, got {:?}",
                    stringify!($error),
                    input,
                    other
                ),
            }
        }
    };
}

pub struct Scenario {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: Result<i64, &'static str>,
}

/// Reference inputs with their value or the diagnostic code they fail with.
pub static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            name: "precedence",
            input: "3 + 4 * 2",
            expected: Ok(11),
        },
        Scenario {
            name: "grouping",
            input: "(3 + 4) * 2",
            expected: Ok(14),
        },
        Scenario {
            name: "truncating_division",
            input: "10 / 3",
            expected: Ok(3),
        },
        Scenario {
            name: "left_associative_subtraction",
            input: "10 - 4 - 3",
            expected: Ok(3),
        },
        Scenario {
            name: "unclosed_parenthesis",
            input: "2 + (3",
            expected: Err("P002"),
        },
        Scenario {
            name: "juxtaposed_numbers",
            input: "2 3",
            expected: Err("P003"),
        },
        Scenario {
            name: "empty_input",
            input: "",
            expected: Err("P001"),
        },
        Scenario {
            name: "division_by_zero",
            input: "10 / 0",
            expected: Err("R001"),
        },
        Scenario {
            name: "unknown_character",
            input: "2 & 3",
            expected: Err("L001"),
        },
        Scenario {
            name: "literal_too_large",
            input: "99999999999999999999",
            expected: Err("P004"),
        },
    ]
});
