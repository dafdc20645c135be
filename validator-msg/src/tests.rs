use crate::{ErrorDetail, ErrorDetails, Formatter, FormatterOptions, Schema};

/// Accepts only even integers, reporting like an external engine would.
fn even(value: &i64) -> Result<(), ErrorDetails> {
    if value % 2 == 0 {
        Ok(())
    } else {
        Err(ErrorDetail::new("\"Number\" must be even", Some(value.to_string())).into())
    }
}

fn star() -> Formatter {
    Formatter::new(FormatterOptions::new().bullet("*"))
}

mod engine_agnostic {
    use super::*;

    #[test]
    fn closures_are_schemas() {
        assert_eq!(even.check(&4), Ok(()));
        assert_eq!(even.check(&3).unwrap_err().len(), 1);
    }

    #[test]
    fn validate() {
        let formatter = star();

        assert_eq!(formatter.validate(&4, &even, "is odd."), "");
        assert_eq!(
            formatter.validate(&3, &even, "is odd."),
            "* \"3\" is odd. Number must be even"
        );
    }

    #[test]
    fn attempt_returns_value() {
        let formatter = star();

        let values = vec![2i64, 4, 6];
        let sum = |values: &Vec<i64>| -> Result<(), ErrorDetails> { even(&values.iter().sum()) };

        assert_eq!(
            formatter.attempt_valid(values, &sum, "", ""),
            Ok(vec![2, 4, 6])
        );
    }

    #[test]
    fn assert_without_title() {
        let err = star().assert_valid(&5, &even, "", "").unwrap_err();
        assert_eq!(err.message(), "* Number must be even");
    }
}

#[cfg(feature = "yaml")]
mod yaml {
    use super::*;
    use crate::yaml::utils::load_simple;
    use crate::yaml::{array, number, valid};

    #[test]
    fn validate() {
        let formatter = star();
        let schema = number().integer().required().label("Value");

        assert_eq!(formatter.validate(&load_simple("3"), &schema, ""), "");
        assert_eq!(
            formatter.validate(&load_simple("a"), &schema, "is wrong."),
            "* \"a\" is wrong. Value must be a number"
        );
    }

    #[test]
    fn validate_default_bullet() {
        assert_eq!(
            Formatter::default().validate(
                &load_simple("a"),
                &number().integer().required().label("Value"),
                "is wrong."
            ),
            "➤ \"a\" is wrong. Value must be a number"
        );
    }

    #[test]
    fn assert() {
        let schema = array()
            .min(1)
            .items(valid(vec!["A", "B", "C"]).label("Values"))
            .label("Values");

        let err = star()
            .assert_valid(
                &load_simple("[D, E]"),
                &schema,
                "isn't known.",
                "Error checking values!",
            )
            .unwrap_err();

        assert_eq!(
            err.message(),
            r#"Error checking values!
* "D" isn't known. Values must be one of [A, B, C]
* "E" isn't known. Values must be one of [A, B, C]"#
        );
    }

    #[test]
    fn assert_valid_passes() {
        star()
            .assert_valid(&load_simple("[A, C]"), &array().items(valid(vec!["A", "B", "C"])), "", "")
            .unwrap();
    }

    #[test]
    fn combine_checks() {
        let formatter = star();

        let err = formatter
            .combine_checks(
                "Error defining graph!",
                vec![
                    formatter.validate(
                        &load_simple("a"),
                        &number().integer().required().label("X coordinate"),
                        "",
                    ),
                    formatter.validate(
                        &load_simple("b"),
                        &number().integer().required().label("Y coordinate"),
                        "",
                    ),
                ],
            )
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Error defining graph!\n* X coordinate must be a number\n* Y coordinate must be a number"
        );
    }

    #[test]
    fn combine_checks_all_valid() {
        let formatter = star();
        let schema = number().integer();

        assert_eq!(
            formatter.combine_checks(
                "Error defining graph!",
                vec![
                    formatter.validate(&load_simple("1"), &schema, ""),
                    formatter.validate(&load_simple("2"), &schema, ""),
                ],
            ),
            Ok(())
        );
    }

    #[test]
    fn attempt() {
        let formatter = star();
        let schema = number().integer().required().label("Value");

        let x = formatter
            .attempt_valid(load_simple("3"), &schema, "is wrong.", "")
            .unwrap();
        assert_eq!(x.as_i64(), Some(3));

        let err = formatter
            .attempt_valid(load_simple("a"), &schema, "is wrong.", "")
            .unwrap_err();
        assert_eq!(err.message(), "* \"a\" is wrong. Value must be a number");
    }

    #[test]
    fn missing_value_is_undefined() {
        let schema = crate::yaml::object().key("x", number().required().label("X"));

        assert_eq!(
            star().validate(&load_simple("{}"), &schema, "is wrong."),
            "* \"undefined\" is wrong. X is required"
        );
    }

    #[test]
    fn schema_loaded_from_yaml() {
        use std::convert::TryFrom;

        let schema_yaml = load_simple(
            r#"
            type: object
            label: Graph
            keys:
              x:
                type: number
                integer: true
                required: true
                label: X coordinate
              y:
                type: number
                integer: true
                required: true
                label: Y coordinate
            "#,
        );
        let schema = crate::yaml::PropertyType::try_from(&schema_yaml).unwrap();

        assert_eq!(
            star().validate(&load_simple("{x: a, y: 1.5}"), &schema, ""),
            "* X coordinate must be a number\n* Y coordinate must be an integer"
        );
    }
}

/// The only test touching the process-wide formatter, so parallel tests
/// never observe each other's settings.
#[test]
fn process_wide_formatter() {
    let shout = |value: &i64| -> Result<(), ErrorDetails> {
        Err(ErrorDetail::new(format!("\"{}\" is odd", value), Some(value.to_string())).into())
    };

    assert_eq!(crate::formatter().bullet(), crate::DEFAULT_BULLET);

    crate::configure(
        FormatterOptions::new()
            .bullet("*")
            .color(|s: &str| format!("<{}>", s))
            .title_color(|s: &str| s.to_uppercase()),
    );

    assert_eq!(crate::validate(&2, &even, "is wrong."), "");
    assert_eq!(
        crate::validate(&3, &shout, "is wrong."),
        "<* \"3\" is wrong. 3 is odd>"
    );
    assert_eq!(
        crate::render_errors(&ErrorDetails::new(), ""),
        "<>"
    );
    assert_eq!(
        crate::assert_valid(&3, &even, "", "title").unwrap_err().message(),
        "TITLE\n<* Number must be even>"
    );
    assert_eq!(crate::attempt_valid(8i64, &even, "", "title"), Ok(8));
    assert_eq!(crate::combine_checks("title", vec!["", ""]), Ok(()));

    // later calls only replace what they name
    crate::configure(FormatterOptions::new().color(crate::Identity));
    assert_eq!(
        crate::combine_checks("title", vec![crate::validate(&3, &even, "")])
            .unwrap_err()
            .message(),
        "TITLE\n* Number must be even"
    );

    crate::configure(
        FormatterOptions::new()
            .bullet(crate::DEFAULT_BULLET)
            .title_color(crate::Identity),
    );
}
