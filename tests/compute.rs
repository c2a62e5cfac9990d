#[cfg(test)]
mod compute_tests {
    use styleval::compute::*;
    use styleval::error::EvalError;
    use styleval::op::Op;
    use styleval::value::*;

    fn num(amount: f64) -> Value {
        Value::number(amount)
    }

    fn px(amount: f64) -> Value {
        Value::number_with_unit(amount, "px")
    }

    fn assert_number(value: &Value, expected_amount: f64, expected_unit: Option<&str>) {
        let Value::Number { amount, unit } = value else {
            panic!("expected a number, got {:?}", value);
        };

        assert_eq!(*amount, expected_amount);
        assert_eq!(unit.as_deref(), expected_unit);
    }

    #[test]
    fn test_number_add_number() {
        let result = compute(Op::Plus, &num(1.0), &num(2.5)).unwrap();
        assert_number(&result, 3.5, None);
    }

    #[test]
    fn test_number_add_is_commutative() {
        let a = px(3.0);
        let b = num(4.0);

        assert_eq!(
            compute(Op::Plus, &a, &b).unwrap(),
            compute(Op::Plus, &b, &a).unwrap()
        );
    }

    #[test]
    fn test_number_math_adopts_single_unit() {
        let result = compute(Op::Plus, &px(10.0), &num(5.0)).unwrap();
        assert_number(&result, 15.0, Some("px"));

        let result = compute(Op::Minus, &num(10.0), &px(4.0)).unwrap();
        assert_number(&result, 6.0, Some("px"));
    }

    #[test]
    fn test_number_math_keeps_equal_units() {
        let result = compute(Op::Mul, &px(6.0), &px(7.0)).unwrap();
        assert_number(&result, 42.0, Some("px"));
    }

    #[test]
    fn test_incompatible_units_are_an_error() {
        let result = compute(Op::Plus, &px(5.0), &Value::number_with_unit(5.0, "em"));

        assert_eq!(
            result,
            Err(EvalError::IncompatibleUnits {
                left_unit: "px".to_string(),
                right_unit: "em".to_string(),
            })
        );
    }

    #[test]
    fn test_number_division() {
        let result = compute(Op::Div, &px(12.0), &num(4.0)).unwrap();
        assert_number(&result, 3.0, Some("px"));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert_eq!(
            compute(Op::Div, &num(1.0), &num(0.0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_rgb_add_clamps_high() {
        let color = Value::RgbColor {
            r: 250,
            g: 250,
            b: 250,
        };

        let result = compute(Op::Plus, &color, &num(10.0)).unwrap();

        assert_eq!(
            result,
            Value::RgbColor {
                r: 255,
                g: 255,
                b: 255,
            }
        );
    }

    #[test]
    fn test_rgb_sub_clamps_low() {
        let color = Value::RgbColor { r: 5, g: 100, b: 0 };

        let result = compute(Op::Minus, &color, &num(20.0)).unwrap();

        assert_eq!(result, Value::RgbColor { r: 0, g: 80, b: 0 });
    }

    #[test]
    fn test_rgb_mul_and_div_scale_channels() {
        let color = Value::RgbColor {
            r: 10,
            g: 20,
            b: 200,
        };

        let scaled = compute(Op::Mul, &color, &num(2.0)).unwrap();
        assert_eq!(
            scaled,
            Value::RgbColor {
                r: 20,
                g: 40,
                b: 255,
            }
        );

        let divided = compute(Op::Div, &color, &num(2.0)).unwrap();
        assert_eq!(
            divided,
            Value::RgbColor {
                r: 5,
                g: 10,
                b: 100,
            }
        );
    }

    #[test]
    fn test_color_division_by_zero_is_an_error() {
        let color = Value::RgbColor {
            r: 10,
            g: 20,
            b: 30,
        };

        assert_eq!(
            compute(Op::Div, &color, &num(0.0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_hex_add_number() {
        let result = compute(Op::Plus, &Value::hex_color(0xff0000), &num(1.0)).unwrap();

        let Value::HexColor { hex } = result else {
            panic!("expected a hex color, got {:?}", result);
        };

        assert_eq!(unpack_hex(hex), (255, 1, 1));
    }

    #[test]
    fn test_number_add_hex_is_commutative() {
        let hex = Value::hex_color(0x102030);

        assert_eq!(
            compute(Op::Plus, &num(8.0), &hex).unwrap(),
            compute(Op::Plus, &hex, &num(8.0)).unwrap()
        );
    }

    #[test]
    fn test_number_minus_hex_is_unsupported() {
        let result = compute(Op::Minus, &num(1.0), &Value::hex_color(0xff0000));

        assert_eq!(
            result,
            Err(EvalError::UnsupportedOperandTypes {
                op: Op::Minus,
                left: ValueKind::Number,
                right: ValueKind::HexColor,
            })
        );
    }

    #[test]
    fn test_rgba_math_leaves_alpha_untouched() {
        let color = Value::RgbaColor {
            r: 100,
            g: 150,
            b: 200,
            a: 0.5,
        };

        let result = compute(Op::Plus, &color, &num(100.0)).unwrap();

        assert_eq!(
            result,
            Value::RgbaColor {
                r: 200,
                g: 250,
                b: 255,
                a: 0.5,
            }
        );
    }

    #[test]
    fn test_hex_plus_hex_is_unsupported() {
        let result = compute(
            Op::Plus,
            &Value::hex_color(0xff0000),
            &Value::hex_color(0x00ff00),
        );

        assert_eq!(
            result,
            Err(EvalError::UnsupportedOperandTypes {
                op: Op::Plus,
                left: ValueKind::HexColor,
                right: ValueKind::HexColor,
            })
        );
    }

    #[test]
    fn test_logical_ops_are_not_arithmetic() {
        let result = compute(Op::LogicalAnd, &Value::Boolean(true), &Value::Boolean(true));

        assert_eq!(
            result,
            Err(EvalError::UnsupportedOperandTypes {
                op: Op::LogicalAnd,
                left: ValueKind::Boolean,
                right: ValueKind::Boolean,
            })
        );
    }

    #[test]
    fn test_compute_boolean_and_or() {
        assert_eq!(
            compute_boolean(Op::LogicalAnd, &Value::Boolean(true), &Value::Boolean(false)),
            Ok(Value::Boolean(false))
        );

        assert_eq!(
            compute_boolean(Op::LogicalOr, &Value::Boolean(true), &Value::Boolean(false)),
            Ok(Value::Boolean(true))
        );
    }

    #[test]
    fn test_compute_boolean_rejects_non_booleans() {
        let result = compute_boolean(Op::LogicalAnd, &Value::Boolean(true), &num(1.0));

        assert_eq!(
            result,
            Err(EvalError::UnsupportedOperandTypes {
                op: Op::LogicalAnd,
                left: ValueKind::Boolean,
                right: ValueKind::Number,
            })
        );
    }

    #[test]
    fn test_is_constant_value_classification() {
        assert!(is_constant_value(&num(1.0)));
        assert!(is_constant_value(&Value::hex_color(0xabcdef)));
        assert!(is_constant_value(&Value::RgbColor { r: 0, g: 0, b: 0 }));
        assert!(is_constant_value(&Value::RgbaColor {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }));

        assert!(!is_constant_value(&Value::Boolean(true)));
        assert!(!is_constant_value(&Value::unquoted("12px/1.5")));
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(px(12.0).to_string(), "12px");
        assert_eq!(num(1.5).to_string(), "1.5");
        assert_eq!(Value::hex_color(0xff0000).to_string(), "#ff0000");
        assert_eq!(
            Value::RgbColor { r: 1, g: 2, b: 3 }.to_string(),
            "rgb(1, 2, 3)"
        );
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::unquoted("12px/1.5").to_string(), "12px/1.5");
    }
}
