//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::maths::IMAGINARY_NOTATION;
    use crate::maths::complex::{
        ComplexNumber, compute_divide, compute_modulus, compute_product, imaginary_number,
    };
    use crate::maths::errors::MathsError;
    use crate::maths::expression::Expression;
    use crate::maths::operands::{
        Constant, MathsOperand, Operand, RandomConstant, RenderOptions, Variable,
    };
    use crate::maths::operators::Operator;
    use crate::maths::value::Value;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn latex(operand: &impl MathsOperand) -> String {
        operand.render(&mut RenderOptions::new()).unwrap().to_string()
    }

    fn ops(operands: &[&Operand]) -> Vec<Operand> {
        operands.iter().map(|o| (*o).clone()).collect()
    }

    #[test]
    fn test_operand_constant() {
        for i in 0..100 {
            let a = Constant::new(i);
            assert_eq!(a.render(&mut RenderOptions::new()).unwrap(), Value::Integer(i));
        }
    }

    #[test]
    fn test_operand_random_constant() {
        let a = RandomConstant::new(0, 9);
        let v = a.render(&mut RenderOptions::new()).unwrap();
        assert!((0..9).contains(&v.as_integer().unwrap()));
    }

    #[test]
    fn test_operand_variable() {
        assert_eq!(latex(&Variable::new("a")), "a");
    }

    #[test]
    fn test_operator_multiply() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut options = RenderOptions::with_random(&mut rng);
        let a: Operand = RandomConstant::new(1, 10).into();
        let b: Operand = RandomConstant::new(1, 10).into();
        let x: Operand = Variable::new("x").into();
        let y: Operand = Variable::new("y").into();

        // explicit multiplication
        let ab = Expression::from_operands(ops(&[&a, &b])).unwrap();
        let ab = ab.render(&mut options).unwrap().to_string();
        let a_val = a.render(&mut options).unwrap();
        let b_val = b.render(&mut options).unwrap();
        assert_eq!(ab, format!("{} \\times {}", a_val, b_val));

        // implicit multiplication
        let xy = Expression::from_operands(ops(&[&x, &y])).unwrap();
        assert_eq!(xy.render(&mut options).unwrap().to_string(), "xy");

        // implicit, with a single constant
        for n in [&a, &b] {
            let nxy = Expression::from_operands(ops(&[n, &x, &y])).unwrap();
            let expected = format!("{}xy", n.render(&mut options).unwrap());
            assert_eq!(nxy.render(&mut options).unwrap().to_string(), expected);
        }

        // implicit and explicit
        let abxy = Expression::from_operands(ops(&[&a, &b, &x, &y])).unwrap();
        assert_eq!(
            abxy.render(&mut options).unwrap().to_string(),
            format!("({} \\times {})xy", a_val, b_val)
        );
    }

    #[test]
    fn test_operator_divide() {
        let a: Operand = RandomConstant::new(1, 10).into();
        let b: Operand = RandomConstant::new(1, 10).into();
        let x: Operand = Variable::new("x").into();
        let y: Operand = Variable::new("y").into();
        let a_val = latex(&a);
        let b_val = latex(&b);

        let a_div_b = Expression::new(ops(&[&a, &b]), Operator::Divide).unwrap();
        assert_eq!(latex(&a_div_b), format!("\\frac{{ {} }}{{ {} }}", a_val, b_val));

        let a_div_x = Expression::new(ops(&[&a, &x]), Operator::Divide).unwrap();
        assert_eq!(latex(&a_div_x), format!("\\frac{{ {} }}{{ x }}", a_val));

        let x_div_y = Expression::new(ops(&[&x, &y]), Operator::Divide).unwrap();
        assert_eq!(latex(&x_div_y), r"\frac{ x }{ y }");

        let y_div_b = Expression::new(ops(&[&y, &b]), Operator::Divide).unwrap();
        assert_eq!(latex(&y_div_b), format!("\\frac{{ y }}{{ {} }}", b_val));

        let abxy = Expression::new(ops(&[&a, &b, &x, &y]), Operator::Divide).unwrap();
        assert_eq!(
            latex(&abxy),
            format!("{} \\div {} \\div x \\div y", a_val, b_val)
        );
    }

    #[test]
    fn test_operator_abs() {
        for i in 0..100 {
            let a = Expression::unary(Constant::new(i), Operator::Abs).unwrap();
            assert_eq!(latex(&a), format!("\\left|{} \\right|", i));
        }
    }

    #[test]
    fn test_operator_sqrt() {
        for i in 0..100 {
            let a = Expression::unary(Constant::new(i), Operator::Sqrt).unwrap();
            assert_eq!(latex(&a), format!("\\sqrt{{ {} }}", i));
        }
    }

    #[test]
    fn test_operator_add_and_subtract() {
        let nums: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let constants = || nums.iter().map(|n| Constant::new(n.as_str()));
        let sum = Expression::new(constants(), Operator::Add).unwrap();
        assert_eq!(latex(&sum), nums.join(" + "));
        let difference = Expression::new(constants(), Operator::Subtract).unwrap();
        assert_eq!(latex(&difference), nums.join(" - "));
    }

    #[test]
    fn test_bracket_placement() {
        let (a, b, c) = (Variable::new("a"), Variable::new("b"), Variable::new("c"));
        let b_minus_c =
            Expression::new([b.clone(), c.clone()], Operator::Subtract).unwrap();
        let sum = Expression::new(
            [Operand::from(a.clone()), b_minus_c.into()],
            Operator::Add,
        )
        .unwrap();
        assert_eq!(latex(&sum), "a + (b - c)");

        let a_plus_b = Expression::new([a.clone(), b.clone()], Operator::Add).unwrap();
        let chain = Expression::new(
            [Operand::from(a_plus_b), c.clone().into(), Variable::new("d").into()],
            Operator::Divide,
        )
        .unwrap();
        assert_eq!(latex(&chain), r"(a + b) \div c \div d");

        // abs is self-delimiting, never wrapped again
        let abs_z = Expression::unary(Variable::new("z"), Operator::Abs).unwrap();
        let two_abs_z =
            Expression::from_operands([Operand::from(Constant::new(2)), abs_z.clone().into()])
                .unwrap();
        assert_eq!(latex(&two_abs_z), r"2\left|z \right|");
        let sum_in_root = Expression::unary(
            Expression::new([a, b], Operator::Add).unwrap(),
            Operator::Sqrt,
        )
        .unwrap();
        let scaled = Expression::from_operands([
            Operand::from(Constant::new(3)),
            Constant::new(4).into(),
            sum_in_root.into(),
        ])
        .unwrap();
        assert_eq!(latex(&scaled), r"(3 \times 4)\sqrt{ a + b }");
    }

    #[test]
    fn test_rendering_is_idempotent_until_reset() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = RandomConstant::new(-50, 50);
        let e = Expression::from_operands([
            Operand::from(n.clone()),
            Variable::new("x").into(),
        ])
        .unwrap();
        let mut options = RenderOptions::with_random(&mut rng);
        let first = e.render(&mut options).unwrap();
        assert_eq!(e.render(&mut options).unwrap(), first);
        assert_eq!(e.render(&mut RenderOptions::new()).unwrap(), first);

        // each reset redraws the copy inside the tree; the seeded source soon gives a new value
        let mut redrawn = Vec::new();
        for _ in 0..20 {
            n.reset();
            assert!(!n.is_resolved());
            let rendered = e.render(&mut options).unwrap();
            assert!(n.is_resolved());
            assert_eq!(rendered.to_string(), format!("{}x", n.resolve(None).unwrap()));
            assert_eq!(e.render(&mut options).unwrap(), rendered);
            redrawn.push(rendered);
        }
        assert!(redrawn.iter().any(|rendered| *rendered != first));
    }

    #[test]
    fn test_render_format_by_name() {
        let x = Variable::new("x");
        let mut options = RenderOptions::new().format_named("LaTeX").unwrap();
        assert_eq!(x.render(&mut options).unwrap().to_string(), "x");
        assert!(matches!(
            RenderOptions::new().format_named("MathML"),
            Err(MathsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_imaginary_number() {
        for i in 0..100 {
            let a = imaginary_number(Constant::new(i)).unwrap();
            assert_eq!(latex(&a), format!("{}j", i));
        }
        let a = imaginary_number(Constant::new(8)).unwrap();
        let [Operand::Constant(im), Operand::Variable(unit)] = a.operands() else {
            panic!("expected a constant times the imaginary unit");
        };
        assert_eq!(im.value(), &Value::Integer(8));
        assert_eq!(unit.name(), IMAGINARY_NOTATION);
    }

    #[test]
    fn test_complex_number() {
        for a in 0..100 {
            for b in 0..100 {
                let z = ComplexNumber::from_parts(a, b).unwrap();
                assert_eq!(z.to_latex().unwrap(), format!("{} + {}j", a, b));
            }
        }
        let z = ComplexNumber::from_parts(3, -2).unwrap();
        assert_eq!(z.to_latex().unwrap(), "3 + -2j");
    }

    #[test]
    fn test_complex_number_parts_are_frozen() {
        let mut rng = StdRng::seed_from_u64(99);
        let re = RandomConstant::new(1, 11);
        let im = RandomConstant::new(1, 11);
        let mut options = RenderOptions::with_random(&mut rng);
        let z = ComplexNumber::with_options(re.clone(), im.clone(), &mut options).unwrap();
        let (re_value, im_value) = (z.re().clone(), z.im().clone());
        assert_eq!(re.render(&mut options).unwrap(), re_value);
        assert_eq!(
            z.to_latex().unwrap(),
            format!("{} + {}j", re_value, im_value)
        );
        re.reset();
        im.reset();
        assert_eq!(z.re(), &re_value);
        assert_eq!(z.im(), &im_value);
        let modulus = compute_modulus(&z).unwrap();
        let expected = re_value
            .squared()
            .unwrap()
            .try_add(&im_value.squared().unwrap())
            .unwrap();
        assert_eq!(latex(&modulus.operands()[0]), expected.to_string());
    }

    #[test]
    fn test_compute_modulus() {
        for a in 0..100 {
            for b in 0..100 {
                let z = ComplexNumber::from_parts(a, b).unwrap();
                let modulus = compute_modulus(&z).unwrap();
                assert_eq!(latex(&modulus), format!("\\sqrt{{ {} }}", a * a + b * b));
                assert_eq!(modulus.operator(), Operator::Sqrt);
                let Operand::Constant(squared) = &modulus.operands()[0] else {
                    panic!("expected a constant under the root");
                };
                assert_eq!(squared.value(), &Value::Integer(a * a + b * b));
            }
        }
    }

    #[test]
    fn test_compute_product() {
        let z = ComplexNumber::new(Constant::new(3), Constant::new(3)).unwrap();
        let w = ComplexNumber::new(Constant::new(2), Constant::new(1)).unwrap();
        let zw = compute_product(&[z, w]).unwrap();
        assert_eq!(zw.to_latex().unwrap(), "3 + 9j");
        assert_eq!(zw.re(), &Value::Integer(3));
        assert_eq!(zw.im(), &Value::Integer(9));
    }

    #[test]
    fn test_compute_product_folds_left() {
        let z = ComplexNumber::from_parts(1, 1).unwrap();
        let single = compute_product(std::slice::from_ref(&z)).unwrap();
        assert_eq!(single.to_latex().unwrap(), "1 + 1j");
        // (1 + j)^3 = -2 + 2j
        let cube = compute_product(&[z.clone(), z.clone(), z.clone()]).unwrap();
        assert_eq!(cube.to_latex().unwrap(), "-2 + 2j");
        assert_eq!(z.product(&[z.clone(), z.clone()]).unwrap().to_latex().unwrap(), "-2 + 2j");
        assert_eq!(compute_product(&[]).unwrap_err(), MathsError::EmptyProduct);
    }

    #[test]
    fn test_compute_product_matches_num_complex() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let (a, b, c, d): (i64, i64, i64, i64) = (
                rng.random_range(-20..20),
                rng.random_range(-20..20),
                rng.random_range(-20..20),
                rng.random_range(-20..20),
            );
            let zw = compute_product(&[
                ComplexNumber::from_parts(a, b).unwrap(),
                ComplexNumber::from_parts(c, d).unwrap(),
            ])
            .unwrap();
            let expected = Complex64::new(a as f64, b as f64) * Complex64::new(c as f64, d as f64);
            assert_eq!(zw.re().as_f64().unwrap(), expected.re);
            assert_eq!(zw.im().as_f64().unwrap(), expected.im);
        }
    }

    #[test]
    fn test_compute_divide() {
        let z = ComplexNumber::new(Constant::new(3), Constant::new(2)).unwrap();
        let w = ComplexNumber::new(Constant::new(1), Constant::new(-2)).unwrap();
        let z_div_w = compute_divide(&z, &w).unwrap();
        assert_eq!(z_div_w.to_latex().unwrap(), "-0.2 + 1.6j");
        assert_eq!(z.divide(&w).unwrap().re(), z_div_w.re());

        // tiny quotients use exponent notation
        let one = ComplexNumber::from_parts(1, 0).unwrap();
        let big = ComplexNumber::from_parts(100000, 0).unwrap();
        let tiny = compute_divide(&one, &big).unwrap();
        assert_eq!(tiny.to_latex().unwrap(), "1e-05 + 0.0j");
    }

    #[test]
    fn test_compute_divide_matches_num_complex() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..200 {
            let (a, b): (i64, i64) = (rng.random_range(-20..20), rng.random_range(-20..20));
            let (c, d): (i64, i64) = (rng.random_range(1..20), rng.random_range(-20..20));
            let q = compute_divide(
                &ComplexNumber::from_parts(a, b).unwrap(),
                &ComplexNumber::from_parts(c, d).unwrap(),
            )
            .unwrap();
            let expected = Complex64::new(a as f64, b as f64) / Complex64::new(c as f64, d as f64);
            assert_relative_eq!(q.re().as_f64().unwrap(), expected.re, epsilon = 1e-12);
            assert_relative_eq!(q.im().as_f64().unwrap(), expected.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_compute_divide_by_zero_is_undefined() {
        let z = ComplexNumber::from_parts(3, 2).unwrap();
        let zero = ComplexNumber::from_parts(0, 0).unwrap();
        assert!(matches!(
            compute_divide(&z, &zero),
            Err(MathsError::UndefinedArithmetic(_))
        ));
    }

    #[test]
    fn test_algebra_on_text_parts_fails() {
        let z = ComplexNumber::new(Variable::new("a"), Variable::new("b")).unwrap();
        assert_eq!(z.to_latex().unwrap(), "a + bj");
        assert!(matches!(compute_modulus(&z), Err(MathsError::NonNumeric(_))));
    }

    #[test]
    fn test_complex_number_as_operand() {
        let z = ComplexNumber::from_parts(1, 2).unwrap();
        let abs = Expression::unary(z, Operator::Abs).unwrap();
        assert_eq!(latex(&abs), r"\left|1 + 2j \right|");
        let w = ComplexNumber::from_parts(3, 4).unwrap();
        let scaled = Expression::from_operands([Operand::from(Constant::new(2)), w.into()]).unwrap();
        assert_eq!(latex(&scaled), "2(3 + 4j)");
    }
}
