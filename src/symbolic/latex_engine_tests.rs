use crate::nodes;
use crate::symbolic::latex_cas::{
    CasEngine, CasExpr, CasOperation, apart, cancel, collect, expand, factor, from_external,
    simplify, to_external,
};
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_expression::Expression;
use crate::symbolic::latex_format::NumberFormat;
use crate::symbolic::latex_macro::ToLatexVariable;
use crate::symbolic::latex_node::{LatexNode, Node};
use crate::symbolic::latex_operation::*;
use crate::symbolic::latex_overloading::LatexOps;
use crate::symbolic::latex_variable::{self, Variable};
use std::cell::RefCell;
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn hello_world() -> (Variable, Variable) {
        (
            Variable::new("H_{ello}", 3.25, "m"),
            Variable::new("W^{orld}", 5.63, "m"),
        )
    }

    #[test]
    fn test_variable_display() {
        let (v1, _) = hello_world();
        assert_eq!(v1.to_string(), r"H_{ello} = 3.25 \ \mathrm{m}");
        assert_eq!(v1.str_symbolic(), "{H_{ello}}");
        assert_eq!(v1.str_substituted(), "3.25");
    }

    #[test]
    fn test_expression_display() {
        let (v1, v2) = hello_world();
        let e1 = Expression::new("E_{xample}", &v1 + &v2, "m");
        assert_eq!(
            e1.to_string(),
            r"E_{xample} = {H_{ello}} + {W^{orld}} = 3.25 + 5.63 = 8.88 \ \mathrm{m}"
        );
        assert_eq!(e1.str_symbolic(), "{E_{xample}}");
        assert_eq!(e1.str_substituted(), "8.88");
        assert_relative_eq!(e1.result().unwrap(), 8.88, epsilon = 1e-12);
    }

    #[test]
    fn test_expression_around_variable_and_expression() {
        let a = Variable::new("a", 3.25, "m");
        let e = Expression::new("E", &a, "m");
        assert_eq!(e.to_string(), r"E = {a} = 3.25 = 3.25 \ \mathrm{m}");
        let g = Expression::new("G", &e, "m");
        assert_eq!(g.to_string(), r"G = {E} = 3.25 = 3.25 \ \mathrm{m}");
        assert_eq!(g.str_symbolic(), "{G}");
        a.set_value(4.5);
        assert_eq!(g.to_string(), r"G = {E} = 4.50 = 4.50 \ \mathrm{m}");

        // missing value is seen through both levels
        let q = Variable::symbolic("q");
        let inner = Expression::new("E", &q, "");
        let outer = Expression::new("G", &inner, "");
        assert!(inner.is_symbolic());
        assert!(outer.is_symbolic());
        assert_eq!(outer.to_string(), "G = {E}");
        assert_eq!(outer.str_substituted(), "{G}");
        q.set_value(2.0);
        assert!(!outer.is_symbolic());
        assert_eq!(outer.to_string(), r"G = {E} = 2.00 = 2.00 \ \mathrm{}");
        assert_relative_eq!(outer.result().unwrap(), 2.0);
    }

    #[test]
    fn test_variable_with_exponent() {
        let v3 = Variable::new("F", 4.34, "kN").with_exponent(-2);
        assert_eq!(v3.to_string(), r"F = { 434.00 \cdot 10^{-2} } \ \mathrm{kN}");
        let v4 = Variable::new("F", -4.34, "kN").with_exponent(-2);
        assert_eq!(
            v4.str_result(None, None).unwrap(),
            r"\left( -434.00 \cdot 10^{-2} \right)"
        );
    }

    #[test]
    fn test_value_filled_later() {
        let v8 = Variable::new("F", None, "kN");
        assert_eq!(v8.to_string(), "F");
        assert!(v8.is_symbolic());
        v8.set_value(2.34);
        assert_eq!(v8.to_string(), r"F = 2.34 \ \mathrm{kN}");
        assert!(!v8.is_symbolic());
    }

    #[test]
    fn test_negative_value_brackets() {
        let x = Variable::new("x", -2.0, "");
        assert_eq!(x.str_substituted(), r"\left( -2.00 \right)");
        let o = &x + 1_i32;
        assert_eq!(o.str_substituted(), r"\left( -2.00 \right) + 1");
        assert_eq!(o.str_result(None, None).unwrap(), r"\left( -1.00 \right)");
    }

    #[test]
    fn test_format_and_exponent_override() {
        let v = Variable::new("a", 3.25, "m");
        assert_eq!(
            v.str_result(Some(&NumberFormat::fixed(4)), None).unwrap(),
            "3.2500"
        );
        let big = Variable::new("b", 1250.0, "");
        assert_eq!(
            big.str_result(None, Some(3)).unwrap(),
            r"{ 1.25 \cdot 10^{3} }"
        );
        let v = v.with_format("%.3f").unwrap();
        assert_eq!(v.str_substituted(), "3.250");
        assert!(Variable::new("b", 1.0, "").with_format("%.2f %d").is_err());
    }

    #[test]
    fn test_symbolic_propagation() {
        let a = Variable::new("a", 3.0, "");
        let q = Variable::symbolic("q");
        let o = &a + &q;
        assert!(o.is_symbolic());
        assert_eq!(o.str_substituted(), "3.00 + {q}");
        assert_eq!(o.to_string(), "{a} + {q} = 3.00 + {q}");
        match o.result() {
            Err(LatexExprError::SymbolicResult { name }) => assert_eq!(name, "q"),
            other => panic!("unexpected {:?}", other),
        }
        let e = Expression::new("E", sqrt(o), "");
        assert_eq!(e.to_string(), r"E = \sqrt{ {a} + {q} }");
        assert_eq!(e.str_substituted(), "{E}");
        q.set_value(6.0);
        assert!(!e.is_symbolic());
        assert_relative_eq!(e.result().unwrap(), 3.0);
        assert_eq!(
            e.to_string(),
            r"E = \sqrt{ {a} + {q} } = \sqrt{ 3.00 + 6.00 } = 3.00 \ \mathrm{}"
        );
    }

    #[test]
    fn test_shared_leaf_propagation() {
        let f = Variable::new("f", 1.0, "");
        let a = &f + 1_i32;
        let b = &f * 3_i32;
        assert_relative_eq!(a.result().unwrap(), 2.0);
        assert_relative_eq!(b.result().unwrap(), 3.0);
        f.set_value(2.0);
        assert_relative_eq!(a.result().unwrap(), 3.0);
        assert_relative_eq!(b.result().unwrap(), 6.0);
        // clones are handles of the same value
        let g = f.clone();
        g.set_value(5.0);
        assert_relative_eq!(a.result().unwrap(), 6.0);
        // hard copies are not
        let h = f.deep_copy();
        h.set_value(100.0);
        assert_relative_eq!(a.result().unwrap(), 6.0);
        assert!(!h.shares_data_with(&f));
        assert!(g.shares_data_with(&f));
    }

    #[test]
    fn test_to_variable_round_trip() {
        let (v1, v2) = hello_world();
        let e1 = Expression::new("E_{xample}", &v1 * &v2, "m^2")
            .with_format("%.3f")
            .unwrap();
        let v = e1.to_variable(None).unwrap();
        assert_relative_eq!(v.result().unwrap(), e1.result().unwrap());
        assert_eq!(v.name(), "E_{xample}");
        assert_eq!(v.unit(), "m^2");
        assert_eq!(v.number_format().pattern(), "%.3f");
        let renamed = Node::from(&e1).to_variable(Some("S")).unwrap();
        assert_eq!(renamed.name(), "S");
        // snapshot: later changes do not propagate
        v1.set_value(1.0);
        assert_relative_eq!(v.result().unwrap(), 3.25 * 5.63);
        assert!(sqr(Variable::symbolic("z")).to_variable(None).is_err());
    }

    #[test]
    fn test_arity_errors() {
        let a = Variable::new("a", 1.0, "");
        let b = Variable::new("b", 2.0, "");
        let c = Variable::new("c", 3.0, "");
        assert!(matches!(
            Operation::from_key("-", nodes![&a]),
            Err(LatexExprError::WrongArity { got: 1, .. })
        ));
        assert!(matches!(
            Operation::from_key("-", nodes![&a, &b, &c]),
            Err(LatexExprError::WrongArity { got: 3, .. })
        ));
        assert!(matches!(
            Operation::from_key("sin", nodes![&a, &b]),
            Err(LatexExprError::WrongArity { .. })
        ));
        assert!(matches!(
            sum(nodes![&a]),
            Err(LatexExprError::WrongArity { .. })
        ));
        assert!(sum(nodes![&a, &b, &c]).is_ok());
        assert!(Operation::from_key("-", nodes![&a, &b]).is_ok());
    }

    #[test]
    fn test_unsupported_kind() {
        let a = Variable::new("a", 1.0, "");
        match Operation::from_key("%", nodes![&a, 2]) {
            Err(LatexExprError::UnsupportedOperation { kind, supported }) => {
                assert_eq!(kind, "%");
                assert!(supported.contains("'sqrt'"));
                assert!(supported.contains("'<>'"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bracket_keys() {
        assert_eq!(OperationKind::CBrackets.to_string(), "{}");
        assert_eq!(OperationKind::from_key("{}").unwrap(), OperationKind::CBrackets);
        assert_eq!(OperationKind::from_key("[]").unwrap(), OperationKind::SBrackets);
        assert!(OperationKind::supported_keys().contains("'{}'"));
        let x = Variable::new("x", 2.0, "");
        let o = Operation::from_key("{}", nodes![&x]).unwrap();
        assert_eq!(o.kind(), OperationKind::CBrackets);
    }

    #[test]
    fn test_all_kinds_sweep() {
        let x = Variable::new("x", 2.0, "");
        let y = Variable::new("y", 3.0, "");
        for kind in OperationKind::iter() {
            let args = match kind.arity() {
                Arity::Unary => nodes![&x],
                Arity::Binary | Arity::Nary => nodes![&x, &y],
            };
            let o = Operation::new(kind, args).unwrap();
            assert_eq!(OperationKind::from_key(&kind.to_string()).unwrap(), kind);
            assert_eq!(o.to_string(), format!("{} = {}", o.str_symbolic(), o.str_substituted()));
            assert!(o.str_symbolic().contains("{x}"), "{:?}", kind);
            assert!(o.str_substituted().contains("2.00"), "{:?}", kind);
            assert!(!o.is_symbolic());
            assert!(o.result().unwrap().is_finite(), "{:?}", kind);
        }
    }

    #[test]
    fn test_evaluation_table() {
        let x = Variable::new("x", 8.0, "");
        let three = || Node::from(3_i32);
        assert_relative_eq!(root(three(), &x).result().unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(log(2, &x).result().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(log10(100).result().unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(div(&x, three()).result().unwrap(), 8.0 / 3.0);
        assert_relative_eq!(
            div(&x, three()).result().unwrap(),
            div2(&x, three()).result().unwrap()
        );
        assert_relative_eq!(pow(&x, 2).result().unwrap(), 64.0);
        assert_relative_eq!(neg(&x).result().unwrap(), -8.0);
        assert_relative_eq!(
            max(nodes![&x, 3, 11.5]).unwrap().result().unwrap(),
            11.5
        );
        assert_relative_eq!(min(nodes![&x, 3, 11.5]).unwrap().result().unwrap(), 3.0);
        assert_relative_eq!(exp(0).result().unwrap(), 1.0);
        assert_relative_eq!(ln(latex_variable::e()).result().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cos(latex_variable::pi()).result().unwrap(), -1.0, epsilon = 1e-12);
        // no special casing of float domain errors
        assert!(div(&x, 0).result().unwrap().is_infinite());
        assert!(sqrt(-1).result().unwrap().is_nan());
    }

    #[test]
    fn test_emission_table() {
        let a = Variable::new("a", 1.5, "");
        let b = Variable::new("b", 2.0, "");
        assert_eq!(div(&a, &b).str_symbolic(), r"\frac{ {a} }{ {b} }");
        assert_eq!(div2(&a, &b).str_symbolic(), "{a} / {b}");
        assert_eq!(pow(&a, &b).str_symbolic(), "{ {a} }^{ {b} }");
        assert_eq!(root(&a, &b).str_symbolic(), r"\sqrt[ {a} ]{ {b} }");
        assert_eq!(log(&a, &b).str_symbolic(), r"\log_{ {a} }{ {b} }");
        assert_eq!(
            max(nodes![&a, &b]).unwrap().str_symbolic(),
            r"\max{\left( {a}, {b} \right)}"
        );
        assert_eq!(neg(&a).str_substituted(), r"\left( - 1.50 \right)");
        assert_eq!(abs(&a).str_symbolic(), r"\left| {a} \right|");
        assert_eq!(sqr(&a).str_symbolic(), "{a}^2");
        assert_eq!(exp(&a).str_symbolic(), r"\mathrm{e}^{ {a} }");
        assert_eq!(log10(&a).str_symbolic(), r"\log_{10}{ {a} }");
        assert_eq!(tanh(&a).str_symbolic(), r"\tanh{ {a} }");
        assert_eq!(brackets(&a).str_symbolic(), r"\left( {a} \right)");
        assert_eq!(sbrackets(&a).str_symbolic(), r"\left[ {a} \right]");
        assert_eq!(cbrackets(&a).str_symbolic(), r"\left\{ {a} \right\}");
        assert_eq!(
            abrackets(&a).str_symbolic(),
            r"\left\langle {a} \right\rangle"
        );
        assert_eq!(none(&a).str_symbolic(), "{a}");
        assert_eq!(pos(&a).str_symbolic(), "{a}");
        assert_eq!(
            (&a - &b).to_string(),
            r"{a} - {b} = 1.50 - 2.00"
        );
    }

    #[test]
    fn test_literals_and_overloading() {
        let a = Variable::new("a", 3.0, "");
        let b = Variable::new("b", 4.0, "");
        let k: f64 = 2.5;
        assert_eq!((&a + 2_i32).str_symbolic(), "{a} + {2}");
        assert_eq!((&a + 2_i32).str_substituted(), "3.00 + 2");
        assert_eq!((k * &a).str_symbolic(), r"{2.5} \cdot {a}");
        // tiny and huge literals keep plain digits
        let small = &a * 1e-7;
        assert_eq!(small.str_symbolic(), r"{a} \cdot {0.0000001}");
        assert_eq!(small.str_substituted(), r"3.00 \cdot 0.0000001");
        assert_eq!(Node::from(2e20).str_symbolic(), "{200000000000000000000}");
        assert_eq!(Node::from(-1.5e-6).str_substituted(), r"\left( -0.0000015 \right)");
        assert_eq!((1_i32 - &a).str_substituted(), "1 - 3.00");
        assert_eq!((-&a).str_symbolic(), r"\left( - {a} \right)");
        assert_eq!((&a / &b).str_symbolic(), r"\frac{ {a} }{ {b} }");
        assert_eq!((&a).div2(&b).str_symbolic(), "{a} / {b}");
        assert_eq!((&a).pow(2_i32).str_symbolic(), "{ {a} }^{ {2} }");
        // Pythagoras
        let c = Expression::new("c", ((&a).sqr() + (&b).sqr()).sqrt(), "");
        assert_relative_eq!(c.result().unwrap(), 5.0);
        assert_eq!(c.operation().str_symbolic(), r"\sqrt{ {a}^2 + {b}^2 }");
        // expressions take part as named values
        let o = &c * 2_i32;
        assert_eq!(o.str_symbolic(), r"{c} \cdot {2}");
        assert_eq!(o.str_substituted(), r"5.00 \cdot 2");
        let mut n = Node::from(&a);
        n += 1_i32;
        n *= &b;
        assert_eq!(n.str_symbolic(), r"{a} + {1} \cdot {b}");
        assert_relative_eq!(n.result().unwrap(), 16.0);
        n -= 6_i32;
        n /= 2_i32;
        assert_relative_eq!(n.result().unwrap(), 5.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(latex_variable::zero().str_substituted(), "0");
        assert_eq!(latex_variable::one().str_symbolic(), "{1}");
        assert_eq!(latex_variable::two().str_substituted(), "2");
        assert_eq!(latex_variable::e().str_symbolic(), r"{\mathrm{e}}");
        assert_relative_eq!(latex_variable::pi().result().unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_latex_macros() {
        let v = Variable::new("a", 3.25, "m");
        assert_eq!(
            v.to_latex_variable_valunit("aV", "def").unwrap(),
            r"\def\aV{3.25 \ \mathrm{m}}"
        );
        assert_eq!(v.to_latex_variable_float("aF", "def").unwrap(), r"\def\aF{3.25}");
        assert_eq!(
            v.to_latex_variable_symb("aS", "newcommand").unwrap(),
            r"\newcommand{\aS}{{a}}"
        );
        let (v1, v2) = hello_world();
        let e1 = Expression::new("E", &v1 + &v2, "m");
        assert_eq!(
            e1.to_latex_variable("eq", "ALL", "renewcommand").unwrap(),
            r"\renewcommand{\eq}{E = {H_{ello}} + {W^{orld}} = 3.25 + 5.63 = 8.88 \ \mathrm{m}}"
        );
        assert_eq!(e1.to_latex_variable_str("es", "def").unwrap(), r"\def\es{8.88}");
        assert!(matches!(
            e1.to_latex_variable("x", "value", "def"),
            Err(LatexExprError::InvalidDisplaySelector { .. })
        ));
        assert!(matches!(
            e1.to_latex_variable("x", "str", "let"),
            Err(LatexExprError::InvalidMacroCommand { .. })
        ));
    }

    //______________________________CAS BRIDGE______________________________

    /// returns its input, records the requested operations
    struct EchoEngine {
        calls: RefCell<Vec<CasOperation>>,
    }
    impl EchoEngine {
        fn new() -> Self {
            EchoEngine {
                calls: RefCell::new(Vec::new()),
            }
        }
    }
    impl CasEngine for EchoEngine {
        fn apply(&self, operation: CasOperation, expr: &CasExpr) -> LatexResult<CasExpr> {
            self.calls.borrow_mut().push(operation);
            Ok(expr.clone())
        }
    }

    /// always answers with the same expression
    struct FixedEngine(CasExpr);
    impl CasEngine for FixedEngine {
        fn apply(&self, _operation: CasOperation, _expr: &CasExpr) -> LatexResult<CasExpr> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_to_external() {
        let a = Variable::new("a", 3.0, "");
        let b = Variable::new("b", 3.25, "");
        let q = Variable::symbolic("q");
        let (expr, table) = to_external(&Node::from(&a - &q), false).unwrap();
        assert_eq!(
            expr,
            CasExpr::Add(vec![CasExpr::symbol("a"), CasExpr::symbol("q").negated()])
        );
        assert_eq!(table.len(), 2);
        let (expr, _) = to_external(&Node::from(&a * &b + &q), true).unwrap();
        assert_eq!(
            expr,
            CasExpr::Add(vec![
                CasExpr::Mul(vec![CasExpr::Integer(3), CasExpr::Float(3.25)]),
                CasExpr::symbol("q")
            ])
        );
        let (expr, _) = to_external(&Node::from(sqrt(&q)), false).unwrap();
        assert_eq!(
            expr,
            CasExpr::Pow(CasExpr::symbol("q").boxed(), CasExpr::Rational(1, 2).boxed())
        );
        let (expr, _) = to_external(&Node::from(root(3, &q)), false).unwrap();
        assert_eq!(
            expr,
            CasExpr::Pow(
                CasExpr::symbol("q").boxed(),
                CasExpr::Integer(3).inverse().boxed()
            )
        );
        let (expr, _) = to_external(&Node::from(cosh(log10(&q))), false).unwrap();
        assert_eq!(
            expr,
            CasExpr::Cosh(
                CasExpr::Log(
                    CasExpr::symbol("q").boxed(),
                    Some(CasExpr::Integer(10).boxed())
                )
                .boxed()
            )
        );
        let (expr, _) = to_external(&Node::from(&q * latex_variable::pi()), false).unwrap();
        assert_eq!(expr, CasExpr::Mul(vec![CasExpr::symbol("q"), CasExpr::Pi]));
    }

    #[test]
    fn test_to_external_same_names() {
        let q1 = Variable::symbolic("q");
        let q2 = Variable::symbolic("q");
        let (expr, table) = to_external(&Node::from(&q1 + &q2 + &q1), false).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            expr,
            CasExpr::Add(vec![
                CasExpr::Add(vec![CasExpr::symbol("q"), CasExpr::symbol("q_1")]),
                CasExpr::symbol("q")
            ])
        );
    }

    #[test]
    fn test_max_min_fail_closed() {
        let a = Variable::new("a", 3.0, "");
        let o = max(nodes![&a, 2]).unwrap();
        assert!(matches!(
            to_external(&Node::from(o), false),
            Err(LatexExprError::CasTranslation(_))
        ));
    }

    #[test]
    fn test_from_external_extreme_integers() {
        let table = Default::default();
        let n = from_external(&CasExpr::Integer(i64::MIN), &table).unwrap();
        assert_eq!(n.str_symbolic(), "{-9223372036854775808}");
        assert_relative_eq!(n.result().unwrap(), i64::MIN as f64);
        let r = from_external(&CasExpr::Rational(i64::MIN, 2), &table).unwrap();
        assert_relative_eq!(r.result().unwrap(), i64::MIN as f64 / 2.0);
        let m = from_external(&CasExpr::Integer(-5), &table).unwrap();
        assert_eq!(m.str_symbolic(), r"\left( - {5} \right)");
    }

    #[test]
    fn test_from_external_forms() {
        let a = Variable::new("a", 3.0, "");
        let b = Variable::new("b", 2.0, "");
        let (_, table) = to_external(&Node::from(&a + &b), false).unwrap();
        let sa = || CasExpr::symbol("a");
        let sb = || CasExpr::symbol("b");
        let render = |e: CasExpr| from_external(&e, &table).unwrap().str_symbolic();
        assert_eq!(render(CasExpr::Add(vec![sa(), sb().negated()])), "{a} - {b}");
        assert_eq!(render(sa().negated()), r"\left( - {a} \right)");
        assert_eq!(render(sa().inverse()), r"\frac{ {1} }{ {a} }");
        assert_eq!(
            render(CasExpr::Pow(sa().boxed(), CasExpr::Rational(1, 2).boxed())),
            r"\sqrt{ {a} }"
        );
        assert_eq!(
            render(CasExpr::Mul(vec![sa(), CasExpr::Add(vec![sa(), sb()]).inverse()])),
            r"\frac{ {a} }{ \left( {a} + {b} \right) }"
        );
        assert_eq!(
            render(CasExpr::Mul(vec![CasExpr::Add(vec![sa(), sb()]), sb()])),
            r"\left( {a} + {b} \right) \cdot {b}"
        );
        assert_eq!(
            render(CasExpr::Mul(vec![CasExpr::Rational(1, 2), sa()])),
            r"\frac{ {a} }{ {2} }"
        );
        assert_eq!(
            render(CasExpr::Pow(
                CasExpr::Add(vec![sa(), sb()]).boxed(),
                CasExpr::Integer(2).boxed()
            )),
            r"{ \left( {a} + {b} \right) }^{ {2} }"
        );
        assert_eq!(render(CasExpr::Log(sa().boxed(), None)), r"\ln{ {a} }");
        assert_eq!(
            render(CasExpr::Log(sa().boxed(), Some(sb().boxed()))),
            r"\log_{ {b} }{ {a} }"
        );
        assert_eq!(
            render(CasExpr::Add(vec![sa(), CasExpr::Integer(-4)])),
            "{a} - {4}"
        );
        assert_eq!(render(CasExpr::Exp(CasExpr::E.boxed())), r"\mathrm{e}^{ {\mathrm{e}} }");
        match from_external(&CasExpr::symbol("zz"), &table) {
            Err(LatexExprError::UnknownSymbol(s)) => assert_eq!(s, "zz"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_simplify_keeps_expression_and_sharing() {
        let (v1, v2) = hello_world();
        let e1 = Expression::new("E_{xample}", &v1 - &v2, "m");
        let engine = EchoEngine::new();
        let simplified = simplify(&e1, &engine, false).unwrap();
        assert_eq!(simplified.name(), "E_{xample}");
        assert_eq!(simplified.unit(), "m");
        assert_eq!(
            simplified.to_string(),
            r"E_{xample} = {H_{ello}} - {W^{orld}} = 3.25 - 5.63 = \left( -2.38 \right) \ \mathrm{m}"
        );
        v2.set_value(1.25);
        assert_relative_eq!(simplified.result().unwrap(), 2.0, epsilon = 1e-12);
        // a variable is returned unchanged
        match simplify(&v1, &engine, false).unwrap() {
            Node::Variable(v) => assert!(v.shares_data_with(&v1)),
            other => panic!("unexpected {:?}", other),
        }
        expand(&e1, &engine, true).unwrap();
        factor(&e1, &engine, false).unwrap();
        cancel(&e1, &engine, false).unwrap();
        apart(&e1, &engine, false).unwrap();
        assert_eq!(
            *engine.calls.borrow(),
            vec![
                CasOperation::Simplify,
                CasOperation::Expand,
                CasOperation::Factor,
                CasOperation::Cancel,
                CasOperation::Apart
            ]
        );
    }

    #[test]
    fn test_expand_with_fixed_answer() {
        let a = Variable::new("a", 3.0, "");
        let b = Variable::new("b", 2.0, "");
        let o = sqr(&a + &b);
        let engine = FixedEngine(CasExpr::Add(vec![
            CasExpr::Pow(CasExpr::symbol("a").boxed(), CasExpr::Integer(2).boxed()),
            CasExpr::Mul(vec![
                CasExpr::Integer(2),
                CasExpr::symbol("a"),
                CasExpr::symbol("b"),
            ]),
            CasExpr::Pow(CasExpr::symbol("b").boxed(), CasExpr::Integer(2).boxed()),
        ]));
        let expanded = expand(&o, &engine, false).unwrap();
        assert_relative_eq!(expanded.result().unwrap(), o.result().unwrap());
        assert_eq!(
            expanded.str_symbolic(),
            r"{ {a} }^{ {2} } + {2} \cdot {a} \cdot {b} + { {b} }^{ {2} }"
        );
    }

    #[test]
    fn test_collect_arguments() {
        let a = Variable::new("a", 3.0, "");
        let b = Variable::new("b", 2.0, "");
        let engine = EchoEngine::new();
        let o = &a * &b + &a;
        collect(&o, &nodes![&a], &engine, false).unwrap();
        assert_eq!(
            *engine.calls.borrow(),
            vec![CasOperation::Collect(vec!["a".to_string()])]
        );
        match collect(&o, &nodes![&a + &b], &engine, false) {
            Err(LatexExprError::WrongArgumentType { expected, got }) => {
                assert_eq!(expected, "Variable");
                assert_eq!(got, "Operation");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
