//! # Variable
//!
//! Leaf of the expression tree: a mathematical or physical variable with symbolic name,
//! value, physical unit and rules how to format them.
//!
//! `Variable` is a cheap handle: cloning it shares the same underlying data, so one
//! variable may appear in several operations and expressions at once. Changing its value
//! (e.g. filling in a value that was unknown at construction time) is visible in every tree
//! that contains it at the next rendering; nothing is cached.
//!
//! ```rust, ignore
//! let v = Variable::new("F", None, "kN");
//! assert_eq!(v.to_string(), "F");
//! v.set_value(2.34);
//! assert_eq!(v.to_string(), r"F = 2.34 \ \mathrm{kN}");
//! ```
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_format::{
    DEFAULT_UNIT_FORMAT, NumberFormat, render_value, render_with_unit,
};
use crate::symbolic::latex_node::LatexNode;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct VariableData {
    name: String,
    /// None = symbolic variable (value not known yet)
    value: Option<f64>,
    unit: String,
    format: NumberFormat,
    unit_format: String,
    /// exponent for scientific representation, 0 = none
    exponent: i32,
}

/// Named value with unit, shared by reference between trees
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    data: Rc<RefCell<VariableData>>,
}

impl Variable {
    /// Creates a new variable.
    ///
    /// # Arguments
    /// * `name` - symbolic (LaTeX) name, e.g. `a_{22}`
    /// * `value` - numeric value or `None` for a symbolic variable
    /// * `unit` - physical unit, e.g. `kN`
    pub fn new(name: &str, value: impl Into<Option<f64>>, unit: &str) -> Variable {
        Variable {
            data: Rc::new(RefCell::new(VariableData {
                name: name.to_string(),
                value: value.into(),
                unit: unit.to_string(),
                format: NumberFormat::default(),
                unit_format: DEFAULT_UNIT_FORMAT.to_string(),
                exponent: 0,
            })),
        }
    }
    /// variable without value
    pub fn symbolic(name: &str) -> Variable {
        Variable::new(name, None, "")
    }
    /// Variable standing for an integer literal, named by its decimal form, formatted by `%d`
    pub fn literal_int(value: i64) -> Variable {
        Variable::new(&value.to_string(), value as f64, "").with_number_format(NumberFormat::integer())
    }
    /// Variable standing for a float literal, named and formatted by `%g`.
    /// Values `%g` would print with an exponent get plain decimal digits instead.
    pub fn literal_float(value: f64) -> Variable {
        let mut format = NumberFormat::general();
        let mut name = format.format(value);
        if value.is_finite() && name.contains('e') {
            name = value.to_string();
            let decimals = name.split_once('.').map_or(0, |(_, frac)| frac.len());
            format = NumberFormat::fixed(decimals);
        }
        Variable::new(&name, value, "").with_number_format(format)
    }

    //_____________________________BUILDERS______________________________________
    /// sets format pattern of the value, e.g. `%.4f`, `%e`, `%g`
    pub fn with_format(self, pattern: &str) -> LatexResult<Variable> {
        let format = NumberFormat::parse(pattern)?;
        Ok(self.with_number_format(format))
    }
    pub fn with_number_format(self, format: NumberFormat) -> Variable {
        self.data.borrow_mut().format = format;
        self
    }
    /// sets format of the unit, `%s` is replaced by the unit
    pub fn with_unit_format(self, unit_format: &str) -> Variable {
        self.data.borrow_mut().unit_format = unit_format.to_string();
        self
    }
    /// sets exponent for scientific representation
    pub fn with_exponent(self, exponent: i32) -> Variable {
        self.data.borrow_mut().exponent = exponent;
        self
    }
    pub fn with_unit(self, unit: &str) -> Variable {
        self.data.borrow_mut().unit = unit.to_string();
        self
    }

    //_____________________________ACCESS_______________________________________
    pub fn value(&self) -> Option<f64> {
        self.data.borrow().value
    }
    /// Sets (or with `None` removes) the value. Visible in every tree sharing this variable.
    pub fn set_value(&self, value: impl Into<Option<f64>>) {
        self.data.borrow_mut().value = value.into();
    }
    pub fn set_name(&self, name: &str) {
        self.data.borrow_mut().name = name.to_string();
    }
    pub fn set_unit(&self, unit: &str) {
        self.data.borrow_mut().unit = unit.to_string();
    }
    pub fn set_format(&self, pattern: &str) -> LatexResult<()> {
        self.data.borrow_mut().format = NumberFormat::parse(pattern)?;
        Ok(())
    }
    pub fn set_unit_format(&self, unit_format: &str) {
        self.data.borrow_mut().unit_format = unit_format.to_string();
    }
    pub fn set_exponent(&self, exponent: i32) {
        self.data.borrow_mut().exponent = exponent;
    }
    /// true if both handles point to the same variable
    pub fn shares_data_with(&self, other: &Variable) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
    /// Hard copy: a new variable not sharing value with the receiver
    pub fn deep_copy(&self) -> Variable {
        Variable {
            data: Rc::new(RefCell::new(self.data.borrow().clone())),
        }
    }

    /// Creates a variable from the current numeric result of any node, copying its unit and
    /// formatting. Fails if the node is symbolic.
    pub fn from_node<N: LatexNode + ?Sized>(node: &N, new_name: Option<&str>) -> LatexResult<Variable> {
        let value = node.result()?;
        let name = match new_name {
            Some(name) => name.to_string(),
            None => node.name(),
        };
        Ok(Variable {
            data: Rc::new(RefCell::new(VariableData {
                name,
                value: Some(value),
                unit: node.unit(),
                format: node.number_format(),
                unit_format: node.unit_format(),
                exponent: node.exponent(),
            })),
        })
    }
}

impl LatexNode for Variable {
    fn name(&self) -> String {
        self.data.borrow().name.clone()
    }
    fn unit(&self) -> String {
        self.data.borrow().unit.clone()
    }
    fn unit_format(&self) -> String {
        self.data.borrow().unit_format.clone()
    }
    fn number_format(&self) -> NumberFormat {
        self.data.borrow().format.clone()
    }
    fn exponent(&self) -> i32 {
        self.data.borrow().exponent
    }
    fn is_symbolic(&self) -> bool {
        self.data.borrow().value.is_none()
    }
    fn result(&self) -> LatexResult<f64> {
        let data = self.data.borrow();
        data.value.ok_or_else(|| LatexExprError::SymbolicResult {
            name: data.name.clone(),
        })
    }
    fn str_symbolic(&self) -> String {
        format!("{{{}}}", self.data.borrow().name)
    }
    fn str_substituted(&self) -> String {
        let data = self.data.borrow();
        match data.value {
            Some(value) => render_value(value, &data.format, data.exponent),
            None => format!("{{{}}}", data.name),
        }
    }
    fn str_result(&self, format: Option<&NumberFormat>, exponent: Option<i32>) -> LatexResult<String> {
        let value = self.result()?;
        let data = self.data.borrow();
        Ok(render_value(
            value,
            format.unwrap_or(&data.format),
            exponent.unwrap_or(data.exponent),
        ))
    }
    /// `name = value unit`, or only `name` for a symbolic variable
    fn str_full(&self) -> String {
        let data = self.data.borrow();
        match data.value {
            Some(value) => format!(
                "{} = {}",
                data.name,
                render_with_unit(
                    &render_value(value, &data.format, data.exponent),
                    &data.unit,
                    &data.unit_format
                )
            ),
            None => data.name.clone(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_full())
    }
}

//___________________________________CONSTANTS____________________________________

/// `0`
pub fn zero() -> Variable {
    Variable::literal_int(0)
}
/// `1`
pub fn one() -> Variable {
    Variable::literal_int(1)
}
/// `2`
pub fn two() -> Variable {
    Variable::literal_int(2)
}
/// Euler number
pub fn e() -> Variable {
    Variable::new(r"\mathrm{e}", std::f64::consts::E, "")
}
pub fn pi() -> Variable {
    Variable::new(r"\pi", std::f64::consts::PI, "")
}
