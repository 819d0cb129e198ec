//! # Operands
//!
//! Leaves of an expression tree and the precedence metadata they carry.
//!
//! Every operand has an optional precedence level (`Bodmas`). `None` marks atomic,
//! constant-like operands; `Some(Bodmas::Brackets)` marks operands that are already
//! self-delimiting and never need another pair of brackets. All operand kinds share the
//! `MathsOperand` capability (render, bracket decision) and are gathered in the `Operand`
//! enum, which dispatches statically through `enum_dispatch`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use enum_dispatch::enum_dispatch;
use log::debug;
use rand::{Rng, RngCore};
use strum_macros::{Display, EnumIter, EnumString};

use crate::maths::errors::MathsError;
use crate::maths::expression::Expression;
use crate::maths::value::Value;

/// Order of operations, tightest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Bodmas {
    Brackets = 0,
    Order = 1,
    Division = 2,
    Multiplication = 3,
    Addition = 4,
    Subtraction = 5,
}

/// Output notations an operator can render into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum Format {
    #[default]
    #[strum(to_string = "LaTeX", serialize = "latex")]
    LaTeX,
}

pub(crate) fn make_brackets(s: &str) -> String {
    format!("({})", s)
}

/// Options threaded through a render call: the output format and an optional random source
/// used by unresolved random constants.
pub struct RenderOptions<'a> {
    format: Format,
    random: Option<&'a mut dyn RngCore>,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        RenderOptions {
            format: Format::default(),
            random: None,
        }
    }
}

impl<'a> RenderOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_random(random: &'a mut dyn RngCore) -> Self {
        RenderOptions {
            format: Format::default(),
            random: Some(random),
        }
    }

    /// Selects the output format by name, rejecting names no operator renders.
    pub fn format_named(mut self, name: &str) -> Result<Self, MathsError> {
        self.format = name
            .parse::<Format>()
            .map_err(|_| MathsError::UnsupportedFormat(name.to_string()))?;
        Ok(self)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn random(&mut self) -> Option<&mut (dyn RngCore + 'a)> {
        self.random.as_deref_mut()
    }
}

/// Shared capability of everything that can sit in an expression tree.
#[enum_dispatch]
pub trait MathsOperand {
    /// precedence level, `None` for atomic operands
    fn order(&self) -> Option<Bodmas>;

    fn render(&self, options: &mut RenderOptions<'_>) -> Result<Value, MathsError>;

    fn enclosed(&self) -> bool {
        self.order() == Some(Bodmas::Brackets)
    }

    /// Does this operand need brackets when placed in a context of precedence `order`?
    /// `explicit` tells whether the context joins operands with a visible symbol.
    fn requires_brackets(&self, order: Bodmas, explicit: bool) -> bool {
        if self.enclosed() {
            return false;
        }
        match self.order() {
            None => !explicit,
            Some(own) => own > order,
        }
    }

    fn render_auto_brackets(
        &self,
        order: Bodmas,
        options: &mut RenderOptions<'_>,
    ) -> Result<String, MathsError> {
        let rendered = self.render(options)?.to_string();
        if self.requires_brackets(order, true) {
            Ok(make_brackets(&rendered))
        } else {
            Ok(rendered)
        }
    }
}

/// Output of an operator: an already rendered value that still carries its precedence so the
/// enclosing operator can decide on brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    value: Value,
    order: Option<Bodmas>,
}

impl Rendered {
    pub fn new(value: impl Into<Value>, order: Bodmas) -> Self {
        Rendered {
            value: value.into(),
            order: Some(order),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl MathsOperand for Rendered {
    fn order(&self) -> Option<Bodmas> {
        self.order
    }

    fn render(&self, _options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        Ok(self.value.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Constant {
    value: Value,
}

impl Constant {
    pub fn new(value: impl Into<Value>) -> Self {
        Constant {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl MathsOperand for Constant {
    fn order(&self) -> Option<Bodmas> {
        None
    }

    fn render(&self, _options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        Ok(self.value.clone())
    }
}

/// Integer drawn once from the stepped range `start, start + step, ... < end`.
///
/// The draw happens on first render and is cached until `reset`. Clones share the cache, so a
/// clone placed inside an expression renders the same number as the handle kept by the caller.
/// The cache is an `Arc<Mutex<_>>`: trees holding random constants are `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct RandomConstant {
    start: i64,
    end: i64,
    step: i64,
    drawn: Arc<Mutex<Option<i64>>>,
}

impl RandomConstant {
    pub fn new(start: i64, end: i64) -> Self {
        Self::with_step(start, end, 1)
    }

    pub fn with_step(start: i64, end: i64, step: i64) -> Self {
        RandomConstant {
            start,
            end,
            step,
            drawn: Arc::new(Mutex::new(None)),
        }
    }

    pub fn bounds(&self) -> (i64, i64, i64) {
        (self.start, self.end, self.step)
    }

    // a poisoned lock still holds a usable value
    fn cache(&self) -> MutexGuard<'_, Option<i64>> {
        self.drawn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// number of members of the stepped range, `None` when it has none
    fn len(&self) -> Option<u64> {
        let (start, end, step) = (self.start as i128, self.end as i128, self.step as i128);
        let count = if step > 0 && end > start {
            (end - start + step - 1) / step
        } else if step < 0 && end < start {
            (start - end - step - 1) / -step
        } else {
            0
        };
        if count > 0 { Some(count as u64) } else { None }
    }

    /// Returns the cached draw, drawing from `random` (or the thread-local generator) first if
    /// nothing is cached yet.
    pub fn resolve(&self, random: Option<&mut dyn RngCore>) -> Result<i64, MathsError> {
        let mut drawn = self.cache();
        if let Some(value) = *drawn {
            return Ok(value);
        }
        let count = self.len().ok_or(MathsError::EmptyRange {
            start: self.start,
            end: self.end,
            step: self.step,
        })?;
        let index = match random {
            Some(rng) => draw_index(rng, count),
            None => draw_index(&mut rand::rng(), count),
        };
        let value = (self.start as i128 + index as i128 * self.step as i128) as i64;
        debug!(
            "random constant in [{}, {}) step {} resolved to {}",
            self.start, self.end, self.step, value
        );
        *drawn = Some(value);
        Ok(value)
    }

    /// Forgets the cached draw; the next render draws again.
    pub fn reset(&self) {
        *self.cache() = None;
    }

    pub fn is_resolved(&self) -> bool {
        self.cache().is_some()
    }
}

/// uniform index in `0..count`, `count` must be positive
pub(crate) fn draw_index(rng: &mut dyn RngCore, count: u64) -> u64 {
    let mut rng = rng;
    Rng::random_range(&mut rng, 0..count)
}

impl MathsOperand for RandomConstant {
    fn order(&self) -> Option<Bodmas> {
        None
    }

    fn render(&self, options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        self.resolve(options.random().map(|rng| rng as &mut dyn RngCore))
            .map(Value::Integer)
    }
}

/// Named symbol. Variables never need brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MathsOperand for Variable {
    fn order(&self) -> Option<Bodmas> {
        Some(Bodmas::Brackets)
    }

    fn render(&self, _options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        Ok(Value::Text(self.name.clone()))
    }
}

/// Any node of an expression tree
#[enum_dispatch(MathsOperand)]
#[derive(Clone, Debug)]
pub enum Operand {
    Constant(Constant),
    RandomConstant(RandomConstant),
    Variable(Variable),
    Expression(Expression),
}
