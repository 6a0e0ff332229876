//// # Form
////
//// The raw text a user typed, the checks it has to pass before anything gets
//// computed, and the state a front-end keeps between submissions.

use crate::error::InvalidInput;
use crate::evaluate::*;
use crate::plot::{PlotSettings, RenderRequest};
use crate::query::*;
use log::{debug, info};

/// The five text fields and the query selector, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub mean: String,
    pub std_dev: String,
    pub x: String,
    pub a: String,
    pub b: String,
    pub kind: QueryKind,
}

/// Parses a field as a finite real number. `None` if it does not parse.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// An operand field: empty means "not provided", anything else must be a number.
fn parse_operand(s: &str, name: &'static str) -> Result<Option<f64>, InvalidInput> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(s)
            .map(Some)
            .ok_or(InvalidInput::NonNumericOperand { name })
    }
}

impl FormInput {
    /// Checks the fields in order and stops at the first violation.
    pub fn validate(&self) -> Result<(DistributionParameters, Query), InvalidInput> {
        let (mean, std_dev) = match (parse_number(&self.mean), parse_number(&self.std_dev)) {
            (Some(mean), Some(std_dev)) => (mean, std_dev),
            _ => return Err(InvalidInput::NonNumericParameters),
        };
        let params = DistributionParameters::new(mean, std_dev)?;

        let x = parse_operand(&self.x, "x")?;
        let a = parse_operand(&self.a, "a")?;
        let b = parse_operand(&self.b, "b")?;

        let query = if self.kind.is_interval() {
            match (a, b) {
                (Some(a), Some(b)) => Query::interval(self.kind, a, b)?,
                _ => return Err(InvalidInput::MissingBounds),
            }
        } else {
            match x {
                Some(x) => Query::point(self.kind, x),
                None => return Err(InvalidInput::MissingX),
            }
        };
        // The constructors only return `None` when the kind and the operands
        // disagree, which the branch above rules out.
        let query = query.ok_or_else(|| InvalidInput::UnknownQuery(self.kind.to_string()))?;
        debug!("validated form: {:?} with {:?}", params, query);
        Ok((params, query))
    }
}

/// What a successful submission produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub result: EvaluationResult,
    pub render: RenderRequest,
}

/// Everything a front-end has to remember: the form as currently filled in
/// and what the last submission produced.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormInput,
    last: Option<Outcome>,
}

impl AppState {
    pub fn new(form: FormInput) -> Self {
        Self { form, last: None }
    }

    /// Validates the form, evaluates the query and prepares the plot. The
    /// outcome replaces the previous one; on failure the previous one is
    /// cleared.
    pub fn submit(&mut self, settings: &PlotSettings) -> Result<&Outcome, InvalidInput> {
        self.last = None;
        let (params, query) = self.form.validate()?;
        let result = evaluate(&params, &query);
        let render = RenderRequest::build(&params, &query, settings);
        info!("{}", result.label);
        Ok(self.last.insert(Outcome { result, render }))
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }
}
