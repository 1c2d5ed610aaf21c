//! Typed AST for media queries.
//!
//! Serializes (serde) to the tagged JSON shape consumers expect: features are
//! tagged by `context`, values by `type`, and absent optional parts are
//! omitted.

use serde::Serialize;

pub use crate::lexer::NumberFlag;

/// Comma-separated list of queries.
///
/// A member that failed to parse is `None`; a media query list tolerates
/// invalid members without failing as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryList {
    pub queries: Vec<Option<Query>>,
}

impl QueryList {
    pub fn new(queries: Vec<Option<Query>>) -> Self {
        Self { queries }
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn valid_queries(&self) -> impl Iterator<Item = &Query> {
        self.queries.iter().flatten()
    }

    pub fn has_invalid(&self) -> bool {
        self.queries.iter().any(Option::is_none)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<QueryPrefix>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Query {
    /// The query matching every device: `all`.
    pub fn all() -> Self {
        Self::default()
    }

    /// The query matching no device: `not all`.
    pub fn never() -> Self {
        Self {
            prefix: Some(QueryPrefix::Not),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPrefix {
    Not,
    Only,
}

impl QueryPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Only => "only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    All,
    Screen,
    Print,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Screen => "screen",
            Self::Print => "print",
        }
    }

    pub fn from_ident(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "screen" => Some(Self::Screen),
            "print" => Some(Self::Print),
            _ => None,
        }
    }
}

/// Legacy media types that never match any device.
pub const NEVER_MATCHING_TYPES: &[&str] = &[
    "tty",
    "tv",
    "projection",
    "handheld",
    "braille",
    "embossed",
    "aural",
    "speech",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }

    pub fn from_ident(name: &str) -> Option<Self> {
        match name {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "not" => Some(Self::Not),
            _ => None,
        }
    }

    /// `and` and `or` can absorb nested nodes of the same operator.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// One node per operator run: `(a) and (b) and (c)` is a single `and` node
/// with three children, not a binary tree.
///
/// `not` has exactly one child. A node without an operator groups a single
/// parenthesized child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    pub children: Vec<ConditionChild>,
}

impl Condition {
    pub fn new(operator: Option<Operator>, children: Vec<ConditionChild>) -> Self {
        Self { operator, children }
    }

    pub fn not(child: impl Into<ConditionChild>) -> Self {
        Self::new(Some(Operator::Not), vec![child.into()])
    }

    /// Operator-less wrapper around a single child.
    pub fn group(child: impl Into<ConditionChild>) -> Self {
        Self::new(None, vec![child.into()])
    }

    /// The only child of a single-child node, if it is a condition.
    pub fn single_condition(&self) -> Option<&Condition> {
        match self.children.as_slice() {
            [ConditionChild::Condition(c)] => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionChild {
    Condition(Condition),
    Feature(Feature),
}

impl From<Condition> for ConditionChild {
    fn from(c: Condition) -> Self {
        Self::Condition(c)
    }
}

impl From<Feature> for ConditionChild {
    fn from(f: Feature) -> Self {
        Self::Feature(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "context", rename_all = "lowercase")]
pub enum Feature {
    /// `(color)`
    Boolean { feature: String },
    /// `(min-width: 768px)`; the `min-`/`max-` prefix is split off the name.
    Value {
        feature: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix: Option<FeaturePrefix>,
        value: Value,
    },
    /// `(100px <= width < 200px)`
    Range { feature: String, range: Range },
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean { feature } | Self::Value { feature, .. } | Self::Range { feature, .. } => {
                feature
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePrefix {
    Min,
    Max,
}

impl FeaturePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Values accepted in feature position.
///
/// `Ratio` never comes from the lexer: the parser assembles it from
/// `number '/' number`. In range position the only ident allowed is
/// `infinite`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    Number {
        value: f64,
        flag: NumberFlag,
    },
    Dimension {
        value: f64,
        unit: String,
        flag: NumberFlag,
    },
    Ratio {
        numerator: f64,
        denominator: f64,
    },
    Ident {
        value: String,
    },
}

/// Comparison with an optional left `(value, op)` and/or right `(op, value)`.
///
/// When both sides are present, both operators point the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<RangeBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<RangeBound>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBound {
    pub value: Value,
    pub op: RangeOp,
}

impl RangeBound {
    pub fn new(value: Value, op: RangeOp) -> Self {
        Self { value, op }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeOp {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

/// Direction of a comparison, used to reject `a < x > b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDirection {
    Less,
    Greater,
    Equal,
}

impl RangeOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "=",
        }
    }

    pub fn direction(&self) -> RangeDirection {
        match self {
            Self::Lt | Self::Le => RangeDirection::Less,
            Self::Gt | Self::Ge => RangeDirection::Greater,
            Self::Eq => RangeDirection::Equal,
        }
    }
}
