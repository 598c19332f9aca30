//! Query modifier pipeline encoding.
//!
//! Read endpoints accept a `query` parameter describing a pipeline of
//! server-side transformations applied to a document before it is
//! returned. A pipeline is a comma-separated list of segments, each
//! segment being `name`, `name-arg1-arg2...`, or `name-var(key)` /
//! `name-json(key)` where `key` names a sibling query parameter holding
//! the actual value.

use serde_json::Value;

use crate::response::Param;

/// Arguments attached to a single query modifier.
///
/// The `Var` and `Json` forms do not embed a value in the query string;
/// they reference a side-channel query parameter by name. The referenced
/// parameter travels in the modifier's `query` map and is merged into the
/// request's query parameters by [`encode_query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArgs {
    /// Single literal argument, encoded as `name-arg`
    One(String),
    /// Multiple literal arguments, encoded as `name-a-b-c`
    Many(Vec<String>),
    /// Reference to a pre-encoded parameter, encoded as `name-var(key)`
    Var(String),
    /// Reference to a JSON-valued parameter, encoded as `name-json(key)`
    Json(String),
}

impl From<&str> for QueryArgs {
    fn from(arg: &str) -> Self {
        QueryArgs::One(arg.to_string())
    }
}

impl From<String> for QueryArgs {
    fn from(arg: String) -> Self {
        QueryArgs::One(arg)
    }
}

impl From<Vec<String>> for QueryArgs {
    fn from(args: Vec<String>) -> Self {
        QueryArgs::Many(args)
    }
}

impl From<Vec<&str>> for QueryArgs {
    fn from(args: Vec<&str>) -> Self {
        QueryArgs::Many(args.into_iter().map(|a| a.to_string()).collect())
    }
}

impl From<&[&str]> for QueryArgs {
    fn from(args: &[&str]) -> Self {
        QueryArgs::Many(args.iter().map(|a| a.to_string()).collect())
    }
}

/// One entry in a query modifier pipeline.
///
/// `apply` is passed through verbatim; the client does not reject names
/// it does not recognize, the server validates them. The constructors in
/// [`modifiers`] cover every name the service understands.
#[derive(Debug, Clone, Default)]
pub struct QueryModifier {
    /// Modifier name
    pub apply: String,
    /// Modifier arguments
    pub args: Option<QueryArgs>,
    /// Side-channel parameters referenced by `var`/`json` arguments
    pub query: Option<Param>,
}

impl QueryModifier {
    /// Create a modifier with no arguments
    pub fn new(apply: impl Into<String>) -> Self {
        QueryModifier {
            apply: apply.into(),
            args: None,
            query: None,
        }
    }

    /// Set the modifier arguments
    pub fn args(mut self, args: impl Into<QueryArgs>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Reference a pre-encoded query parameter as the argument
    pub fn var(mut self, key: impl Into<String>) -> Self {
        self.args = Some(QueryArgs::Var(key.into()));
        self
    }

    /// Reference a JSON-valued query parameter as the argument
    pub fn json(mut self, key: impl Into<String>) -> Self {
        self.args = Some(QueryArgs::Json(key.into()));
        self
    }

    /// Attach a side-channel query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Param::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Encode a modifier pipeline into the `query` parameter value and the
/// side-channel parameters referenced by `var`/`json` arguments.
///
/// Segments are joined with commas in input order. `query` maps are
/// merged in the same order, later entries overwriting earlier keys.
/// An empty pipeline yields an empty string and no parameters.
///
/// # Example
/// ```
/// use jsonbank::query::{encode_query, modifiers};
///
/// let (query, params) = encode_query(&[
///     modifiers::map_pick().args(vec!["name", "iso3"]),
///     modifiers::size(),
/// ]);
///
/// assert_eq!(query, "mapPick-name-iso3,size");
/// assert!(params.is_empty());
/// ```
pub fn encode_query(modifiers: &[QueryModifier]) -> (String, Param) {
    let mut segments: Vec<String> = Vec::with_capacity(modifiers.len());
    let mut extra = Param::new();

    for modifier in modifiers {
        let mut segment = modifier.apply.clone();

        match &modifier.args {
            Some(QueryArgs::One(arg)) => {
                segment.push('-');
                segment.push_str(arg);
            }
            Some(QueryArgs::Many(args)) if !args.is_empty() => {
                segment.push('-');
                segment.push_str(&args.join("-"));
            }
            // an empty argument list encodes the same as no arguments
            Some(QueryArgs::Many(_)) => {}
            Some(QueryArgs::Var(key)) => {
                segment.push_str(&format!("-var({})", key));
            }
            Some(QueryArgs::Json(key)) => {
                segment.push_str(&format!("-json({})", key));
            }
            None => {}
        }

        if let Some(query) = &modifier.query {
            extra.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        segments.push(segment);
    }

    (segments.join(","), extra)
}

/// Constructors for every modifier the service understands.
pub mod modifiers {
    use super::QueryModifier;

    macro_rules! modifier_fns {
        ($($fn_name:ident => $apply:literal),+ $(,)?) => {
            $(
                #[doc = concat!("The `", $apply, "` modifier")]
                pub fn $fn_name() -> QueryModifier {
                    QueryModifier::new($apply)
                }
            )+

            /// Names of all modifiers understood by the service
            pub const MODIFIER_NAMES: &[&str] = &[$($apply),+];
        };
    }

    modifier_fns! {
        // Array
        chunk => "chunk",
        first => "first",
        last => "last",
        nth => "nth",
        reverse => "reverse",
        slice => "slice",
        take => "take",
        take_right => "takeRight",
        map_pick => "mapPick",

        // Object
        get => "get",
        at => "at",
        has => "has",
        has_in => "hasIn",
        keys => "keys",
        values => "values",
        values_in => "valuesIn",
        keys_in => "keysIn",
        omit => "omit",
        unset => "unset",
        pick => "pick",

        // Lang
        cast_array => "castArray",
        is_array => "isArray",

        // Collection
        find => "find",
        find_last => "findLast",
        filter => "filter",
        size => "size",
        every => "every",
        order_by => "orderBy",
        sort_by => "sortBy",
        reject => "reject",
        shuffle => "shuffle",
        map => "map",

        // Math
        max => "max",
        min => "min",
        sum => "sum",
    }
}
