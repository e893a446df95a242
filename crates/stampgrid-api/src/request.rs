use stampgrid_model::{BranchFilter, DEFAULT_WIDTH, GridQuery, MIN_RELOAD_SECS};

use crate::error::ApiError;

/// Axis orientation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Builders are rows, stamps are columns.
    Standard,
    /// Stamps are rows, builders are columns.
    Transposed,
}

impl GridLayout {
    /// Name of the parameter carrying the stamp count.
    pub fn width_param(&self) -> &'static str {
        match self {
            GridLayout::Standard => "width",
            GridLayout::Transposed => "length",
        }
    }
}

/// Parsed grid page parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    pub layout: GridLayout,
    pub query: GridQuery,
    /// Page refresh interval in seconds, never below [`MIN_RELOAD_SECS`].
    pub reload: Option<u64>,
}

impl GridRequest {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            query: GridQuery::new(),
            reload: None,
        }
    }

    /// Parse query-string style pairs.
    ///
    /// - `width` (or `length` for the transposed layout): integer, default [`DEFAULT_WIDTH`];
    ///   the first occurrence wins. Range is checked at assembly time.
    /// - `category`: repeatable.
    /// - `branch`: first occurrence; `trunk` selects the default branch; absent means any.
    /// - `reload`: integer seconds, raised to [`MIN_RELOAD_SECS`]; unparseable values are ignored.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(layout: GridLayout, pairs: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let width_key = layout.width_param();
        let mut width: Option<i64> = None;
        let mut branch: Option<BranchFilter> = None;
        let mut reload: Option<Option<u64>> = None;
        let mut categories = Vec::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                k if k == width_key && width.is_none() => {
                    let parsed = value.trim().parse::<i64>().map_err(|_| {
                        ApiError::InvalidRequest(format!(
                            "{width_key} must be an integer, got '{value}'"
                        ))
                    })?;
                    width = Some(parsed);
                }
                "category" => categories.push(value.to_string()),
                "branch" if branch.is_none() => branch = Some(BranchFilter::from_param(value)),
                "reload" if reload.is_none() => reload = Some(parse_reload(value)),
                _ => {}
            }
        }

        Ok(Self {
            layout,
            query: GridQuery {
                width: width.unwrap_or(DEFAULT_WIDTH),
                categories,
                branch: branch.unwrap_or_default(),
            },
            reload: reload.flatten(),
        })
    }
}

fn parse_reload(value: &str) -> Option<u64> {
    let secs = value.trim().parse::<i64>().ok()?;
    Some(u64::try_from(secs).unwrap_or(0).max(MIN_RELOAD_SECS))
}
