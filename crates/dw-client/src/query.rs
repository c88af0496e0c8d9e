use std::fmt;

/// A PostgREST resource plus its query parameters.
///
/// Values are kept unencoded here; the gateway percent-encodes them when it
/// builds the request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    resource: String,
    params: Vec<(String, String)>,
}

impl Query {
    /// Query against a table or view, e.g. `users`
    pub fn table(resource: &str) -> Self {
        Self {
            resource: resource.trim_matches('/').to_string(),
            params: Vec::new(),
        }
    }

    /// Call a stored procedure exposed under `rpc/`
    pub fn rpc(function: &str) -> Self {
        Self::table(&format!("rpc/{}", function.trim_matches('/')))
    }

    /// `column=eq.value`
    pub fn eq(self, column: &str, value: impl fmt::Display) -> Self {
        self.param(column, format!("eq.{}", value))
    }

    /// `select=...` projection, including embedded resources such as `alias:fk_id(name)`
    pub fn select(self, columns: &str) -> Self {
        self.param("select", columns)
    }

    pub fn order_desc(self, column: &str) -> Self {
        self.param("order", format!("{}.desc", column))
    }

    pub fn limit(self, n: u32) -> Self {
        self.param("limit", n)
    }

    /// Conflict target for upserts
    pub fn on_conflict(self, columns: &str) -> Self {
        self.param("on_conflict", columns)
    }

    /// Raw parameter, appended as given
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}
