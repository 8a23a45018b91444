/// One SODA query: a filter plus optional projection and pagination window.
///
/// Rendered into `$`-prefixed request parameters the way the API expects.
#[derive(Debug, Clone, Default)]
pub struct Query {
    where_clause: Option<String>,
    select: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = Some(where_clause.into());
        self
    }

    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render into request parameter pairs. Unset fields are omitted rather
    /// than sent empty.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(w) = &self.where_clause {
            params.push(("$where", w.clone()));
        }
        if let Some(s) = &self.select {
            params.push(("$select", s.clone()));
        }
        if let Some(o) = self.offset {
            params.push(("$offset", o.to_string()));
        }
        if let Some(l) = self.limit {
            params.push(("$limit", l.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_fields() {
        let q = Query::new()
            .filter("complaint_type = 'Illegal Parking'")
            .offset(2000)
            .limit(2000);
        let params = q.to_params();
        assert_eq!(
            params,
            vec![
                ("$where", "complaint_type = 'Illegal Parking'".to_string()),
                ("$offset", "2000".to_string()),
                ("$limit", "2000".to_string()),
            ]
        );
    }

    #[test]
    fn omits_unset_fields() {
        let q = Query::new().select("COUNT(*)");
        assert_eq!(q.to_params(), vec![("$select", "COUNT(*)".to_string())]);
    }

    #[test]
    fn empty_query_sends_no_params() {
        assert!(Query::new().to_params().is_empty());
    }
}
