use super::error::FilterError;
use super::types::{JobFilters, SqlFragment, SqlParam};

/// One predicate of a job search, before placeholders are numbered
#[derive(Debug, Clone)]
enum Predicate {
    /// `<column> <operator> $n`, consuming one positional parameter
    Bound {
        column: &'static str,
        operator: &'static str,
        value: SqlParam,
    },
    /// Literal SQL with no parameter
    Literal(&'static str),
}

/// Builds the `WHERE` predicate for a job search.
///
/// Predicates are collected first and numbered second, so only predicates
/// that bind a value ever receive a placeholder.
pub struct JobFilterWhere;

impl JobFilterWhere {
    /// Returns an empty clause when no filter constrains anything.
    pub fn generate(filters: &JobFilters) -> SqlFragment {
        let mut conditions = vec![];
        let mut params = vec![];

        for predicate in Self::predicates(filters) {
            match predicate {
                Predicate::Bound { column, operator, value } => {
                    params.push(value);
                    conditions.push(format!("{} {} ${}", column, operator, params.len()));
                }
                Predicate::Literal(sql) => conditions.push(sql.to_string()),
            }
        }

        SqlFragment {
            clause: conditions.join(" AND "),
            params,
        }
    }

    /// Reject filter values that can never be satisfied by a valid job
    pub fn validate(filters: &JobFilters) -> Result<(), FilterError> {
        if let Some(min_salary) = filters.min_salary {
            if min_salary < 0 {
                return Err(FilterError::InvalidFilter(
                    "minSalary must be greater than or equal to 0".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn predicates(filters: &JobFilters) -> Vec<Predicate> {
        let mut predicates = vec![];

        if let Some(title) = &filters.title {
            predicates.push(Predicate::Bound {
                column: "title",
                operator: "ILIKE",
                value: SqlParam::Text(format!("%{}%", title)),
            });
        }
        if let Some(min_salary) = filters.min_salary {
            predicates.push(Predicate::Bound {
                column: "salary",
                operator: ">=",
                value: SqlParam::Int(min_salary),
            });
        }
        // hasEquity=false matches every row
        if filters.has_equity == Some(true) {
            predicates.push(Predicate::Literal("equity > 0"));
        }

        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(title: Option<&str>, min_salary: Option<i32>, has_equity: Option<bool>) -> JobFilters {
        JobFilters {
            title: title.map(str::to_string),
            min_salary,
            has_equity,
        }
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let sql = JobFilterWhere::generate(&filters(Some("eng"), None, None));
        assert_eq!(sql.clause, "title ILIKE $1");
        assert_eq!(sql.params, vec![SqlParam::from("%eng%")]);
    }

    #[test]
    fn min_salary_binds_value_unchanged() {
        let sql = JobFilterWhere::generate(&filters(None, Some(100000), None));
        assert_eq!(sql.clause, "salary >= $1");
        assert_eq!(sql.params, vec![SqlParam::from(100000)]);
    }

    #[test]
    fn has_equity_binds_nothing() {
        let sql = JobFilterWhere::generate(&filters(None, None, Some(true)));
        assert_eq!(sql.clause, "equity > 0");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn all_filters_combine_with_and() {
        let sql = JobFilterWhere::generate(&filters(Some("eng"), Some(100000), Some(true)));
        assert_eq!(sql.clause, "title ILIKE $1 AND salary >= $2 AND equity > 0");
        assert_eq!(sql.params, vec![SqlParam::from("%eng%"), SqlParam::from(100000)]);
    }

    #[test]
    fn has_equity_false_is_no_constraint() {
        let sql = JobFilterWhere::generate(&filters(None, None, Some(false)));
        assert!(sql.is_empty());
        assert!(sql.params.is_empty());

        let sql = JobFilterWhere::generate(&filters(None, Some(5), Some(false)));
        assert_eq!(sql.clause, "salary >= $1");
        assert_eq!(sql.params, vec![SqlParam::from(5)]);
    }

    #[test]
    fn has_equity_does_not_shift_placeholders() {
        let sql = JobFilterWhere::generate(&filters(None, Some(1), Some(true)));
        assert_eq!(sql.clause, "salary >= $1 AND equity > 0");
        assert_eq!(sql.params.len(), 1);
    }

    #[test]
    fn empty_filters_produce_empty_clause() {
        let sql = JobFilterWhere::generate(&JobFilters::default());
        assert_eq!(sql, SqlFragment::default());
    }

    #[test]
    fn negative_min_salary_is_invalid() {
        assert!(JobFilterWhere::validate(&filters(None, Some(-1), None)).is_err());
        assert!(JobFilterWhere::validate(&filters(Some("x"), Some(0), Some(true))).is_ok());
    }

    #[test]
    fn deserializes_query_style_keys() {
        let parsed: JobFilters = serde_json::from_value(serde_json::json!({
            "title": "eng",
            "minSalary": 10,
            "hasEquity": true
        }))
        .unwrap();
        assert_eq!(parsed, filters(Some("eng"), Some(10), Some(true)));

        let unknown = serde_json::from_value::<JobFilters>(serde_json::json!({ "salary": 10 }));
        assert!(unknown.is_err());
    }
}
