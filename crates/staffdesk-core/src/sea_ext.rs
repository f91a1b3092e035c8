use sea_orm::{
    Condition, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func, LikeExpr},
};

pub trait ContainsIgnoreCase<E: EntityTrait> {
    /// Keep rows where any of `columns` contains `term` literally, compared in
    /// lower case. `%` and `_` in `term` match only themselves.
    fn contains_ignore_case(self, columns: &[E::Column], term: &str) -> Self;
}

impl<E> ContainsIgnoreCase<E> for Select<E>
where
    E: EntityTrait,
{
    fn contains_ignore_case(self, columns: &[E::Column], term: &str) -> Self {
        let pattern = contains_pattern(term);
        let condition = columns.iter().fold(Condition::any(), |condition, column| {
            condition.add(
                Expr::expr(Func::lower(Expr::col((E::default(), *column))))
                    .like(LikeExpr::new(pattern.as_str()).escape('\\')),
            )
        });
        self.filter(condition)
    }
}

/// `%term%` in lower case with `\`, `%` and `_` escaped by `\`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
