use super::domain::StressLevel;
use crate::wellness::messages::MessageCatalog;

const MEDIUM_FACTOR_LIMIT: usize = 2;
const HIGH_FACTOR_LIMIT: usize = 3;

pub(crate) fn compose(
    level: StressLevel,
    factors: &[String],
    catalog: &dyn MessageCatalog,
) -> String {
    match level {
        StressLevel::Low => catalog.format("expl_low", &[]),
        StressLevel::Medium => with_factors(
            catalog,
            factors,
            MEDIUM_FACTOR_LIMIT,
            "expl_med_factors",
            "expl_med",
        ),
        StressLevel::High => with_factors(
            catalog,
            factors,
            HIGH_FACTOR_LIMIT,
            "expl_high_factors",
            "expl_high",
        ),
    }
}

fn with_factors(
    catalog: &dyn MessageCatalog,
    factors: &[String],
    limit: usize,
    listed_key: &str,
    generic_key: &str,
) -> String {
    if factors.is_empty() {
        return catalog.format(generic_key, &[]);
    }

    let listed = factors
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    catalog.format(listed_key, &[("factors", listed)])
}
