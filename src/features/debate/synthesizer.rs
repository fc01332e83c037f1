use crate::features::debate::classifier::DebatabilityPolicy;
use crate::features::debate::dto::DebateEntryDto;

pub const PRO_TEMPLATE: &str = "Pro: The point '{point}' has arguments in its favor.";
pub const CON_TEMPLATE: &str = "Con: The point '{point}' can be challenged or analyzed differently.";
pub const FACT_MARKER: &str = "Fact: Not debatable";

const POINT_PLACEHOLDER: &str = "{point}";

/// Formats the pro and con statements for one point.
pub fn format_statements(point: &str, debatable: bool) -> (String, String) {
    if debatable {
        (
            PRO_TEMPLATE.replacen(POINT_PLACEHOLDER, point, 1),
            CON_TEMPLATE.replacen(POINT_PLACEHOLDER, point, 1),
        )
    } else {
        (FACT_MARKER.to_string(), FACT_MARKER.to_string())
    }
}

/// One entry per point, in input order.
pub fn synthesize_debate(points: &[String], policy: &DebatabilityPolicy) -> Vec<DebateEntryDto> {
    points
        .iter()
        .map(|point| {
            let (pro, con) = format_statements(point, policy.is_debatable(point));
            DebateEntryDto {
                point: point.clone(),
                pro,
                con,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debatable_point_gets_templated_arguments() {
        let (pro, con) = format_statements("AI should replace doctors .", true);
        assert_eq!(
            pro,
            "Pro: The point 'AI should replace doctors .' has arguments in its favor."
        );
        assert_eq!(
            con,
            "Con: The point 'AI should replace doctors .' can be challenged or analyzed differently."
        );
    }

    #[test]
    fn placeholder_text_inside_point_is_left_alone() {
        let (pro, _) = format_statements("why {point} matters", true);
        assert_eq!(pro, "Pro: The point 'why {point} matters' has arguments in its favor.");
    }

    #[test]
    fn factual_point_gets_markers() {
        let (pro, con) = format_statements("sky", false);
        assert_eq!(pro, FACT_MARKER);
        assert_eq!(con, FACT_MARKER);
    }

    #[test]
    fn one_entry_per_point_in_order() {
        let points = vec![
            "growth issue".to_string(),
            "population 8 billion".to_string(),
            "cities grow faster than villages".to_string(),
        ];
        let entries = synthesize_debate(&points, &DebatabilityPolicy::standard());

        assert_eq!(entries.len(), points.len());
        for (entry, point) in entries.iter().zip(&points) {
            assert_eq!(&entry.point, point);
        }
        assert!(entries[0].pro.starts_with("Pro: "));
        assert_eq!(entries[1].pro, FACT_MARKER);
        assert_eq!(entries[1].con, FACT_MARKER);
        assert!(entries[2].con.starts_with("Con: "));
    }

    #[test]
    fn empty_input_gives_empty_debate() {
        assert!(synthesize_debate(&[], &DebatabilityPolicy::standard()).is_empty());
    }
}
