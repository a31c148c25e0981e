//! ISO-8601 duration formatting for swiML time fields

/// Format a minutes/seconds pair as an XML duration.
///
/// Zero components are omitted; non-zero components keep the author's
/// verbatim digits. A zero-length duration renders as the bare `PT`.
pub fn xml_duration(minutes: &str, seconds: &str) -> String {
    let mut duration = String::from("PT");
    if is_positive(minutes) {
        duration.push_str(minutes);
        duration.push('M');
    }
    if is_positive(seconds) {
        duration.push_str(seconds);
        duration.push('S');
    }
    duration
}

fn is_positive(component: &str) -> bool {
    component.parse::<u32>().map_or(false, |value| value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", "0", "PT")]
    #[case("", "", "PT")]
    #[case("2", "0", "PT2M")]
    #[case("0", "30", "PT30S")]
    #[case("2", "30", "PT2M30S")]
    #[case("59", "59", "PT59M59S")]
    #[case("0", "05", "PT05S")]
    fn durations_render_with_zero_components_omitted(
        #[case] minutes: &str,
        #[case] seconds: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(xml_duration(minutes, seconds), expected);
    }
}
