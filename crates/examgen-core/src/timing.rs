//! Exam duration estimates.

/// Format the estimated duration of an exam, in Spanish.
///
/// Fractional minutes-per-question are allowed; the total rounds to whole
/// minutes so the output keeps its `"N minutos"` / `"N horas"` shapes.
pub fn format_exam_duration(num_questions: usize, minutes_per_question: f64) -> String {
    let total_minutes = (num_questions as f64 * minutes_per_question).round() as u64;

    if total_minutes < 60 {
        return format!("{total_minutes} minutos");
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let hour_word = if hours == 1 { "hora" } else { "horas" };

    if minutes == 0 {
        format!("{hours} {hour_word}")
    } else {
        format!("{hours} {hour_word} y {minutes} minutos")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_an_hour() {
        assert_eq!(format_exam_duration(45, 1.0), "45 minutos");
        assert_eq!(format_exam_duration(1, 1.0), "1 minutos");
        assert_eq!(format_exam_duration(0, 1.0), "0 minutos");
    }

    #[test]
    fn whole_hours() {
        assert_eq!(format_exam_duration(60, 1.0), "1 hora");
        assert_eq!(format_exam_duration(60, 2.0), "2 horas");
        assert_eq!(format_exam_duration(120, 1.0), "2 horas");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_exam_duration(90, 1.0), "1 hora y 30 minutos");
        assert_eq!(format_exam_duration(150, 1.0), "2 horas y 30 minutos");
    }

    #[test]
    fn fractional_rate_rounds_to_whole_minutes() {
        assert_eq!(format_exam_duration(10, 1.5), "15 minutos");
        assert_eq!(format_exam_duration(3, 0.5), "2 minutos");
        assert_eq!(format_exam_duration(45, 2.0), "1 hora y 30 minutos");
    }
}
