//! Study progress aggregate.

use crate::model::study::Study;

/// Rounded mean progress across all study records; 0 when none exist.
pub fn progress_average(studies: &[Study]) -> u32 {
    if studies.is_empty() {
        return 0;
    }
    let sum: u32 = studies.iter().map(|study| u32::from(study.progress)).sum();
    (f64::from(sum) / studies.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::progress_average;
    use crate::model::study::Study;
    use uuid::Uuid;

    fn study(progress: u8) -> Study {
        Study {
            id: Uuid::new_v4(),
            title: "study".to_string(),
            description: None,
            category: "general".to_string(),
            progress,
            start_date: None,
            end_date: None,
            notes: None,
        }
    }

    #[test]
    fn averages_and_rounds_to_nearest_integer() {
        let studies = vec![study(20), study(60), study(100)];
        assert_eq!(progress_average(&studies), 60);

        let uneven = vec![study(50), study(51)];
        assert_eq!(progress_average(&uneven), 51);
    }

    #[test]
    fn empty_collection_averages_to_zero() {
        assert_eq!(progress_average(&[]), 0);
    }
}
