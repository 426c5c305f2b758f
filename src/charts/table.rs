use crate::view::DerivedView;

pub const TABLE_COLUMNS: [&str; 7] = ["total_bill", "tip", "sex", "smoker", "day", "time", "size"];

/// Formatted cells for the data table, one row per record in view order.
pub fn table_rows(view: &DerivedView) -> Vec<[String; 7]> {
    view.iter()
        .map(|r| {
            [
                format!("{:.2}", r.total_bill),
                format!("{:.2}", r.tip),
                r.sex.to_string(),
                r.smoker_label().to_string(),
                r.day.to_string(),
                r.time.to_string(),
                r.size.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Day, MealTime, Record, Sex};

    #[test]
    fn rows_are_formatted_in_column_order() {
        let view: DerivedView = std::iter::once(Record {
            total_bill: 16.99,
            tip: 1.0,
            sex: Sex::Female,
            smoker: true,
            day: Day::Sun,
            time: MealTime::Dinner,
            size: 2,
        })
        .collect();
        let rows = table_rows(&view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["16.99", "1.00", "Female", "Yes", "Sun", "Dinner", "2"]);
    }

    #[test]
    fn empty_view_has_no_rows() {
        assert!(table_rows(&DerivedView::default()).is_empty());
    }
}
