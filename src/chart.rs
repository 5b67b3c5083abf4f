use crate::category::Category;

const TITLE: &str = "Percentage spent by category";
const GUTTER: &str = "    ";
const EMPTY_CELL: &str = "   ";

pub fn spent_percentages(categories: &[Category]) -> Vec<f64> {
    let spent: Vec<f64> = categories.iter().map(Category::spent).collect();
    let total = spent.iter().fold(0.0, |acc, amount| acc + amount);
    if total == 0.0 {
        return vec![0.0; spent.len()];
    }

    spent.iter().map(|amount| amount * 100.0 / total).collect()
}

fn bar_cell(percentage: f64, label: u32) -> &'static str {
    if percentage >= f64::from(label) {
        " o "
    } else {
        EMPTY_CELL
    }
}

pub fn render_spend_chart(categories: &[Category]) -> String {
    let percentages = spent_percentages(categories);

    let mut chart = String::from(TITLE);
    chart.push('\n');
    for label in (0..=100u32).rev().step_by(10) {
        chart.push_str(&format!("{:>3}|", label));
        for percentage in &percentages {
            chart.push_str(bar_cell(*percentage, label));
        }
        chart.push_str(" \n");
    }

    chart.push_str(GUTTER);
    chart.push_str(&"---".repeat(categories.len()));
    chart.push_str("-\n");

    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|c| c.name().chars().collect())
        .collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..longest {
        chart.push_str(GUTTER);
        for name in &names {
            match name.get(row) {
                Some(c) => {
                    chart.push(' ');
                    chart.push(*c);
                    chart.push(' ');
                }
                None => chart.push_str(EMPTY_CELL),
            }
        }
        chart.push(' ');
        if row + 1 < longest {
            chart.push('\n');
        }
    }

    log::debug!("rendered spend chart for {} categories", categories.len());
    chart
}

#[cfg(test)]
mod test {
    use super::*;

    fn category_with_spending(name: &str, spent: f64) -> Category {
        let mut category = Category::new(name);
        category.deposit(900.0, "deposit");
        category.withdraw(spent, "");
        category
    }

    fn sample_categories() -> Vec<Category> {
        vec![
            category_with_spending("Business", 10.99),
            category_with_spending("Food", 105.55),
            category_with_spending("Entertainment", 33.40),
        ]
    }

    fn chart_row(chart: &str, label: &str) -> String {
        chart
            .lines()
            .find(|l| l.starts_with(label))
            .map(str::to_string)
            .unwrap_or_default()
    }

    #[test]
    fn percentages() {
        let percentages = spent_percentages(&sample_categories());
        assert_eq!(percentages.len(), 3);
        assert!((percentages[0] - 7.33).abs() < 0.01);
        assert!((percentages[1] - 70.39).abs() < 0.01);
        assert!((percentages[2] - 22.27).abs() < 0.01);
    }

    #[test]
    fn percentages_without_spending() {
        let mut food = Category::new("Food");
        food.deposit(10.0, "deposit");
        let auto = Category::new("Auto");
        assert_eq!(spent_percentages(&[food, auto]), vec![0.0, 0.0]);
    }

    #[test]
    fn chart() {
        let expected = [
            "Percentage spent by category",
            "100|          ",
            " 90|          ",
            " 80|          ",
            " 70|    o     ",
            " 60|    o     ",
            " 50|    o     ",
            " 40|    o     ",
            " 30|    o     ",
            " 20|    o  o  ",
            " 10|    o  o  ",
            "  0| o  o  o  ",
            "    ----------",
            "     B  F  E  ",
            "     u  o  n  ",
            "     s  o  t  ",
            "     i  d  e  ",
            "     n     r  ",
            "     e     t  ",
            "     s     a  ",
            "     s     i  ",
            "           n  ",
            "           m  ",
            "           e  ",
            "           n  ",
            "           t  ",
        ]
        .join("\n");
        assert_eq!(render_spend_chart(&sample_categories()), expected);
    }

    #[test]
    fn chart_rows_follow_percentages() {
        let categories = vec![
            category_with_spending("Food", 105.55),
            category_with_spending("Entertainment", 33.40),
            category_with_spending("Business", 10.99),
        ];
        let chart = render_spend_chart(&categories);
        assert_eq!(chart_row(&chart, " 70|"), " 70| o        ");
        assert_eq!(chart_row(&chart, " 20|"), " 20| o  o     ");
        assert_eq!(chart_row(&chart, "  0|"), "  0| o  o  o  ");
    }

    #[test]
    fn chart_without_spending() {
        let mut food = Category::new("Food");
        food.deposit(10.0, "deposit");
        let chart = render_spend_chart(&[food]);
        assert_eq!(chart_row(&chart, " 10|"), " 10|    ");
        assert_eq!(chart_row(&chart, "  0|"), "  0| o  ");
        assert!(chart.ends_with("    ----\n     F  \n     o  \n     o  \n     d  "));
    }

    #[test]
    fn chart_without_categories() {
        let mut expected = String::from("Percentage spent by category\n");
        for label in ["100", " 90", " 80", " 70", " 60", " 50", " 40", " 30", " 20", " 10", "  0"] {
            expected.push_str(label);
            expected.push_str("| \n");
        }
        expected.push_str("    -\n");
        assert_eq!(render_spend_chart(&[]), expected);
    }

    #[test]
    fn chart_is_deterministic() {
        let categories = sample_categories();
        assert_eq!(
            render_spend_chart(&categories),
            render_spend_chart(&categories)
        );
    }

    #[test]
    fn chart_has_no_trailing_newline() {
        let chart = render_spend_chart(&sample_categories());
        assert!(chart.ends_with(" t  "));
        assert!(!chart.ends_with('\n'));
    }
}
