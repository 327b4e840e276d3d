//! Order history day grouping
//!
//! The dashboard history view buckets orders by calendar day, newest
//! day first, and shows each day's revenue. Only completed orders count
//! toward revenue; cancelled and in-flight orders are listed but
//! contribute nothing.

use chrono::NaiveDate;
use shared::models::{Order, Status};

/// One day of order history
#[derive(Debug, Clone)]
pub struct DayGroup {
    /// "Today", "Yesterday", or e.g. "August 26, 2026"
    pub label: String,
    pub date: NaiveDate,
    pub orders: Vec<Order>,
    /// Sum of completed order totals for the day, whole rupees
    pub revenue: u32,
}

fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        date.format("%B %d, %Y").to_string()
    }
}

/// Group orders into day buckets, newest day first.
///
/// `today` is the viewer's current date; it anchors the "Today" and
/// "Yesterday" labels. Order of orders within a day is preserved, so a
/// newest-first input stays newest-first per group.
pub fn group_order_history(orders: Vec<Order>, today: NaiveDate) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for order in orders {
        let date = order.created_at.date_naive();
        let idx = match groups.iter().position(|g| g.date == date) {
            Some(idx) => idx,
            None => {
                groups.push(DayGroup {
                    label: day_label(date, today),
                    date,
                    orders: Vec::new(),
                    revenue: 0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        if order.status == Status::Completed {
            group.revenue += order.total_amount;
        }
        group.orders.push(order);
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
