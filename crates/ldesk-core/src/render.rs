//! Plain-text rendering of desk views for the terminal

use crate::nav::{NavItem, Page};
use crate::view::{DeskView, DetailView, FormView, ListView};
use ldesk_case::{CaseRecord, DashboardStats};
use std::fmt::Write as _;

/// Render any view
#[must_use]
pub fn render_view(view: &DeskView<'_>) -> String {
    match view {
        DeskView::List(list) => render_list(list),
        DeskView::Detail(detail) => render_detail(detail),
        DeskView::NewCaseForm(form) => render_form(form),
    }
}

/// One line per case
#[must_use]
pub fn render_case_line(case: &CaseRecord) -> String {
    format!(
        "{}  [{}]  {}  ({})",
        case.id(),
        case.status().label(),
        case.title(),
        case.plaintiff()
    )
}

/// Case list with optional statistics
#[must_use]
pub fn render_list(list: &ListView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} / {}", list.role.label(), list.page);
    if let Some(stats) = &list.stats {
        out.push_str(&render_stats(stats, list.show_charts));
    }
    if list.cases.is_empty() {
        out.push_str("لا توجد قضايا\n");
    }
    for case in &list.cases {
        out.push_str(&render_case_line(case));
        out.push('\n');
    }
    out
}

/// Dashboard figures; distributions only when `charts` is set
#[must_use]
pub fn render_stats(stats: &DashboardStats, charts: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "الإجمالي: {}  قيد الدراسة: {}  تم الفصل: {}  قيد الانتظار: {}  تظلمات: {}",
        stats.total, stats.under_review, stats.resolved, stats.pending, stats.grievances
    );
    if charts {
        for entry in &stats.by_status {
            let _ = writeln!(out, "  {}: {}", entry.status.label(), entry.count);
        }
        for entry in &stats.by_category {
            let _ = writeln!(out, "  {}: {}", entry.category.label(), entry.count);
        }
    }
    out
}

/// Full case with logs, actions and AI output
#[must_use]
pub fn render_detail(detail: &DetailView<'_>) -> String {
    let case = detail.case;
    let mut out = String::new();
    let _ = writeln!(out, "#{}  [{}]", case.id(), case.status().label());
    let _ = writeln!(out, "{}", case.title());
    let _ = writeln!(out, "التصنيف: {}", case.category().label());
    let _ = writeln!(out, "مقدم الطلب: {}", case.plaintiff());
    let _ = writeln!(out, "تاريخ الإحالة: {}", case.referral_date());
    if let Some(counsel) = case.assigned_counsel() {
        let _ = writeln!(out, "المحامي المكلف: {counsel}");
    }
    if let Some(date) = case.completion_date() {
        let _ = writeln!(out, "تم الفصل: {date}");
    }
    let _ = writeln!(out, "\n{}", case.description());

    if !case.logs().is_empty() {
        out.push_str("\nسجل الإجراءات:\n");
        for entry in case.logs() {
            let _ = writeln!(out, "  {}  {}  ({})", entry.date(), entry.action(), entry.user());
        }
    }

    if detail.capabilities.change_status {
        let statuses: Vec<&str> = detail.capabilities.statuses.iter().map(|s| s.code()).collect();
        let _ = writeln!(out, "\nالحالات المتاحة: {}", statuses.join(", "));
    }
    if detail.capabilities.annotate {
        if detail.summary_busy {
            out.push_str("\nجاري التحليل...\n");
        }
        if let Some(summary) = detail.summary {
            let _ = writeln!(out, "\nالملخص الذكي:\n{summary}");
        }
        if detail.draft_busy {
            out.push_str("\nجاري إنشاء المسودة...\n");
        }
        if let Some(draft) = detail.draft {
            let _ = writeln!(out, "\nمسودة الرأي القانوني:\n{draft}");
        }
    }
    out
}

/// New-case form prompt
#[must_use]
pub fn render_form(form: &FormView) -> String {
    let categories: Vec<String> = form
        .categories
        .iter()
        .map(|c| format!("{} ({})", c.label(), c.code()))
        .collect();
    format!(
        "طلب جديد ({})\nالتصنيفات: {}\nالتصنيف الافتراضي: {}\nتاريخ الإحالة: {}\n",
        form.role.label(),
        categories.join("، "),
        form.default_category.label(),
        form.default_referral_date
    )
}

/// Menu with the current page marked
#[must_use]
pub fn render_nav(items: &[NavItem], current: Page) -> String {
    items
        .iter()
        .map(|item| {
            let mark = if item.page == current { '*' } else { ' ' };
            format!("{mark} {}  ({})\n", item.label, item.page)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::nav_items;
    use ldesk_case::Role;

    #[test]
    fn nav_marks_current_page() {
        let text = render_nav(nav_items(Role::Counsel), Page::Drafts);
        assert!(text.contains("* المسودات"));
        assert!(text.contains("  قضاياي"));
    }

    #[test]
    fn stats_hide_distributions_without_charts() {
        let stats = DashboardStats {
            total: 3,
            ..DashboardStats::default()
        };
        let text = render_stats(&stats, false);
        assert!(text.contains("الإجمالي: 3"));
        assert_eq!(text.lines().count(), 1);
    }
}
