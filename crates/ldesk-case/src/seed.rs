//! Example cases loaded at startup

use crate::types::{CaseCategory, CaseId, CaseLogEntry, CaseRecord, CaseStatus};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The three cases every fresh desk starts with
#[must_use]
pub fn example_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            id: CaseId::new(2024, 1),
            title: "تظلم طالب من نتيجة مادة القانون التجاري".to_string(),
            description: "تقدم الطالب بتظلم يفيد بوجود خطأ مادي في رصد درجات أعمال السنة لمادة القانون التجاري مما أدى لرسوبه.".to_string(),
            category: CaseCategory::Grievance,
            status: CaseStatus::UnderReview,
            plaintiff: "أحمد محمد (طالب)".to_string(),
            assigned_counsel: Some("المستشار / علي حسن".to_string()),
            referral_date: date(2024, 5, 10),
            receipt_date: Some(date(2024, 5, 12)),
            completion_date: None,
            ai_summary: None,
            logs: vec![
                CaseLogEntry::new(date(2024, 5, 10), "تم تقديم التظلم", "أحمد محمد"),
                CaseLogEntry::new(date(2024, 5, 12), "إحالة للعضو القانوني", "السكرتارية"),
            ],
        },
        CaseRecord {
            id: CaseId::new(2024, 2),
            title: "مراجعة عقد توريد أجهزة حاسب آلي".to_string(),
            description: "مطلوب الرأي القانوني في بنود عقد توريد 500 جهاز حاسب آلي لكلية الهندسة، وتحديداً بند الشروط الجزائية.".to_string(),
            category: CaseCategory::Contract,
            status: CaseStatus::New,
            plaintiff: "إدارة المشتريات".to_string(),
            assigned_counsel: Some("المستشار / محمود سعيد".to_string()),
            referral_date: date(2024, 5, 14),
            receipt_date: None,
            completion_date: None,
            ai_summary: None,
            logs: vec![CaseLogEntry::new(date(2024, 5, 14), "طلب مراجعة عقد", "الرئيس")],
        },
        CaseRecord {
            id: CaseId::new(2024, 3),
            title: "فتوى بخصوص الجمع بين وظيفتين".to_string(),
            description: "طلب إبداء الرأي القانوني حول مدى أحقية عضو هيئة تدريس في العمل مستشاراً لجهة خارجية بدوام جزئي.".to_string(),
            category: CaseCategory::Fatwa,
            status: CaseStatus::Resolved,
            plaintiff: "عميد كلية الآداب".to_string(),
            assigned_counsel: Some("د. سناء يوسف".to_string()),
            referral_date: date(2024, 4, 1),
            receipt_date: Some(date(2024, 4, 2)),
            completion_date: Some(date(2024, 4, 10)),
            ai_summary: None,
            logs: Vec::new(),
        },
    ]
}
